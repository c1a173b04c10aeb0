//! Notification commands.
//!
//! Each family has an explicit `*_ex` call, a convenience call that takes
//! every parameter from the default values of its kind, and a
//! `*_with_callback` call that takes the defaults except for the finish
//! callback and its context.
//!
//! Every command checks initialization, then that the host export is
//! present and the module version supports it, then its arguments, and only
//! then calls the host. A rejected call leaves the default values untouched.
//! Overlay, allocation and handle failures come from the host module and are
//! passed through unchanged.

use std::ffi::CString;

use notifmod_abi::{
	CallbackContext, Color, FinishCallback, FinishMode, NotificationHandle, NotificationKind,
};

use crate::binding::NotificationModule;
use crate::defaults::DefaultValueRecord;
use crate::error::{Error, Result};
use crate::registry::ModuleRegistry;

/// Parameters of an info notification.
#[derive(Debug, Clone, Copy)]
pub struct InfoOptions {
	/// Seconds before fading out.
	pub fade_out_delay: f32,
	pub text_color: Color,
	pub background_color: Color,
	pub callback: Option<FinishCallback>,
	pub context: CallbackContext,
}

/// Parameters of an error notification.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOptions {
	/// Seconds before fading out, counted from creation.
	pub fade_out_delay: f32,
	/// Seconds of shaking, counted from creation and bounded by
	/// `fade_out_delay`.
	pub shake_duration: f32,
	pub text_color: Color,
	pub background_color: Color,
	pub callback: Option<FinishCallback>,
	pub context: CallbackContext,
}

/// Parameters of a dynamic notification.
#[derive(Debug, Clone, Copy)]
pub struct DynamicOptions {
	pub text_color: Color,
	pub background_color: Color,
	pub callback: Option<FinishCallback>,
	pub context: CallbackContext,
}

impl From<&DefaultValueRecord> for InfoOptions {
	fn from(record: &DefaultValueRecord) -> Self {
		Self {
			fade_out_delay: record.fade_out_delay,
			text_color: record.text_color,
			background_color: record.background_color,
			callback: record.finish_callback,
			context: record.finish_context,
		}
	}
}

impl From<&DefaultValueRecord> for ErrorOptions {
	fn from(record: &DefaultValueRecord) -> Self {
		Self {
			fade_out_delay: record.fade_out_delay,
			shake_duration: record.shake_duration,
			text_color: record.text_color,
			background_color: record.background_color,
			callback: record.finish_callback,
			context: record.finish_context,
		}
	}
}

impl From<&DefaultValueRecord> for DynamicOptions {
	fn from(record: &DefaultValueRecord) -> Self {
		Self {
			text_color: record.text_color,
			background_color: record.background_color,
			callback: record.finish_callback,
			context: record.finish_context,
		}
	}
}

macro_rules! with_callback {
	($($options:ty),*) => {$(
		impl $options {
			/// Replaces the finish callback and its context.
			pub fn with_callback(mut self, callback: Option<FinishCallback>, context: CallbackContext) -> Self {
				self.callback = callback;
				self.context = context;
				self
			}
		}
	)*};
}

with_callback!(InfoOptions, ErrorOptions, DynamicOptions);

fn c_text(text: &str) -> Result<CString> {
	CString::new(text).map_err(|_| Error::InvalidArgument)
}

fn non_null(handle: NotificationHandle) -> Result<NotificationHandle> {
	if handle.is_null() {
		Err(Error::InvalidArgument)
	} else {
		Ok(handle)
	}
}

impl<R: ModuleRegistry> NotificationModule<R> {
	/// Whether the overlay can currently show notifications.
	pub fn is_overlay_ready(&mut self) -> Result<bool> {
		let is_overlay_ready = self.command(self.exports.is_overlay_ready)?;
		let mut ready = false;
		// SAFETY: `ready` is a valid out pointer for the duration of the call.
		Error::check(unsafe { is_overlay_ready(&mut ready) })?;
		Ok(ready)
	}

	/// Shows an info notification that fades out after
	/// `options.fade_out_delay` seconds and never shakes.
	pub fn add_info_notification_ex(&mut self, text: &str, options: InfoOptions) -> Result<()> {
		self.add_static(
			text,
			NotificationKind::Info,
			options.fade_out_delay,
			0.0,
			options.text_color,
			options.background_color,
			options.callback,
			options.context,
		)
	}

	/// Shows an info notification using the info defaults.
	pub fn add_info_notification(&mut self, text: &str) -> Result<()> {
		self.ensure_initialized()?;
		let options = InfoOptions::from(self.defaults.get(NotificationKind::Info));
		self.add_info_notification_ex(text, options)
	}

	/// Shows an info notification using the info defaults, except for the
	/// finish callback and its context.
	pub fn add_info_notification_with_callback(
		&mut self,
		text: &str,
		callback: Option<FinishCallback>,
		context: CallbackContext,
	) -> Result<()> {
		self.ensure_initialized()?;
		let options = InfoOptions::from(self.defaults.get(NotificationKind::Info)).with_callback(callback, context);
		self.add_info_notification_ex(text, options)
	}

	/// Shows an error notification that shakes for `options.shake_duration`
	/// seconds and fades out `options.fade_out_delay` seconds after creation.
	pub fn add_error_notification_ex(&mut self, text: &str, options: ErrorOptions) -> Result<()> {
		self.add_static(
			text,
			NotificationKind::Error,
			options.fade_out_delay,
			options.shake_duration,
			options.text_color,
			options.background_color,
			options.callback,
			options.context,
		)
	}

	/// Shows an error notification using the error defaults.
	pub fn add_error_notification(&mut self, text: &str) -> Result<()> {
		self.ensure_initialized()?;
		let options = ErrorOptions::from(self.defaults.get(NotificationKind::Error));
		self.add_error_notification_ex(text, options)
	}

	/// Shows an error notification using the error defaults, except for the
	/// finish callback and its context.
	pub fn add_error_notification_with_callback(
		&mut self,
		text: &str,
		callback: Option<FinishCallback>,
		context: CallbackContext,
	) -> Result<()> {
		self.ensure_initialized()?;
		let options = ErrorOptions::from(self.defaults.get(NotificationKind::Error)).with_callback(callback, context);
		self.add_error_notification_ex(text, options)
	}

	/// Shows a notification that stays until finished and returns its handle.
	pub fn add_dynamic_notification_ex(&mut self, text: &str, options: DynamicOptions) -> Result<NotificationHandle> {
		let add_dynamic = self.command(self.exports.add_dynamic)?;
		let text = c_text(text)?;
		let mut handle = NotificationHandle::NULL;
		// SAFETY: `text` is NUL-terminated and `handle` is a valid out pointer,
		// both live for the duration of the call.
		Error::check(unsafe {
			add_dynamic(
				text.as_ptr(),
				options.text_color,
				options.background_color,
				options.callback,
				options.context.as_ptr(),
				&mut handle,
			)
		})?;
		Ok(handle)
	}

	/// Shows a dynamic notification using the dynamic defaults.
	pub fn add_dynamic_notification(&mut self, text: &str) -> Result<NotificationHandle> {
		self.ensure_initialized()?;
		let options = DynamicOptions::from(self.defaults.get(NotificationKind::Dynamic));
		self.add_dynamic_notification_ex(text, options)
	}

	/// Shows a dynamic notification using the dynamic defaults, except for
	/// the finish callback and its context.
	pub fn add_dynamic_notification_with_callback(
		&mut self,
		text: &str,
		callback: Option<FinishCallback>,
		context: CallbackContext,
	) -> Result<NotificationHandle> {
		self.ensure_initialized()?;
		let options =
			DynamicOptions::from(self.defaults.get(NotificationKind::Dynamic)).with_callback(callback, context);
		self.add_dynamic_notification_ex(text, options)
	}

	pub fn update_dynamic_notification_text(&mut self, handle: NotificationHandle, text: &str) -> Result<()> {
		let update_text = self.command(self.exports.update_text)?;
		let handle = non_null(handle)?;
		let text = c_text(text)?;
		// SAFETY: `text` is NUL-terminated and outlives the call.
		Error::check(unsafe { update_text(handle, text.as_ptr()) })
	}

	pub fn update_dynamic_notification_background_color(
		&mut self,
		handle: NotificationHandle,
		color: Color,
	) -> Result<()> {
		let update = self.command(self.exports.update_background_color)?;
		let handle = non_null(handle)?;
		// SAFETY: arguments are passed by value.
		Error::check(unsafe { update(handle, color) })
	}

	pub fn update_dynamic_notification_text_color(&mut self, handle: NotificationHandle, color: Color) -> Result<()> {
		let update = self.command(self.exports.update_text_color)?;
		let handle = non_null(handle)?;
		// SAFETY: arguments are passed by value.
		Error::check(unsafe { update(handle, color) })
	}

	/// Fades out a dynamic notification `fade_out_delay` seconds from now.
	pub fn finish_dynamic_notification(&mut self, handle: NotificationHandle, fade_out_delay: f32) -> Result<()> {
		self.finish_dynamic(handle, FinishMode::Finish, fade_out_delay, 0.0)
	}

	/// Shakes a dynamic notification for `shake_duration` seconds and fades
	/// it out `fade_out_delay` seconds from now.
	pub fn finish_dynamic_notification_with_shake(
		&mut self,
		handle: NotificationHandle,
		fade_out_delay: f32,
		shake_duration: f32,
	) -> Result<()> {
		self.finish_dynamic(handle, FinishMode::FinishWithShake, fade_out_delay, shake_duration)
	}

	fn finish_dynamic(
		&mut self,
		handle: NotificationHandle,
		mode: FinishMode,
		fade_out_delay: f32,
		shake_duration: f32,
	) -> Result<()> {
		let finish = self.command(self.exports.finish_dynamic)?;
		let handle = non_null(handle)?;
		// SAFETY: arguments are passed by value.
		Error::check(unsafe { finish(handle, mode, fade_out_delay, shake_duration) })
	}

	#[allow(clippy::too_many_arguments)]
	fn add_static(
		&mut self,
		text: &str,
		kind: NotificationKind,
		fade_out_delay: f32,
		shake_duration: f32,
		text_color: Color,
		background_color: Color,
		callback: Option<FinishCallback>,
		context: CallbackContext,
	) -> Result<()> {
		let add_static = self.command(self.exports.add_static)?;
		let text = c_text(text)?;
		// SAFETY: `text` is NUL-terminated and outlives the call.
		Error::check(unsafe {
			add_static(
				text.as_ptr(),
				kind,
				fade_out_delay,
				shake_duration,
				text_color,
				background_color,
				callback,
				context.as_ptr(),
			)
		})
	}
}
