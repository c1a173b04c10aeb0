//! Symbols exported by the host module and their signatures.

use core::ffi::{c_char, c_void};

use crate::status::RawStatus;
use crate::types::{ApiVersion, Color, FinishCallback, FinishMode, NotificationHandle, NotificationKind};

/// Name under which the host module is registered.
pub const MODULE_NAME: &str = "homebrew_notifications";

pub type GetVersionFn = unsafe extern "C" fn(out_version: *mut ApiVersion) -> RawStatus;

pub type IsOverlayReadyFn = unsafe extern "C" fn(out_is_ready: *mut bool) -> RawStatus;

pub type AddStaticFn = unsafe extern "C" fn(
	text: *const c_char,
	kind: NotificationKind,
	fade_out_delay: f32,
	shake_duration: f32,
	text_color: Color,
	background_color: Color,
	callback: Option<FinishCallback>,
	context: *mut c_void,
) -> RawStatus;

pub type AddDynamicFn = unsafe extern "C" fn(
	text: *const c_char,
	text_color: Color,
	background_color: Color,
	callback: Option<FinishCallback>,
	context: *mut c_void,
	out_handle: *mut NotificationHandle,
) -> RawStatus;

pub type UpdateTextFn =
	unsafe extern "C" fn(handle: NotificationHandle, text: *const c_char) -> RawStatus;

/// Shared by the background-color and text-color updates.
pub type UpdateColorFn = unsafe extern "C" fn(handle: NotificationHandle, color: Color) -> RawStatus;

pub type FinishDynamicFn = unsafe extern "C" fn(
	handle: NotificationHandle,
	mode: FinishMode,
	fade_out_delay: f32,
	shake_duration: f32,
) -> RawStatus;

/// One of the fixed exports of the host module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Export {
	GetVersion,
	IsOverlayReady,
	AddStatic,
	AddDynamic,
	UpdateText,
	UpdateBackgroundColor,
	UpdateTextColor,
	FinishDynamic,
}

impl Export {
	pub const ALL: [Export; 8] = [
		Export::GetVersion,
		Export::IsOverlayReady,
		Export::AddStatic,
		Export::AddDynamic,
		Export::UpdateText,
		Export::UpdateBackgroundColor,
		Export::UpdateTextColor,
		Export::FinishDynamic,
	];

	/// Exports whose absence only disables the matching command.
	pub const OPTIONAL: [Export; 7] = [
		Export::IsOverlayReady,
		Export::AddStatic,
		Export::AddDynamic,
		Export::UpdateText,
		Export::UpdateBackgroundColor,
		Export::UpdateTextColor,
		Export::FinishDynamic,
	];

	pub const fn symbol(self) -> &'static str {
		match self {
			Export::GetVersion => "NMGetVersion",
			Export::IsOverlayReady => "NMIsOverlayReady",
			Export::AddStatic => "NMAddStaticNotification",
			Export::AddDynamic => "NMAddDynamicNotification",
			Export::UpdateText => "NMUpdateDynamicNotificationText",
			Export::UpdateBackgroundColor => "NMUpdateDynamicNotificationBackgroundColor",
			Export::UpdateTextColor => "NMUpdateDynamicNotificationTextColor",
			Export::FinishDynamic => "NMFinishDynamicNotification",
		}
	}

	/// Whether initialization fails when this export is missing.
	pub const fn is_critical(self) -> bool {
		matches!(self, Export::GetVersion)
	}
}
