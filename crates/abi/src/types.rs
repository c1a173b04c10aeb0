//! Argument types shared with the host module.

use core::ffi::c_void;
use core::fmt;

/// API version reported by the host module.
pub type ApiVersion = u32;

/// Sentinel for "no version negotiated yet".
pub const VERSION_UNSET: ApiVersion = 0xFFFF_FFFF;

/// Lowest module API version that supports the notification commands.
pub const MIN_API_VERSION: ApiVersion = 1;

/// Called by the host module when a notification starts to fade out.
pub type FinishCallback = extern "C" fn(handle: NotificationHandle, context: *mut c_void);

/// Raw value that does not name a known enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value: {value}")]
pub struct InvalidValue {
	pub kind: &'static str,
	pub value: u32,
}

/// RGBA color with 8 bits per channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const WHITE: Color = Color::new(255, 255, 255, 255);
	/// Default background of info and dynamic notifications.
	pub const NEUTRAL_GRAY: Color = Color::new(100, 100, 100, 255);
	/// Default background of error notifications.
	pub const ERROR_RED: Color = Color::new(237, 28, 36, 255);

	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}
}

impl From<[u8; 4]> for Color {
	fn from([r, g, b, a]: [u8; 4]) -> Self {
		Color::new(r, g, b, a)
	}
}

impl From<Color> for [u8; 4] {
	fn from(color: Color) -> Self {
		[color.r, color.g, color.b, color.a]
	}
}

/// Notification family; also keys the default-value records.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
	/// Static notification, fades out after a fixed time. Cannot be updated.
	Info = 0,
	/// Static notification that additionally shakes for a fixed time.
	Error = 1,
	/// Stays visible until finished; can be updated while open.
	Dynamic = 2,
}

impl NotificationKind {
	pub const COUNT: usize = 3;
	pub const ALL: [NotificationKind; Self::COUNT] = [
		NotificationKind::Info,
		NotificationKind::Error,
		NotificationKind::Dynamic,
	];

	/// Dense index in `0..COUNT`.
	pub const fn index(self) -> usize {
		self as usize
	}
}

impl TryFrom<u32> for NotificationKind {
	type Error = InvalidValue;

	fn try_from(value: u32) -> Result<Self, InvalidValue> {
		match value {
			0 => Ok(NotificationKind::Info),
			1 => Ok(NotificationKind::Error),
			2 => Ok(NotificationKind::Dynamic),
			_ => Err(InvalidValue {
				kind: "notification kind",
				value,
			}),
		}
	}
}

/// How a dynamic notification is finished.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishMode {
	/// Fade out after the given delay.
	Finish = 0,
	/// Shake for the given duration, fade out after the given delay.
	FinishWithShake = 1,
}

/// Field of a default-value record addressed by a default-value update.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionTag {
	BackgroundColor = 0,
	TextColor = 1,
	DurationBeforeFadeOut = 2,
	FinishFunction = 3,
	FinishFunctionContext = 4,
}

impl TryFrom<u32> for OptionTag {
	type Error = InvalidValue;

	fn try_from(value: u32) -> Result<Self, InvalidValue> {
		match value {
			0 => Ok(OptionTag::BackgroundColor),
			1 => Ok(OptionTag::TextColor),
			2 => Ok(OptionTag::DurationBeforeFadeOut),
			3 => Ok(OptionTag::FinishFunction),
			4 => Ok(OptionTag::FinishFunctionContext),
			_ => Err(InvalidValue {
				kind: "option tag",
				value,
			}),
		}
	}
}

/// Identifier of a dynamic notification, minted by the host module.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotificationHandle(pub u32);

impl NotificationHandle {
	pub const NULL: NotificationHandle = NotificationHandle(0);

	pub const fn is_null(self) -> bool {
		self.0 == 0
	}
}

impl fmt::Display for NotificationHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Opaque pointer handed back to a [`FinishCallback`].
///
/// The client never dereferences it; it is stored and forwarded verbatim.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackContext(*mut c_void);

// SAFETY: the pointer is never dereferenced on this side of the boundary.
// Whoever registers the context owns its thread-safety.
unsafe impl Send for CallbackContext {}
// SAFETY: see above.
unsafe impl Sync for CallbackContext {}

impl CallbackContext {
	pub const NULL: CallbackContext = CallbackContext(core::ptr::null_mut());

	pub const fn new(ptr: *mut c_void) -> Self {
		Self(ptr)
	}

	pub const fn as_ptr(self) -> *mut c_void {
		self.0
	}

	pub fn is_null(self) -> bool {
		self.0.is_null()
	}
}

impl Default for CallbackContext {
	fn default() -> Self {
		Self::NULL
	}
}

impl<T> From<*mut T> for CallbackContext {
	fn from(ptr: *mut T) -> Self {
		Self(ptr.cast())
	}
}
