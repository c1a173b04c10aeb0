//! C ABI of the host notification module.
//!
//! Everything in this crate crosses the FFI boundary: the layouts are fixed
//! (`#[repr(C)]`, `#[repr(u32)]`, `#[repr(transparent)]`) and must not change
//! without bumping the module API version.
//!
//! * [`Status`]: outcome codes shared by every export, see [`status_name`].
//! * [`Color`], [`NotificationKind`], [`FinishMode`], [`OptionTag`],
//!   [`NotificationHandle`], [`CallbackContext`]: argument types.
//! * [`Export`]: the symbols the host module exports, with the matching
//!   function-pointer signatures in [`exports`].

pub mod exports;
pub mod status;
pub mod types;

pub use exports::{
	AddDynamicFn, AddStaticFn, Export, FinishDynamicFn, GetVersionFn, IsOverlayReadyFn,
	MODULE_NAME, UpdateColorFn, UpdateTextFn,
};
pub use status::{RawStatus, Status, status_name};
pub use types::{
	ApiVersion, CallbackContext, Color, FinishCallback, FinishMode, InvalidValue,
	MIN_API_VERSION, NotificationHandle, NotificationKind, OptionTag, VERSION_UNSET,
};
