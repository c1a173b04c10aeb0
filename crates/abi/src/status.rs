//! Status codes returned by the host module and by the client library.

use core::fmt;

/// Status as it travels across the FFI boundary.
///
/// Exports return this rather than [`Status`] so that a value outside the
/// known set can never materialize as an invalid enum discriminant.
pub type RawStatus = i32;

/// Outcome of a notification module call.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
	Success = 0,
	ModuleNotFound = -0x1,
	ModuleMissingExport = -0x2,
	UnsupportedVersion = -0x3,
	InvalidArgument = -0x4,
	LibUninitialized = -0x5,
	UnsupportedCommand = -0x6,
	OverlayNotReady = -0x10,
	UnsupportedType = -0x11,
	AllocationFailed = -0x12,
	InvalidHandle = -0x13,
	UnknownError = -0x1000,
}

impl Status {
	/// Every status, in declaration order.
	pub const ALL: [Status; 12] = [
		Status::Success,
		Status::ModuleNotFound,
		Status::ModuleMissingExport,
		Status::UnsupportedVersion,
		Status::InvalidArgument,
		Status::LibUninitialized,
		Status::UnsupportedCommand,
		Status::OverlayNotReady,
		Status::UnsupportedType,
		Status::AllocationFailed,
		Status::InvalidHandle,
		Status::UnknownError,
	];

	/// Converts a raw status. Unrecognized values map to [`Status::UnknownError`].
	pub const fn from_raw(raw: RawStatus) -> Self {
		match raw {
			0 => Status::Success,
			-0x1 => Status::ModuleNotFound,
			-0x2 => Status::ModuleMissingExport,
			-0x3 => Status::UnsupportedVersion,
			-0x4 => Status::InvalidArgument,
			-0x5 => Status::LibUninitialized,
			-0x6 => Status::UnsupportedCommand,
			-0x10 => Status::OverlayNotReady,
			-0x11 => Status::UnsupportedType,
			-0x12 => Status::AllocationFailed,
			-0x13 => Status::InvalidHandle,
			_ => Status::UnknownError,
		}
	}

	pub const fn as_raw(self) -> RawStatus {
		self as RawStatus
	}

	pub const fn is_success(self) -> bool {
		matches!(self, Status::Success)
	}

	/// Human-readable name, matching the constant names of the C header.
	pub const fn name(self) -> &'static str {
		match self {
			Status::Success => "NOTIFICATION_MODULE_RESULT_SUCCESS",
			Status::ModuleNotFound => "NOTIFICATION_MODULE_RESULT_MODULE_NOT_FOUND",
			Status::ModuleMissingExport => "NOTIFICATION_MODULE_RESULT_MODULE_MISSING_EXPORT",
			Status::UnsupportedVersion => "NOTIFICATION_MODULE_RESULT_UNSUPPORTED_VERSION",
			Status::InvalidArgument => "NOTIFICATION_MODULE_RESULT_INVALID_ARGUMENT",
			Status::LibUninitialized => "NOTIFICATION_MODULE_RESULT_LIB_UNINITIALIZED",
			Status::UnsupportedCommand => "NOTIFICATION_MODULE_RESULT_UNSUPPORTED_COMMAND",
			Status::OverlayNotReady => "NOTIFICATION_MODULE_RESULT_OVERLAY_NOT_READY",
			Status::UnsupportedType => "NOTIFICATION_MODULE_RESULT_UNSUPPORTED_TYPE",
			Status::AllocationFailed => "NOTIFICATION_MODULE_RESULT_ALLOCATION_FAILED",
			Status::InvalidHandle => "NOTIFICATION_MODULE_RESULT_INVALID_HANDLE",
			Status::UnknownError => "NOTIFICATION_MODULE_RESULT_UNKNOWN_ERROR",
		}
	}
}

impl From<RawStatus> for Status {
	fn from(raw: RawStatus) -> Self {
		Status::from_raw(raw)
	}
}

impl From<Status> for RawStatus {
	fn from(status: Status) -> Self {
		status.as_raw()
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Returns the name of a raw status; total over all of `i32`.
pub const fn status_name(raw: RawStatus) -> &'static str {
	Status::from_raw(raw).name()
}
