//! Error type of the client binding.

use notifmod_abi::{RawStatus, Status};

use crate::registry::RegistryError;

/// Failure of a notification module operation.
///
/// There is one variant per non-success [`Status`]; [`Error::status`] gives
/// the code back. Variants marked "host" are only ever produced by the host
/// module and passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
	/// The host module could not be acquired.
	#[error("notification module not found")]
	ModuleNotFound,
	/// A mandatory export is missing from the host module.
	#[error("notification module is missing an expected export")]
	ModuleMissingExport,
	/// The host module version could not be negotiated.
	#[error("notification module version is not supported")]
	UnsupportedVersion,
	/// An argument was rejected before reaching the host module.
	#[error("invalid argument")]
	InvalidArgument,
	/// The library has not been initialized.
	#[error("notification library is not initialized")]
	LibUninitialized,
	/// The loaded module lacks the export or is too old for the command.
	#[error("command not supported by the loaded notification module")]
	UnsupportedCommand,
	/// Host: the overlay cannot show notifications yet.
	#[error("notification overlay is not ready")]
	OverlayNotReady,
	/// Host: the notification type is not supported.
	#[error("notification type not supported")]
	UnsupportedType,
	/// Host: allocating the notification failed.
	#[error("notification allocation failed")]
	AllocationFailed,
	/// Host: the handle does not name a live notification.
	#[error("invalid notification handle")]
	InvalidHandle,
	#[error("unknown notification module error")]
	UnknownError,
}

/// Result type for notification module operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub const fn status(self) -> Status {
		match self {
			Error::ModuleNotFound => Status::ModuleNotFound,
			Error::ModuleMissingExport => Status::ModuleMissingExport,
			Error::UnsupportedVersion => Status::UnsupportedVersion,
			Error::InvalidArgument => Status::InvalidArgument,
			Error::LibUninitialized => Status::LibUninitialized,
			Error::UnsupportedCommand => Status::UnsupportedCommand,
			Error::OverlayNotReady => Status::OverlayNotReady,
			Error::UnsupportedType => Status::UnsupportedType,
			Error::AllocationFailed => Status::AllocationFailed,
			Error::InvalidHandle => Status::InvalidHandle,
			Error::UnknownError => Status::UnknownError,
		}
	}

	/// Returns `None` for [`Status::Success`].
	pub const fn from_status(status: Status) -> Option<Self> {
		Some(match status {
			Status::Success => return None,
			Status::ModuleNotFound => Error::ModuleNotFound,
			Status::ModuleMissingExport => Error::ModuleMissingExport,
			Status::UnsupportedVersion => Error::UnsupportedVersion,
			Status::InvalidArgument => Error::InvalidArgument,
			Status::LibUninitialized => Error::LibUninitialized,
			Status::UnsupportedCommand => Error::UnsupportedCommand,
			Status::OverlayNotReady => Error::OverlayNotReady,
			Status::UnsupportedType => Error::UnsupportedType,
			Status::AllocationFailed => Error::AllocationFailed,
			Status::InvalidHandle => Error::InvalidHandle,
			Status::UnknownError => Error::UnknownError,
		})
	}

	/// Maps a status returned by an export.
	pub(crate) fn check(raw: RawStatus) -> Result<()> {
		match Error::from_status(Status::from_raw(raw)) {
			None => Ok(()),
			Some(err) => Err(err),
		}
	}
}

impl From<RegistryError> for Error {
	fn from(err: RegistryError) -> Self {
		match err {
			RegistryError::NotFound { .. } => Error::ModuleNotFound,
			RegistryError::MissingExport { .. } => Error::ModuleMissingExport,
		}
	}
}

impl From<Error> for Status {
	fn from(err: Error) -> Self {
		err.status()
	}
}

/// Collapses a result into the status a C caller would see.
pub fn status_of<T>(result: &Result<T>) -> Status {
	match result {
		Ok(_) => Status::Success,
		Err(err) => err.status(),
	}
}
