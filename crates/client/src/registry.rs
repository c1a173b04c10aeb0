//! Module acquisition and export resolution.
//!
//! A [`ModuleRegistry`] acquires a module by name, looks up exported symbols
//! in it and releases it again. Each call is a single attempt: failures are
//! reported immediately and nothing is cached, so a later call may succeed.

use core::ffi::c_void;
use core::ptr::NonNull;

mod dylib;
mod table;

pub use dylib::DylibRegistry;
pub use table::{SymbolTable, TableHandle};

/// Failure to acquire a module or resolve one of its exports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("module {name:?} not found: {reason}")]
	NotFound { name: String, reason: String },
	#[error("export {symbol:?} not found")]
	MissingExport { symbol: String },
}

impl RegistryError {
	pub(crate) fn missing(symbol: &str) -> Self {
		RegistryError::MissingExport {
			symbol: symbol.to_string(),
		}
	}
}

/// Address of an exported function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolAddress(NonNull<c_void>);

// SAFETY: a code address carries no ownership and is valid from any thread.
unsafe impl Send for SymbolAddress {}
// SAFETY: see above.
unsafe impl Sync for SymbolAddress {}

impl SymbolAddress {
	/// Returns `None` for a null address.
	pub fn new(ptr: *mut c_void) -> Option<Self> {
		NonNull::new(ptr).map(Self)
	}

	pub fn as_ptr(self) -> *mut c_void {
		self.0.as_ptr()
	}
}

/// Source of loadable modules.
///
/// # Safety
///
/// An address returned by [`find_export`](ModuleRegistry::find_export) for
/// one of the symbols named by [`notifmod_abi::Export`] must point to a
/// function with the signature declared for that export in
/// [`notifmod_abi::exports`], and must stay callable until the handle it was
/// resolved from is passed to [`release`](ModuleRegistry::release).
pub unsafe trait ModuleRegistry {
	/// Owned token for an acquired module.
	type Handle;

	/// Acquires the module registered under `name`.
	fn acquire(&mut self, name: &str) -> Result<Self::Handle, RegistryError>;

	/// Resolves an exported symbol of an acquired module.
	fn find_export(
		&self,
		handle: &Self::Handle,
		symbol: &str,
	) -> Result<SymbolAddress, RegistryError>;

	/// Releases a module; every address resolved from it becomes invalid.
	fn release(&mut self, handle: Self::Handle);
}
