use std::collections::HashMap;

use super::{ModuleRegistry, RegistryError, SymbolAddress};

/// In-process registry mapping module names to symbol tables.
///
/// Lets a host that is linked statically (or a test double) stand in for a
/// shared library. Tracks how many handles are outstanding.
#[derive(Debug, Default)]
pub struct SymbolTable {
	modules: HashMap<String, HashMap<String, SymbolAddress>>,
	acquisitions: usize,
	live: usize,
}

/// Handle to a module of a [`SymbolTable`].
#[derive(Debug, PartialEq, Eq)]
pub struct TableHandle {
	module: String,
}

impl TableHandle {
	pub fn module(&self) -> &str {
		&self.module
	}
}

impl SymbolTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `module` with no symbols; acquiring it succeeds.
	pub fn with_module(mut self, module: &str) -> Self {
		self.modules.entry(module.to_string()).or_default();
		self
	}

	/// Registers `symbol` in `module`, creating the module if needed.
	///
	/// # Safety
	///
	/// If `symbol` is one of the names of [`notifmod_abi::Export`], `address`
	/// must point to a function with the signature declared for it, valid for
	/// as long as the table is used.
	pub unsafe fn with_symbol(mut self, module: &str, symbol: &str, address: SymbolAddress) -> Self {
		self.modules
			.entry(module.to_string())
			.or_default()
			.insert(symbol.to_string(), address);
		self
	}

	/// Removes a symbol; later lookups of it fail.
	pub fn remove_symbol(&mut self, module: &str, symbol: &str) -> Option<SymbolAddress> {
		self.modules.get_mut(module)?.remove(symbol)
	}

	pub fn contains_module(&self, module: &str) -> bool {
		self.modules.contains_key(module)
	}

	/// Total number of successful acquisitions.
	pub fn acquisitions(&self) -> usize {
		self.acquisitions
	}

	/// Handles acquired and not yet released.
	pub fn live_handles(&self) -> usize {
		self.live
	}
}

// SAFETY: symbols can only be inserted through `with_symbol`, whose caller
// guarantees the signature and lifetime requirements.
unsafe impl ModuleRegistry for SymbolTable {
	type Handle = TableHandle;

	fn acquire(&mut self, name: &str) -> Result<TableHandle, RegistryError> {
		if !self.modules.contains_key(name) {
			return Err(RegistryError::NotFound {
				name: name.to_string(),
				reason: "not registered".to_string(),
			});
		}
		self.acquisitions += 1;
		self.live += 1;
		Ok(TableHandle {
			module: name.to_string(),
		})
	}

	fn find_export(&self, handle: &TableHandle, symbol: &str) -> Result<SymbolAddress, RegistryError> {
		self.modules
			.get(&handle.module)
			.and_then(|symbols| symbols.get(symbol))
			.copied()
			.ok_or_else(|| RegistryError::missing(symbol))
	}

	fn release(&mut self, _handle: TableHandle) {
		self.live = self.live.saturating_sub(1);
	}
}
