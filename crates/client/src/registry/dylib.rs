use std::ffi::OsStr;
use std::path::PathBuf;

use libloading::{Library, Symbol};

use super::{ModuleRegistry, RegistryError, SymbolAddress};
use crate::config::LoaderConfig;

/// Registry backed by the platform dynamic loader.
///
/// A module name is resolved to a shared library file: the configured
/// explicit path if there is one, otherwise the platform file name for the
/// module (`libhomebrew_notifications.so`, `homebrew_notifications.dll`, ...)
/// in each search directory, and finally the bare file name so the system
/// loader gets a chance.
#[derive(Debug, Clone, Default)]
pub struct DylibRegistry {
	config: LoaderConfig,
}

impl DylibRegistry {
	pub fn new(config: LoaderConfig) -> Self {
		Self { config }
	}

	/// Registry configured from `NOTIFMOD_*` environment variables.
	pub fn from_env() -> Self {
		Self::new(LoaderConfig::from_env())
	}

	pub fn config(&self) -> &LoaderConfig {
		&self.config
	}

	/// Paths tried, in order, when acquiring `name`.
	pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
		if let Some(path) = &self.config.path {
			return vec![path.clone()];
		}

		let file_name = libloading::library_filename(OsStr::new(name));
		let mut paths: Vec<PathBuf> = self
			.config
			.search_dirs
			.iter()
			.map(|dir| dir.join(&file_name))
			.collect();
		paths.push(PathBuf::from(file_name));
		paths
	}
}

// SAFETY: the host module is built against `notifmod_abi`, so the symbols it
// exports carry the declared signatures. Addresses stay valid while the
// `Library` handle is alive; `release` is the only place it is dropped.
unsafe impl ModuleRegistry for DylibRegistry {
	type Handle = Library;

	fn acquire(&mut self, name: &str) -> Result<Library, RegistryError> {
		let mut reason = String::from("no candidate paths");
		for path in self.candidates(name) {
			// SAFETY: loading runs the module's initializers; the host module
			// has no initialization side effects beyond registering itself.
			match unsafe { Library::new(&path) } {
				Ok(lib) => {
					tracing::debug!(module = name, path = %path.display(), "acquired notification module");
					return Ok(lib);
				}
				Err(err) => {
					tracing::trace!(module = name, path = %path.display(), %err, "candidate rejected");
					reason = err.to_string();
				}
			}
		}
		Err(RegistryError::NotFound {
			name: name.to_string(),
			reason,
		})
	}

	fn find_export(&self, handle: &Library, symbol: &str) -> Result<SymbolAddress, RegistryError> {
		// SAFETY: the symbol is only turned into an address here; it is cast to
		// its declared signature by the export table.
		let sym: Symbol<unsafe extern "C" fn()> = unsafe { handle.get(symbol.as_bytes()) }
			.map_err(|_| RegistryError::missing(symbol))?;
		SymbolAddress::new(*sym as *mut core::ffi::c_void).ok_or_else(|| RegistryError::missing(symbol))
	}

	fn release(&mut self, handle: Library) {
		if let Err(err) = handle.close() {
			tracing::warn!(%err, "failed to unload notification module");
		}
	}
}
