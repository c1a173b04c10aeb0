//! Binding context: module handle, resolved exports, negotiated version and
//! default values.

use notifmod_abi::{
	ApiVersion, Export, MIN_API_VERSION, MODULE_NAME, NotificationKind, OptionTag, VERSION_UNSET,
};

use crate::config::{DefaultsConfig, LoaderConfig};
use crate::defaults::{DefaultStore, DefaultValue, OptionPayload};
use crate::error::{Error, Result};
use crate::exports::ExportTable;
use crate::registry::{DylibRegistry, ModuleRegistry};

/// Where the binding stands in its initialization protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingState {
	/// No module acquired.
	Uninitialized,
	/// Module acquired, version export not resolved.
	Acquiring,
	/// Version export resolved, no version negotiated.
	VersionChecking,
	/// Version negotiated and every export resolved.
	Ready,
	/// Version negotiated, some optional exports missing.
	PartiallyReady,
}

/// Binding to the host notification module.
///
/// Owns the registry the module is acquired from, the acquired handle, the
/// resolved export table and the per-kind default values. Every operation
/// takes `&mut self`; wrap the binding in a
/// [`SharedNotificationModule`](crate::SharedNotificationModule) to call it
/// from several threads.
///
/// Dropping the binding deinitializes it.
pub struct NotificationModule<R: ModuleRegistry> {
	registry: R,
	module_name: String,
	handle: Option<R::Handle>,
	pub(crate) version: ApiVersion,
	pub(crate) exports: ExportTable,
	pub(crate) defaults: DefaultStore,
}

impl<R: ModuleRegistry> NotificationModule<R> {
	/// Binding for the module registered as [`MODULE_NAME`].
	pub fn new(registry: R) -> Self {
		Self::with_module_name(registry, MODULE_NAME)
	}

	pub fn with_module_name(registry: R, module_name: impl Into<String>) -> Self {
		Self {
			registry,
			module_name: module_name.into(),
			handle: None,
			version: VERSION_UNSET,
			exports: ExportTable::default(),
			defaults: DefaultStore::new(),
		}
	}

	pub fn registry(&self) -> &R {
		&self.registry
	}

	pub fn module_name(&self) -> &str {
		&self.module_name
	}

	pub fn state(&self) -> BindingState {
		if self.handle.is_none() {
			BindingState::Uninitialized
		} else if self.version != VERSION_UNSET {
			if Export::OPTIONAL.iter().all(|e| self.exports.is_resolved(*e)) {
				BindingState::Ready
			} else {
				BindingState::PartiallyReady
			}
		} else if self.exports.is_resolved(Export::GetVersion) {
			BindingState::VersionChecking
		} else {
			BindingState::Acquiring
		}
	}

	/// Whether [`init`](Self::init) has completed.
	pub fn is_initialized(&self) -> bool {
		self.version != VERSION_UNSET
	}

	/// Version negotiated by [`init`](Self::init), if any.
	pub fn negotiated_version(&self) -> Option<ApiVersion> {
		self.is_initialized().then_some(self.version)
	}

	pub fn has_export(&self, export: Export) -> bool {
		self.exports.is_resolved(export)
	}

	pub fn defaults(&self) -> &DefaultStore {
		&self.defaults
	}

	/// Initializes the binding.
	///
	/// Acquires the module, resolves and calls its version export, then
	/// resolves the remaining exports best-effort and seeds the default
	/// values. A missing optional export only disables its command. Returns
	/// immediately when already initialized.
	pub fn init(&mut self) -> Result<()> {
		if self.is_initialized() {
			return Ok(());
		}

		if let Err(err) = self.acquire() {
			tracing::error!(module = %self.module_name, %err, "failed to acquire notification module");
			return Err(err);
		}
		if let Err(err) = self.resolve(Export::GetVersion) {
			tracing::error!(module = %self.module_name, %err, "failed to resolve version export");
			return Err(err);
		}

		match self.query_version() {
			Ok(version) if version != VERSION_UNSET => self.version = version,
			result => {
				tracing::error!(module = %self.module_name, ?result, "failed to negotiate module version");
				self.version = VERSION_UNSET;
				return Err(Error::UnsupportedVersion);
			}
		}

		for export in Export::OPTIONAL {
			if let Err(err) = self.resolve(export) {
				tracing::warn!(symbol = export.symbol(), %err, "optional export unavailable");
				self.exports.remove(export);
			}
		}

		self.defaults.reseed();
		tracing::debug!(module = %self.module_name, version = self.version, state = ?self.state(), "notification module initialized");
		Ok(())
	}

	/// Releases the module and forgets every resolved export and default
	/// value. Safe to call in any state, any number of times.
	pub fn deinit(&mut self) {
		self.exports.clear();
		self.version = VERSION_UNSET;
		if let Some(handle) = self.handle.take() {
			self.registry.release(handle);
			tracing::debug!(module = %self.module_name, "notification module released");
		}
		self.defaults.clear();
	}

	/// Queries the API version of the host module.
	///
	/// Works before [`init`](Self::init): if the version export has not been
	/// resolved yet, the module is acquired and the export resolved on the
	/// spot. Does not mark the binding as initialized.
	pub fn version(&mut self) -> Result<ApiVersion> {
		if !self.exports.is_resolved(Export::GetVersion) {
			if let Err(err) = self.acquire() {
				tracing::warn!(module = %self.module_name, %err, "failed to acquire notification module");
				return Err(err);
			}
			if let Err(err) = self.resolve(Export::GetVersion) {
				tracing::warn!(module = %self.module_name, %err, "failed to resolve version export");
				return Err(err);
			}
		}
		self.query_version()
	}

	/// Overrides one default value of `kind`.
	pub fn set_default_value(&mut self, kind: NotificationKind, value: DefaultValue) -> Result<()> {
		self.ensure_initialized()?;
		self.defaults.set(kind, value);
		Ok(())
	}

	/// Raw form of [`set_default_value`](Self::set_default_value) taking the
	/// C enum values.
	///
	/// An unknown kind or tag, or a payload of the wrong shape for the tag,
	/// is rejected with [`Error::InvalidArgument`] and leaves the defaults
	/// untouched.
	pub fn set_default_value_raw(&mut self, kind: u32, tag: u32, payload: OptionPayload) -> Result<()> {
		self.ensure_initialized()?;
		let kind = NotificationKind::try_from(kind).map_err(|_| Error::InvalidArgument)?;
		let tag = OptionTag::try_from(tag).map_err(|_| Error::InvalidArgument)?;
		let value = DefaultValue::from_parts(tag, payload).ok_or(Error::InvalidArgument)?;
		self.defaults.set(kind, value);
		Ok(())
	}

	/// Applies configured default overrides.
	pub fn apply_defaults(&mut self, config: &DefaultsConfig) -> Result<()> {
		self.ensure_initialized()?;
		for kind in NotificationKind::ALL {
			if let Some(overrides) = config.for_kind(kind) {
				for value in overrides.values() {
					self.defaults.set(kind, value);
				}
			}
		}
		Ok(())
	}

	pub(crate) fn ensure_initialized(&self) -> Result<()> {
		if self.is_initialized() {
			Ok(())
		} else {
			Err(Error::LibUninitialized)
		}
	}

	/// Gates a command on initialization, export presence and version.
	pub(crate) fn command<F: Copy>(&self, slot: Option<F>) -> Result<F> {
		self.ensure_initialized()?;
		match slot {
			Some(f) if self.version >= MIN_API_VERSION => Ok(f),
			_ => Err(Error::UnsupportedCommand),
		}
	}

	fn acquire(&mut self) -> Result<()> {
		if self.handle.is_none() {
			self.handle = Some(self.registry.acquire(&self.module_name)?);
		}
		Ok(())
	}

	fn resolve(&mut self, export: Export) -> Result<()> {
		let handle = self.handle.as_ref().ok_or(Error::ModuleNotFound)?;
		let address = self.registry.find_export(handle, export.symbol())?;
		// SAFETY: `ModuleRegistry` guarantees the signature for export symbols
		// and that the address lives as long as the handle; the table is
		// cleared before the handle is released.
		unsafe { self.exports.install(export, address) };
		Ok(())
	}

	fn query_version(&self) -> Result<ApiVersion> {
		let get_version = self.exports.get_version.ok_or(Error::ModuleMissingExport)?;
		let mut version = VERSION_UNSET;
		// SAFETY: `version` is a valid out pointer for the duration of the call.
		Error::check(unsafe { get_version(&mut version) })?;
		Ok(version)
	}
}

impl NotificationModule<DylibRegistry> {
	/// Binding that loads the module named by `config` from its search
	/// locations.
	pub fn from_loader_config(config: LoaderConfig) -> Self {
		let module_name = config.module_name.clone();
		Self::with_module_name(DylibRegistry::new(config), module_name)
	}

	/// Binding configured from `NOTIFMOD_*` environment variables.
	pub fn from_env() -> Self {
		Self::from_loader_config(LoaderConfig::from_env())
	}
}

impl<R: ModuleRegistry> Drop for NotificationModule<R> {
	fn drop(&mut self) {
		self.deinit();
	}
}

impl<R: ModuleRegistry> std::fmt::Debug for NotificationModule<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotificationModule")
			.field("module_name", &self.module_name)
			.field("state", &self.state())
			.field("version", &self.negotiated_version())
			.finish_non_exhaustive()
	}
}
