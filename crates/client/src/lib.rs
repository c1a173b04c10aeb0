//! Client binding for the host notification module.
//!
//! The host module renders notifications in an overlay; this crate only
//! binds to it. It resolves the module's exports at runtime, keeps
//! per-kind default values, and layers convenience calls over the raw
//! exports:
//! * [`NotificationModule`]: binding context owning the resolved exports and
//!   the default-value store
//! * [`ModuleRegistry`]: how modules are acquired and exports resolved
//!   ([`DylibRegistry`] for shared libraries, [`SymbolTable`] for in-process
//!   symbol tables)
//! * [`DefaultValue`]: typed update of one default-value field
//! * [`SharedNotificationModule`]: mutex-guarded handle for multi-threaded
//!   callers
//!
//! ```no_run
//! use notifmod::NotificationModule;
//!
//! let mut module = NotificationModule::from_env();
//! module.init()?;
//! module.add_info_notification("Saved")?;
//! module.deinit();
//! # Ok::<(), notifmod::Error>(())
//! ```

pub mod binding;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
mod exports;
pub mod registry;
pub mod shared;

pub use binding::{BindingState, NotificationModule};
pub use config::{Config, ConfigError, DefaultsConfig, KindDefaults, LoaderConfig};
pub use defaults::{DefaultStore, DefaultValue, DefaultValueRecord, OptionPayload};
pub use dispatch::{DynamicOptions, ErrorOptions, InfoOptions};
pub use error::{Error, Result};
pub use notifmod_abi::{
	ApiVersion, CallbackContext, Color, Export, FinishCallback, FinishMode, MODULE_NAME,
	NotificationHandle, NotificationKind, OptionTag, Status, status_name,
};
pub use registry::{DylibRegistry, ModuleRegistry, RegistryError, SymbolAddress, SymbolTable};
pub use shared::SharedNotificationModule;
