//! Loader and default-value configuration.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! [loader]
//! module_name = "homebrew_notifications"
//! search_dirs = ["/opt/overlay/modules"]
//!
//! [defaults.error]
//! fade_out_delay = 4.0
//! background_color = [200, 0, 0, 255]
//! ```
//!
//! Every field is optional. The loader section can also be overridden from
//! the environment, see [`LoaderConfig::from_env`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use notifmod_abi::{Color, MODULE_NAME, NotificationKind};
use serde::Deserialize;

use crate::defaults::DefaultValue;

/// Module name override.
pub const ENV_MODULE: &str = "NOTIFMOD_MODULE";
/// Explicit library path; disables the directory search.
pub const ENV_MODULE_PATH: &str = "NOTIFMOD_MODULE_PATH";
/// Extra search directories, separated like `PATH`.
pub const ENV_SEARCH_PATH: &str = "NOTIFMOD_SEARCH_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub loader: LoaderConfig,
	pub defaults: DefaultsConfig,
}

impl Config {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}
}

/// Where the host module is looked up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
	/// Name the module is acquired under.
	pub module_name: String,
	/// Explicit library file, bypassing the search.
	pub path: Option<PathBuf>,
	/// Directories searched for the platform library file name.
	pub search_dirs: Vec<PathBuf>,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			module_name: MODULE_NAME.to_string(),
			path: None,
			search_dirs: Vec::new(),
		}
	}
}

impl LoaderConfig {
	/// Default configuration with environment overrides applied.
	pub fn from_env() -> Self {
		let mut config = Self::default();
		config.apply_vars(|key| std::env::var_os(key));
		config
	}

	/// Applies `NOTIFMOD_*` overrides looked up through `var`.
	///
	/// Search directories from the environment are tried before configured
	/// ones.
	pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<OsString>) {
		if let Some(name) = var(ENV_MODULE).and_then(|v| v.into_string().ok())
			&& !name.is_empty()
		{
			self.module_name = name;
		}
		if let Some(path) = var(ENV_MODULE_PATH).filter(|v| !v.is_empty()) {
			self.path = Some(PathBuf::from(path));
		}
		if let Some(dirs) = var(ENV_SEARCH_PATH) {
			let mut search_dirs: Vec<PathBuf> = std::env::split_paths(&dirs)
				.filter(|p| !p.as_os_str().is_empty())
				.collect();
			search_dirs.append(&mut self.search_dirs);
			self.search_dirs = search_dirs;
		}
	}
}

/// Default-value overrides per notification kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
	pub info: Option<KindDefaults>,
	pub error: Option<KindDefaults>,
	pub dynamic: Option<KindDefaults>,
}

impl DefaultsConfig {
	pub fn for_kind(&self, kind: NotificationKind) -> Option<&KindDefaults> {
		match kind {
			NotificationKind::Info => self.info.as_ref(),
			NotificationKind::Error => self.error.as_ref(),
			NotificationKind::Dynamic => self.dynamic.as_ref(),
		}
	}
}

/// Overrides for one kind; colors are `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KindDefaults {
	pub fade_out_delay: Option<f32>,
	pub background_color: Option<[u8; 4]>,
	pub text_color: Option<[u8; 4]>,
}

impl KindDefaults {
	/// The configured fields as default-value updates.
	pub fn values(&self) -> impl Iterator<Item = DefaultValue> + use<> {
		let fade = self.fade_out_delay.map(DefaultValue::DurationBeforeFadeOut);
		let background = self
			.background_color
			.map(|c| DefaultValue::BackgroundColor(Color::from(c)));
		let text = self.text_color.map(|c| DefaultValue::TextColor(Color::from(c)));
		[fade, background, text].into_iter().flatten()
	}
}

#[cfg(test)]
mod tests;
