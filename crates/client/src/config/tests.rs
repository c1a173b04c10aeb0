use std::collections::HashMap;
use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> + use<> {
	let map: HashMap<String, OsString> = pairs
		.iter()
		.map(|(k, v)| (k.to_string(), OsString::from(v)))
		.collect();
	move |key| map.get(key).cloned()
}

#[test]
fn empty_document_is_default() {
	let config = Config::from_toml_str("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.loader.module_name, "homebrew_notifications");
}

#[test]
fn parses_loader_and_defaults() {
	let config = Config::from_toml_str(
		r#"
			[loader]
			module_name = "overlay"
			search_dirs = ["/opt/a", "/opt/b"]

			[defaults.error]
			fade_out_delay = 4.0
			background_color = [200, 0, 0, 255]

			[defaults.info]
			text_color = [0, 0, 0, 255]
		"#,
	)
	.unwrap();

	assert_eq!(config.loader.module_name, "overlay");
	assert_eq!(
		config.loader.search_dirs,
		vec![PathBuf::from("/opt/a"), PathBuf::from("/opt/b")]
	);
	let error = config.defaults.for_kind(NotificationKind::Error).unwrap();
	assert_eq!(error.fade_out_delay, Some(4.0));
	assert_eq!(error.background_color, Some([200, 0, 0, 255]));
	assert!(config.defaults.for_kind(NotificationKind::Dynamic).is_none());
}

#[test]
fn rejects_unknown_fields() {
	let err = Config::from_toml_str("[loader]\nmodule = \"x\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn rejects_out_of_range_color() {
	assert!(Config::from_toml_str("[defaults.info]\ntext_color = [256, 0, 0, 0]\n").is_err());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[loader]\npath = \"/opt/host.so\"").unwrap();
	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.loader.path, Some(PathBuf::from("/opt/host.so")));
}

#[test]
fn load_missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn env_overrides_loader() {
	let joined = std::env::join_paths(["/env/a", "/env/b"]).unwrap();
	let joined = joined.to_str().unwrap().to_string();
	let mut config = LoaderConfig {
		search_dirs: vec![PathBuf::from("/configured")],
		..LoaderConfig::default()
	};
	config.apply_vars(vars(&[
		(ENV_MODULE, "custom"),
		(ENV_MODULE_PATH, "/explicit/host.so"),
		(ENV_SEARCH_PATH, joined.as_str()),
	]));

	assert_eq!(config.module_name, "custom");
	assert_eq!(config.path, Some(PathBuf::from("/explicit/host.so")));
	assert_eq!(
		config.search_dirs,
		vec![
			PathBuf::from("/env/a"),
			PathBuf::from("/env/b"),
			PathBuf::from("/configured"),
		]
	);
}

#[test]
fn empty_env_values_are_ignored() {
	let mut config = LoaderConfig::default();
	config.apply_vars(vars(&[(ENV_MODULE, ""), (ENV_MODULE_PATH, "")]));
	assert_eq!(config, LoaderConfig::default());
}

#[test]
fn kind_defaults_yield_configured_values_only() {
	let defaults = KindDefaults {
		fade_out_delay: Some(3.0),
		text_color: Some([1, 2, 3, 4]),
		..KindDefaults::default()
	};
	let tags: Vec<_> = defaults.values().map(|v| v.tag()).collect();
	assert_eq!(
		tags,
		vec![
			notifmod_abi::OptionTag::DurationBeforeFadeOut,
			notifmod_abi::OptionTag::TextColor
		]
	);
	assert_eq!(KindDefaults::default().values().count(), 0);
}
