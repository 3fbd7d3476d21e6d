//! Partial option sets layered over [`GenerationOptions`].

use serde::Deserialize;

use super::{ConfigError, GenerationOptions, MainName};
use runnergen_core::lang::plugins::PluginId;

/// A boolean as it appears in YAML or on the command line: `true`/`false`, `1`/`0`, or a quoted spelling of either.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Flag {
    /// Interpret the flag, naming `key` in the error.
    pub fn resolve(&self, key: &str) -> Result<bool, ConfigError> {
        match self {
            Flag::Bool(b) => Ok(*b),
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(other) => Err(invalid(key, other.to_string())),
            Flag::Text(text) => match text.trim().trim_start_matches(':').to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(invalid(key, text.clone())),
            },
        }
    }
}

fn invalid(key: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    }
}

/// Strip the leading `:` of symbol-style keys.
fn symbol(value: &str) -> String {
    value.trim().trim_start_matches(':').to_string()
}

/// Options that may be set by a config file or the command line. `None` leaves the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    pub includes: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub plugins: Option<Vec<String>>,
    pub framework: Option<String>,
    pub test_prefix: Option<String>,
    pub setup_name: Option<String>,
    pub teardown_name: Option<String>,
    pub main_name: Option<String>,
    pub main_export_decl: Option<String>,
    pub cmdline_args: Option<Flag>,
    pub use_param_tests: Option<Flag>,
    pub suite_setup: Option<String>,
    pub suite_teardown: Option<String>,
    pub enforce_strict_ordering: Option<Flag>,
    pub header_file: Option<String>,
}

impl OptionOverrides {
    /// Apply these overrides on top of `base`.
    ///
    /// List options replace the base list.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unreadable boolean. Unknown plugins are skipped.
    pub fn apply(self, mut base: GenerationOptions) -> Result<GenerationOptions, ConfigError> {
        if let Some(includes) = self.includes {
            base.includes = includes;
        }
        if let Some(defines) = self.defines {
            base.defines = defines;
        }
        if let Some(plugins) = self.plugins {
            base.plugins = plugins
                .iter()
                .filter_map(|name| {
                    let plugin = PluginId::from_name(name);
                    if plugin.is_none() {
                        tracing::debug!(plugin = %name, "ignoring unknown plugin");
                    }
                    plugin
                })
                .collect();
        }
        if let Some(framework) = self.framework {
            base.framework = symbol(&framework);
        }
        if let Some(prefix) = self.test_prefix {
            base.test_prefix = prefix;
        }
        if let Some(name) = self.setup_name {
            base.setup_name = name;
        }
        if let Some(name) = self.teardown_name {
            base.teardown_name = name;
        }
        if let Some(name) = self.main_name {
            base.main_name = MainName::parse(&name);
        }
        if let Some(decl) = self.main_export_decl {
            base.main_export_decl = decl;
        }
        if let Some(flag) = self.cmdline_args {
            base.cmdline_args = flag.resolve("cmdline_args")?;
        }
        if let Some(flag) = self.use_param_tests {
            base.use_param_tests = flag.resolve("use_param_tests")?;
        }
        if let Some(code) = self.suite_setup {
            base.suite_setup = Some(code);
        }
        if let Some(code) = self.suite_teardown {
            base.suite_teardown = Some(code);
        }
        if let Some(flag) = self.enforce_strict_ordering {
            base.enforce_strict_ordering = flag.resolve("enforce_strict_ordering")?;
        }
        if let Some(path) = self.header_file {
            base.header_file = Some(path);
        }
        Ok(base)
    }

    /// Whether nothing is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
