//! YAML config files.
//!
//! A config file carries the generator options under a top-level `unity` key, or `cmock` when the file is shared
//! with the mock generator. Both keys and option names may be written symbol-style with a leading `:`:
//!
//! ```yaml
//! :unity:
//!   :plugins: [:cexception]
//!   :use_param_tests: true
//! ```
//!
//! An empty file changes nothing. Unknown option names are ignored.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::{ConfigError, OptionOverrides};

/// Section names searched in order.
const SECTION_KEYS: &[&str] = &["unity", "cmock"];

/// Read and parse a config file.
///
/// ## Errors
///
/// [`ConfigError::Read`] if the file cannot be read, otherwise whatever [`parse_config`] reports.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_config_file(path: &Path) -> Result<OptionOverrides, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides = parse_config(&text, &path.display().to_string())?;
    tracing::debug!(?overrides, "config loaded");
    Ok(overrides)
}

/// Parse config text. `origin` names the source in error messages.
///
/// ## Errors
///
/// - [`ConfigError::Parse`] for malformed YAML or a section of the wrong shape
/// - [`ConfigError::MissingSection`] when a non-empty document has no `unity`/`cmock` section
pub fn parse_config(text: &str, origin: &str) -> Result<OptionOverrides, ConfigError> {
    let parse_error = |source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    };
    if is_blank(text) {
        return Ok(OptionOverrides::default());
    }
    let document: Value = serde_yaml::from_str(text).map_err(parse_error)?;

    let root = match document {
        Value::Null => return Ok(OptionOverrides::default()),
        Value::Mapping(map) => map,
        _ => {
            return Err(ConfigError::MissingSection {
                origin: origin.to_string(),
            });
        }
    };

    let Some(section) = find_section(&root) else {
        return Err(ConfigError::MissingSection {
            origin: origin.to_string(),
        });
    };

    match section {
        Value::Null => Ok(OptionOverrides::default()),
        Value::Mapping(map) => serde_yaml::from_value(Value::Mapping(normalize_keys(map))).map_err(parse_error),
        _ => Err(ConfigError::MissingSection {
            origin: origin.to_string(),
        }),
    }
}

/// No content besides whitespace and comments.
fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn find_section(root: &Mapping) -> Option<&Value> {
    SECTION_KEYS.iter().find_map(|wanted| {
        root.iter()
            .find(|(key, _)| key.as_str().is_some_and(|k| k.trim_start_matches(':') == *wanted))
            .map(|(_, value)| value)
    })
}

/// Drop the symbol colon from string keys. Non-string keys are skipped.
fn normalize_keys(map: &Mapping) -> Mapping {
    map.iter()
        .filter_map(|(key, value)| {
            key.as_str()
                .map(|k| (Value::String(k.trim_start_matches(':').to_string()), value.clone()))
        })
        .collect()
}
