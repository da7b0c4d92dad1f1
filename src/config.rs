//! Configuration file support for bomgraph.
//!
//! Provides YAML-based configuration through `bomgraph.config.yml` files,
//! and the rules for combining a file with command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use bomgraph::application::dto::{compile_pattern, parse_properties, BomRequest, GeneratorOptions};
use bomgraph::application::factories::GENERATOR_NAMES;
use bomgraph::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "bomgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub recurse: Option<bool>,
    pub include_tests: Option<bool>,
    pub include_subcomponents: Option<bool>,
    pub excludes: Option<String>,
    pub generators: Option<Vec<String>>,
    /// Scalar values only; booleans and numbers are read as their text
    pub properties: Option<BTreeMap<String, Value>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!("using config file '{}'", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref generators) = config.generators {
        for (i, name) in generators.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: generators[{}] must not be empty.\n\n\
                     💡 Hint: Use one of {}.",
                    i,
                    GENERATOR_NAMES.join(", ")
                );
            }
        }
    }
    if let Some(ref properties) = config.properties {
        for (name, value) in properties {
            if property_text(value).is_none() {
                bail!(
                    "Invalid config: properties.{} must be a string, number or boolean.\n\n\
                     💡 Hint: Write the value as it would be passed with -p {}=value.",
                    name,
                    name
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("unknown config field '{}' will be ignored", key);
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Combines command-line arguments with an optional config file.
///
/// Flags are enabled when either source enables them. The command line
/// overrides `excludes` and `generators`. Property maps are merged with
/// command-line values winning. Without any generator list every
/// registered generator runs.
///
/// # Errors
/// Returns `InvalidProperty` for a malformed `-p` pair or an exclude
/// pattern that does not compile.
pub fn build_request(args: &Args, config: Option<ConfigFile>) -> Result<BomRequest> {
    let config = config.unwrap_or_default();

    let mut properties: BTreeMap<String, String> = config
        .properties
        .unwrap_or_default()
        .iter()
        .filter_map(|(name, value)| property_text(value).map(|text| (name.clone(), text)))
        .collect();
    properties.extend(parse_properties(&args.properties)?);

    let excludes = args
        .excludes
        .clone()
        .or(config.excludes)
        .filter(|pattern| !pattern.is_empty())
        .map(|pattern| compile_pattern("excludes", &pattern))
        .transpose()?;

    let generators = if !args.generators.is_empty() {
        args.generators.clone()
    } else {
        config
            .generators
            .unwrap_or_else(|| GENERATOR_NAMES.iter().map(|name| name.to_string()).collect())
    };

    let options = GeneratorOptions {
        recurse: args.recurse || config.recurse.unwrap_or(false),
        include_subcomponents: args.include_subcomponents
            || config.include_subcomponents.unwrap_or(false),
        include_tests: args.include_tests || config.include_tests.unwrap_or(false),
        properties,
        excludes,
    };

    Ok(BomRequest::new(
        args.path.clone(),
        generators.iter().map(|name| name.trim().to_string()).collect(),
        options,
    ))
}
