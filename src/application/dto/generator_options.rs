use crate::shared::error::BomError;
use crate::shared::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// Options handed to every generator through `configure`
///
/// Ecosystem-specific settings travel as free-form `Name=value` strings in
/// `properties`; each generator reads the names it understands and ignores
/// the rest.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Scan every directory below the project path
    pub recurse: bool,
    /// Nest subcomponents instead of listing every component flat
    pub include_subcomponents: bool,
    /// Include test and dev-only dependencies
    pub include_tests: bool,
    pub properties: BTreeMap<String, String>,
    /// Paths matching this pattern are skipped when recursing
    pub excludes: Option<Regex>,
}

impl GeneratorOptions {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Reads a boolean property
    ///
    /// Accepts `1`, `t`, `true`, `0`, `f` and `false` in any letter case.
    ///
    /// # Errors
    /// Returns `InvalidProperty` for any other value.
    pub fn bool_property(&self, name: &str) -> Result<Option<bool>> {
        let Some(value) = self.property(name) else {
            return Ok(None);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => Ok(Some(true)),
            "0" | "f" | "false" => Ok(Some(false)),
            _ => Err(BomError::InvalidProperty {
                name: name.to_string(),
                value: value.to_string(),
                details: "expected true or false".to_string(),
            }
            .into()),
        }
    }

    /// Reads a property holding a `separator`-delimited list, dropping empty items
    pub fn list_property(&self, name: &str, separator: char) -> Option<Vec<String>> {
        self.property(name).map(|value| {
            value
                .split(separator)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Exclude pattern for one ecosystem: the property `name` combined with
    /// the global `excludes` as `scoped|global`
    ///
    /// # Errors
    /// Returns `InvalidProperty` if the property is not a valid regular expression.
    pub fn excludes_with(&self, name: &str) -> Result<Option<Regex>> {
        let scoped = self
            .property(name)
            .map(|pattern| compile_pattern(name, pattern))
            .transpose()?;

        match (scoped, &self.excludes) {
            (Some(scoped), Some(global)) => {
                let combined = format!("{}|{}", scoped.as_str(), global.as_str());
                compile_pattern(name, &combined).map(Some)
            }
            (Some(scoped), None) => Ok(Some(scoped)),
            (None, global) => Ok(global.clone()),
        }
    }
}

/// Compiles an exclude pattern given on the command line or in a property
///
/// # Errors
/// Returns `InvalidProperty` naming `name` when the pattern does not compile.
pub fn compile_pattern(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        BomError::InvalidProperty {
            name: name.to_string(),
            value: pattern.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Parses `Name=value` pairs into a property map; later pairs win
///
/// # Errors
/// Returns `InvalidProperty` for a pair without `=` or with an empty name.
pub fn parse_properties<I, S>(pairs: I) -> Result<BTreeMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut properties = BTreeMap::new();
    for pair in pairs {
        let pair = pair.as_ref().trim();
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                properties.insert(name.trim().to_string(), value.to_string());
            }
            _ => {
                return Err(BomError::InvalidProperty {
                    name: pair.to_string(),
                    value: String::new(),
                    details: "expected Name=value".to_string(),
                }
                .into())
            }
        }
    }
    Ok(properties)
}
