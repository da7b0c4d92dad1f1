use crate::shared::error::BomError;
use crate::shared::Result;

/// A dependency coordinate as printed by `gradle dependencies`
///
/// Accepted forms, possibly combined:
/// `group:name:version`, `group:name:version -> resolved`,
/// `group:name -> other:module:version`, `project name`, and the
/// trailing annotations `(*)`, `(c)` and `(n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub project: bool,
    pub group: String,
    pub name: String,
    pub version: String,
    /// False when Gradle reports the entry as not resolved (`(n)`)
    pub resolved: bool,
}

impl Coordinate {
    pub fn parse(line: &str) -> Result<Self> {
        let mut value = line.trim_end_matches(['\r', '\n']);
        let mut project = false;

        let (group, name, mut value) = loop {
            if let Some(rest) = value.strip_prefix("project ") {
                project = true;
                value = rest;
            }

            let (group, rest) = value.split_once(':').unwrap_or(("", value));
            let name_end = rest.find([':', ' ']).unwrap_or(rest.len());
            let name = &rest[..name_end];
            let remainder = rest.get(name_end + 1..).unwrap_or("");

            // A substituted module is itself a coordinate
            match follow_arrow(remainder) {
                Some(target) if target.contains(':') => value = target,
                Some(target) => break (group, name, target),
                None => break (group, name, remainder),
            }
        };

        if name.is_empty() {
            return Err(BomError::UnparseableCoordinate {
                line: line.trim_end().to_string(),
            }
            .into());
        }

        let mut resolved = true;
        value = value.trim_end();
        if let Some(stripped) = value
            .strip_suffix("(*)")
            .or_else(|| value.strip_suffix("(c)"))
        {
            value = stripped;
        } else if let Some(stripped) = value.strip_suffix("(n)") {
            resolved = false;
            value = stripped;
        }

        let version = match value.trim() {
            "" => "unknown",
            version => version,
        };

        Ok(Self {
            project,
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            resolved,
        })
    }
}

/// Text after a ` -> ` conflict-resolution arrow, if there is one
fn follow_arrow(value: &str) -> Option<&str> {
    value
        .strip_prefix("-> ")
        .or_else(|| value.find(" -> ").map(|i| &value[i + 4..]))
}
