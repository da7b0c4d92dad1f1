/// CycloneDX component classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Library,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Library => "library",
        }
    }
}

/// Component value object handed to formatters
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub classification: Classification,
    pub group: String,
    pub name: String,
    pub version: String,
    pub description: String,
    /// Package URL; `None` for synthetic build-configuration entries
    pub purl: Option<String>,
    pub components: Vec<Component>,
}

impl Component {
    pub fn library(group: &str, name: &str, version: &str) -> Self {
        Self {
            classification: Classification::Library,
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            description: String::new(),
            purl: None,
            components: Vec::new(),
        }
    }

    /// Number of components in this subtree, including itself
    pub fn tree_size(&self) -> usize {
        1 + self.components.iter().map(Component::tree_size).sum::<usize>()
    }
}
