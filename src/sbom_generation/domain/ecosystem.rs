/// Package-URL type tags; Gradle artifacts use `maven`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurlType {
    Generic,
    Npm,
    Maven,
    Cocoapods,
}

impl PurlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurlType::Generic => "generic",
            PurlType::Npm => "npm",
            PurlType::Maven => "maven",
            PurlType::Cocoapods => "cocoapods",
        }
    }
}

impl std::fmt::Display for PurlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a package URL of the form `pkg:<type>/<name>@<version>`.
///
/// `name` may contain a namespace (`group/name`); any `@` in it is
/// percent-escaped so scoped npm packages stay parseable.
pub fn package_url(purl_type: PurlType, name: &str, version: &str) -> String {
    format!(
        "pkg:{}/{}@{}",
        purl_type,
        name.replace('@', "%40"),
        version
    )
}

/// Package ecosystems with a dependency graph builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Npm,
    Gradle,
    Cocoapods,
}

impl Ecosystem {
    pub fn purl_type(&self) -> PurlType {
        match self {
            Ecosystem::Npm => PurlType::Npm,
            Ecosystem::Gradle => PurlType::Maven,
            Ecosystem::Cocoapods => PurlType::Cocoapods,
        }
    }

    /// First line of the description of an ordinary package node
    pub fn package_label(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm package",
            Ecosystem::Gradle => "Gradle dependency",
            Ecosystem::Cocoapods => "CocoaPods package",
        }
    }

    pub fn root_label(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm project root",
            Ecosystem::Gradle => "Gradle project root",
            Ecosystem::Cocoapods => "CocoaPods project root",
        }
    }

    /// Depth bound of the provenance search
    pub fn max_chain_depth(&self) -> usize {
        match self {
            Ecosystem::Npm | Ecosystem::Cocoapods => 5,
            Ecosystem::Gradle => 3,
        }
    }
}
