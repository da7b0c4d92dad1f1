use clap::Parser;
use std::path::PathBuf;

/// Build dependency graphs of npm, Gradle and CocoaPods projects and emit a CycloneDX BOM
#[derive(Parser, Debug)]
#[command(name = "bomgraph")]
#[command(version)]
#[command(about = "Build dependency graphs of npm, Gradle and CocoaPods projects and emit a CycloneDX BOM", long_about = None)]
pub struct Args {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Scan every directory below PATH
    #[arg(short, long)]
    pub recurse: bool,

    /// Skip directories whose path matches this regular expression (with --recurse)
    #[arg(short = 'x', long, value_name = "REGEX")]
    pub excludes: Option<String>,

    /// Include test and dev-only dependencies
    #[arg(short = 't', long)]
    pub include_tests: bool,

    /// Nest subcomponents under their parent component
    #[arg(short = 's', long = "subcomponents")]
    pub include_subcomponents: bool,

    /// Generators to run, comma separated (default: npm,gradle,cocoapods)
    #[arg(short, long, value_delimiter = ',', value_name = "NAME")]
    pub generators: Vec<String>,

    /// Generator properties as Name=value, comma separated or repeated
    /// e.g. -p GradlePath=./gradlew -p NpmDevDependencies=true
    #[arg(short, long, value_delimiter = ',', value_name = "NAME=VALUE")]
    pub properties: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to bomgraph.config.yml in PATH if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
