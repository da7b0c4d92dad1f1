mod cli;
mod config;
mod logging;

use bomgraph::adapters::outbound::console::StderrProgressReporter;
use bomgraph::adapters::outbound::formatters::CycloneDxFormatter;
use bomgraph::application::factories::{GeneratorFactory, PresenterFactory, PresenterType};
use bomgraph::application::use_cases::GenerateBomUseCase;
use bomgraph::ports::outbound::BomFormatter;
use bomgraph::shared::error::{BomError, ExitCode};
use bomgraph::shared::Result;
use cli::Args;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();
    logging::init_logger(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    validate_project_path(&args.path)?;

    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&args.path)?,
    };
    let request = config::build_request(&args, config)?;

    let progress_reporter = StderrProgressReporter::new();
    let mut use_case = GenerateBomUseCase::new(GeneratorFactory::create_all(), progress_reporter);
    let response = use_case.execute(request)?;

    eprintln!("📝 Generating CycloneDX JSON format output...");
    let formatter = CycloneDxFormatter::new();
    let document = formatter.format(&response.components, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&document)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| BomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(BomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(BomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
