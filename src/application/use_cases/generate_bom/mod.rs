use crate::application::dto::{BomRequest, BomResponse, GeneratorFailure};
use crate::ports::inbound::BomGenerator;
use crate::ports::outbound::ProgressReporter;
use crate::sbom_generation::domain::Component;
use crate::sbom_generation::services::MetadataGenerator;
use crate::shared::error::BomError;
use crate::shared::Result;

/// GenerateBomUseCase - runs the selected generators against one project
///
/// Each generator is configured with a copy of the request options and
/// run independently. A generator that fails to configure or to run is
/// reported and skipped; the others still contribute. Components are
/// concatenated in the order the generators were requested.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct GenerateBomUseCase<PR> {
    generators: Vec<Box<dyn BomGenerator>>,
    progress_reporter: PR,
}

impl<PR: ProgressReporter> GenerateBomUseCase<PR> {
    /// Creates a use case over the registered generators
    pub fn new(generators: Vec<Box<dyn BomGenerator>>, progress_reporter: PR) -> Self {
        Self {
            generators,
            progress_reporter,
        }
    }

    /// Executes the BOM generation use case
    ///
    /// # Errors
    /// Returns `UnknownGenerator` if a requested name is not registered.
    /// Failures of individual generators end up in `BomResponse::failures`.
    pub fn execute(&mut self, request: BomRequest) -> Result<BomResponse> {
        let selected = self.select(&request.generators)?;

        self.progress_reporter.report(&format!(
            "🔍 Scanning {} with {} generator(s)",
            request.project_path.display(),
            selected.len()
        ));

        let total = selected.len();
        let mut components: Vec<Component> = Vec::new();
        let mut failures: Vec<GeneratorFailure> = Vec::new();

        for (step, index) in selected.into_iter().enumerate() {
            let generator = &mut self.generators[index];
            let name = generator.name();
            self.progress_reporter
                .report_progress(step + 1, total, Some(name));

            let outcome = generator
                .configure(request.options.clone())
                .and_then(|()| generator.generate_bom(&request.project_path));

            match outcome {
                Ok(found) => {
                    tracing::debug!("{} generator found {} component(s)", name, found.len());
                    components.extend(found);
                }
                Err(err) => {
                    tracing::warn!("{} generator failed: {:#}", name, err);
                    self.progress_reporter
                        .report_error(&format!("⚠️  Warning: {} generator failed: {}", name, err));
                    failures.push(GeneratorFailure {
                        generator: name.to_string(),
                        message: format!("{:#}", err),
                    });
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Found {} component(s)",
            components.iter().map(Component::tree_size).sum::<usize>()
        ));

        Ok(BomResponse::new(
            components,
            MetadataGenerator::for_this_tool(),
            failures,
        ))
    }

    /// Indexes of the requested generators, in request order
    fn select(&self, names: &[String]) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| {
                self.generators
                    .iter()
                    .position(|generator| generator.name() == name.as_str())
                    .ok_or_else(|| {
                        BomError::UnknownGenerator {
                            name: name.clone(),
                            available: self.available(),
                        }
                        .into()
                    })
            })
            .collect()
    }

    fn available(&self) -> String {
        self.generators
            .iter()
            .map(|generator| generator.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
