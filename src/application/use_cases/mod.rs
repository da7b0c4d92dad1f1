/// Use cases module containing application business logic orchestration
mod cocoapods_generator;
mod directory_traversal;
mod generate_bom;
mod gradle_generator;
mod npm_generator;
#[cfg(test)]
mod test_support;

pub use cocoapods_generator::CocoapodsGenerator;
pub use directory_traversal::{DirectoryTraversal, ScanSettings};
pub use generate_bom::GenerateBomUseCase;
pub use gradle_generator::GradleGenerator;
pub use npm_generator::NpmGenerator;
