mod generator_factory;
mod presenter_factory;

pub use generator_factory::{GeneratorFactory, GENERATOR_NAMES};
pub use presenter_factory::{PresenterFactory, PresenterType};
