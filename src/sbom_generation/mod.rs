/// Domain layer - dependency graph model and the per-ecosystem graph logic
///
/// Nothing in here performs I/O; manifests arrive as text or parsed
/// values and graphs leave as [`domain::Component`] lists.
pub mod domain;
pub mod services;
