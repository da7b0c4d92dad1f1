/// Result alias used by every layer; typed `BomError`s are carried inside `anyhow::Error`
/// and recovered with `downcast_ref` where a caller needs to branch on the kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
