/// The switch prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "/";
