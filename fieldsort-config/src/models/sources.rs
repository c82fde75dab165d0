use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Source that produced the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// File named by `$FIELDSORT_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `$FIELDSORT_CONFIG_JSON`.
    EnvInline,
    /// One of the default candidate files.
    File(PathBuf),
    /// File passed explicitly by the caller, e.g. `--config`.
    Explicit(PathBuf),
}

impl Display for ConfigSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("defaults"),
            ConfigSource::EnvPath(path) => {
                write!(f, "FIELDSORT_CONFIG_PATH ({})", path.display())
            }
            ConfigSource::EnvInline => f.write_str("FIELDSORT_CONFIG_JSON"),
            ConfigSource::File(path) | ConfigSource::Explicit(path) => {
                write!(f, "{}", path.display())
            }
        }
    }
}
