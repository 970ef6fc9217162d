use std::path::PathBuf;

/// Errors surfaced by the plugin entry points.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// `on_start` was called while recipes from an earlier start are still
    /// registered.
    #[error("recipes are already loaded; call on_stop before starting again")]
    AlreadyLoaded,

    /// The settings file exists but could not be parsed.
    #[error("invalid settings in {file}: {detail}")]
    Settings { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
