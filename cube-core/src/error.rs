/// Error types for configuration and rendering
use std::fmt::{self, Display, Formatter};
use std::io;

/// A rejected configuration, either from validation or from the config file
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value violates a startup precondition
    InvalidConfiguration(String),
    /// A config file line could not be parsed
    Parse { line: usize, message: String },
    /// A config file line names a key that does not exist
    UnknownKey { line: usize, key: String },
    /// The config file could not be read
    Read(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Self::Parse { line, message } => write!(f, "config line {line}: {message}"),
            Self::UnknownKey { line, key } => write!(f, "config line {line}: unknown key '{key}'"),
            Self::Read(reason) => write!(f, "cannot read config file {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Fatal errors that stop the renderer
#[derive(Debug)]
pub enum RenderError {
    InvalidConfiguration(ConfigError),
    /// The drawing backend could not be set up
    PlatformInitialization(io::Error),
    /// The drawing backend failed while rendering a frame
    Surface(io::Error),
    /// The event queue could not be polled
    Events(io::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "{err}"),
            Self::PlatformInitialization(err) => {
                write!(f, "failed to initialize drawing surface: {err}")
            }
            Self::Surface(err) => write!(f, "drawing surface error: {err}"),
            Self::Events(err) => write!(f, "event polling error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::PlatformInitialization(err) | Self::Surface(err) | Self::Events(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}
