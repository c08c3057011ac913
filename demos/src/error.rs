// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use skipjson::ParseError;

/// Errors from loading a slideshow configuration or running it.
#[derive(Debug)]
pub enum DemoError {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The configuration text is not a valid object.
    Parse(ParseError),
    /// The configuration parsed but a field is missing or has the wrong type.
    Config(&'static str),
    /// The backdrop could not be applied.
    Backdrop(String),
}

impl DemoError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| DemoError::Io { path, source }
    }
}

impl From<ParseError> for DemoError {
    fn from(err: ParseError) -> Self {
        DemoError::Parse(err)
    }
}

impl core::fmt::Display for DemoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DemoError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            DemoError::Parse(e) => write!(f, "{e}"),
            DemoError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            DemoError::Backdrop(msg) => write!(f, "Unable to set background: {msg}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Io { source, .. } => Some(source),
            DemoError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
