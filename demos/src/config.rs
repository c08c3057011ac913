// SPDX-License-Identifier: Apache-2.0

//! Slideshow configuration, read with the `skipjson` object parser.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use skipjson::{parse_object_from_str, Object, Value};

use crate::error::DemoError;

/// Written to disk when no configuration file exists yet.
pub const DEFAULT_CONFIG: &str = r#"{
    "delay":10000,
    "pictures": [
        "sample-background-0.jpg",
        "sample-background-1.jpg",
        "sample-background-2.jpg"
    ]
}
"#;

/// What the slideshow needs from its configuration object.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowConfig {
    /// Pause after each picture.
    pub delay: Duration,
    /// Picture paths in display order, possibly relative.
    pub pictures: Vec<String>,
}

impl SlideshowConfig {
    /// Reads `delay` (milliseconds, rounded) and `pictures` (array of strings).
    pub fn from_object(object: &Object) -> Result<Self, DemoError> {
        let delay = object
            .get("delay")
            .and_then(Value::as_f64)
            .ok_or(DemoError::Config("\"delay\" must be a number"))?;
        // The lexer has no sign, but a config built in code might
        if !delay.is_finite() || delay < 0.0 {
            return Err(DemoError::Config(
                "\"delay\" must be a finite, non-negative number",
            ));
        }

        let pictures = object
            .get("pictures")
            .and_then(Value::as_array)
            .ok_or(DemoError::Config("\"pictures\" must be an array"))?
            .iter()
            .map(|picture| {
                picture
                    .as_str()
                    .map(str::to_owned)
                    .ok_or(DemoError::Config("\"pictures\" must only contain strings"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            delay: Duration::from_millis(delay.round() as u64),
            pictures,
        })
    }

    /// Parses configuration text.
    pub fn from_text(text: &str) -> Result<Self, DemoError> {
        Self::from_object(&parse_object_from_str(text)?)
    }
}

/// Reads the configuration at `path`, writing [`DEFAULT_CONFIG`] there first
/// if the file does not exist.
pub fn load_or_bootstrap(path: &Path) -> Result<SlideshowConfig, DemoError> {
    if !path.exists() {
        info!("Writing default configuration to {}", path.display());
        fs::write(path, DEFAULT_CONFIG).map_err(DemoError::io(path))?;
    }
    let text = fs::read_to_string(path).map_err(DemoError::io(path))?;
    debug!("Read {} bytes of configuration", text.len());
    SlideshowConfig::from_text(&text)
}
