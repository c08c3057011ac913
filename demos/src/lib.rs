// SPDX-License-Identifier: Apache-2.0

//! Programs built on `skipjson`: a wallpaper slideshow driven by a JSON
//! configuration file, and a tool that dumps what the lexer and parsers see.

pub mod config;
pub mod error;
pub mod slideshow;

pub use config::{load_or_bootstrap, SlideshowConfig, DEFAULT_CONFIG};
pub use error::DemoError;
pub use slideshow::{Backdrop, LogBackdrop, Slideshow};
