// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, info};

use crate::config::SlideshowConfig;
use crate::error::DemoError;

/// Something that can show a picture as the desktop background.
pub trait Backdrop {
    fn apply(&mut self, path: &Path) -> Result<(), DemoError>;
}

/// Reports each picture instead of calling into the desktop environment.
#[derive(Debug, Default)]
pub struct LogBackdrop;

impl Backdrop for LogBackdrop {
    fn apply(&mut self, path: &Path) -> Result<(), DemoError> {
        info!("Background: {}", path.display());
        println!("{}", path.display());
        Ok(())
    }
}

/// Cycles through the configured pictures.
pub struct Slideshow<B: Backdrop> {
    config: SlideshowConfig,
    base_dir: PathBuf,
    backdrop: B,
}

impl<B: Backdrop> Slideshow<B> {
    /// Relative picture paths are resolved against `base_dir`.
    pub fn new(config: SlideshowConfig, base_dir: impl Into<PathBuf>, backdrop: B) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            backdrop,
        }
    }

    pub fn resolve(&self, picture: &str) -> PathBuf {
        let path = Path::new(picture);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Shows every picture in order, waiting the configured delay after each
    /// one. Runs `cycles` full passes, or forever when `None`.
    pub fn run(&mut self, cycles: Option<usize>) -> Result<(), DemoError> {
        if self.config.pictures.is_empty() {
            return Err(DemoError::Config("\"pictures\" must not be empty"));
        }
        let mut cycle = 0;
        while cycles.map_or(true, |limit| cycle < limit) {
            debug!("Cycle {}", cycle);
            for picture in &self.config.pictures {
                let path = self.resolve(picture);
                self.backdrop.apply(&path)?;
                thread::sleep(self.config.delay);
            }
            cycle += 1;
        }
        Ok(())
    }

    pub fn into_backdrop(self) -> B {
        self.backdrop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use test_log::test;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<PathBuf>,
    }

    impl Backdrop for Recorder {
        fn apply(&mut self, path: &Path) -> Result<(), DemoError> {
            self.shown.push(path.to_path_buf());
            Ok(())
        }
    }

    struct Broken;

    impl Backdrop for Broken {
        fn apply(&mut self, _path: &Path) -> Result<(), DemoError> {
            Err(DemoError::Backdrop("no display".into()))
        }
    }

    fn config(pictures: &[&str]) -> SlideshowConfig {
        SlideshowConfig {
            delay: Duration::ZERO,
            pictures: pictures.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_wraps_around_in_order() {
        let base = PathBuf::from("/srv/walls");
        let mut show = Slideshow::new(config(&["a.jpg", "b.jpg"]), &base, Recorder::default());
        show.run(Some(2)).unwrap();
        assert_eq!(
            show.into_backdrop().shown,
            [
                base.join("a.jpg"),
                base.join("b.jpg"),
                base.join("a.jpg"),
                base.join("b.jpg")
            ]
        );
    }

    #[test]
    fn test_absolute_paths_kept() {
        let absolute = std::env::temp_dir().join("x.png");
        let show = Slideshow::new(config(&[]), "/somewhere/else", Recorder::default());
        assert_eq!(show.resolve(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    fn test_empty_pictures_rejected() {
        let mut show = Slideshow::new(config(&[]), ".", Recorder::default());
        assert!(matches!(show.run(Some(1)), Err(DemoError::Config(_))));
    }

    #[test]
    fn test_backdrop_error_stops() {
        let mut show = Slideshow::new(config(&["a.jpg"]), ".", Broken);
        assert!(matches!(show.run(None), Err(DemoError::Backdrop(_))));
    }
}
