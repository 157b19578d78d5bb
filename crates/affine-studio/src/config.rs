use anyhow::Result;

use affine_math::logging::LoggingConfig;

use crate::viewport::Viewport;

/// Environment variable overriding the canvas size (`WIDTHxHEIGHT`).
pub const CANVAS_ENV: &str = "AFFINE_STUDIO_CANVAS";

/// Studio configuration, built with chained setters.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub canvas: Viewport,
    /// Z extent of the orthographic box, in pixels.
    pub depth: f32,
    pub logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas: Viewport::default(),
            depth: 400.0,
            logging: LoggingConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas = Viewport::new(width, height);
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Applies `AFFINE_STUDIO_CANVAS` if set.
    pub fn with_env(self) -> Result<Self> {
        match std::env::var(CANVAS_ENV) {
            Ok(text) => self.with_canvas_str(&text),
            Err(_) => Ok(self),
        }
    }

    pub fn with_canvas_str(self, text: &str) -> Result<Self> {
        let vp = Viewport::parse(text)?;
        Ok(self.canvas(vp.width, vp.height))
    }
}
