use anyhow::{bail, Context, Result};

/// Canvas size in CSS pixels; the basis for the pixel-to-clip projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        // Default HTML canvas size.
        Self::new(400.0, 300.0)
    }
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Parses `WIDTHxHEIGHT`, e.g. `800x600`.
    pub fn parse(text: &str) -> Result<Self> {
        let (w, h) = text
            .trim()
            .split_once(['x', 'X'])
            .with_context(|| format!("canvas size `{text}` is not WIDTHxHEIGHT"))?;
        let width: f32 = w
            .trim()
            .parse()
            .with_context(|| format!("bad canvas width `{w}`"))?;
        let height: f32 = h
            .trim()
            .parse()
            .with_context(|| format!("bad canvas height `{h}`"))?;

        let vp = Self::new(width, height);
        if !vp.is_valid() {
            bail!("canvas size must be positive and finite, got {width}x{height}");
        }
        Ok(vp)
    }
}
