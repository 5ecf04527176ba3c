//! Base canvas: configuration, the owned axes, and the limits policy.

use crate::axes::Axes;
use gridplot_core::{CanvasError, Color, Limits};
use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

/// Canvas configuration. Every field has a default, so a JSON config only
/// needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Output width in pixels. Default: **800**.
    pub width: u32,

    /// Output height in pixels. Default: **600**.
    pub height: u32,

    /// Pixels per inch; marker sizes are in points² and scale with this. Default: **100**.
    pub dpi: f64,

    /// Fraction of the data span added on each side of the axis limits. Default: **0.1**.
    pub margin_ratio: f64,

    /// Background color. Default: white.
    pub facecolor: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            dpi: 100.0,
            margin_ratio: 0.1,
            facecolor: Color::WHITE,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self, CanvasError> {
        let config: CanvasConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CanvasError> {
        if self.width == 0 || self.height == 0 {
            return Err(CanvasError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "dpi must be positive, got {}",
                self.dpi
            )));
        }
        if !(self.margin_ratio.is_finite() && self.margin_ratio >= 0.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "margin_ratio must be finite and >= 0, got {}",
                self.margin_ratio
            )));
        }
        Ok(())
    }
}

// ─── Canvas ───────────────────────────────────────────────────────────────

/// Padding applied to an axis whose data span is zero (a single point or a
/// straight row/column of nodes).
const DEGENERATE_PAD: f64 = 0.5;

/// A plotting surface. Each canvas owns its axes outright.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    config: CanvasConfig,
    axes: Axes,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        log::debug!(
            "canvas {}x{} @ {} dpi, margin {}",
            config.width,
            config.height,
            config.dpi,
            config.margin_ratio
        );
        Ok(Self {
            config,
            axes: Axes::new(),
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Turn a raw data extent into axis limits.
    ///
    /// Each axis is widened by `margin_ratio × span` on both sides; a zero
    /// span is widened by a fixed half unit instead.
    pub fn limits(&self, max_x: f64, min_x: f64, max_y: f64, min_y: f64) -> Limits {
        let (min_x, max_x) = pad(min_x, max_x, self.config.margin_ratio);
        let (min_y, max_y) = pad(min_y, max_y, self.config.margin_ratio);
        Limits {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

/// `max - min` can overflow for finite inputs, so the margin is taken from
/// each bound separately and the result is clamped to finite values.
fn pad(min: f64, max: f64, ratio: f64) -> (f64, f64) {
    let margin = if max > min {
        max * ratio - min * ratio
    } else {
        DEGENERATE_PAD
    };
    (
        (min - margin).max(f64::MIN),
        (max + margin).min(f64::MAX),
    )
}
