//! Grid data model: colors, coordinates, nodes, and edges.
//!
//! A grid is a flat, ordered list of nodes plus an ordered list of edges.
//! Nodes are anything implementing [`GridNode`]; the canvas only ever reads
//! a coordinate and two colors from them (plus optional marker hints).

use crate::error::CanvasError;
use crate::id::NodeId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0.0, 0.0, 0.0)),
    ("white", Color::rgb(1.0, 1.0, 1.0)),
    ("red", Color::rgb(1.0, 0.0, 0.0)),
    ("green", Color::rgb(0.0, 128.0 / 255.0, 0.0)),
    ("blue", Color::rgb(0.0, 0.0, 1.0)),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    ("cyan", Color::rgb(0.0, 1.0, 1.0)),
    ("magenta", Color::rgb(1.0, 0.0, 1.0)),
    ("gray", Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0)),
    ("grey", Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0)),
    ("orange", Color::rgb(1.0, 165.0 / 255.0, 0.0)),
    ("purple", Color::rgb(128.0 / 255.0, 0.0, 128.0 / 255.0)),
    ("none", Color::TRANSPARENT),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits = hex.bytes().map(hex_val).collect::<Option<Vec<u8>>>()?;

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits.iter().map(|d| d * 17).collect(),
            6 | 8 => digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect(),
            _ => return None,
        };
        let unit = |v: u8| v as f32 / 255.0;
        Some(Self::rgba(
            unit(channels[0]),
            unit(channels[1]),
            unit(channels[2]),
            channels.get(3).copied().map_or(1.0, unit),
        ))
    }

    /// Parse a hex string or one of the named colors (`red`, `gray`, `none`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, c)| *c)
            .or_else(|| Self::from_hex(s))
    }

    /// 8-bit channels, rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit as shortest valid hex string (`#RRGGBB`, or `#RRGGBBAA` when translucent).
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.to_rgba8()[3] == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown color `{s}`")))
    }
}

// ─── Coordinates ─────────────────────────────────────────────────────────

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// Default marker area in points², the same unit scatter sizes use.
pub const DEFAULT_MARKER_SIZE: f64 = 400.0;

/// Marker shape for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    #[default]
    Circle,
    Square,
}

/// What a canvas needs to know about a node.
///
/// Only `coordinate`, `color` and `edgecolor` are required; the marker
/// hints have defaults so foreign node types stay a three-method impl.
pub trait GridNode {
    fn coordinate(&self) -> Coordinate;
    fn color(&self) -> Color;
    fn edgecolor(&self) -> Color;

    fn size(&self) -> f64 {
        DEFAULT_MARKER_SIZE
    }

    fn line_width(&self) -> f64 {
        0.0
    }

    fn style(&self) -> NodeStyle {
        NodeStyle::Circle
    }

    /// Label carried into rendered output, if the node has one.
    fn id(&self) -> Option<NodeId> {
        None
    }

    /// Checks that the node can be placed on a canvas: a finite coordinate
    /// and a finite, non-negative marker size and outline width.
    fn validate(&self) -> Result<(), CanvasError> {
        let c = self.coordinate();
        if !c.is_finite() {
            return Err(CanvasError::InvalidNode {
                reason: format!("coordinate ({}, {}) is not finite", c.x, c.y),
            });
        }
        let size = self.size();
        if !(size.is_finite() && size >= 0.0) {
            return Err(CanvasError::InvalidNode {
                reason: format!("marker size must be finite and >= 0, got {size}"),
            });
        }
        let line_width = self.line_width();
        if !(line_width.is_finite() && line_width >= 0.0) {
            return Err(CanvasError::InvalidNode {
                reason: format!("line width must be finite and >= 0, got {line_width}"),
            });
        }
        Ok(())
    }
}

/// The stock node type: a labelled, styled point in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node2D {
    #[serde(default = "NodeId::next")]
    pub id: NodeId,
    pub coordinate: Coordinate,
    #[serde(default = "default_node_color")]
    pub color: Color,
    #[serde(default = "default_node_edgecolor")]
    pub edgecolor: Color,
    #[serde(default = "default_marker_size")]
    pub size: f64,
    #[serde(default)]
    pub line_width: f64,
    #[serde(default)]
    pub style: NodeStyle,
}

fn default_node_color() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}

fn default_node_edgecolor() -> Color {
    Color::BLACK
}

fn default_marker_size() -> f64 {
    DEFAULT_MARKER_SIZE
}

impl Node2D {
    pub fn new(coordinate: impl Into<Coordinate>) -> Self {
        Self {
            id: NodeId::next(),
            coordinate: coordinate.into(),
            color: default_node_color(),
            edgecolor: default_node_edgecolor(),
            size: DEFAULT_MARKER_SIZE,
            line_width: 0.0,
            style: NodeStyle::Circle,
        }
    }

    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_edgecolor(mut self, edgecolor: Color) -> Self {
        self.edgecolor = edgecolor;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }
}

impl GridNode for Node2D {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn color(&self) -> Color {
        self.color
    }

    fn edgecolor(&self) -> Color {
        self.edgecolor
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn style(&self) -> NodeStyle {
        self.style
    }

    fn id(&self) -> Option<NodeId> {
        Some(self.id)
    }
}

// ─── Edges ───────────────────────────────────────────────────────────────

/// A straight connection between two grid points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge2D {
    pub start: Coordinate,
    pub end: Coordinate,
    #[serde(default = "default_node_edgecolor")]
    pub color: Color,
    #[serde(default = "default_edge_width")]
    pub width: f64,
}

fn default_edge_width() -> f64 {
    1.0
}

impl Edge2D {
    pub fn new(start: impl Into<Coordinate>, end: impl Into<Coordinate>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            color: Color::BLACK,
            width: default_edge_width(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}
