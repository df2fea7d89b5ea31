use serde::Deserialize;
use std::fmt;

/// Entire Tiled level as it comes out of the JSON loader.
///
/// Only the fields the converter reads are kept; everything else Tiled
/// writes (tilesets, editor settings, …) is ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    /// Size in tiles.
    pub width: u32,
    pub height: u32,
    /// Size of one tile in pixels.
    pub tilewidth: u32,
    pub tileheight: u32,
    pub renderorder: RenderOrder,
    pub layers: Vec<Layer>,
}

impl Level {
    /// Level width in pixels.
    pub fn pixel_width(&self) -> f64 {
        f64::from(self.width) * f64::from(self.tilewidth)
    }

    /// Level height in pixels.
    pub fn pixel_height(&self) -> f64 {
        f64::from(self.height) * f64::from(self.tileheight)
    }
}

/// Tiled's render order; only `right-down` is understood by the
/// rectangle conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderOrder {
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

impl fmt::Display for RenderOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RenderOrder::RightDown => "right-down",
            RenderOrder::RightUp => "right-up",
            RenderOrder::LeftDown => "left-down",
            RenderOrder::LeftUp => "left-up",
        };
        f.write_str(s)
    }
}

pub const OBJECT_GROUP: &str = "objectgroup";

/// One entry of the top-level `layers` array.
///
/// `objects` is only present on object groups; tile and image layers
/// carry other payloads which we never look at.
#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub visible: bool,
    #[serde(default)]
    pub objects: Option<Vec<MapObject>>,
}

impl Layer {
    pub fn is_object_layer(&self) -> bool {
        self.kind == OBJECT_GROUP
    }
}

/// A single object of an object layer, 1-to-1 with the JSON.
///
/// The shape is not tagged in the file: it is implied by which of the
/// `polyline` / `point` keys is present, see [`MapObject::shape`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapObject {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub polyline: Option<Vec<PolyPoint>>,
    #[serde(default)]
    pub point: Option<bool>,
    #[serde(default)]
    pub properties: Option<Vec<Property>>,
}

/// Borrowed view of an object's shape after classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectShape<'a> {
    Polyline(&'a [PolyPoint]),
    Point,
    Rectangle,
}

impl MapObject {
    /// First match wins: polyline, then point, then rectangle.
    pub fn shape(&self) -> ObjectShape<'_> {
        if let Some(points) = &self.polyline {
            ObjectShape::Polyline(points)
        } else if self.point.is_some() {
            ObjectShape::Point
        } else {
            ObjectShape::Rectangle
        }
    }

    /// Human readable handle for error messages.
    pub fn label(&self) -> String {
        match self.id {
            Some(id) => format!("object {id}"),
            None => format!("object at ({}, {})", self.x, self.y),
        }
    }
}

/// Polyline vertex, relative to the owning object's `x`/`y`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PolyPoint {
    pub x: f64,
    pub y: f64,
}

/// Custom property attached to an object in the editor.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}
