//! Object layer → list of Elm records.
//!
//! * polylines become one `{ p1, p2, normal }` record per segment
//! * points are entity spawns: `{ position, side, type_ }`
//! * anything else is a rectangular platform:
//!   `{ position, width, height, maxOffset, period }`

use log::debug;

use crate::error::{ConvertError, Result};
use crate::model::{Level, MapObject, ObjectShape, RenderOrder};
use crate::processor::geometry::{self, to_vec2};
use crate::processor::value::Value;

pub const PLAYER: &str = "Player";
const PLAYER_CTOR: &str = "Player (PlayerData 0)";

/// Entities always spawn facing right.
const FACING_RIGHT: i64 = 1;

const DEFAULT_MAX_OFFSET: i64 = 100;
const DEFAULT_PERIOD: i64 = 5;

/// Level-wide data every object conversion needs.
#[derive(Debug, Clone, Copy)]
struct Frame {
    level_w: f64,
    level_h: f64,
    order: RenderOrder,
}

impl Frame {
    fn of(level: &Level) -> Self {
        Self {
            level_w: level.pixel_width(),
            level_h: level.pixel_height(),
            order: level.renderorder,
        }
    }
}

/// Convert every object of a layer, flattening polyline segments into
/// the same list.
pub fn layer_value(level: &Level, objects: &[MapObject]) -> Result<Value> {
    let frame = Frame::of(level);
    let mut records = Vec::with_capacity(objects.len());

    for object in objects {
        convert_object(&frame, object, &mut records)?;
    }

    debug!(
        "{} objects converted into {} records",
        objects.len(),
        records.len()
    );

    Ok(Value::Sequence(records))
}

/// Same as [`layer_value`], rendered.
pub fn serialize_objects_layer(level: &Level, objects: &[MapObject]) -> Result<String> {
    Ok(layer_value(level, objects)?.render())
}

fn convert_object(frame: &Frame, object: &MapObject, out: &mut Vec<Value>) -> Result<()> {
    match object.shape() {
        ObjectShape::Polyline(points) => {
            if points.is_empty() {
                return Err(ConvertError::MalformedInput(format!(
                    "{} has an empty polyline",
                    object.label()
                )));
            }
            let origin = geometry::point_to_world(frame.level_w, frame.level_h, object.x, object.y);
            let segments = geometry::polyline_to_segments(points, origin)?;
            out.extend(segments.iter().map(|s| s.to_value()));
        }
        ObjectShape::Point => {
            let name = object.name.as_deref().unwrap_or_default();
            if name.is_empty() {
                return Err(ConvertError::MalformedInput(format!(
                    "point {} has no entity name",
                    object.label()
                )));
            }
            let position =
                geometry::point_to_world(frame.level_w, frame.level_h, object.x, object.y);
            let type_ = if name == PLAYER {
                Value::verbatim(PLAYER_CTOR)
            } else {
                Value::ctor(name, vec![])
            };

            out.push(Value::record([
                ("position", to_vec2(position)),
                ("side", Value::int(FACING_RIGHT)),
                ("type_", type_),
            ]));
        }
        ObjectShape::Rectangle => {
            let (w, h) = match (object.width, object.height) {
                (Some(w), Some(h)) => (w, h),
                _ => {
                    return Err(ConvertError::MalformedInput(format!(
                        "{} has no width/height",
                        object.label()
                    )));
                }
            };
            let mid = geometry::rect_to_midpoint(frame.order, frame.level_h, w, h, object.x, object.y)?;

            out.push(Value::record([
                ("position", to_vec2(mid)),
                ("width", Value::int(w.trunc() as i64)),
                ("height", Value::int(h.trunc() as i64)),
                (
                    "maxOffset",
                    get_property(object, "maxOffset", Value::int(DEFAULT_MAX_OFFSET))?,
                ),
                ("period", get_property(object, "period", Value::int(DEFAULT_PERIOD))?),
            ]));
        }
    }

    Ok(())
}

/// First property called `name`, or `default` when there is none or it
/// carries no value.
pub fn get_property(object: &MapObject, name: &str, default: Value) -> Result<Value> {
    let found = object
        .properties
        .iter()
        .flatten()
        .find(|p| p.name == name);

    match found.and_then(|p| p.value.as_ref()) {
        Some(json) => Value::try_from(json),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PolyPoint, Property};
    use serde_json::json;

    fn level(order: RenderOrder) -> Level {
        // 20×10 tiles of 16px → 320×160 px
        Level {
            width: 20,
            height: 10,
            tilewidth: 16,
            tileheight: 16,
            renderorder: order,
            layers: vec![],
        }
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> MapObject {
        MapObject {
            id: Some(1),
            x,
            y,
            width: Some(w),
            height: Some(h),
            ..Default::default()
        }
    }

    fn point(name: &str, x: f64, y: f64) -> MapObject {
        MapObject {
            id: Some(2),
            name: Some(name.into()),
            x,
            y,
            point: Some(true),
            ..Default::default()
        }
    }

    fn prop(name: &str, value: serde_json::Value) -> Property {
        Property {
            name: name.into(),
            value: Some(value),
        }
    }

    #[test]
    fn test_player_spawn() {
        let out = serialize_objects_layer(
            &level(RenderOrder::RightDown),
            &[point("Player", 32.0, 48.0)],
        )
        .unwrap();

        assert_eq!(
            out,
            "[ { position = vec2 32 112, side = 1, type_ = Player (PlayerData 0)} ]"
        );
    }

    #[test]
    fn test_other_entity_is_bare_tag() {
        let out = serialize_objects_layer(
            &level(RenderOrder::RightDown),
            &[point("Walker", 0.0, 160.0)],
        )
        .unwrap();

        assert_eq!(
            out,
            "[ { position = vec2 0 0, side = 1, type_ = Walker} ]"
        );
    }

    #[test]
    fn test_point_without_name_is_malformed() {
        let err = layer_value(&level(RenderOrder::RightDown), &[point("", 0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)), "got {err:?}");
    }

    #[test]
    fn test_rectangle_defaults() {
        let out = serialize_objects_layer(
            &level(RenderOrder::RightDown),
            &[rect(0.0, 0.0, 100.0, 50.0)],
        )
        .unwrap();

        assert_eq!(
            out,
            "[ { position = vec2 50 135, width = 100, height = 50, maxOffset = 100, period = 5} ]"
        );
    }

    #[test]
    fn test_rectangle_properties() {
        let mut object = rect(10.0, 20.0, 30.5, 40.0);
        object.properties = Some(vec![
            prop("period", json!(12)),
            prop("period", json!(99)),
            prop("maxOffset", json!(2.5)),
        ]);

        let value = layer_value(&level(RenderOrder::RightDown), &[object]).unwrap();
        let Value::Sequence(records) = value else {
            panic!("expected a sequence")
        };
        let Value::Record(fields) = &records[0] else {
            panic!("expected a record")
        };

        assert_eq!(fields["width"], Value::int(30));
        assert_eq!(fields["period"], Value::int(12), "first match wins");
        assert_eq!(fields["maxOffset"].render(), "2.500000");
    }

    #[test]
    fn test_property_without_value_falls_back() {
        let mut object = rect(0.0, 0.0, 1.0, 1.0);
        object.properties = Some(vec![Property {
            name: "period".into(),
            value: None,
        }]);

        assert_eq!(
            get_property(&object, "period", Value::int(5)).unwrap(),
            Value::int(5)
        );
        assert_eq!(
            get_property(&object, "missing", Value::int(7)).unwrap(),
            Value::int(7)
        );
    }

    #[test]
    fn test_rectangle_needs_right_down() {
        let err = layer_value(&level(RenderOrder::LeftUp), &[rect(0.0, 0.0, 1.0, 1.0)])
            .unwrap_err();
        assert!(
            matches!(err, ConvertError::UnsupportedRenderOrder(RenderOrder::LeftUp)),
            "got {err:?}"
        );
    }

    #[test]
    fn test_points_ignore_render_order() {
        let value = layer_value(&level(RenderOrder::LeftUp), &[point("Coin", 1.0, 1.0)]);
        assert!(value.is_ok());
    }

    #[test]
    fn test_polylines_are_flattened() {
        let poly = |x: f64, raw: &[(f64, f64)]| MapObject {
            x,
            y: 100.0,
            polyline: Some(raw.iter().map(|&(x, y)| PolyPoint { x, y }).collect()),
            ..Default::default()
        };
        let objects = [
            poly(0.0, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]),
            rect(0.0, 0.0, 2.0, 2.0),
            poly(50.0, &[(0.0, 0.0), (0.0, 10.0)]),
        ];

        let Value::Sequence(records) =
            layer_value(&level(RenderOrder::RightDown), &objects).unwrap()
        else {
            panic!("expected a sequence")
        };

        // 2 + 1 + 1, in input order
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[3].render(),
            "{ p1 = vec2 50 60, p2 = vec2 50 50, normal = vec2 1 0}"
        );
    }

    #[test]
    fn test_polyline_wins_over_point() {
        let mut object = point("Player", 0.0, 0.0);
        object.polyline = Some(vec![PolyPoint { x: 0.0, y: 0.0 }]);

        let value = layer_value(&level(RenderOrder::RightDown), &[object]).unwrap();
        assert_eq!(value, Value::Sequence(vec![]));
    }
}
