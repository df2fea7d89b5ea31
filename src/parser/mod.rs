use log::{debug, info};

use crate::error::{ConvertError, Result};
use crate::model::Level;

/// Parse a whole Tiled JSON document into a [`Level`].
///
/// Any missing or mistyped field the converter relies on is reported as
/// [`ConvertError::MalformedInput`]; object groups must carry an
/// `objects` array.
pub fn load_from_json(json: &str) -> Result<Level> {
    debug!("File loaded, size: {} bytes", json.len());

    let level: Level =
        serde_json::from_str(json).map_err(|e| ConvertError::MalformedInput(e.to_string()))?;

    info!(
        "Found {} layers in a {}x{} level ({} render order)",
        level.layers.len(),
        level.width,
        level.height,
        level.renderorder
    );

    for (i, layer) in level.layers.iter().enumerate() {
        if layer.is_object_layer() && layer.objects.is_none() {
            return Err(ConvertError::MalformedInput(format!(
                "object layer {} (`{}`) has no `objects` array",
                i, layer.name
            )));
        }
    }

    Ok(level)
}
