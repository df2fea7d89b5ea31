//! Assemble the `Levels` Elm module and write it to disk.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Level;
use crate::processor::objects;

pub const DEFAULT_MODULE: &str = "Levels";
pub const DEFAULT_FILE_NAME: &str = "Levels.elm";

/// Module header; `{module}` is the only hole.
const BOILERPLATE: &str = "
module {module} exposing (..)

import AltMath.Vector2 exposing (Vec2, vec2)
import Entity exposing (EntityType(..), PlayerData)


";

pub fn header(module: &str) -> String {
    BOILERPLATE.replace("{module}", module)
}

/// `name = { layer = [ … ], … }` for every visible object layer, in
/// document order. Layer names are lower-cased.
pub fn serialize_level(name: &str, level: &Level) -> Result<String> {
    let mut output = format!("{name} = {{\n");

    let object_layers = level.layers.iter().filter(|layer| {
        let keep = layer.is_object_layer() && layer.visible;
        if !keep {
            debug!(
                "skipping layer `{}` (type {}, visible {})",
                layer.name, layer.kind, layer.visible
            );
        }
        keep
    });

    for (index, layer) in object_layers.enumerate() {
        let objects = layer.objects.as_deref().unwrap_or_default();
        let rendered = objects::serialize_objects_layer(level, objects)?;
        info!("layer `{}`: {} objects", layer.name, objects.len());

        let sep = if index == 0 { "" } else { ", " };
        output.push_str(&format!(
            "    {sep}{} = {rendered}\n",
            layer.name.to_lowercase()
        ));
    }

    output.push_str("    }\n");
    Ok(output)
}

/// Whole module text: header followed by the level binding.
pub fn serialize(module: &str, name: &str, level: &Level) -> Result<String> {
    Ok(header(module) + &serialize_level(name, level)?)
}

/// Write an already assembled module into `out_dir`, creating it first.
pub fn emit(text: &str, out_dir: &Path, file_name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file_name);
    fs::write(&path, text)?;
    Ok(path)
}
