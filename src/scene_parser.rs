use std::{fs, path::Path};

use log::debug;

use crate::{error::RenderError, parsed_scene::Scene};

pub const SPHERE_PRESET: &str = include_str!("../scenes/sphere.json");
pub const SHOWCASE_PRESET: &str = include_str!("../scenes/showcase.json");

pub fn parse_scene(json: &str) -> Result<Scene, RenderError> {
    Ok(serde_json::from_str(json)?)
}

/// `source` is either a preset name (`sphere`, `showcase`) or a path to a JSON
/// scene description.
pub fn load_scene(source: &str) -> Result<Scene, RenderError> {
    match source {
        "sphere" => parse_scene(SPHERE_PRESET),
        "showcase" => parse_scene(SHOWCASE_PRESET),
        path => {
            debug!("Reading scene from {}", Path::new(path).display());
            parse_scene(&fs::read_to_string(path)?)
        }
    }
}
