//! The instance file format.
//!
//! A single JSON object:
//!
//! ```json
//! { "_version": 1,
//!   "cubes": [ { "x": 0, "y": 0, "color": [68, 187, 248] }, ... ] }
//! ```
//!
//! `color` is optional and defaults to the instance blue. `x` grows
//! east, `y` grows north. Loaders validate connectivity and reject
//! anything that is not one robot.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use tessera_core::{Cell, Color};
use tessera_grid::World;
use tessera_topology::{is_connected, MarkedOps};

use crate::error::LoadError;

/// Newest document version this implementation understands.
pub const INSTANCE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct InstanceDoc {
    #[serde(rename = "_version")]
    version: u32,
    cubes: Vec<CubeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CubeEntry {
    x: i32,
    y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<[u8; 3]>,
}

/// Parse an instance document from a string.
///
/// Rejects versions newer than [`INSTANCE_VERSION`], duplicate cells,
/// and disconnected configurations. The returned world is marked.
pub fn parse_instance(text: &str) -> Result<World, LoadError> {
    let doc: InstanceDoc = serde_json::from_str(text)?;
    if doc.version > INSTANCE_VERSION {
        return Err(LoadError::BadVersion(doc.version));
    }

    let mut world = World::new();
    for entry in &doc.cubes {
        let cell = Cell::new(entry.x, entry.y);
        let color = entry
            .color
            .map(|[r, g, b]| Color(r, g, b))
            .unwrap_or_default();
        world
            .add_cube(cell, color)
            .map_err(|_| LoadError::DuplicateCell(cell))?;
    }

    if !is_connected(&world) {
        return Err(LoadError::Disconnected);
    }
    world.mark();
    Ok(world)
}

/// Read and parse an instance document.
pub fn load_instance<R: Read>(mut reader: R) -> Result<World, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Serialize a configuration to the instance format.
///
/// Cubes appear in id order with their current positions and colors, so
/// loading the output reproduces the configuration up to cube order.
pub fn serialize_instance(world: &World) -> Result<String, LoadError> {
    let doc = InstanceDoc {
        version: INSTANCE_VERSION,
        cubes: world
            .cubes()
            .iter()
            .map(|cube| CubeEntry {
                x: cube.pos.x,
                y: cube.pos.y,
                color: Some([cube.color.0, cube.color.1, cube.color.2]),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Serialize a configuration to a writer.
pub fn save_instance<W: Write>(world: &World, mut writer: W) -> Result<(), LoadError> {
    let text = serialize_instance(world)?;
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}
