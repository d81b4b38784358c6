use indexmap::IndexMap;
use log::info;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::model::{Enemy, Object, Objective, Room, World};

/// Lives a player starts with unless the document says otherwise.
pub const DEFAULT_LIVES: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error opening file: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed world document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed world document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Player's initial room is not defined or invalid in the world file.")]
    MissingStartRoom,
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

////////////////////////
/// DOCUMENT STRUCTS ///
////////////////////////

#[derive(Deserialize)]
struct WorldFile {
    #[serde(default)]
    player: Option<PlayerConfig>,
    #[serde(default)]
    rooms: Vec<RoomConfig>,
    #[serde(default)]
    objects: Vec<ObjectConfig>,
    #[serde(default)]
    enemies: Vec<EnemyConfig>,
    #[serde(default)]
    objective: Option<ObjectiveConfig>,
}

#[derive(Deserialize)]
struct PlayerConfig {
    #[serde(default)]
    initialroom: Option<String>,
    #[serde(default)]
    lives: Option<u32>,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    exits: IndexMap<String, String>,
}

#[derive(Deserialize)]
struct ObjectConfig {
    id: String,
    #[serde(default)]
    desc: Option<String>,
    initialroom: String,
}

#[derive(Deserialize)]
struct EnemyConfig {
    id: String,
    #[serde(default)]
    desc: Option<String>,
    initialroom: String,
    #[serde(default)]
    aggressiveness: u32,
    #[serde(default)]
    killedby: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "what", rename_all = "lowercase")]
enum ObjectiveConfig {
    Room(OneOrMany),
    Collect(OneOrMany),
    Kill(OneOrMany),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/////////////////////////
/// PARSER FUNCTIONS ///
/////////////////////////

/// Public API: load a world from disk. Files ending in `.toml` are read as
/// TOML, everything else as JSON.
pub fn load_world_from_file(path: &Path) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let world = if is_toml {
        load_world_from_toml_str(&contents)?
    } else {
        load_world_from_str(&contents)?
    };

    info!(
        "loaded world from {}: {} rooms, {} objects, {} enemies",
        path.display(),
        world.rooms.len(),
        world.objects.len(),
        world.enemies.len()
    );

    Ok(world)
}

/// Load a world from a JSON document.
pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = serde_json::from_str(contents)?;
    build_world(world_file)
}

/// Load a world from a TOML document with the same shape as the JSON one.
pub fn load_world_from_toml_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = toml::from_str(contents)?;
    build_world(world_file)
}

fn build_world(world_file: WorldFile) -> Result<World, LoadError> {
    let player = world_file.player.ok_or(LoadError::MissingStartRoom)?;

    let start_room = player.initialroom.ok_or(LoadError::MissingStartRoom)?;

    let mut rooms: IndexMap<String, Room> = IndexMap::new();
    for rc in world_file.rooms {
        if rooms.contains_key(&rc.id) {
            return Err(LoadError::DuplicateId {
                kind: "room",
                id: rc.id,
            });
        }

        rooms.insert(
            rc.id.clone(),
            Room {
                id: rc.id,
                desc: rc.desc,
                exits: rc.exits,
            },
        );
    }

    let mut objects: IndexMap<String, Object> = IndexMap::new();
    for oc in world_file.objects {
        if objects.contains_key(&oc.id) {
            return Err(LoadError::DuplicateId {
                kind: "object",
                id: oc.id,
            });
        }

        objects.insert(
            oc.id.clone(),
            Object {
                id: oc.id,
                desc: oc.desc.unwrap_or_default(),
                room: oc.initialroom,
            },
        );
    }

    let mut enemies: IndexMap<String, Enemy> = IndexMap::new();
    for ec in world_file.enemies {
        if enemies.contains_key(&ec.id) {
            return Err(LoadError::DuplicateId {
                kind: "enemy",
                id: ec.id,
            });
        }

        enemies.insert(
            ec.id.clone(),
            Enemy {
                id: ec.id,
                desc: ec.desc.unwrap_or_default(),
                room: ec.initialroom,
                aggressiveness: ec.aggressiveness.min(100) as u8,
                killed_by: ec.killedby,
            },
        );
    }

    let objective = world_file.objective.map(|oc| match oc {
        ObjectiveConfig::Room(what) => Objective::Room(what.into_vec()),
        ObjectiveConfig::Collect(what) => Objective::Collect(what.into_vec()),
        ObjectiveConfig::Kill(what) => Objective::Kill(what.into_vec()),
    });

    Ok(World {
        start_room,
        start_lives: player.lives.unwrap_or(DEFAULT_LIVES).max(1),
        rooms,
        objects,
        taken: IndexMap::new(),
        enemies,
        objective,
    })
}
