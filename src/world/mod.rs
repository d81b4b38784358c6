mod loader;
mod model;
mod validator;

pub use loader::{
    DEFAULT_LIVES, LoadError, load_world_from_file, load_world_from_str, load_world_from_toml_str,
};

pub use model::{Enemy, Object, Objective, ObjectiveKind, Room, World};
pub use validator::{ValidationError, validate_world};
