use indexmap::IndexMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
///
/// Collections are keyed by id and keep document order, so room listings
/// come out in the same order the author wrote them.
pub struct World {
    pub start_room: String,
    pub start_lives: u32,
    pub rooms: IndexMap<String, Room>,
    pub objects: IndexMap<String, Object>, // still lying in a room
    pub taken: IndexMap<String, Object>,   // picked up by the player
    pub enemies: IndexMap<String, Enemy>,
    pub objective: Option<Objective>,
}

pub struct Room {
    pub id: String,
    pub desc: Option<String>,
    pub exits: IndexMap<String, String>, // direction -> room id
}

pub struct Object {
    pub id: String,
    pub desc: String,
    pub room: String,
}

pub struct Enemy {
    pub id: String,
    pub desc: String,
    pub room: String,
    pub aggressiveness: u8, // 0..=100
    pub killed_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Objective {
    /// Reach any one of these rooms.
    Room(Vec<String>),
    /// Hold every one of these objects at once.
    Collect(Vec<String>),
    /// Enemies still to be killed; shrinks as they die.
    Kill(Vec<String>),
}

impl Objective {
    pub fn kind(&self) -> ObjectiveKind {
        match self {
            Objective::Room(_) => ObjectiveKind::Room,
            Objective::Collect(_) => ObjectiveKind::Collect,
            Objective::Kill(_) => ObjectiveKind::Kill,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveKind {
    Room,
    Collect,
    Kill,
}

impl World {
    pub fn enemy_in_room(&self, room_id: &str) -> Option<&Enemy> {
        self.enemies.values().find(|e| e.room == room_id)
    }

    pub fn objects_in_room<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Object> {
        self.objects.values().filter(move |o| o.room == room_id)
    }

    pub fn enemies_in_room<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Enemy> {
        self.enemies.values().filter(move |e| e.room == room_id)
    }
}
