/// Mutable per-session player state.
#[derive(Debug, Clone)]
pub struct Player {
    pub current_room: String,
    pub inventory: Vec<String>,
    pub lives: u32,
}

impl Player {
    pub fn new(start_room: impl Into<String>, lives: u32) -> Self {
        Player {
            current_room: start_room.into(),
            inventory: Vec::new(),
            lives: lives.max(1),
        }
    }

    pub fn carries(&self, object_id: &str) -> bool {
        self.inventory.iter().any(|i| i == object_id)
    }

    pub fn carries_all(&self, object_ids: &[String]) -> bool {
        object_ids.iter().all(|id| self.carries(id))
    }
}
