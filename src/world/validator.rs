use super::model::{Objective, World};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Cross-reference check over a loaded world.
///
/// None of these findings stop the game: a dangling reference just shows up
/// in play as "does not exist" or "not found". The driver logs them.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "player initialroom '{}' not found among rooms",
            world.start_room
        )));
    }

    for (room_id, room) in &world.rooms {
        for (direction, target) in &room.exits {
            if !world.rooms.contains_key(target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, direction, target
                )));
            }
        }
    }

    for object in world.objects.values() {
        if !world.rooms.contains_key(&object.room) {
            errors.push(ValidationError::new(format!(
                "object '{}' initialroom '{}' not found",
                object.id, object.room
            )));
        }
    }

    for enemy in world.enemies.values() {
        if !world.rooms.contains_key(&enemy.room) {
            errors.push(ValidationError::new(format!(
                "enemy '{}' initialroom '{}' not found",
                enemy.id, enemy.room
            )));
        }

        for needed in &enemy.killed_by {
            if !world.objects.contains_key(needed) {
                errors.push(ValidationError::new(format!(
                    "enemy '{}' killedby references missing object '{}'",
                    enemy.id, needed
                )));
            }
        }
    }

    match &world.objective {
        Some(Objective::Room(targets)) => {
            for r in targets {
                if !world.rooms.contains_key(r) {
                    errors.push(ValidationError::new(format!(
                        "room objective references missing room '{}'",
                        r
                    )));
                }
            }
        }
        Some(Objective::Collect(targets)) => {
            for o in targets {
                if !world.objects.contains_key(o) {
                    errors.push(ValidationError::new(format!(
                        "collect objective references missing object '{}'",
                        o
                    )));
                }
            }
        }
        Some(Objective::Kill(targets)) => {
            for e in targets {
                if !world.enemies.contains_key(e) {
                    errors.push(ValidationError::new(format!(
                        "kill objective references missing enemy '{}'",
                        e
                    )));
                }
            }
        }
        None => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_world_from_str;
    use test_log::test;

    #[test]
    fn consistent_world_has_no_findings() {
        let world = load_world_from_str(
            r#"{
                "player": { "initialroom": "a" },
                "rooms": [ { "id": "a", "exits": { "n": "b" } }, { "id": "b" } ],
                "objects": [ { "id": "club", "desc": "", "initialroom": "a" } ],
                "enemies": [ { "id": "rat", "desc": "", "initialroom": "b", "killedby": ["club"] } ],
                "objective": { "type": "kill", "what": ["rat"] }
            }"#,
        )
        .unwrap();

        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn reports_every_dangling_reference() {
        let world = load_world_from_str(
            r#"{
                "player": { "initialroom": "nowhere" },
                "rooms": [ { "id": "a", "exits": { "n": "void" } } ],
                "objects": [ { "id": "club", "desc": "", "initialroom": "attic" } ],
                "enemies": [ { "id": "rat", "desc": "", "initialroom": "cellar", "killedby": ["wand"] } ],
                "objective": { "type": "collect", "what": ["crown"] }
            }"#,
        )
        .unwrap();

        let messages: Vec<String> = validate_world(&world)
            .into_iter()
            .map(|e| e.message)
            .collect();

        assert_eq!(messages.len(), 6, "{messages:?}");
        assert!(messages.iter().any(|m| m.contains("'nowhere'")));
        assert!(messages.iter().any(|m| m.contains("'void'")));
        assert!(messages.iter().any(|m| m.contains("'attic'")));
        assert!(messages.iter().any(|m| m.contains("'cellar'")));
        assert!(messages.iter().any(|m| m.contains("'wand'")));
        assert!(messages.iter().any(|m| m.contains("'crown'")));
    }
}
