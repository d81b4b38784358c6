use crate::engine::objective::check_objective;
use crate::engine::output::{Outcome, Output};
use crate::engine::player::Player;
use crate::world;

/// Describe the player's current room, then check whether arriving there won
/// the game. An unknown room is reported and nothing else happens.
pub fn enter_room(out: &mut Output, world: &world::World, player: &Player) -> Outcome {
    let room_id = player.current_room.as_str();

    let room = match world.rooms.get(room_id) {
        Some(r) => r,
        None => {
            out.say(format!("Room {} does not exist.", room_id));
            return Outcome::Continue;
        }
    };

    match room.desc.as_deref() {
        Some(desc) => out.say(format!("You are in: {}", desc)),
        None => out.say("This room has no description."),
    }

    // Picked-up objects live in `world.taken`, so they never show here.
    for object in world.objects_in_room(room_id) {
        out.say(format!("Object: {} - {}", object.id, object.desc));
    }

    for enemy in world.enemies_in_room(room_id) {
        out.say(format!("Enemy: {} - {}", enemy.id, enemy.desc));
    }

    check_objective(out, world, player)
}
