use crate::engine::objective::check_objective;
use crate::engine::output::{Outcome, Output};
use crate::engine::player::Player;
use crate::world;

pub fn handle_inventory(out: &mut Output, player: &Player) {
    if player.inventory.is_empty() {
        out.say("You are not carrying any items.");
        return;
    }

    out.say("Items in your inventory:");
    for item in &player.inventory {
        out.say(format!("- {}", item));
    }
}

/// Pick up an object lying in the player's current room.
pub fn handle_take(
    out: &mut Output,
    world: &mut world::World,
    player: &mut Player,
    object_id: &str,
) -> Outcome {
    let here = matches!(
        world.objects.get(object_id),
        Some(object) if object.room == player.current_room
    );

    if !here {
        out.say("No such object to pick up in this room.");
        return Outcome::Continue;
    }

    let object = match world.objects.shift_remove(object_id) {
        Some(o) => o,
        None => return Outcome::Continue,
    };

    player.inventory.push(object.id.clone());
    out.say(format!("Picked up: {}", object.id));
    world.taken.insert(object.id.clone(), object);

    check_objective(out, world, player)
}

/// `look <object>`: inventory first, then the current room.
pub fn handle_examine(out: &mut Output, world: &world::World, player: &Player, name: &str) {
    if player.carries(name) {
        let desc = world
            .taken
            .get(name)
            .map(|o| o.desc.as_str())
            .unwrap_or_default();
        out.say(format!("{}: {}", name, desc));
        return;
    }

    match world.objects.get(name) {
        Some(object) if object.room == player.current_room => {
            out.say(format!("{}: {}", name, object.desc));
        }
        _ => out.say("No such object here or in your inventory."),
    }
}

pub fn handle_eat(out: &mut Output, player: &mut Player, name: &str) {
    match player.inventory.iter().position(|i| i == name) {
        Some(idx) => {
            player.inventory.remove(idx);
            player.lives += 1;
            out.say(format!(
                "You have eaten the {} and gained one life!",
                name
            ));
        }
        None => out.say(
            "Unable to eat this item. Please ensure the item is edible and in your inventory.",
        ),
    }
}
