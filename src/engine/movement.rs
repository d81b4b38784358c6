use log::debug;

use crate::engine::combat::player_dies;
use crate::engine::dice::Dice;
use crate::engine::output::{Outcome, Output};
use crate::engine::player::Player;
use crate::engine::render::enter_room;
use crate::world;

/// `go <direction>`: leave through a named exit. An enemy in the room may
/// attack first, in which case the player stays put.
pub fn handle_go(
    out: &mut Output,
    world: &world::World,
    player: &mut Player,
    dice: &mut Dice,
    direction: &str,
) -> Outcome {
    let target = match world
        .rooms
        .get(&player.current_room)
        .and_then(|room| room.exits.get(direction))
    {
        Some(t) => t.clone(),
        None => {
            out.say("You can't go that way.");
            return Outcome::Continue;
        }
    };

    match world.enemy_in_room(&player.current_room) {
        Some(enemy) => {
            let roll = dice.roll_percent();
            debug!(
                "leaving '{}': enemy '{}' aggressiveness {} rolled {}",
                player.current_room, enemy.id, enemy.aggressiveness, roll
            );

            if enemy_attacks(roll, enemy.aggressiveness) {
                out.say("The enemy attacks you as you try to leave you lose a life!");
                return player_dies(out, player);
            }
            out.say("You successfully leave the room with an enemy.");
        }
        None => out.say("You successfully leave the room, there was no enemy."),
    }

    player.current_room = target;
    enter_room(out, world, player)
}

/// `roll` is in 1..=100, so 0 never attacks and 100 always does.
fn enemy_attacks(roll: u8, aggressiveness: u8) -> bool {
    roll <= aggressiveness
}
