use log::debug;

use crate::engine::objective::check_objective;
use crate::engine::output::{Outcome, Output};
use crate::engine::player::Player;
use crate::world::{self, Objective};

#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    #[error("enemy '{0}' vanished before it could be removed")]
    EnemyVanished(String),
}

/// Try to kill an enemy standing in the player's room. Without every
/// required object the attempt costs a life instead.
pub fn handle_kill(
    out: &mut Output,
    world: &mut world::World,
    player: &mut Player,
    enemy_id: &str,
) -> Result<Outcome, CombatError> {
    let required = match world.enemies.get(enemy_id) {
        Some(enemy) if enemy.room == player.current_room => enemy.killed_by.clone(),
        _ => {
            out.say("No such enemy in this room.");
            return Ok(Outcome::Continue);
        }
    };

    if !player.carries_all(&required) {
        debug!("kill '{}' failed, needs {:?}", enemy_id, required);
        out.say(format!(
            "You don't have the right set of objects to kill the {}.",
            enemy_id
        ));
        return Ok(player_dies(out, player));
    }

    world
        .enemies
        .shift_remove(enemy_id)
        .ok_or_else(|| CombatError::EnemyVanished(enemy_id.to_string()))?;
    out.say(format!("You have successfully killed the {}.", enemy_id));

    if let Some(Objective::Kill(remaining)) = &mut world.objective {
        remaining.retain(|e| e != enemy_id);
    }

    Ok(check_objective(out, world, player))
}

/// Lose a life; losing the last one ends the game.
pub fn player_dies(out: &mut Output, player: &mut Player) -> Outcome {
    if player.lives > 1 {
        player.lives -= 1;
        out.say(format!("You have {} lives remaining.", player.lives));
        Outcome::Continue
    } else {
        out.event("Game over! The enemy has killed you. You have run out of lives.");
        Outcome::Dead
    }
}

pub fn handle_check_lives(out: &mut Output, player: &Player) {
    out.say(format!("Your current lives: {} lives.", player.lives));
}
