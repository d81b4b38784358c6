use crate::engine::output::{Outcome, Output};
use crate::engine::player::Player;
use crate::world::{Objective, ObjectiveKind, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveStatus {
    Ongoing,
    Won(ObjectiveKind),
}

/// Pure check of the win condition against the current state.
/// A world without an objective is never won.
pub fn objective_status(world: &World, player: &Player) -> ObjectiveStatus {
    let objective = match &world.objective {
        Some(o) => o,
        None => return ObjectiveStatus::Ongoing,
    };

    let met = match objective {
        // A target only counts once the player stands in a room the world defines.
        Objective::Room(targets) => {
            world.rooms.contains_key(&player.current_room)
                && targets.iter().any(|r| *r == player.current_room)
        }
        Objective::Collect(targets) => player.carries_all(targets),
        Objective::Kill(remaining) => remaining.is_empty(),
    };

    if met {
        ObjectiveStatus::Won(objective.kind())
    } else {
        ObjectiveStatus::Ongoing
    }
}

pub fn victory_message(kind: ObjectiveKind) -> &'static str {
    match kind {
        ObjectiveKind::Room => {
            "Congratulations! You have reached the target room and completed the objective."
        }
        ObjectiveKind::Collect => {
            "Congratulations! You have completed the objective by collecting all required objects."
        }
        ObjectiveKind::Kill => {
            "Congratulations! You have completed the objective by killing all required enemies."
        }
    }
}

/// Evaluate the objective and, if it is met, announce the win.
pub fn check_objective(out: &mut Output, world: &World, player: &Player) -> Outcome {
    match objective_status(world, player) {
        ObjectiveStatus::Ongoing => Outcome::Continue,
        ObjectiveStatus::Won(kind) => {
            log::info!("objective ({:?}) completed", kind);
            out.event(victory_message(kind));
            Outcome::Won
        }
    }
}
