mod combat;
mod command;
mod dice;
mod items;
mod movement;
mod objective;
mod output;
mod player;
mod render;

pub use combat::{CombatError, handle_check_lives, handle_kill, player_dies};
pub use command::{Command, handle_help, parse_command};
pub use dice::Dice;
pub use items::{handle_eat, handle_examine, handle_inventory, handle_take};
pub use movement::handle_go;
pub use objective::{ObjectiveStatus, check_objective, objective_status, victory_message};
pub use output::{Outcome, Output, OutputBlock};
pub use player::Player;
pub use render::enter_room;
