pub mod engine;
pub mod world;

use log::{debug, error};

use engine::{
    Command, Dice, Outcome, Output, Player, enter_room, handle_check_lives, handle_eat,
    handle_examine, handle_go, handle_help, handle_inventory, handle_kill, handle_take,
    parse_command,
};
use world::World;

pub use world::{load_world_from_file, load_world_from_str, load_world_from_toml_str};

/// One play session: the world, the player in it, and the combat dice.
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub dice: Dice,
}

impl GameState {
    pub fn new(world: World) -> Self {
        Self::with_dice(world, Dice::new_uniform())
    }

    pub fn with_dice(world: World, dice: Dice) -> Self {
        let player = Player::new(world.start_room.clone(), world.start_lives);
        GameState {
            world,
            player,
            dice,
        }
    }

    /// Describe the start room. Starting inside a target room wins at once.
    pub fn initialize(&mut self) -> (Output, Outcome) {
        let mut out = Output::new();
        let outcome = enter_room(&mut out, &self.world, &self.player);
        (out, outcome)
    }

    /// Process a single line of player input. `exit` is left to the caller.
    pub fn step(&mut self, input: &str) -> (Output, Outcome) {
        let mut out = Output::new();
        let command = parse_command(input);
        debug!("input {:?} parsed as {:?}", input, command);

        let outcome = match command {
            Command::Kill(enemy) => {
                match handle_kill(&mut out, &mut self.world, &mut self.player, &enemy) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!("kill '{}' failed: {}", enemy, e);
                        out.error(format!("Error during kill command: {}", e));
                        Outcome::Continue
                    }
                }
            }
            Command::Help => {
                handle_help(&mut out);
                Outcome::Continue
            }
            Command::Look => enter_room(&mut out, &self.world, &self.player),
            Command::Go(direction) => handle_go(
                &mut out,
                &self.world,
                &mut self.player,
                &mut self.dice,
                &direction,
            ),
            Command::Take(object) => {
                handle_take(&mut out, &mut self.world, &mut self.player, &object)
            }
            Command::ListItems => {
                handle_inventory(&mut out, &self.player);
                Outcome::Continue
            }
            Command::Examine(object) => {
                handle_examine(&mut out, &self.world, &self.player, &object);
                Outcome::Continue
            }
            Command::Eat(Some(object)) => {
                handle_eat(&mut out, &mut self.player, &object);
                Outcome::Continue
            }
            Command::Eat(None) => {
                out.say("Please specify what you want to eat.");
                Outcome::Continue
            }
            Command::CheckLives => {
                handle_check_lives(&mut out, &self.player);
                Outcome::Continue
            }
            Command::Unknown => {
                out.say("I don't understand that command.");
                Outcome::Continue
            }
        };

        (out, outcome)
    }
}
