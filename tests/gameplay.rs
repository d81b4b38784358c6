/// End-to-end sessions driven through `GameState`, the same path the terminal
/// driver uses.
use adv_engine::GameState;
use adv_engine::engine::{Dice, Outcome};
use adv_engine::load_world_from_str;

fn start(doc: &str) -> GameState {
    let world = load_world_from_str(doc).expect("world should load");
    GameState::with_dice(world, Dice::new_predictable(2024))
}

/// Feed commands until one ends the game; returns the transcript and how it ended.
fn play(game: &mut GameState, commands: &[&str]) -> (Vec<String>, Outcome) {
    let mut transcript = Vec::new();
    for cmd in commands {
        let (out, outcome) = game.step(cmd);
        transcript.push(out.text());
        if outcome.is_over() {
            return (transcript, outcome);
        }
    }
    (transcript, Outcome::Continue)
}

#[test]
fn reaching_the_treasure_room_wins() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "start" },
            "rooms": [
                { "id": "start", "desc": "A dusty hall.", "exits": { "north": "treasure" } },
                { "id": "treasure", "desc": "Gold everywhere." }
            ],
            "objective": { "type": "room", "what": "treasure" }
        }"#,
    );

    let (out, outcome) = game.initialize();
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(out.text(), "You are in: A dusty hall.");

    let (transcript, outcome) = play(&mut game, &["go north", "look"]);

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(transcript.len(), 1, "nothing runs after the win");
    assert_eq!(
        transcript[0],
        "You successfully leave the room, there was no enemy.\n\
         You are in: Gold everywhere.\n\
         Congratulations! You have reached the target room and completed the objective."
    );
}

#[test]
fn eating_an_apple_gives_a_life() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "start" },
            "rooms": [ { "id": "start", "desc": "Grass." } ],
            "objects": [ { "id": "apple", "desc": "Crunchy.", "initialroom": "start" } ]
        }"#,
    );

    let (transcript, outcome) = play(
        &mut game,
        &["take apple", "eat apple", "list items", "check lives"],
    );

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(transcript[0], "Picked up: apple");
    assert_eq!(transcript[1], "You have eaten the apple and gained one life!");
    assert_eq!(transcript[2], "You are not carrying any items.");
    assert_eq!(transcript[3], "Your current lives: 4 lives.");
    assert!(game.player.inventory.is_empty());
    assert_eq!(game.player.lives, 4);
}

#[test]
fn fully_aggressive_enemy_kills_a_fleeing_player() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "start", "lives": 1 },
            "rooms": [
                { "id": "start", "desc": "Bones.", "exits": { "hall": "hall" } },
                { "id": "hall", "desc": "Safety." }
            ],
            "enemies": [
                { "id": "wraith", "desc": "Cold.", "initialroom": "start",
                  "aggressiveness": 100, "killedby": ["amulet"] }
            ]
        }"#,
    );

    let (transcript, outcome) = play(&mut game, &["go hall"]);

    assert_eq!(outcome, Outcome::Dead);
    assert_eq!(
        transcript[0],
        "The enemy attacks you as you try to leave you lose a life!\n\
         Game over! The enemy has killed you. You have run out of lives."
    );
    assert_eq!(game.player.current_room, "start");
}

#[test]
fn taken_objects_disappear_from_the_room() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "shed" },
            "rooms": [ { "id": "shed" } ],
            "objects": [
                { "id": "saw", "desc": "Rusty.", "initialroom": "shed" },
                { "id": "rope", "desc": "Coiled.", "initialroom": "shed" }
            ]
        }"#,
    );

    let (transcript, _) = play(&mut game, &["look", "take saw", "look", "take saw", "look saw"]);

    assert_eq!(
        transcript[0],
        "This room has no description.\nObject: saw - Rusty.\nObject: rope - Coiled."
    );
    assert_eq!(
        transcript[2],
        "This room has no description.\nObject: rope - Coiled."
    );
    assert_eq!(transcript[3], "No such object to pick up in this room.");
    assert_eq!(transcript[4], "saw: Rusty.");
    assert_eq!(game.player.inventory, vec!["saw".to_string()]);
}

#[test]
fn kill_campaign_with_a_failed_attempt() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "armory" },
            "rooms": [
                { "id": "armory", "desc": "Racks.", "exits": { "east": "pit" } },
                { "id": "pit", "desc": "Deep." }
            ],
            "objects": [ { "id": "axe", "desc": "Heavy.", "initialroom": "armory" } ],
            "enemies": [
                { "id": "ogre", "desc": "Lazy.", "initialroom": "pit",
                  "aggressiveness": 0, "killedby": ["axe"] }
            ],
            "objective": { "type": "kill", "what": ["ogre"] }
        }"#,
    );

    let (transcript, outcome) = play(
        &mut game,
        &["go east", "kill ogre", "kill ogre", "go west", "go back"],
    );
    assert_eq!(outcome, Outcome::Continue);
    assert!(transcript[0].ends_with("Enemy: ogre - Lazy."));
    assert!(transcript[1].ends_with("You have 2 lives remaining."));
    assert!(transcript[2].ends_with("You have 1 lives remaining."));
    assert_eq!(transcript[3], "You can't go that way.");

    // The pit has no way back, so the ogre wins the rematch.
    let (transcript, outcome) = play(&mut game, &["kill ogre"]);
    assert_eq!(outcome, Outcome::Dead);
    assert!(transcript[0].contains("Game over!"));
}

#[test]
fn kill_objective_is_won_after_arming_up() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "armory" },
            "rooms": [
                { "id": "armory", "desc": "Racks.", "exits": { "east": "pit" } },
                { "id": "pit", "desc": "Deep.", "exits": { "west": "armory" } }
            ],
            "objects": [ { "id": "axe", "desc": "Heavy.", "initialroom": "armory" } ],
            "enemies": [
                { "id": "ogre", "desc": "Lazy.", "initialroom": "pit",
                  "aggressiveness": 0, "killedby": ["axe"] }
            ],
            "objective": { "type": "kill", "what": "ogre" }
        }"#,
    );

    let (transcript, outcome) = play(&mut game, &["take axe", "go east", "kill ogre"]);

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(
        transcript[2],
        "You have successfully killed the ogre.\n\
         Congratulations! You have completed the objective by killing all required enemies."
    );
    assert!(game.world.enemies.is_empty());
}

#[test]
fn enemy_behind_a_dangling_exit_can_be_killed() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "start" },
            "rooms": [ { "id": "start", "desc": "Stairs.", "exits": { "down": "void" } } ],
            "enemies": [
                { "id": "ghost", "desc": "Faint.", "initialroom": "void", "killedby": [] }
            ],
            "objective": { "type": "kill", "what": ["ghost"] }
        }"#,
    );

    let (transcript, outcome) = play(&mut game, &["go down", "kill ghost"]);

    assert_eq!(outcome, Outcome::Won);
    assert!(transcript[0].ends_with("Room void does not exist."));
    assert_eq!(
        transcript[1],
        "You have successfully killed the ghost.\n\
         Congratulations! You have completed the objective by killing all required enemies."
    );
}

#[test]
fn odd_input_is_not_understood() {
    let mut game = start(r#"{ "player": { "initialroom": "a" }, "rooms": [ { "id": "a" } ] }"#);

    let (transcript, _) = play(&mut game, &["dance", "", "eat", "Look"]);

    assert_eq!(transcript[0], "I don't understand that command.");
    assert_eq!(transcript[1], "I don't understand that command.");
    assert_eq!(transcript[2], "Please specify what you want to eat.");
    assert_eq!(transcript[3], "I don't understand that command.");
}

#[test]
fn starting_in_a_target_room_wins_immediately() {
    let mut game = start(
        r#"{
            "player": { "initialroom": "home" },
            "rooms": [ { "id": "home", "desc": "Cozy." } ],
            "objective": { "type": "room", "what": ["home", "away"] }
        }"#,
    );

    let (out, outcome) = game.initialize();
    assert_eq!(outcome, Outcome::Won);
    assert!(out.text().starts_with("You are in: Cozy."));
}
