use crate::engine::output::Output;

/// One line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Look,
    Go(String),
    Take(String),
    ListItems,
    Examine(String),
    /// `None` when nothing follows `eat`.
    Eat(Option<String>),
    CheckLives,
    Kill(String),
    Unknown,
}

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "- go [direction]: Move to another room in the specified direction.",
    "- take [object]: Pick up an object from the current room.",
    "- list items: Display items in your inventory.",
    "- look or look around: Get a description of the current room and visible items.",
    "- look [object]: Examine a specific object.",
    "- eat [object]: Eat an edible object from your inventory.",
    "- check lives: Check your current number of lives.",
    "- kill [enemy]: Attempt to kill an enemy in the current room.",
    "- ?: List all available commands.",
    "- exit: Exit the game.",
];

/// Matching is case-sensitive and literal. The exact `look` forms are tried
/// before the `look ` prefix, and `eat` takes everything after its fourth
/// character.
pub fn parse_command(line: &str) -> Command {
    if let Some(enemy) = line.strip_prefix("kill ") {
        Command::Kill(enemy.to_string())
    } else if line == "?" {
        Command::Help
    } else if line == "look" || line == "look around" {
        Command::Look
    } else if let Some(direction) = line.strip_prefix("go ") {
        Command::Go(direction.to_string())
    } else if let Some(object) = line.strip_prefix("take ") {
        Command::Take(object.to_string())
    } else if line == "list items" {
        Command::ListItems
    } else if let Some(object) = line.strip_prefix("look ") {
        Command::Examine(object.to_string())
    } else if line.starts_with("eat") {
        if line.chars().count() > 4 {
            Command::Eat(Some(line.chars().skip(4).collect()))
        } else {
            Command::Eat(None)
        }
    } else if line == "check lives" {
        Command::CheckLives
    } else {
        Command::Unknown
    }
}

pub fn handle_help(out: &mut Output) {
    for line in HELP_LINES {
        out.say(*line);
    }
}
