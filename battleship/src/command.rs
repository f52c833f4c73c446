//! Parsing of the commands typed during a match.

use once_cell::sync::Lazy;
use regex::Regex;

/// A command entered by a player.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Show whose turn it is.
    Player,
    /// List the players still in the match.
    Players,
    /// Fire at a player's board. Coordinates are 1-based.
    Shoot { row: i64, col: i64, target: String },
    /// Show a player's board.
    Fleet(String),
    /// Show a player's score.
    Score(String),
    /// List every player's score, best first.
    Scores,
    /// End the session, announcing the winner if there is one.
    Quit,
}

impl Command {
    /// Parse a trimmed input line. Returns `None` if the line is not a valid command.
    /// Keywords are case-sensitive.
    pub fn parse(line: &str) -> Option<Self> {
        static SHOOT: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)shoot\s+
        (?P<row>[+-]?[0-9]+)\s+
        (?P<col>[+-]?[0-9]+)
        (?:\s+(?P<target>.*))?$",
            )
            .unwrap()
        });
        static NAMED: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?P<cmd>fleet|score)
        (?:\s+(?P<name>.*))?$",
            )
            .unwrap()
        });

        match line {
            "player" => return Some(Command::Player),
            "players" => return Some(Command::Players),
            "scores" => return Some(Command::Scores),
            "quit" => return Some(Command::Quit),
            _ => {}
        }
        if let Some(captures) = SHOOT.captures(line) {
            let row = captures.name("row")?.as_str().parse().ok()?;
            let col = captures.name("col")?.as_str().parse().ok()?;
            let target = captures
                .name("target")
                .map_or("", |m| m.as_str())
                .trim()
                .to_owned();
            Some(Command::Shoot { row, col, target })
        } else if let Some(captures) = NAMED.captures(line) {
            let name = captures
                .name("name")
                .map_or("", |m| m.as_str().trim())
                .to_owned();
            match captures.name("cmd")?.as_str() {
                "fleet" => Some(Command::Fleet(name)),
                _ => Some(Command::Score(name)),
            }
        } else {
            None
        }
    }
}
