//! Runs commands against a match and prints the results.

use std::io::{self, BufRead, Write};

use log::debug;
use navalbattle::{game::CannotShootReason, Match};

use crate::{command::Command, input::InputReader};

const NONEXISTENT_PLAYER: &str = "Nonexistent player";
const GAME_OVER: &str = "The game is over";
const NOT_OVER: &str = "The game was not over yet...";
const INVALID_COMMAND: &str = "Invalid command";
const INVALID_SHOT: &str = "Invalid shot";
const SELF_SHOT: &str = "Self-inflicted shot";
const ELIMINATED_PLAYER: &str = "Eliminated player";

/// Whether the session should keep reading commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session over a single match.
pub struct Session<W> {
    game: Match,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(game: Match, out: W) -> Self {
        Self { game, out }
    }

    /// The match being played.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Read and execute commands until `quit` or the end of input.
    pub fn run<B: BufRead>(&mut self, input: &mut InputReader<B>) -> io::Result<()> {
        while let Some(line) = input.next_line()? {
            let flow = match Command::parse(line) {
                Some(cmd) => self.execute(cmd)?,
                None => {
                    debug!("unrecognized command {:?}", line);
                    writeln!(self.out, "{}", INVALID_COMMAND)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.out.flush()
    }

    /// Execute a single command, writing its output.
    pub fn execute(&mut self, cmd: Command) -> io::Result<Flow> {
        match cmd {
            Command::Player => {
                if self.game.is_over() {
                    writeln!(self.out, "{}", GAME_OVER)?;
                } else {
                    writeln!(self.out, "Next player: {}", self.game.current_player_name())?;
                }
            }
            Command::Players => {
                for player in self.game.active_players() {
                    writeln!(self.out, "{}", player.name())?;
                }
            }
            Command::Shoot { row, col, target } => self.shoot(row, col, &target)?,
            Command::Fleet(name) => match self.game.board(&name) {
                Ok(board) => write!(self.out, "{}", board)?,
                Err(_) => writeln!(self.out, "{}", NONEXISTENT_PLAYER)?,
            },
            Command::Score(name) => match self.game.score(&name) {
                Ok(score) => writeln!(self.out, "{} has {} points", name, score)?,
                Err(_) => writeln!(self.out, "{}", NONEXISTENT_PLAYER)?,
            },
            Command::Scores => {
                for player in self.game.standings() {
                    writeln!(self.out, "{} has {} points", player.name(), player.score())?;
                }
            }
            Command::Quit => {
                match self.game.winner_name() {
                    Some(winner) => writeln!(self.out, "{} won the game!", winner)?,
                    None => writeln!(self.out, "{}", NOT_OVER)?,
                }
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn shoot(&mut self, row: i64, col: i64, target: &str) -> io::Result<()> {
        match self.game.fire(row, col, target) {
            Ok(report) => {
                debug!("shot report: {:?}", report);
                Ok(())
            }
            Err(err) => {
                let message = match err.reason() {
                    CannotShootReason::AlreadyOver => GAME_OVER,
                    CannotShootReason::UnknownPlayer => NONEXISTENT_PLAYER,
                    CannotShootReason::AlreadyEliminated => ELIMINATED_PLAYER,
                    CannotShootReason::SelfShot => SELF_SHOT,
                    CannotShootReason::OutOfBounds => INVALID_SHOT,
                };
                let (row, col) = err.position();
                debug!("refused shot at ({}, {}) on {:?}: {}", row, col, err.target(), err.reason());
                writeln!(self.out, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navalbattle::{fleet::FleetCatalog, MatchSetup};

    fn session(names: &[&str]) -> Session<Vec<u8>> {
        let catalog = FleetCatalog::parse("2 2 SS ..").unwrap();
        let mut setup = MatchSetup::new();
        for name in names {
            setup.add_player(*name, catalog.get(1).unwrap()).unwrap();
        }
        Session::new(setup.start().unwrap(), Vec::new())
    }

    fn play(names: &[&str], script: &str) -> String {
        let mut s = session(names);
        s.run(&mut InputReader::new(script.as_bytes())).unwrap();
        String::from_utf8(s.out).unwrap()
    }

    #[test]
    fn shot_refusals_in_priority_order() {
        let out = play(
            &["Ana", "Rui", "Eva"],
            "shoot 1 1 Zé\nshoot 1 1 Ana\nshoot 3 1 Rui\nshoot 1 1 Rui\nshoot 1 1 Rui\n",
        );
        assert_eq!(
            out,
            "Nonexistent player\nSelf-inflicted shot\nInvalid shot\nEliminated player\n"
        );
    }

    #[test]
    fn shot_without_a_name_targets_nobody() {
        let out = play(&["Ana", "Rui"], "shoot 1 1\nshoot 1 1 \nplayer\n");
        assert_eq!(out, "Nonexistent player\nNonexistent player\nNext player: Ana\n");
    }

    #[test]
    fn full_match_transcript() {
        let out = play(
            &["Ana", "Rui", "Eva"],
            "player\n\
             shoot 1 2 Rui\n\
             players\n\
             player\n\
             shoot 2 2 Ana\n\
             fleet Rui\n\
             quit\n",
        );
        assert_eq!(
            out,
            "Next player: Ana\n\
             Ana\n\
             Eva\n\
             Next player: Eva\n\
             **\n\
             ..\n\
             The game was not over yet...\n"
        );
    }

    #[test]
    fn scores_and_winner() {
        let out = play(
            &["Ana", "Rui"],
            "score Rui\n\
             shoot 1 1 Rui\n\
             shoot 1 1 Rui\n\
             player\n\
             scores\n\
             score Nobody\n\
             hello\n\
             quit\n\
             player\n",
        );
        assert_eq!(
            out,
            "Rui has 0 points\n\
             The game is over\n\
             The game is over\n\
             Ana has 400 points\n\
             Rui has 0 points\n\
             Nonexistent player\n\
             Invalid command\n\
             Ana won the game!\n"
        );
    }

    #[test]
    fn unhit_ships_stay_visible() {
        let out = play(&["Ana", "Rui"], "fleet Ana\nfleet Nobody\n");
        assert_eq!(out, "SS\n..\nNonexistent player\n");
    }
}
