//! The match: turn order, scoring, elimination and the winner.
//!
//! A [`Match`] is built with a [`MatchSetup`]. Players fire in round-robin order,
//! skipping eliminated players. Each shot is resolved in full (score, elimination, end
//! of the match) before the turn passes on. When a shot leaves a single player
//! standing the match is over and that player's score is doubled.

use std::collections::HashMap;

use log::{debug, info};

use crate::{
    board::{Board, Coordinate},
    player::{Player, ShotOutcome},
};

pub use self::{
    errors::{AddPlayerError, CannotShootReason, ShotError, UnknownPlayer},
    scoring::{HIT_MULTIPLIER, REPEAT_PENALTY},
    setup::MatchSetup,
};

mod errors;
pub mod scoring;
mod setup;

/// What happened as a result of a successful [`Match::fire`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotReport {
    /// What the shot struck.
    pub outcome: ShotOutcome,
    /// Points added to the shooter for the shot itself, before any last-survivor
    /// bonus.
    pub points: i64,
    /// Whether the shot eliminated the target.
    pub eliminated: bool,
    /// Whether the shot ended the match.
    pub game_over: bool,
}

/// A running match.
#[derive(Debug)]
pub struct Match {
    /// Players in turn order.
    players: Vec<Player>,

    /// Index into `players` by name.
    by_name: HashMap<String, usize>,

    /// Index in `players` of the player whose turn it is.
    current: usize,

    /// Set once a single player is left. Never cleared.
    over: bool,
}

impl Match {
    pub(crate) fn new(players: Vec<Player>, by_name: HashMap<String, usize>) -> Self {
        Self {
            players,
            by_name,
            current: 0,
            over: false,
        }
    }

    /// Name of the player whose turn it is.
    pub fn current_player_name(&self) -> &str {
        self.players[self.current].name()
    }

    /// Whether the match is over.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether a player with the given name takes part. Case-sensitive.
    pub fn has_player(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the player with the given name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).map(|&i| &self.players[i])
    }

    fn lookup(&self, name: &str) -> Result<&Player, UnknownPlayer> {
        self.player(name)
            .ok_or_else(|| UnknownPlayer(name.to_owned()))
    }

    /// Whether the named player has been eliminated.
    pub fn is_eliminated(&self, name: &str) -> Result<bool, UnknownPlayer> {
        self.lookup(name).map(Player::is_eliminated)
    }

    /// Score of the named player.
    pub fn score(&self, name: &str) -> Result<i64, UnknownPlayer> {
        self.lookup(name).map(Player::score)
    }

    /// Live board of the named player.
    pub fn board(&self, name: &str) -> Result<&Board, UnknownPlayer> {
        self.lookup(name).map(Player::board)
    }

    /// Whether the 1-based `row` and `col` lie on the named player's board. Unknown
    /// players have no valid targets.
    pub fn is_valid_target(&self, row: i64, col: i64, name: &str) -> bool {
        match (self.player(name), Coordinate::from_one_based(row, col)) {
            (Some(target), Some(coord)) => target.board().dimensions().contains(coord),
            _ => false,
        }
    }

    /// All players in turn order, including eliminated ones.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Players still in the match, in turn order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_eliminated())
    }

    /// All players, including eliminated ones, by descending score. Equal scores are
    /// ordered by name.
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<_> = self.players.iter().collect();
        ranked.sort_by(|a, b| {
            b.score()
                .cmp(&a.score())
                .then_with(|| a.name().cmp(b.name()))
        });
        ranked
    }

    /// Number of players not yet eliminated.
    pub fn survivors(&self) -> usize {
        self.active_players().count()
    }

    /// Fire at the 1-based `row` and `col` of the named player on behalf of the current
    /// player.
    ///
    /// Checks run in this order: match over, unknown target, eliminated target, target
    /// is the shooter, coordinate off the board. On success the shooter's score is
    /// updated, the target is eliminated if it has no ships left, the match ends if a
    /// single player remains, and the turn passes to the next player still in the
    /// match.
    pub fn fire(&mut self, row: i64, col: i64, target: &str) -> Result<ShotReport, ShotError> {
        let refuse = |reason| ShotError::new(reason, target, row, col);
        if self.over {
            return Err(refuse(CannotShootReason::AlreadyOver));
        }
        let target_idx = *self
            .by_name
            .get(target)
            .ok_or_else(|| refuse(CannotShootReason::UnknownPlayer))?;
        if self.players[target_idx].is_eliminated() {
            return Err(refuse(CannotShootReason::AlreadyEliminated));
        }
        if target_idx == self.current {
            return Err(refuse(CannotShootReason::SelfShot));
        }
        let coord = Coordinate::from_one_based(row, col)
            .ok_or_else(|| refuse(CannotShootReason::OutOfBounds))?;

        let victim = &mut self.players[target_idx];
        let outcome = victim
            .resolve_shot(coord)
            .map_err(|_| refuse(CannotShootReason::OutOfBounds))?;
        let points = scoring::points(outcome);
        debug!(
            "{} fired at {} {}: {:?} ({:+})",
            self.players[self.current].name(),
            target,
            coord,
            outcome,
            points
        );
        self.players[self.current].adjust_score(points);

        let victim = &mut self.players[target_idx];
        let eliminated = victim.ships_sunk();
        if eliminated {
            victim.eliminate();
            info!("{} was eliminated", target);
        }

        if self.survivors() == 1 {
            let survivor = &mut self.players[self.current];
            let bonus = survivor.score();
            survivor.adjust_score(bonus);
            self.over = true;
            info!(
                "game over: {} is the last one standing with {} points",
                survivor.name(),
                survivor.score()
            );
        }

        self.advance_turn();
        Ok(ShotReport {
            outcome,
            points,
            eliminated,
            game_over: self.over,
        })
    }

    /// Move the turn to the next player that is not eliminated, wrapping around. Takes
    /// at most one full lap, so a lone survivor keeps the turn.
    fn advance_turn(&mut self) {
        let count = self.players.len();
        for step in 1..=count {
            let idx = (self.current + step) % count;
            if !self.players[idx].is_eliminated() {
                self.current = idx;
                break;
            }
        }
        debug!("next player: {}", self.current_player_name());
    }

    /// Name of the winner, or `None` while the match is in progress.
    ///
    /// The player with the highest score wins. If several players share the highest
    /// score, the last player standing wins instead, even if that player is not one of
    /// the players tied for the top score.
    pub fn winner_name(&self) -> Option<&str> {
        if !self.over {
            return None;
        }
        let best = self.players.iter().map(Player::score).max()?;
        let mut leaders = self.players.iter().filter(|p| p.score() == best);
        match (leaders.next(), leaders.next()) {
            (Some(leader), None) => Some(leader.name()),
            _ => self.active_players().next().map(Player::name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn fleet(rows: &[&str]) -> Board {
        Board::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|c| Cell::from_symbol(c).unwrap())),
        )
        .unwrap()
    }

    fn game(names: &[&str], rows: &[&str]) -> Match {
        let mut setup = MatchSetup::new();
        for name in names {
            setup.add_player(*name, &fleet(rows)).unwrap();
        }
        setup.start().unwrap()
    }

    fn reason(result: Result<ShotReport, ShotError>) -> CannotShootReason {
        result.unwrap_err().reason()
    }

    #[test]
    fn coordinate_validation() {
        let g = game(&["A", "B"], &["S....", ".....", ".....", ".....", "....."]);
        assert!(!g.is_valid_target(0, 3, "B"));
        assert!(!g.is_valid_target(6, 3, "B"));
        assert!(!g.is_valid_target(3, 0, "B"));
        assert!(!g.is_valid_target(3, 6, "B"));
        assert!(!g.is_valid_target(-1, 3, "B"));
        assert!(g.is_valid_target(1, 1, "B"));
        assert!(g.is_valid_target(5, 5, "B"));
        assert!(!g.is_valid_target(1, 1, "Nobody"));
    }

    #[test]
    fn two_player_hit_and_repeat() {
        let mut g = game(&["A", "B", "C"], &["SS", ".."]);
        let report = g.fire(1, 1, "B").unwrap();
        assert_eq!(report.outcome, ShotOutcome::Hit { length: 2 });
        assert_eq!(report.points, 200);
        assert!(report.eliminated);
        assert!(!report.game_over);
        assert_eq!(g.score("A"), Ok(200));
        assert_eq!(g.board("B").unwrap().to_string(), "**\n..\n");

        // B is out, so C shoots next.
        assert_eq!(g.current_player_name(), "C");
        assert_eq!(reason(g.fire(1, 1, "B")), CannotShootReason::AlreadyEliminated);
        let report = g.fire(2, 2, "A").unwrap();
        assert_eq!(report.outcome, ShotOutcome::Miss);
        assert_eq!(g.score("C"), Ok(0));
        assert_eq!(g.current_player_name(), "A");
    }

    #[test]
    fn repeat_hit_costs_points() {
        let mut g = game(&["A", "B", "C"], &["SS.", "..T"]);
        g.fire(1, 1, "B").unwrap();
        assert_eq!(g.current_player_name(), "B");
        g.fire(2, 3, "C").unwrap();
        assert_eq!(g.current_player_name(), "C");
        let report = g.fire(1, 2, "B").unwrap();
        assert_eq!(report.outcome, ShotOutcome::AlreadyHit { length: 2 });
        assert_eq!(report.points, -60);
        assert_eq!(g.score("C"), Ok(-60));
        assert_eq!(g.board("B").unwrap().to_string(), "**.\n..T\n");
    }

    #[test]
    fn refusal_order() {
        let mut g = game(&["A", "B"], &["S"]);
        assert_eq!(reason(g.fire(1, 1, "Z")), CannotShootReason::UnknownPlayer);
        assert_eq!(reason(g.fire(9, 9, "A")), CannotShootReason::SelfShot);
        assert_eq!(reason(g.fire(0, 1, "B")), CannotShootReason::OutOfBounds);
        assert_eq!(reason(g.fire(1, 2, "B")), CannotShootReason::OutOfBounds);
        // Refused shots do not pass the turn.
        assert_eq!(g.current_player_name(), "A");
        g.fire(1, 1, "B").unwrap();
        assert!(g.is_over());
        assert_eq!(reason(g.fire(1, 1, "Z")), CannotShootReason::AlreadyOver);
    }

    #[test]
    fn refused_shot_keeps_target_and_position() {
        let mut g = game(&["A", "B"], &["S"]);
        let err = g.fire(3, -4, "B").unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(err.target(), "B");
        assert_eq!(err.position(), (3, -4));
        assert_eq!(err.to_string(), "could not shoot (3, -4) on \"B\": the target coordinate is out of bounds");
    }

    #[test]
    fn last_survivor_doubles_and_wins() {
        let mut g = game(&["A", "B"], &["S"]);
        assert_eq!(g.winner_name(), None);
        let report = g.fire(1, 1, "B").unwrap();
        assert!(report.game_over);
        assert_eq!(report.points, 100);
        assert_eq!(g.score("A"), Ok(200));
        assert_eq!(g.winner_name(), Some("A"));
        // The turn still moves on, landing back on the survivor.
        assert_eq!(g.current_player_name(), "A");
    }

    #[test]
    fn tie_goes_to_last_survivor() {
        let mut g = game(&["A", "B", "C"], &["SSS", "...", "..T"]);
        g.fire(2, 2, "B").unwrap();
        g.fire(1, 1, "C").unwrap();
        g.fire(1, 1, "B").unwrap();
        assert_eq!((g.score("B"), g.score("C")), (Ok(300), Ok(300)));
        let report = g.fire(1, 1, "B").unwrap();
        assert_eq!(report.outcome, ShotOutcome::AlreadyHit { length: 3 });
        assert_eq!(g.score("A"), Ok(-90));
        g.fire(2, 2, "A").unwrap();
        g.fire(2, 2, "A").unwrap();
        assert!(g.fire(3, 3, "B").unwrap().eliminated);
        assert_eq!(g.current_player_name(), "C");
        g.fire(2, 1, "A").unwrap();
        let report = g.fire(3, 3, "C").unwrap();
        assert!(report.game_over);
        assert_eq!(g.score("A"), Ok(220));
        // B and C share the top score, so the survivor wins despite scoring less.
        assert_eq!(g.winner_name(), Some("A"));
    }

    #[test]
    fn unique_top_score_wins_even_if_eliminated() {
        let mut g = game(&["A", "B", "C"], &["SSS", "...", "..T"]);
        g.fire(2, 2, "B").unwrap();
        g.fire(1, 1, "C").unwrap();
        g.fire(1, 1, "B").unwrap();
        g.fire(1, 1, "C").unwrap();
        assert!(g.fire(3, 3, "C").unwrap().eliminated);
        assert_eq!(g.score("B"), Ok(400));
        assert_eq!(g.current_player_name(), "A");
        assert!(g.fire(3, 3, "B").unwrap().game_over);
        assert_eq!(g.score("A"), Ok(20));
        assert_eq!(g.winner_name(), Some("B"));
    }

    #[test]
    fn unknown_player_queries() {
        let g = game(&["A", "B"], &["S"]);
        assert_eq!(g.score("Q"), Err(UnknownPlayer("Q".to_owned())));
        assert!(g.is_eliminated("Q").is_err());
        assert!(g.board("Q").is_err());
        assert!(!g.has_player("a"));
        assert!(g.has_player("A"));
    }

    #[test]
    fn single_player_keeps_the_turn() {
        let mut g = game(&["Solo"], &["S"]);
        g.advance_turn();
        assert_eq!(g.current_player_name(), "Solo");
        assert_eq!(reason(g.fire(1, 1, "Solo")), CannotShootReason::SelfShot);
    }

    #[test]
    fn standings_rank_by_score_then_name() {
        let mut g = game(&["Dan", "Bea", "Ann"], &["SS", "..", "T."]);
        // Dan hits Bea (200), Bea misses Ann, Ann hits Dan (200).
        g.fire(1, 1, "Bea").unwrap();
        g.fire(2, 2, "Ann").unwrap();
        g.fire(1, 2, "Dan").unwrap();
        let ranked: Vec<_> = g.standings().iter().map(|p| (p.name(), p.score())).collect();
        assert_eq!(ranked, vec![("Ann", 200), ("Dan", 200), ("Bea", 0)]);
        let active: Vec<_> = g.active_players().map(|p| p.name()).collect();
        assert_eq!(active, vec!["Dan", "Bea", "Ann"]);
    }
}
