//! The prediction pool.
//!
//! Owns the game list and the participants, and drives scoring:
//! - Game and participant registration
//! - Prediction entry and result entry
//! - Totals, standings and co-winner detection

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculate::{co_winners, rank_totals};
use crate::models::{Game, GameId, Participant, ParticipantIndex, Prediction, Score};

/// Errors raised by pool operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("Invalid score {home}-{away}: goal counts must not be negative")]
    InvalidScore { home: i64, away: i64 },

    #[error("Game not found: {0}")]
    NotFound(GameId),

    #[error("Expected {expected} predictions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantIndex),

    #[error("Prediction for game {actual} paired with game {expected}")]
    GameMismatch { expected: GameId, actual: GameId },
}

/// A participant's place in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Position of the participant in the pool
    pub participant: ParticipantIndex,

    pub name: String,

    pub total_points: u32,

    /// Competition rank; tied totals share a rank
    pub rank: u32,
}

/// A football prediction pool.
///
/// Only built through its own operations, which keep one prediction per game for every
/// participant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pool {
    name: String,
    games: Vec<Game>,
    participants: Vec<Participant>,
}

impl Pool {
    /// Create an empty pool.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            games: Vec::new(),
            participants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Look up a game by id.
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Look up a participant by handle.
    pub fn participant(&self, index: ParticipantIndex) -> Option<&Participant> {
        self.participants.get(index)
    }

    /// Add a game and return its id. Repeated team pairs are allowed.
    ///
    /// Every existing participant gets an unset prediction for the new game.
    pub fn add_game(&mut self, home_team: impl Into<String>, away_team: impl Into<String>) -> GameId {
        let id = self.games.last().map_or(1, |g| g.id + 1);
        let game = Game::new(id, home_team.into(), away_team.into());
        debug!(game_id = id, game = %game.label(), "Added game");

        for participant in &mut self.participants {
            participant.predictions.push(Prediction::new(id));
        }
        self.games.push(game);

        id
    }

    /// Add a participant and return its handle. Repeated names are allowed.
    pub fn add_participant(&mut self, name: impl Into<String>) -> ParticipantIndex {
        let participant = Participant::new(name.into(), &self.games);
        debug!(name = %participant.name, "Added participant");
        self.participants.push(participant);
        self.participants.len() - 1
    }

    /// Replace a participant's predictions, one `(home, away)` per game in game order.
    ///
    /// Nothing is changed unless every score is valid and the count matches.
    pub fn record_predictions(
        &mut self,
        participant: ParticipantIndex,
        scores: &[(i64, i64)],
    ) -> Result<(), PoolError> {
        if participant >= self.participants.len() {
            return Err(PoolError::ParticipantNotFound(participant));
        }
        if scores.len() != self.games.len() {
            return Err(PoolError::LengthMismatch {
                expected: self.games.len(),
                actual: scores.len(),
            });
        }

        let predictions = self
            .games
            .iter()
            .zip(scores)
            .map(|(game, &(home, away))| {
                Score::new(home, away).map(|score| Prediction::with_score(game.id, score))
            })
            .collect::<Result<Vec<_>, PoolError>>()?;

        self.record_prediction_scores(participant, predictions)
    }

    /// Replace a participant's predictions with already-validated scores.
    ///
    /// Unset scores are allowed and earn no points.
    pub fn record_score_predictions(
        &mut self,
        participant: ParticipantIndex,
        scores: &[Score],
    ) -> Result<(), PoolError> {
        if participant >= self.participants.len() {
            return Err(PoolError::ParticipantNotFound(participant));
        }
        if scores.len() != self.games.len() {
            return Err(PoolError::LengthMismatch {
                expected: self.games.len(),
                actual: scores.len(),
            });
        }

        let predictions = self
            .games
            .iter()
            .zip(scores)
            .map(|(game, &score)| Prediction::with_score(game.id, score))
            .collect();

        self.record_prediction_scores(participant, predictions)
    }

    fn record_prediction_scores(
        &mut self,
        participant: ParticipantIndex,
        predictions: Vec<Prediction>,
    ) -> Result<(), PoolError> {
        let entry = self
            .participants
            .get_mut(participant)
            .ok_or(PoolError::ParticipantNotFound(participant))?;
        debug!(name = %entry.name, count = predictions.len(), "Recorded predictions");
        entry.record_predictions(predictions);
        Ok(())
    }

    /// Enter the final score of a game.
    pub fn finalize_scores(&mut self, game_id: GameId, home: i64, away: i64) -> Result<(), PoolError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or(PoolError::NotFound(game_id))?;
        game.set_final_score(home, away)?;
        debug!(game_id, score = %game.final_score, "Finalized score");
        Ok(())
    }

    /// Replace the result of a game with an already-validated score. `Unset` clears it.
    pub fn set_result(&mut self, game_id: GameId, score: Score) -> Result<(), PoolError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or(PoolError::NotFound(game_id))?;
        match score {
            Score::Set { .. } => game.final_score = score,
            Score::Unset => game.clear_final_score(),
        }
        debug!(game_id, score = %game.final_score, "Set result");
        Ok(())
    }

    /// Recompute every participant's total against the current results.
    ///
    /// Fails on the first participant whose predictions do not line up with the games.
    pub fn score_all(&mut self) -> Result<BTreeMap<ParticipantIndex, u32>, PoolError> {
        let games = &self.games;
        let mut totals = BTreeMap::new();

        for (index, participant) in self.participants.iter_mut().enumerate() {
            totals.insert(index, participant.total_score(games)?);
        }

        debug!(participants = totals.len(), "Scored pool");
        Ok(totals)
    }

    /// Every participant tied at the highest total, in pool order.
    ///
    /// Totals are recomputed first, so the answer always reflects the current results.
    pub fn winners(&mut self) -> Result<Vec<ParticipantIndex>, PoolError> {
        let totals: Vec<u32> = self.score_all()?.into_values().collect();
        Ok(co_winners(&totals))
    }

    /// Participants ordered by points, highest first. Equal totals share a rank.
    pub fn standings(&mut self) -> Result<Vec<Standing>, PoolError> {
        let totals: Vec<u32> = self.score_all()?.into_values().collect();
        Ok(rank_totals(&totals)
            .into_iter()
            .map(|(participant, total_points, rank)| Standing {
                participant,
                name: self.participants[participant].name.clone(),
                total_points,
                rank,
            })
            .collect())
    }
}
