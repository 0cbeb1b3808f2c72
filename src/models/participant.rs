//! Participant model: a name and one prediction per game.

use serde::{Deserialize, Serialize};

use super::{Game, Prediction};
use crate::pool::PoolError;

/// Type alias for participant handles (ordinal position in the pool).
pub type ParticipantIndex = usize;

/// A pool participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, not required to be unique
    pub name: String,

    /// One prediction per game, in game order
    pub predictions: Vec<Prediction>,

    /// Sum of points from the last call to `total_score`
    pub total_points: u32,
}

impl Participant {
    /// Create a participant with an unset prediction for every given game.
    pub fn new(name: String, games: &[Game]) -> Self {
        Self {
            name,
            predictions: games.iter().map(|g| Prediction::new(g.id)).collect(),
            total_points: 0,
        }
    }

    /// Replace the whole prediction sequence.
    pub fn record_predictions(&mut self, predictions: Vec<Prediction>) {
        self.predictions = predictions;
    }

    /// Recompute every prediction against the current game results and sum them.
    ///
    /// Predictions are matched to games by position, and each must refer to the game at
    /// its position. Nothing is rescored when either check fails.
    pub fn total_score(&mut self, games: &[Game]) -> Result<u32, PoolError> {
        if self.predictions.len() != games.len() {
            return Err(PoolError::LengthMismatch {
                expected: games.len(),
                actual: self.predictions.len(),
            });
        }

        if let Some((prediction, game)) = self
            .predictions
            .iter()
            .zip(games)
            .find(|(prediction, game)| prediction.game_id != game.id)
        {
            return Err(PoolError::GameMismatch {
                expected: game.id,
                actual: prediction.game_id,
            });
        }

        self.total_points = self
            .predictions
            .iter_mut()
            .zip(games)
            .map(|(prediction, game)| prediction.score(game))
            .sum();

        Ok(self.total_points)
    }
}
