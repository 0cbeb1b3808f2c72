//! Game model: two teams and their final score.

use serde::{Deserialize, Serialize};

use super::{Outcome, Score};
use crate::pool::PoolError;

/// Type alias for game IDs. Assigned sequentially by the pool, starting at 1.
pub type GameId = u32;

/// A single game in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier within the pool
    pub id: GameId,

    /// Home team name
    pub home_team: String,

    /// Away team name
    pub away_team: String,

    /// Final result, unset until entered
    pub final_score: Score,
}

impl Game {
    /// Create a new game with no result yet.
    pub fn new(id: GameId, home_team: String, away_team: String) -> Self {
        Self {
            id,
            home_team,
            away_team,
            final_score: Score::Unset,
        }
    }

    /// Replace the final score. Negative goal counts are rejected and nothing is stored.
    pub fn set_final_score(&mut self, home: i64, away: i64) -> Result<(), PoolError> {
        self.final_score = Score::new(home, away)?;
        Ok(())
    }

    /// Forget the final score.
    pub fn clear_final_score(&mut self) {
        self.final_score = Score::Unset;
    }

    /// Winner indicator for the final score.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_score(self.final_score)
    }

    /// Label used in prompts and reports, e.g. "Tigres vs Rayados".
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
