//! Score and outcome value types.

use serde::{Deserialize, Serialize};

use crate::pool::PoolError;

/// A football score: either both goal counts are known or neither is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    /// No result (or no prediction) entered yet
    #[default]
    Unset,
    /// Goals scored by the home and away team
    Set { home: u64, away: u64 },
}

impl Score {
    /// Build a score from raw integers, rejecting negative goal counts.
    pub fn new(home: i64, away: i64) -> Result<Self, PoolError> {
        match (u64::try_from(home), u64::try_from(away)) {
            (Ok(home), Ok(away)) => Ok(Score::Set { home, away }),
            _ => Err(PoolError::InvalidScore { home, away }),
        }
    }

    /// Returns true if both goal counts are known.
    pub fn is_set(&self) -> bool {
        matches!(self, Score::Set { .. })
    }

    /// Home goals, if set.
    pub fn home(&self) -> Option<u64> {
        match self {
            Score::Set { home, .. } => Some(*home),
            Score::Unset => None,
        }
    }

    /// Away goals, if set.
    pub fn away(&self) -> Option<u64> {
        match self {
            Score::Set { away, .. } => Some(*away),
            Score::Unset => None,
        }
    }

    /// Winner indicator for this score.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_score(*self)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Set { home, away } => write!(f, "{}-{}", home, away),
            Score::Unset => write!(f, "-"),
        }
    }
}

/// Categorical result of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
    /// Only produced by an unset score
    Unresolved,
}

impl Outcome {
    /// Resolve the winner from a score.
    pub fn from_score(score: Score) -> Self {
        match score {
            Score::Unset => Outcome::Unresolved,
            Score::Set { home, away } if home > away => Outcome::HomeWin,
            Score::Set { home, away } if away > home => Outcome::AwayWin,
            Score::Set { .. } => Outcome::Draw,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Outcome::Unresolved)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HomeWin => write!(f, "home win"),
            Outcome::AwayWin => write!(f, "away win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Unresolved => write!(f, "unresolved"),
        }
    }
}
