//! Pool sheets: a TOML description of a whole pool.
//!
//! ```toml
//! name = "Jornada 1"
//!
//! [[games]]
//! home = "Tigres"
//! away = "Rayados"
//! result = [2, 1]
//!
//! [[participants]]
//! name = "Ana"
//! predictions = [[2, 1]]
//! ```
//!
//! Sheets are input only. They are turned into a `Pool` through the regular
//! pool operations, so every pool rule applies to them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::pool::{Pool, PoolError};

/// Errors that can occur while loading a sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Failed to read sheet: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse sheet: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid sheet: {0}")]
    Pool(#[from] PoolError),
}

/// A game entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetGame {
    pub home: String,
    pub away: String,

    /// Final score as `[home, away]`, absent until the game is played
    #[serde(default)]
    pub result: Option<(i64, i64)>,
}

/// A participant entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetParticipant {
    pub name: String,

    /// One `[home, away]` per game, in game order. Empty means nothing predicted yet.
    #[serde(default)]
    pub predictions: Vec<(i64, i64)>,
}

/// A whole pool as written in a sheet file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSheet {
    pub name: String,

    #[serde(default)]
    pub games: Vec<SheetGame>,

    #[serde(default)]
    pub participants: Vec<SheetParticipant>,
}

impl PoolSheet {
    /// Load a sheet from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SheetError> {
        let contents = std::fs::read_to_string(path)?;
        let sheet = Self::parse(&contents)?;
        info!(
            path = %path.display(),
            games = sheet.games.len(),
            participants = sheet.participants.len(),
            "Loaded pool sheet"
        );
        Ok(sheet)
    }

    /// Parse a sheet from TOML text.
    pub fn parse(contents: &str) -> Result<Self, SheetError> {
        Ok(toml::from_str(contents)?)
    }

    /// Build the pool described by this sheet.
    pub fn into_pool(self) -> Result<Pool, SheetError> {
        let mut pool = Pool::new(self.name);

        let mut ids = Vec::with_capacity(self.games.len());
        for game in &self.games {
            ids.push(pool.add_game(game.home.clone(), game.away.clone()));
        }

        for entry in self.participants {
            let index = pool.add_participant(entry.name);
            if entry.predictions.is_empty() {
                debug!(participant = index, "No predictions in sheet");
                continue;
            }
            pool.record_predictions(index, &entry.predictions)?;
        }

        for (game, id) in self.games.iter().zip(ids) {
            if let Some((home, away)) = game.result {
                pool.finalize_scores(id, home, away)?;
            }
        }

        Ok(pool)
    }
}
