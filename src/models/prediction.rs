//! Prediction model: a participant's guessed score for one game.

use serde::{Deserialize, Serialize};

use super::{Game, GameId, Outcome, Score};
use crate::calculate::calculate_points;
use crate::pool::PoolError;

/// A guessed score for one game. Holds the game's id, never the game itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Game this prediction refers to
    pub game_id: GameId,

    /// Guessed score, unset until entered
    pub predicted_score: Score,

    /// Points from the last call to `score`
    pub points_obtained: u32,
}

impl Prediction {
    /// Create an empty prediction for a game.
    pub fn new(game_id: GameId) -> Self {
        Self {
            game_id,
            predicted_score: Score::Unset,
            points_obtained: 0,
        }
    }

    /// Create a prediction with a guessed score already set.
    pub fn with_score(game_id: GameId, predicted_score: Score) -> Self {
        Self {
            game_id,
            predicted_score,
            points_obtained: 0,
        }
    }

    /// Replace the guessed score.
    pub fn set_prediction(&mut self, home: i64, away: i64) -> Result<(), PoolError> {
        self.predicted_score = Score::new(home, away)?;
        Ok(())
    }

    /// Winner indicator for the guessed score.
    pub fn predicted_outcome(&self) -> Outcome {
        Outcome::from_score(self.predicted_score)
    }

    /// Recompute points against the game's current final score.
    ///
    /// The caller pairs the prediction with its game; see `Participant::total_score`.
    pub fn score(&mut self, game: &Game) -> u32 {
        self.points_obtained = calculate_points(self.predicted_score, game.final_score);
        self.points_obtained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(home: i64, away: i64) -> Game {
        let mut game = Game::new(1, "Pumas".to_string(), "America".to_string());
        game.set_final_score(home, away).unwrap();
        game
    }

    fn predict(home: i64, away: i64) -> Prediction {
        let mut p = Prediction::new(1);
        p.set_prediction(home, away).unwrap();
        p
    }

    #[test]
    fn test_exact_score_five_points() {
        let mut p = predict(2, 1);
        assert_eq!(p.score(&game_with(2, 1)), 5);
        assert_eq!(p.points_obtained, 5);
    }

    #[test]
    fn test_correct_outcome_wrong_score() {
        let mut p = predict(2, 1);
        assert_eq!(p.score(&game_with(3, 0)), 3);
    }

    #[test]
    fn test_wrong_outcome_one_goal_count() {
        let mut p = predict(1, 2);
        assert_eq!(p.score(&game_with(1, 0)), 1);
    }

    #[test]
    fn test_wrong_outcome_no_match() {
        let mut p = predict(0, 2);
        assert_eq!(p.score(&game_with(3, 1)), 0);
    }

    #[test]
    fn test_draw_prediction_different_draw() {
        let mut p = predict(1, 1);
        assert_eq!(p.score(&game_with(2, 2)), 3);
    }

    #[test]
    fn test_unset_game_scores_zero() {
        let game = Game::new(1, "Pumas".to_string(), "America".to_string());
        for (h, a) in [(0, 0), (2, 1), (5, 5)] {
            let mut p = predict(h, a);
            assert_eq!(p.score(&game), 0);
        }
    }

    #[test]
    fn test_unset_prediction_scores_zero() {
        let mut p = Prediction::new(1);
        assert_eq!(p.score(&game_with(0, 0)), 0);
        assert_eq!(p.predicted_outcome(), Outcome::Unresolved);
    }

    #[test]
    fn test_rescoring_overwrites_points() {
        let mut game = game_with(2, 1);
        let mut p = predict(2, 1);
        assert_eq!(p.score(&game), 5);

        // wrong outcome, but the away goals still match
        game.set_final_score(0, 1).unwrap();
        assert_eq!(p.score(&game), 1);
        assert_eq!(p.points_obtained, 1);

        game.set_final_score(0, 3).unwrap();
        assert_eq!(p.score(&game), 0);
        assert_eq!(p.points_obtained, 0);
    }

    #[test]
    fn test_set_prediction_negative_rejected() {
        let mut p = predict(1, 0);
        assert!(p.set_prediction(1, -3).is_err());
        assert_eq!(p.predicted_score, Score::Set { home: 1, away: 0 });
    }
}
