//! Scoring engine.
//!
//! Pure functions behind the pool's point rules:
//! - Outcome resolution from a score
//! - Points for a single prediction
//! - Co-winner detection and competition ranking over totals

use crate::models::{Outcome, Score};

/// Points for predicting the right outcome (home win, away win or draw).
pub const OUTCOME_POINTS: u32 = 3;

/// Points for guessing the home team's goals.
pub const HOME_GOALS_POINTS: u32 = 1;

/// Points for guessing the away team's goals.
pub const AWAY_GOALS_POINTS: u32 = 1;

/// Most points a single prediction can earn.
pub const MAX_POINTS_PER_GAME: u32 = OUTCOME_POINTS + HOME_GOALS_POINTS + AWAY_GOALS_POINTS;

/// Resolve the winner indicator of a score.
pub fn resolve(score: Score) -> Outcome {
    Outcome::from_score(score)
}

/// Points earned by a predicted score against an actual result.
///
/// An unset result, or an unset prediction, earns nothing.
pub fn calculate_points(predicted: Score, actual: Score) -> u32 {
    let predicted_outcome = resolve(predicted);
    let actual_outcome = resolve(actual);

    if !predicted_outcome.is_resolved() || !actual_outcome.is_resolved() {
        return 0;
    }

    let mut points = 0;

    if predicted_outcome == actual_outcome {
        points += OUTCOME_POINTS;
    }
    if predicted.home() == actual.home() {
        points += HOME_GOALS_POINTS;
    }
    if predicted.away() == actual.away() {
        points += AWAY_GOALS_POINTS;
    }

    debug_assert!(points <= MAX_POINTS_PER_GAME);
    points
}

/// Positions of every total tied at the maximum. Empty input gives no winners.
pub fn co_winners(totals: &[u32]) -> Vec<usize> {
    let Some(&best) = totals.iter().max() else {
        return Vec::new();
    };

    totals
        .iter()
        .enumerate()
        .filter(|(_, total)| **total == best)
        .map(|(i, _)| i)
        .collect()
}

/// Competition ranking ("1224") of totals, highest first.
///
/// Returns `(position, total, rank)` sorted by total descending, then position.
pub fn rank_totals(totals: &[u32]) -> Vec<(usize, u32, u32)> {
    let mut order: Vec<(usize, u32)> = totals.iter().copied().enumerate().collect();
    order.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut ranked = Vec::with_capacity(order.len());
    let mut rank = 0;
    let mut previous = None;

    for (i, (position, total)) in order.into_iter().enumerate() {
        if previous != Some(total) {
            rank = i as u32 + 1;
            previous = Some(total);
        }
        ranked.push((position, total, rank));
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(home: i64, away: i64) -> Score {
        Score::new(home, away).unwrap()
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(s(2, 1)), Outcome::HomeWin);
        assert_eq!(resolve(s(1, 2)), Outcome::AwayWin);
        assert_eq!(resolve(s(4, 4)), Outcome::Draw);
        assert_eq!(resolve(Score::Unset), Outcome::Unresolved);
    }

    #[test]
    fn test_calculate_points_rules() {
        assert_eq!(calculate_points(s(2, 1), s(2, 1)), 5);
        assert_eq!(calculate_points(s(2, 1), s(3, 0)), 3);
        assert_eq!(calculate_points(s(1, 2), s(1, 0)), 1);
        assert_eq!(calculate_points(s(0, 1), s(2, 1)), 1);
        assert_eq!(calculate_points(s(3, 3), s(0, 0)), 3);
        assert_eq!(calculate_points(s(0, 4), s(2, 1)), 0);
    }

    #[test]
    fn test_wrong_outcome_both_digits_impossible() {
        // matching both goal counts always implies the same outcome
        assert_eq!(calculate_points(s(1, 1), s(1, 1)), MAX_POINTS_PER_GAME);
    }

    #[test]
    fn test_calculate_points_unset() {
        assert_eq!(calculate_points(s(0, 0), Score::Unset), 0);
        assert_eq!(calculate_points(Score::Unset, s(0, 0)), 0);
        assert_eq!(calculate_points(Score::Unset, Score::Unset), 0);
    }

    #[test]
    fn test_points_never_exceed_max() {
        for ph in 0..4 {
            for pa in 0..4 {
                for ah in 0..4 {
                    for aa in 0..4 {
                        assert!(calculate_points(s(ph, pa), s(ah, aa)) <= MAX_POINTS_PER_GAME);
                    }
                }
            }
        }
    }

    #[test]
    fn test_co_winners_single() {
        assert_eq!(co_winners(&[4, 9, 2]), vec![1]);
    }

    #[test]
    fn test_co_winners_tie() {
        assert_eq!(co_winners(&[7, 3, 7, 7]), vec![0, 2, 3]);
        assert_eq!(co_winners(&[0, 0]), vec![0, 1]);
    }

    #[test]
    fn test_co_winners_empty() {
        assert!(co_winners(&[]).is_empty());
    }

    #[test]
    fn test_rank_totals() {
        let ranked = rank_totals(&[5, 8, 5, 2]);
        assert_eq!(ranked, vec![(1, 8, 1), (0, 5, 2), (2, 5, 2), (3, 2, 4)]);
    }
}
