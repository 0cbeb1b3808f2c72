//! Pool reports.
//!
//! Builds a serializable snapshot of a scored pool and renders it as the
//! plain-text tables printed at the end of a session.

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::models::{GameId, Outcome, ParticipantIndex, Score};
use crate::pool::{Pool, PoolError, Standing};

/// One game line in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub home_team: String,
    pub away_team: String,
    pub final_score: Score,
    pub outcome: Outcome,
}

/// Snapshot of a scored pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolReport {
    pub pool: String,
    pub games: Vec<GameSummary>,
    pub standings: Vec<Standing>,
    /// Names of every participant tied for first
    pub winners: Vec<String>,
    /// Points of the winners, absent when the pool has no participants
    pub winning_points: Option<u32>,
}

impl PoolReport {
    /// Score the pool and capture the results.
    pub fn from_pool(pool: &mut Pool) -> Result<Self, PoolError> {
        let standings = pool.standings()?;
        let winners: Vec<ParticipantIndex> = pool.winners()?;

        let games = pool
            .games()
            .iter()
            .map(|g| GameSummary {
                id: g.id,
                home_team: g.home_team.clone(),
                away_team: g.away_team.clone(),
                final_score: g.final_score,
                outcome: g.outcome(),
            })
            .collect();

        let winning_points = winners
            .first()
            .and_then(|&i| pool.participant(i))
            .map(|p| p.total_points);
        let winners = winners
            .iter()
            .filter_map(|&i| pool.participant(i))
            .map(|p| p.name.clone())
            .collect();

        Ok(Self {
            pool: pool.name().to_string(),
            games,
            standings,
            winners,
            winning_points,
        })
    }
}

/// Points table, highest first.
pub fn render_standings(report: &PoolReport, config: &ReportConfig) -> String {
    let banner = config.banner();
    let mut out = format!("{banner}\nParticipants points\n{banner}\n");
    for standing in &report.standings {
        out.push_str(&format!(
            "{}. {}\t{}\n",
            standing.rank, standing.name, standing.total_points
        ));
    }
    out
}

/// Winner banner. Every co-winner is named.
pub fn render_winners(report: &PoolReport, config: &ReportConfig) -> String {
    let banner = config.banner();
    let line = match (report.winners.as_slice(), report.winning_points) {
        ([name], Some(points)) => format!("WINNER!!! {} with {} points.", name, points),
        (names, Some(points)) if !names.is_empty() => {
            format!("WINNERS!!! {} with {} points each.", names.join(", "), points)
        }
        _ => "No participants.".to_string(),
    };
    format!("{banner}\n{line}\n{banner}\n")
}

/// Game results with their outcomes.
pub fn render_results(report: &PoolReport) -> String {
    let mut out = String::from("Results:\n");
    for game in &report.games {
        out.push_str(&format!(
            "{} vs {}: {} ({})\n",
            game.home_team, game.away_team, game.final_score, game.outcome
        ));
    }
    out
}

/// A participant's saved predictions, one line per game.
pub fn render_predictions(pool: &Pool, participant: ParticipantIndex) -> Option<String> {
    let participant = pool.participant(participant)?;
    let mut out = String::from("Saved predictions:\n");
    for prediction in &participant.predictions {
        if let Some(game) = pool.game(prediction.game_id) {
            out.push_str(&format!("{}: {}\n", game.label(), prediction.predicted_score));
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small_config() -> ReportConfig {
        ReportConfig {
            banner_width: 3,
            banner_char: '*',
        }
    }

    fn scored_pool() -> Pool {
        let mut pool = Pool::new("Clasico");
        pool.add_game("Chivas", "America");
        pool.add_game("Atlas", "Leon");
        let ana = pool.add_participant("Ana");
        let luis = pool.add_participant("Luis");
        pool.record_predictions(ana, &[(1, 0), (2, 2)]).unwrap();
        pool.record_predictions(luis, &[(3, 1), (0, 1)]).unwrap();
        pool.finalize_scores(1, 1, 0).unwrap();
        pool
    }

    #[test]
    fn test_report_from_pool() {
        let mut pool = scored_pool();
        let report = PoolReport::from_pool(&mut pool).unwrap();

        assert_eq!(report.pool, "Clasico");
        assert_eq!(report.games.len(), 2);
        assert_eq!(report.games[0].outcome, Outcome::HomeWin);
        assert_eq!(report.games[1].outcome, Outcome::Unresolved);
        assert_eq!(report.winners, vec!["Ana".to_string()]);
        assert_eq!(report.winning_points, Some(5));
    }

    #[test]
    fn test_render_standings() {
        let mut pool = scored_pool();
        let report = PoolReport::from_pool(&mut pool).unwrap();

        let text = render_standings(&report, &small_config());
        assert_eq!(text, "***\nParticipants points\n***\n1. Ana\t5\n2. Luis\t3\n");
    }

    #[test]
    fn test_render_single_winner() {
        let mut pool = scored_pool();
        let report = PoolReport::from_pool(&mut pool).unwrap();

        let text = render_winners(&report, &small_config());
        assert_eq!(text, "***\nWINNER!!! Ana with 5 points.\n***\n");
    }

    #[test]
    fn test_render_co_winners() {
        let mut pool = Pool::new("Final");
        pool.add_game("Cruz Azul", "Pumas");
        let ana = pool.add_participant("Ana");
        let luis = pool.add_participant("Luis");
        pool.record_predictions(ana, &[(1, 0)]).unwrap();
        pool.record_predictions(luis, &[(1, 0)]).unwrap();
        pool.finalize_scores(1, 1, 0).unwrap();
        let report = PoolReport::from_pool(&mut pool).unwrap();

        let text = render_winners(&report, &small_config());
        assert_eq!(text, "***\nWINNERS!!! Ana, Luis with 5 points each.\n***\n");
    }

    #[test]
    fn test_render_winners_empty_pool() {
        let mut pool = Pool::new("empty");
        let report = PoolReport::from_pool(&mut pool).unwrap();

        let text = render_winners(&report, &small_config());
        assert!(text.contains("No participants."));
        assert_eq!(report.winning_points, None);
    }

    #[test]
    fn test_render_results() {
        let mut pool = scored_pool();
        let report = PoolReport::from_pool(&mut pool).unwrap();

        let text = render_results(&report);
        assert_eq!(
            text,
            "Results:\nChivas vs America: 1-0 (home win)\nAtlas vs Leon: - (unresolved)\n"
        );
    }

    #[test]
    fn test_render_predictions() {
        let pool = scored_pool();
        let text = render_predictions(&pool, 1).unwrap();
        assert_eq!(
            text,
            "Saved predictions:\nChivas vs America: 3-1\nAtlas vs Leon: 0-1\n"
        );
        assert!(render_predictions(&pool, 5).is_none());
    }

    #[test]
    fn test_report_serialization() {
        let mut pool = scored_pool();
        let report = PoolReport::from_pool(&mut pool).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: PoolReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, report);
    }
}
