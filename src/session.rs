//! Interactive pool session.
//!
//! Walks through the life of a pool on a terminal: games, participants,
//! predictions, results, then the points table and the winner banner.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::pool::{Pool, PoolError};
use crate::prompt::{PromptError, Prompter};
use crate::report::{render_predictions, render_standings, render_winners, PoolReport};

/// Errors that can end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// An interactive session over a reader and a writer.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: ReportConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: ReportConfig) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            config,
        }
    }

    fn section(&mut self, title: &str) -> Result<(), PromptError> {
        let banner = self.config.banner();
        self.prompter.say(&format!("{banner}\n{title}\n{banner}"))
    }

    /// Run the whole flow and return the scored pool with its report.
    pub fn run(&mut self) -> Result<(Pool, PoolReport), SessionError> {
        let name = self.prompter.ask_line("Creating football pool, enter name:")?;
        let mut pool = Pool::new(name);
        info!(pool = pool.name(), "Started pool session");

        self.section("Creating game list.")?;
        self.add_games(&mut pool)?;

        self.section("Creating participants list.")?;
        self.add_participants(&mut pool)?;

        self.section("Update predictions.")?;
        self.enter_predictions(&mut pool)?;

        self.section("Update game scores.")?;
        self.enter_results(&mut pool)?;

        self.section("Analyzing predictions and games")?;
        let report = PoolReport::from_pool(&mut pool)?;
        self.prompter.say_inline(&render_standings(&report, &self.config))?;
        self.prompter.say_inline(&render_winners(&report, &self.config))?;

        info!(
            pool = pool.name(),
            winners = report.winners.len(),
            "Finished pool session"
        );
        Ok((pool, report))
    }

    /// Ask for games until the answer to "another?" is no.
    pub fn add_games(&mut self, pool: &mut Pool) -> Result<(), SessionError> {
        loop {
            let home = self.prompter.ask_line("Enter name of first team:")?;
            let away = self.prompter.ask_line("Enter name of second team:")?;
            pool.add_game(home, away);
            if !self.prompter.ask_yes_no("Add another game?")? {
                return Ok(());
            }
        }
    }

    /// Ask for participants until the answer to "another?" is no.
    pub fn add_participants(&mut self, pool: &mut Pool) -> Result<(), SessionError> {
        loop {
            let name = self.prompter.ask_line("Enter name of participant:")?;
            pool.add_participant(name);
            if !self.prompter.ask_yes_no("Add another participant?")? {
                return Ok(());
            }
        }
    }

    /// Ask every participant for one score per game, then echo what was saved.
    pub fn enter_predictions(&mut self, pool: &mut Pool) -> Result<(), SessionError> {
        for index in 0..pool.participants().len() {
            let participant = &pool.participants()[index];
            self.prompter
                .say(&format!("Enter predictions by {}.", participant.name))?;

            let mut scores = Vec::with_capacity(pool.games().len());
            for (game, prediction) in pool.games().iter().zip(&participant.predictions) {
                self.prompter
                    .say(&format!("Prediction for game: {}", game.label()))?;
                scores.push(self.prompter.ask_score(prediction.predicted_score)?);
            }

            pool.record_score_predictions(index, &scores)?;
            if let Some(saved) = render_predictions(pool, index) {
                self.prompter.say_inline(&saved)?;
            }
        }
        Ok(())
    }

    /// Ask for the final score of every game. Keeping an unset score leaves the game unplayed.
    pub fn enter_results(&mut self, pool: &mut Pool) -> Result<(), SessionError> {
        let games: Vec<_> = pool
            .games()
            .iter()
            .map(|g| (g.id, g.label(), g.final_score))
            .collect();

        for (id, label, current) in games {
            let status = if current.is_set() {
                format!("Current score is {}", current)
            } else {
                "No scored.".to_string()
            };
            self.prompter.say(&format!("Game, {}. {}", label, status))?;

            let score = self.prompter.ask_score(current)?;
            if !score.is_set() {
                debug!(game_id = id, "Result left unset");
            }
            pool.set_result(id, score)?;
        }
        Ok(())
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }
}
