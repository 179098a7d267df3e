//! Points, streaks and the persisted best score.
//!
//! A correct answer is worth `(100 + 10 × seconds_left) × (1 + 0.1 × streak)`,
//! rounded, where `streak` counts the correct answers immediately before this
//! one. Wrong answers and timeouts score nothing and reset the streak.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::trivia_engine::models::{AnswerKey, Question};

/// Seconds a player gets per question.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 10;

const BASE_POINTS: f64 = 100.0;
const POINTS_PER_SECOND: f64 = 10.0;
const STREAK_BONUS: f64 = 0.1;

/// Points for one answer.
pub fn calculate_points(correct: bool, time_remaining: u32, streak: u32) -> u32 {
    if !correct {
        return 0;
    }
    let time_bonus = f64::from(time_remaining) * POINTS_PER_SECOND;
    let multiplier = 1.0 + f64::from(streak) * STREAK_BONUS;
    ((BASE_POINTS + time_bonus) * multiplier).round() as u32
}

// ---------------------------------------------------------------------------
// Run tracking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub question_id: String,
    /// `None` when the timer ran out.
    pub selected_answer: Option<AnswerKey>,
    pub correct: bool,
    pub time_remaining: u32,
    pub points_earned: u32,
}

/// Score, streak and answer history for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTracker {
    score: u32,
    streak: u32,
    answers: Vec<AnswerResult>,
}

impl RunTracker {
    pub fn new() -> Self {
        RunTracker::default()
    }

    /// Record a selected answer. `time_remaining` is clamped to the time limit.
    pub fn answer(&mut self, question: &Question, selected: AnswerKey, time_remaining: u32) -> &AnswerResult {
        let time_remaining = time_remaining.min(QUESTION_TIME_LIMIT_SECS);
        let correct = selected == question.correct_answer;
        let points = calculate_points(correct, time_remaining, self.streak);

        if correct {
            self.score += points;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.push(AnswerResult {
            question_id: question.id.clone(),
            selected_answer: Some(selected),
            correct,
            time_remaining,
            points_earned: points,
        })
    }

    /// Record that the timer expired without an answer.
    pub fn timeout(&mut self, question: &Question) -> &AnswerResult {
        self.streak = 0;
        self.push(AnswerResult {
            question_id: question.id.clone(),
            selected_answer: None,
            correct: false,
            time_remaining: 0,
            points_earned: 0,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn answers(&self) -> &[AnswerResult] {
        &self.answers
    }

    fn push(&mut self, result: AnswerResult) -> &AnswerResult {
        self.answers.push(result);
        &self.answers[self.answers.len() - 1]
    }
}

// ---------------------------------------------------------------------------
// Best score persistence
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("failed to write best score to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Key-value home of the best score.
pub trait ScoreStore {
    /// Stored best, `0` if nothing (or nothing readable) is stored.
    fn best(&self) -> u32;

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError>;

    /// Keep `score` if it beats the stored best and return the best after
    /// the update.
    fn submit(&mut self, score: u32) -> Result<u32, ScoreStoreError> {
        let current = self.best();
        if score > current {
            self.save(score)?;
            debug!(score, previous = current, "new best score");
            return Ok(score);
        }
        Ok(current)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn best(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        self.best = score;
        Ok(())
    }
}

/// Best score as a decimal integer in a text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn best(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        fs::write(&self.path, score.to_string())
            .map_err(|source| ScoreStoreError::Io { path: self.path.clone(), source })
    }
}
