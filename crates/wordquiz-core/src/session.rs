// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The quiz session state machine.
//!
//! ```text
//! Idle --start--> AwaitingAnswer --submit_answer--> ShowingResult
//!                      ^                                  |
//!                      +-------------advance--------------+
//!                                                         | (last question)
//! Idle <--restart-- Finished <----------advance-----------+
//! ```
//!
//! `start` is also accepted from `Finished`. A transition attempted from any
//! other phase fails with [`QuizError::InvalidTransition`] and leaves the
//! state as it was.

use std::fmt::Display;
use std::fmt::Formatter;

use rand::Rng;
use serde::Serialize;

use crate::bank::WordBank;
use crate::error::QuizError;
use crate::generator::Generator;
use crate::types::day::Day;
use crate::types::question::Question;
use crate::types::question::QuestionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Idle,
    AwaitingAnswer,
    ShowingResult,
    Finished,
}

/// The user actions that drive a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Start,
    SubmitAnswer,
    Advance,
    Restart,
}

impl Phase {
    pub fn allows(self, action: Action) -> bool {
        matches!(
            (self, action),
            (Phase::Idle | Phase::Finished, Action::Start)
                | (Phase::AwaitingAnswer, Action::SubmitAnswer)
                | (Phase::ShowingResult, Action::Advance)
                | (Phase::Finished, Action::Restart)
        )
    }

    /// The actions a presentation layer should offer in this phase.
    pub fn available_actions(self) -> Vec<Action> {
        [
            Action::Start,
            Action::SubmitAnswer,
            Action::Advance,
            Action::Restart,
        ]
        .into_iter()
        .filter(|action| self.allows(*action))
        .collect()
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::AwaitingAnswer => write!(f, "awaiting an answer"),
            Phase::ShowingResult => write!(f, "showing a result"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Start => write!(f, "start"),
            Action::SubmitAnswer => write!(f, "submit an answer"),
            Action::Advance => write!(f, "advance"),
            Action::Restart => write!(f, "restart"),
        }
    }
}

/// What happened to the most recent answer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerOutcome {
    pub choice: String,
    pub correct: bool,
    pub correct_answer: String,
}

/// Score summary, readable once the session is finished.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FinalReport {
    pub score: usize,
    pub total_questions: usize,
    /// `score / total_questions * 100`, rounded to two decimals with ties to
    /// even.
    pub percentage: f64,
}

impl FinalReport {
    fn new(score: usize, total_questions: usize) -> Self {
        let ratio = score as f64 / total_questions as f64;
        Self {
            score,
            total_questions,
            percentage: (ratio * 100.0 * 100.0).round_ties_even() / 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    day: Option<Day>,
    questions: QuestionSet,
    /// 1-based; zero while idle.
    current_index: usize,
    score: usize,
    total_questions: usize,
    answered: bool,
    last_outcome: Option<AnswerOutcome>,
    phase: Phase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            day: None,
            questions: QuestionSet::default(),
            current_index: 0,
            score: 0,
            total_questions: 0,
            answered: false,
            last_outcome: None,
            phase: Phase::Idle,
        }
    }

    fn require(&self, action: Action) -> Result<(), QuizError> {
        if self.phase.allows(action) {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    /// Generate a quiz for `day` and move to the first question.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        generator: &Generator,
        bank: &WordBank,
        day: &Day,
        count: usize,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        self.require(Action::Start)?;
        let questions = generator.generate(bank, day, count, rng)?;
        *self = Self {
            day: Some(day.clone()),
            total_questions: questions.len(),
            questions,
            current_index: 1,
            score: 0,
            answered: false,
            last_outcome: None,
            phase: Phase::AwaitingAnswer,
        };
        log::debug!("Started a {count} question quiz for {day}.");
        Ok(())
    }

    /// Grade `choice` against the current question.
    pub fn submit_answer(&mut self, choice: &str) -> Result<&AnswerOutcome, QuizError> {
        self.require(Action::SubmitAnswer)?;
        let question = self.current_question().ok_or(QuizError::InvalidTransition {
            action: Action::SubmitAnswer,
            phase: self.phase,
        })?;
        let outcome = AnswerOutcome {
            choice: choice.to_string(),
            correct: question.is_correct(choice),
            correct_answer: question.correct_answer().to_string(),
        };
        if outcome.correct {
            self.score += 1;
        }
        self.answered = true;
        self.phase = Phase::ShowingResult;
        log::debug!(
            "Question {} answered, correct: {}.",
            self.current_index,
            outcome.correct
        );
        Ok(self.last_outcome.insert(outcome))
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        self.require(Action::Advance)?;
        if self.current_index < self.total_questions {
            self.current_index += 1;
            self.answered = false;
            self.phase = Phase::AwaitingAnswer;
        } else {
            self.phase = Phase::Finished;
            log::debug!("Quiz finished: {}/{}.", self.score, self.total_questions);
        }
        Ok(self.phase)
    }

    /// Clear the finished quiz.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.require(Action::Restart)?;
        *self = Self::new();
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn day(&self) -> Option<&Day> {
        self.day.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// The question being asked or whose result is shown.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::AwaitingAnswer | Phase::ShowingResult => self.questions.get(self.current_index),
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// The outcome of the current question's answer, while it is shown.
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        match self.phase {
            Phase::ShowingResult => self.last_outcome.as_ref(),
            _ => None,
        }
    }

    /// `current_index / total_questions`, once a quiz has started.
    pub fn progress_fraction(&self) -> Option<f64> {
        if self.total_questions == 0 {
            None
        } else {
            Some(self.current_index as f64 / self.total_questions as f64)
        }
    }

    pub fn report(&self) -> Option<FinalReport> {
        match self.phase {
            Phase::Finished => Some(FinalReport::new(self.score, self.total_questions)),
            _ => None,
        }
    }
}
