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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::parser::ParserError;
use crate::session::Action;
use crate::session::Phase;
use crate::types::day::Day;
use crate::types::entry::Field;

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value:#?}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value:#?}"),
        }
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport {
            message: format!("TOML error: {value}"),
        }
    }
}

impl From<ParserError> for ErrorReport {
    fn from(value: ParserError) -> Self {
        ErrorReport {
            message: format!("Parse error: {value}"),
        }
    }
}

impl From<QuizError> for ErrorReport {
    fn from(value: QuizError) -> Self {
        ErrorReport {
            message: value.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {
    fn description(&self) -> &str {
        &self.message
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}

/// Failures of question generation and of session transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizError {
    /// The day has no usable rows.
    EmptyDay { day: Day },
    /// The day has fewer candidates than sampling needs. `field` is `None`
    /// when whole entries were being sampled.
    InsufficientPool {
        day: Day,
        field: Option<Field>,
        needed: usize,
        available: usize,
    },
    /// An action was attempted in a phase that does not allow it.
    InvalidTransition { action: Action, phase: Phase },
    /// The duplicate-rejection loop ran out of attempts.
    DuplicateQuestionExhaustion {
        requested: usize,
        generated: usize,
        attempts: usize,
    },
    /// A quiz must have at least one question.
    InvalidQuestionCount { count: usize },
}

impl Display for QuizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::EmptyDay { day } => write!(f, "No data available for {day}"),
            QuizError::InsufficientPool {
                day,
                field,
                needed,
                available,
            } => match field {
                Some(field) => write!(
                    f,
                    "Not enough distinct {field} values for {day}: needed {needed}, found {available}"
                ),
                None => write!(
                    f,
                    "Not enough entries for {day}: needed {needed}, found {available}"
                ),
            },
            QuizError::InvalidTransition { action, phase } => {
                write!(f, "Cannot {action} while the quiz is {phase}")
            }
            QuizError::DuplicateQuestionExhaustion {
                requested,
                generated,
                attempts,
            } => write!(
                f,
                "Only {generated} of {requested} unique questions could be generated after {attempts} attempts"
            ),
            QuizError::InvalidQuestionCount { count } => {
                write!(f, "Invalid question count: {count}")
            }
        }
    }
}

impl Error for QuizError {}
