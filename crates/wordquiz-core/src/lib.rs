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

//! wordquiz-core: question generation and quiz sessions for day-based
//! vocabulary lists.
//!
//! This library provides:
//! - Parsing tab-separated vocabulary files
//! - A word bank partitioned by study day
//! - Randomized multiple-choice question generation
//! - The quiz session state machine and its final report

pub mod bank;
pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use bank::{DaySummary, WordBank};
pub use config::QuizConfig;
pub use error::{ErrorReport, Fallible, QuizError, fail};
pub use generator::Generator;
pub use parser::parse_vocabulary;
pub use session::{Action, AnswerOutcome, FinalReport, Phase, SessionState};
pub use types::day::Day;
pub use types::entry::{Field, VocabEntry};
pub use types::question::{OPTION_COUNT, Question, QuestionKind, QuestionSet};
