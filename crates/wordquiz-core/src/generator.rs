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

//! Builds randomized multiple-choice quizzes from a [`WordBank`].

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::WordBank;
use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::types::day::Day;
use crate::types::entry::Field;
use crate::types::question::OPTION_COUNT;
use crate::types::question::Question;
use crate::types::question::QuestionKind;
use crate::types::question::QuestionSet;

const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

#[derive(Debug, Clone, Copy)]
pub struct Generator {
    max_attempts_per_question: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

/// Distinct candidate values of one field for the day being generated.
struct Pool<'a> {
    field: Field,
    values: Vec<&'a str>,
}

impl Generator {
    pub fn new(max_attempts_per_question: usize) -> Self {
        Self {
            max_attempts_per_question: max_attempts_per_question.max(1),
        }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.max_attempts_per_question)
    }

    /// Generate `count` unique questions for `day`.
    ///
    /// Each question picks a kind uniformly at random, a random target
    /// entry, and four distractors drawn without replacement from the
    /// day's distinct values of the answer field. A distractor is never an
    /// answer of any entry that shares the target's prompt subject, so
    /// exactly one option fits the prompt. Candidates identical to an
    /// accepted question, or whose subject leaves too few distractors, are
    /// discarded; after `count * max_attempts_per_question` candidates
    /// generation gives up.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        bank: &WordBank,
        day: &Day,
        count: usize,
        rng: &mut R,
    ) -> Result<QuestionSet, QuizError> {
        if count == 0 {
            return Err(QuizError::InvalidQuestionCount { count });
        }
        let words = pool(bank, day, Field::Word)?;
        let meanings = pool(bank, day, Field::Meaning)?;

        let max_attempts = count.saturating_mul(self.max_attempts_per_question);
        let mut questions: Vec<Question> = Vec::with_capacity(count);
        let mut seen = HashSet::new();
        let mut attempts = 0;
        // The last subject that could not supply enough distractors.
        let mut shortfall: Option<QuizError> = None;
        while questions.len() < count {
            if attempts == max_attempts {
                if questions.is_empty() {
                    if let Some(err) = shortfall {
                        return Err(err);
                    }
                }
                return Err(QuizError::DuplicateQuestionExhaustion {
                    requested: count,
                    generated: questions.len(),
                    attempts,
                });
            }
            attempts += 1;

            let kind = if rng.gen_bool(0.5) {
                QuestionKind::WordToMeaning
            } else {
                QuestionKind::MeaningToWord
            };
            let pool = match kind.asked() {
                Field::Word => &words,
                Field::Meaning => &meanings,
            };
            let question = match candidate(bank, day, kind, pool, questions.len() + 1, rng) {
                Ok(question) => question,
                Err(err @ QuizError::InsufficientPool { .. }) => {
                    log::trace!("Rejected candidate: {err}");
                    shortfall = Some(err);
                    continue;
                }
                Err(err) => return Err(err),
            };
            if seen.insert(question.key()) {
                questions.push(question);
            } else {
                log::trace!("Rejected duplicate question: {}", question.prompt());
            }
        }
        log::debug!("Generated {count} questions for {day} in {attempts} attempts.");
        Ok(QuestionSet::new(questions))
    }
}

fn pool<'a>(bank: &'a WordBank, day: &Day, field: Field) -> Result<Pool<'a>, QuizError> {
    let values = bank.distinct_values(day, field)?;
    if values.len() < OPTION_COUNT {
        return Err(QuizError::InsufficientPool {
            day: day.clone(),
            field: Some(field),
            needed: OPTION_COUNT,
            available: values.len(),
        });
    }
    Ok(Pool { field, values })
}

fn candidate<R: Rng + ?Sized>(
    bank: &WordBank,
    day: &Day,
    kind: QuestionKind,
    pool: &Pool<'_>,
    number: usize,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let target = bank.sample_one(day, rng)?;
    let correct = target.field(pool.field);
    let subject = target.field(kind.shown());
    // Every answer the prompt admits, the correct one included.
    let admitted: HashSet<&str> = bank
        .entries_for_day(day)?
        .into_iter()
        .filter(|entry| entry.field(kind.shown()) == subject)
        .map(|entry| entry.field(pool.field))
        .collect();
    let others: Vec<&str> = pool
        .values
        .iter()
        .copied()
        .filter(|value| !admitted.contains(value))
        .collect();
    if others.len() < DISTRACTOR_COUNT {
        return Err(QuizError::InsufficientPool {
            day: day.clone(),
            field: Some(pool.field),
            needed: DISTRACTOR_COUNT,
            available: others.len(),
        });
    }
    let mut options: Vec<String> = others
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|value| value.to_string())
        .collect();
    options.push(correct.to_string());
    options.shuffle(rng);
    Ok(Question::new(number, kind, target, options))
}
