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

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::QuizError;
use crate::parser::VocabRow;
use crate::types::day::Day;
use crate::types::entry::Field;
use crate::types::entry::VocabEntry;
use crate::types::question::OPTION_COUNT;

/// Read-only view over a vocabulary table, partitioned by day.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    /// Every day label seen in the source, in first-seen order.
    days: Vec<Day>,
    /// Rows that have both a word and a meaning.
    entries: Vec<VocabEntry>,
}

/// Per-day counts, for listing and checking a vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day: Day,
    pub entries: usize,
    pub distinct_words: usize,
    pub distinct_meanings: usize,
}

impl DaySummary {
    /// Whether every question kind can be asked for any entry of the day.
    pub fn is_quizzable(&self) -> bool {
        self.distinct_words >= OPTION_COUNT && self.distinct_meanings >= OPTION_COUNT
    }
}

impl WordBank {
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        let mut days: Vec<Day> = Vec::new();
        for entry in entries.iter() {
            if !days.contains(entry.day()) {
                days.push(entry.day().clone());
            }
        }
        Self { days, entries }
    }

    /// Build a bank from parsed rows. Rows missing a word or a meaning are
    /// dropped, but their day is still listed.
    pub fn from_rows(rows: Vec<VocabRow>) -> Self {
        let mut days: Vec<Day> = Vec::new();
        let mut entries = Vec::new();
        for row in rows.into_iter() {
            if row.day.is_blank() {
                log::warn!("Skipping line {}: no day.", row.line_num + 1);
                continue;
            }
            if !days.contains(&row.day) {
                days.push(row.day.clone());
            }
            match (row.word, row.meaning) {
                (Some(word), Some(meaning)) => {
                    entries.push(VocabEntry::new(row.day, word, meaning));
                }
                _ => {
                    log::warn!(
                        "Skipping line {}: missing word or meaning.",
                        row.line_num + 1
                    );
                }
            }
        }
        log::debug!(
            "Loaded {} entries across {} days.",
            entries.len(),
            days.len()
        );
        Self { days, entries }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All usable entries for `day`, in source order.
    pub fn entries_for_day(&self, day: &Day) -> Result<Vec<&VocabEntry>, QuizError> {
        let entries: Vec<&VocabEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.day() == day)
            .collect();
        if entries.is_empty() {
            return Err(QuizError::EmptyDay { day: day.clone() });
        }
        Ok(entries)
    }

    pub fn sample_one<R: Rng + ?Sized>(
        &self,
        day: &Day,
        rng: &mut R,
    ) -> Result<&VocabEntry, QuizError> {
        let entries = self.entries_for_day(day)?;
        entries
            .choose(rng)
            .copied()
            .ok_or_else(|| QuizError::EmptyDay { day: day.clone() })
    }

    /// Sample `k` distinct entries of `day`, never returning `excluding`.
    pub fn sample_many<R: Rng + ?Sized>(
        &self,
        day: &Day,
        k: usize,
        excluding: Option<&VocabEntry>,
        rng: &mut R,
    ) -> Result<Vec<&VocabEntry>, QuizError> {
        let candidates: Vec<&VocabEntry> = self
            .entries_for_day(day)?
            .into_iter()
            .filter(|entry| excluding.is_none_or(|excluded| !std::ptr::eq(*entry, excluded)))
            .collect();
        if candidates.len() < k {
            return Err(QuizError::InsufficientPool {
                day: day.clone(),
                field: None,
                needed: k,
                available: candidates.len(),
            });
        }
        Ok(candidates.choose_multiple(rng, k).copied().collect())
    }

    /// The distinct values of `field` for `day`, in source order.
    pub fn distinct_values(&self, day: &Day, field: Field) -> Result<Vec<&str>, QuizError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let values = self
            .entries_for_day(day)?
            .into_iter()
            .map(|entry| entry.field(field))
            .filter(|value| seen.insert(*value))
            .collect();
        Ok(values)
    }

    /// Counts for every listed day, including days with no usable entries.
    pub fn summaries(&self) -> Vec<DaySummary> {
        self.days
            .iter()
            .map(|day| {
                let count = |field: Field| {
                    self.distinct_values(day, field)
                        .map(|values| values.len())
                        .unwrap_or(0)
                };
                DaySummary {
                    day: day.clone(),
                    entries: self.entries.iter().filter(|e| e.day() == day).count(),
                    distinct_words: count(Field::Word),
                    distinct_meanings: count(Field::Meaning),
                }
            })
            .collect()
    }
}
