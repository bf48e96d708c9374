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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::types::day::Day;

/// One row of the vocabulary table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabEntry {
    day: Day,
    word: String,
    meaning: String,
}

/// Selects one of the two quizzable columns of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Word,
    Meaning,
}

impl VocabEntry {
    pub fn new(day: Day, word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            day,
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    pub fn day(&self) -> &Day {
        &self.day
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Word => &self.word,
            Field::Meaning => &self.meaning,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Word => write!(f, "word"),
            Field::Meaning => write!(f, "meaning"),
        }
    }
}
