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

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::types::entry::Field;
use crate::types::entry::VocabEntry;

/// Number of options shown for every question, the correct one included.
pub const OPTION_COUNT: usize = 5;

/// The two question templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Show the word, ask for its meaning.
    WordToMeaning,
    /// Show the meaning, ask for the word.
    MeaningToWord,
}

impl QuestionKind {
    /// The field shown in the prompt.
    pub fn shown(self) -> Field {
        match self {
            QuestionKind::WordToMeaning => Field::Word,
            QuestionKind::MeaningToWord => Field::Meaning,
        }
    }

    /// The field the options are drawn from.
    pub fn asked(self) -> Field {
        match self {
            QuestionKind::WordToMeaning => Field::Meaning,
            QuestionKind::MeaningToWord => Field::Word,
        }
    }

    fn prompt_body(self, subject: &str) -> String {
        match self {
            QuestionKind::WordToMeaning => format!("{subject} 영단어는 어떤 의미인가요?"),
            QuestionKind::MeaningToWord => format!("{subject} 뜻을 가진 영단어는 무엇인가요?"),
        }
    }
}

/// A multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    number: usize,
    kind: QuestionKind,
    subject: String,
    prompt: String,
    correct_answer: String,
    options: Vec<String>,
}

impl Question {
    /// Build the question for `target`. `options` must already contain the
    /// correct answer exactly once.
    pub(crate) fn new(
        number: usize,
        kind: QuestionKind,
        target: &VocabEntry,
        options: Vec<String>,
    ) -> Self {
        let subject = target.field(kind.shown()).to_string();
        let prompt = format!("({number}) {}", kind.prompt_body(&subject));
        Self {
            number,
            kind,
            subject,
            prompt,
            correct_answer: target.field(kind.asked()).to_string(),
            options,
        }
    }

    /// 1-based position in its question set.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// The word or meaning being asked about.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }

    /// Identity of the question independent of its position and of the
    /// order of its options.
    pub(crate) fn key(&self) -> QuestionKey {
        QuestionKey {
            kind: self.kind,
            subject: self.subject.clone(),
            correct_answer: self.correct_answer.clone(),
            options: self.options.iter().cloned().collect(),
        }
    }
}

/// The ordered questions of one quiz.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The question at a 1-based position.
    pub fn get(&self, number: usize) -> Option<&Question> {
        number.checked_sub(1).and_then(|idx| self.0.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct QuestionKey {
    kind: QuestionKind,
    subject: String,
    correct_answer: String,
    options: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::day::Day;

    fn apple() -> VocabEntry {
        VocabEntry::new(Day::new("Day1"), "apple", "사과")
    }

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_word_to_meaning_prompt() {
        let q = Question::new(
            3,
            QuestionKind::WordToMeaning,
            &apple(),
            options(&["바나나", "사과", "체리", "대추", "달걀"]),
        );
        assert_eq!(q.prompt(), "(3) apple 영단어는 어떤 의미인가요?");
        assert_eq!(q.correct_answer(), "사과");
        assert!(q.is_correct("사과"));
        assert!(!q.is_correct("바나나"));
    }

    #[test]
    fn test_meaning_to_word_prompt() {
        let q = Question::new(
            1,
            QuestionKind::MeaningToWord,
            &apple(),
            options(&["apple", "banana", "cherry", "date", "egg"]),
        );
        assert_eq!(q.prompt(), "(1) 사과 뜻을 가진 영단어는 무엇인가요?");
        assert_eq!(q.correct_answer(), "apple");
    }

    #[test]
    fn test_key_ignores_number_and_order() {
        let a = Question::new(
            1,
            QuestionKind::MeaningToWord,
            &apple(),
            options(&["apple", "banana", "cherry", "date", "egg"]),
        );
        let b = Question::new(
            2,
            QuestionKind::MeaningToWord,
            &apple(),
            options(&["egg", "date", "cherry", "banana", "apple"]),
        );
        assert_eq!(a.key(), b.key());
        let c = Question::new(
            2,
            QuestionKind::WordToMeaning,
            &apple(),
            options(&["사과", "바나나", "체리", "대추", "달걀"]),
        );
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_set_is_one_based() {
        let q = Question::new(
            1,
            QuestionKind::MeaningToWord,
            &apple(),
            options(&["apple", "banana", "cherry", "date", "egg"]),
        );
        let set = QuestionSet::new(vec![q.clone()]);
        assert_eq!(set.get(0), None);
        assert_eq!(set.get(1), Some(&q));
        assert_eq!(set.get(2), None);
    }
}
