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

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// Quiz defaults, read from a TOML file such as:
///
/// ```toml
/// default_count = 5
/// max_count = 20
/// max_attempts_per_question = 50
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Question count offered when none is given.
    pub default_count: usize,
    /// Largest question count a quiz may ask for.
    pub max_count: usize,
    /// Duplicate-rejection budget, per requested question.
    pub max_attempts_per_question: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_count: 1,
            max_count: 10,
            max_attempts_per_question: 100,
        }
    }
}

impl QuizConfig {
    pub fn parse(text: &str) -> Fallible<Self> {
        let config: QuizConfig = toml::from_str(text)
            .map_err(|e| ErrorReport::new(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Fallible<()> {
        if self.default_count == 0 || self.default_count > self.max_count {
            return fail(format!(
                "default_count must be between 1 and max_count ({}), got {}.",
                self.max_count, self.default_count
            ));
        }
        if self.max_attempts_per_question == 0 {
            return fail("max_attempts_per_question must be at least 1.");
        }
        Ok(())
    }

    /// Check a requested question count against the configured bounds.
    pub fn check_count(&self, count: usize) -> Fallible<usize> {
        if count == 0 || count > self.max_count {
            return fail(format!(
                "Question count must be between 1 and {}, got {count}.",
                self.max_count
            ));
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() -> Fallible<()> {
        assert_eq!(QuizConfig::parse("")?, QuizConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial() -> Fallible<()> {
        let config = QuizConfig::parse("max_count = 20\ndefault_count = 5\n")?;
        assert_eq!(config.max_count, 20);
        assert_eq!(config.default_count, 5);
        assert_eq!(config.max_attempts_per_question, 100);
        Ok(())
    }

    #[test]
    fn test_unknown_key() {
        assert!(QuizConfig::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_default_above_max() {
        let err = QuizConfig::parse("default_count = 11").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error: default_count must be between 1 and max_count (10), got 11."
        );
    }

    #[test]
    fn test_zero_attempts() {
        assert!(QuizConfig::parse("max_attempts_per_question = 0").is_err());
    }

    #[test]
    fn test_check_count() -> Fallible<()> {
        let config = QuizConfig::default();
        assert_eq!(config.check_count(10)?, 10);
        assert!(config.check_count(0).is_err());
        assert!(config.check_count(11).is_err());
        Ok(())
    }
}
