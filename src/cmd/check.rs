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

use wordquiz_core::bank::DaySummary;
use wordquiz_core::error::Fallible;
use wordquiz_core::error::fail;
use wordquiz_core::types::question::OPTION_COUNT;

use crate::vocabulary::Vocabulary;

/// Parse a vocabulary file and report the days that cannot be quizzed.
pub fn check_vocabulary(path: String, config: Option<String>) -> Fallible<()> {
    let vocabulary = Vocabulary::load(&path, config.as_deref())?;
    let summaries = vocabulary.bank.summaries();
    let problems = find_problems(&summaries);
    for problem in problems.iter() {
        eprintln!("{problem}");
    }
    let quizzable = summaries.iter().filter(|s| s.is_quizzable()).count();
    if quizzable == 0 {
        return fail("no day has enough entries to build a quiz.");
    }
    println!(
        "{} of {} days can be quizzed ({} entries).",
        quizzable,
        summaries.len(),
        vocabulary.bank.len()
    );
    Ok(())
}

fn find_problems(summaries: &[DaySummary]) -> Vec<String> {
    let mut problems = Vec::new();
    for summary in summaries.iter() {
        if summary.entries == 0 {
            problems.push(format!("{}: no usable entries.", summary.day));
            continue;
        }
        if summary.distinct_words < OPTION_COUNT {
            problems.push(format!(
                "{}: {} distinct words, at least {OPTION_COUNT} needed.",
                summary.day, summary.distinct_words
            ));
        }
        if summary.distinct_meanings < OPTION_COUNT {
            problems.push(format!(
                "{}: {} distinct meanings, at least {OPTION_COUNT} needed.",
                summary.day, summary.distinct_meanings
            ));
        }
    }
    problems
}
