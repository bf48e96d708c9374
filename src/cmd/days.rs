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

use clap::ValueEnum;
use wordquiz_core::bank::DaySummary;
use wordquiz_core::error::Fallible;

use crate::vocabulary::Vocabulary;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum DaysFormat {
    /// One line per day.
    Text,
    /// A JSON array of day summaries.
    Json,
}

impl Display for DaysFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DaysFormat::Text => write!(f, "text"),
            DaysFormat::Json => write!(f, "json"),
        }
    }
}

pub fn list_days(path: String, format: DaysFormat) -> Fallible<()> {
    let vocabulary = Vocabulary::load(&path, None)?;
    let summaries = vocabulary.bank.summaries();
    println!("{}", render_days(&summaries, format)?);
    Ok(())
}

fn render_days(summaries: &[DaySummary], format: DaysFormat) -> Fallible<String> {
    match format {
        DaysFormat::Text => {
            let lines: Vec<String> = summaries
                .iter()
                .map(|s| format!("{}\t{}", s.day, s.entries))
                .collect();
            Ok(lines.join("\n"))
        }
        DaysFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
    }
}
