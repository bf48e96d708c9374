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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use wordquiz_core::bank::WordBank;
use wordquiz_core::config::QuizConfig;
use wordquiz_core::error::Fallible;
use wordquiz_core::error::fail;
use wordquiz_core::parser::parse_vocabulary;

/// Name of the config file looked up next to the vocabulary file.
pub const CONFIG_FILE_NAME: &str = "wordquiz.toml";

/// A loaded vocabulary file and the quiz settings that apply to it.
pub struct Vocabulary {
    pub path: PathBuf,
    pub bank: WordBank,
    pub config: QuizConfig,
}

impl Vocabulary {
    pub fn load(path: &str, config_path: Option<&str>) -> Fallible<Self> {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return fail("vocabulary file does not exist.");
        }
        let text = read_to_string(&path)?;
        let rows = parse_vocabulary(&path.display().to_string(), &text)?;
        let bank = WordBank::from_rows(rows);
        log::info!(
            "Loaded {} entries for {} days from {}.",
            bank.len(),
            bank.days().len(),
            path.display()
        );
        let config = load_config(&path, config_path)?;
        Ok(Self { path, bank, config })
    }
}

fn load_config(vocabulary_path: &Path, config_path: Option<&str>) -> Fallible<QuizConfig> {
    let path: PathBuf = match config_path {
        Some(explicit) => {
            let explicit = PathBuf::from(explicit);
            if !explicit.is_file() {
                return fail("config file does not exist.");
            }
            explicit
        }
        None => {
            let sibling = vocabulary_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(CONFIG_FILE_NAME);
            if !sibling.is_file() {
                log::debug!("No config file found, using defaults.");
                return Ok(QuizConfig::default());
            }
            sibling
        }
    };
    log::debug!("Reading config from {}.", path.display());
    QuizConfig::parse(&read_to_string(&path)?)
}
