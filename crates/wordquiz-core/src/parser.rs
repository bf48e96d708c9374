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

use crate::types::day::Day;

/// Header names accepted for each logical column.
const DAY_COLUMNS: &[&str] = &["일자", "day"];
const WORD_COLUMNS: &[&str] = &["단어", "word"];
const MEANING_COLUMNS: &[&str] = &["뜻", "meaning"];

const SEPARATOR: char = '\t';
const BOM: char = '\u{feff}';

/// A data row of a vocabulary file. Empty cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabRow {
    pub day: Day,
    pub word: Option<String>,
    pub meaning: Option<String>,
    /// Zero-based line number in the source.
    pub line_num: usize,
}

#[derive(Debug)]
pub struct ParserError {
    pub message: String,
    pub source_path: String,
    pub line_num: usize,
}

impl ParserError {
    fn new(message: impl Into<String>, source_path: String, line_num: usize) -> Self {
        ParserError {
            message: message.into(),
            source_path,
            line_num,
        }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Location: {}:{}",
            self.message,
            self.source_path,
            self.line_num + 1
        )
    }
}

impl Error for ParserError {}

/// Parse a tab-separated vocabulary file.
///
/// The first non-blank line is the header. It must name a day, a word and a
/// meaning column; other columns are ignored.
///
/// # Arguments
/// * `source_path` - A reference path for error messages
/// * `text` - The file content
pub fn parse_vocabulary(source_path: &str, text: &str) -> Result<Vec<VocabRow>, ParserError> {
    let parser = Parser::new(source_path.to_string());
    parser.parse(text)
}

struct Columns {
    day: usize,
    word: usize,
    meaning: usize,
}

pub struct Parser {
    source_path: String,
}

impl Parser {
    pub fn new(source_path: String) -> Self {
        Parser { source_path }
    }

    pub fn parse(&self, text: &str) -> Result<Vec<VocabRow>, ParserError> {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let columns = match lines.next() {
            Some((line_num, header)) => self.read_header(header, line_num)?,
            None => return Ok(Vec::new()),
        };

        let mut rows = Vec::new();
        for (line_num, line) in lines {
            let cells: Vec<&str> = line.split(SEPARATOR).collect();
            let day = cell(&cells, columns.day).unwrap_or_default();
            rows.push(VocabRow {
                day: Day::new(day),
                word: cell(&cells, columns.word),
                meaning: cell(&cells, columns.meaning),
                line_num,
            });
        }
        Ok(rows)
    }

    fn read_header(&self, header: &str, line_num: usize) -> Result<Columns, ParserError> {
        let names: Vec<&str> = header.split(SEPARATOR).map(str::trim).collect();
        let find = |accepted: &[&str]| -> Result<usize, ParserError> {
            names
                .iter()
                .position(|name| accepted.iter().any(|a| name.eq_ignore_ascii_case(a)))
                .ok_or_else(|| {
                    ParserError::new(
                        format!("Missing column '{}' in header.", accepted[0]),
                        self.source_path.clone(),
                        line_num,
                    )
                })
        };
        Ok(Columns {
            day: find(DAY_COLUMNS)?,
            word: find(WORD_COLUMNS)?,
            meaning: find(MEANING_COLUMNS)?,
        })
    }
}

fn cell(cells: &[&str], idx: usize) -> Option<String> {
    cells
        .get(idx)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<VocabRow>, ParserError> {
        parse_vocabulary("test.tsv", text)
    }

    #[test]
    fn test_empty_string() -> Result<(), ParserError> {
        assert_eq!(parse("")?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_header_only() -> Result<(), ParserError> {
        assert_eq!(parse("일자\t단어\t뜻\n\n")?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_basic_rows() -> Result<(), ParserError> {
        let rows = parse("일자\t단어\t뜻\nDay1\tapple\t사과\nDay1\tbanana\t바나나\n")?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, Day::new("Day1"));
        assert_eq!(rows[0].word.as_deref(), Some("apple"));
        assert_eq!(rows[0].meaning.as_deref(), Some("사과"));
        assert_eq!(rows[1].line_num, 2);
        Ok(())
    }

    #[test]
    fn test_column_order_and_extra_columns() -> Result<(), ParserError> {
        let rows = parse("번호\t뜻\t단어\t일자\n1\t사과\tapple\tDay1\n")?;
        assert_eq!(rows[0].word.as_deref(), Some("apple"));
        assert_eq!(rows[0].meaning.as_deref(), Some("사과"));
        assert_eq!(rows[0].day, Day::new("Day1"));
        Ok(())
    }

    #[test]
    fn test_english_header() -> Result<(), ParserError> {
        let rows = parse("Day\tWord\tMeaning\nDay2\tfig\t무화과\n")?;
        assert_eq!(rows[0].word.as_deref(), Some("fig"));
        Ok(())
    }

    #[test]
    fn test_trims_day_and_cells() -> Result<(), ParserError> {
        let rows = parse("일자\t단어\t뜻\r\n Day1 \t apple \t사과\r\n")?;
        assert_eq!(rows[0].day.as_str(), "Day1");
        assert_eq!(rows[0].word.as_deref(), Some("apple"));
        assert_eq!(rows[0].meaning.as_deref(), Some("사과"));
        Ok(())
    }

    #[test]
    fn test_missing_cells() -> Result<(), ParserError> {
        let rows = parse("일자\t단어\t뜻\nDay1\t\t사과\nDay1\tbanana\n")?;
        assert_eq!(rows[0].word, None);
        assert_eq!(rows[1].meaning, None);
        Ok(())
    }

    #[test]
    fn test_byte_order_mark() -> Result<(), ParserError> {
        let rows = parse("\u{feff}일자\t단어\t뜻\nDay1\tapple\t사과\n")?;
        assert_eq!(rows.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_column() {
        let err = parse("\n일자\t단어\nDay1\tapple\n").unwrap_err();
        assert_eq!(err.line_num, 1);
        assert_eq!(
            err.to_string(),
            "Missing column '뜻' in header. Location: test.tsv:2"
        );
    }
}
