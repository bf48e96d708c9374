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

use std::fs::write;
use std::path::Path;

use wordquiz_core::error::Fallible;

/// Day1 holds six entries, Day2 five, and Day3 only rows without a word.
pub const TEST_VOCABULARY: &str = "\
일자\t단어\t뜻
Day1\tapple\t사과
Day1\tbanana\t바나나
Day1\tcherry\t체리
Day1\tdate\t대추
Day1\tegg\t달걀
Day1\tfig\t무화과
 Day2 \tgrape\t포도
Day2\thoney\t꿀
Day2\tice\t얼음
Day2\tjam\t잼
Day2\tkiwi\t키위
Day3\t\t빈칸
";

/// Write the test vocabulary into `dir` and return its path.
pub fn write_test_vocabulary(dir: &Path) -> Fallible<String> {
    let path = dir.join("words.tsv");
    write(&path, TEST_VOCABULARY)?;
    Ok(path.display().to_string())
}
