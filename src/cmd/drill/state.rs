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

use std::sync::Arc;
use std::sync::Mutex;

use chrono::DateTime;
use chrono::Local;
use rand::rngs::StdRng;
use tokio::sync::oneshot::Sender;
use wordquiz_core::bank::WordBank;
use wordquiz_core::config::QuizConfig;
use wordquiz_core::generator::Generator;
use wordquiz_core::session::SessionState;

#[derive(Clone)]
pub struct ServerState {
    pub bank: Arc<WordBank>,
    pub quiz_config: QuizConfig,
    pub generator: Generator,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

pub struct MutableState {
    pub session: SessionState,
    pub rng: StdRng,
    /// When the current quiz was started.
    pub started_at: Option<DateTime<Local>>,
    /// When the current quiz was finished.
    pub finished_at: Option<DateTime<Local>>,
    /// Number of quizzes finished since the server started.
    pub completed: usize,
}
