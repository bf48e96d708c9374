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

use std::process::exit;

use clap::Parser;
use tokio::spawn;
use wordquiz_core::error::Fallible;

use crate::cmd::check::check_vocabulary;
use crate::cmd::days::DaysFormat;
use crate::cmd::days::list_days;
use crate::cmd::drill::server::ServerConfig;
use crate::cmd::drill::server::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Take quizzes through a web interface.
    Drill {
        /// Path to the vocabulary file (tab-separated, with 일자/단어/뜻 columns).
        file: String,
        /// Start a quiz for this day right away.
        #[arg(long)]
        day: Option<String>,
        /// Number of questions for the quiz started with --day.
        #[arg(long)]
        count: Option<usize>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
        /// Path to a TOML config file. By default, wordquiz.toml next to the vocabulary file is used if present.
        #[arg(long)]
        config: Option<String>,
        /// Seed for question generation, to make quizzes reproducible.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that a vocabulary file can be quizzed.
    Check {
        /// Path to the vocabulary file.
        file: String,
        /// Path to a TOML config file to validate along with the vocabulary.
        #[arg(long)]
        config: Option<String>,
    },
    /// List the days of a vocabulary file.
    Days {
        /// Path to the vocabulary file.
        file: String,
        /// Which output format to use.
        #[arg(long, default_value_t = DaysFormat::Text)]
        format: DaysFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            file,
            day,
            count,
            host,
            port,
            open_browser,
            config,
            seed,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                path: file,
                config_path: config,
                host,
                port,
                day,
                count,
                seed,
            };
            start_server(config).await
        }
        Command::Check { file, config } => check_vocabulary(file, config),
        Command::Days { file, format } => list_days(file, format),
    }
}
