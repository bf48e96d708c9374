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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;

    use portpicker::pick_unused_port;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reqwest::StatusCode;
    use tempfile::tempdir;
    use tokio::spawn;
    use wordquiz_core::bank::WordBank;
    use wordquiz_core::error::ErrorReport;
    use wordquiz_core::error::Fallible;
    use wordquiz_core::generator::Generator;
    use wordquiz_core::parser::parse_vocabulary;
    use wordquiz_core::types::day::Day;
    use wordquiz_core::types::question::QuestionSet;

    use crate::cmd::drill::server::ServerConfig;
    use crate::cmd::drill::server::start_server;
    use crate::helper::write_test_vocabulary;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";
    const TEST_SEED: u64 = 42;

    fn server_config(path: String, port: u16) -> ServerConfig {
        ServerConfig {
            path,
            config_path: None,
            host: TEST_HOST.to_string(),
            port,
            day: None,
            count: None,
            seed: Some(TEST_SEED),
        }
    }

    /// The questions a server seeded with `TEST_SEED` will ask for the
    /// first quiz it generates.
    fn expected_questions(path: &str, day: &str, count: usize) -> Fallible<QuestionSet> {
        let rows = parse_vocabulary(path, &read_to_string(path)?)?;
        let bank = WordBank::from_rows(rows);
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let questions = Generator::default().generate(&bank, &Day::new(day), count, &mut rng)?;
        Ok(questions)
    }

    fn http_error(err: reqwest::Error) -> ErrorReport {
        ErrorReport::new(format!("HTTP error: {err}"))
    }

    async fn fetch(port: u16, path: &str) -> Fallible<reqwest::Response> {
        reqwest::get(format!("http://{TEST_HOST}:{port}{path}"))
            .await
            .map_err(http_error)
    }

    async fn post(port: u16, form: &[(&str, &str)]) -> Fallible<(StatusCode, String)> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(form)
            .send()
            .await
            .map_err(http_error)?;
        let status = response.status();
        let html = response.text().await.map_err(http_error)?;
        Ok((status, html))
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_file() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = server_config("./derpherp.tsv".to_string(), port);
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: vocabulary file does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_start_server_with_no_entries() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = dir.path().join("empty.tsv");
        write(&path, "일자\t단어\t뜻\n")?;
        let config = server_config(path.display().to_string(), port);
        start_server(config).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_start_server_with_empty_day() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = write_test_vocabulary(dir.path())?;
        let mut config = server_config(path, port);
        config.day = Some("Day3".to_string());
        let result = start_server(config).await;
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: No data available for Day3");
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = write_test_vocabulary(dir.path())?;
        let questions = expected_questions(&path, "Day1", 3)?;
        let config = server_config(path, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Hit the `style.css` endpoint.
        let response = fetch(port, "/style.css").await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the `script.js` endpoint.
        let response = fetch(port, "/script.js").await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // Hit the not found endpoint.
        let response = fetch(port, "/herp-derp").await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The idle page offers every day.
        let response = fetch(port, "/").await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await.map_err(http_error)?;
        assert!(html.contains("Vocabulary Quiz"));
        assert!(html.contains("value=\"Day1\""));
        assert!(html.contains("value=\"Day2\""));
        assert!(html.contains("value=\"Start\""));

        // Start a three question quiz.
        let (status, html) =
            post(port, &[("action", "Start"), ("day", "Day1"), ("count", "3")]).await?;
        assert!(status.is_success());
        let first = questions.get(1).unwrap();
        assert!(html.contains(first.prompt()));
        assert!(html.contains("1 / 3"));
        assert!(html.contains("value=\"Answer\""));

        // Answer correctly.
        let (status, html) =
            post(port, &[("action", "Answer"), ("choice", first.correct_answer())]).await?;
        assert!(status.is_success());
        assert!(html.contains("Correct!"));
        assert!(html.contains("Next Question"));

        // A second answer to the same question is rejected.
        let (status, html) =
            post(port, &[("action", "Answer"), ("choice", first.correct_answer())]).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Cannot submit an answer while the quiz is showing a result"));

        // Move on.
        let (status, html) = post(port, &[("action", "Next")]).await?;
        assert!(status.is_success());
        let second = questions.get(2).unwrap();
        assert!(html.contains("(2) "));
        assert!(html.contains(second.prompt()));

        // Answer correctly again.
        let (status, _) =
            post(port, &[("action", "Answer"), ("choice", second.correct_answer())]).await?;
        assert!(status.is_success());
        let (status, _) = post(port, &[("action", "Next")]).await?;
        assert!(status.is_success());

        // Answer the last question wrong.
        let third = questions.get(3).unwrap();
        let wrong = third
            .options()
            .iter()
            .find(|option| !third.is_correct(option))
            .unwrap();
        let (status, html) = post(port, &[("action", "Answer"), ("choice", wrong.as_str())]).await?;
        assert!(status.is_success());
        assert!(html.contains("Wrong! The answer is"));
        assert!(html.contains("See Results"));

        // Finish.
        let (status, html) = post(port, &[("action", "Next")]).await?;
        assert!(status.is_success());
        assert!(html.contains("Quiz Completed"));
        assert!(html.contains("2 / 3"));
        assert!(html.contains("66.67%"));

        // Restart goes back to day selection.
        let (status, html) = post(port, &[("action", "Restart")]).await?;
        assert!(status.is_success());
        assert!(html.contains("Vocabulary Quiz"));
        assert!(html.contains("value=\"Start\""));

        // Shut down.
        let (status, html) = post(port, &[("action", "Shutdown")]).await?;
        assert!(status.is_success());
        assert!(html.contains("Goodbye"));

        Ok(())
    }

    #[tokio::test]
    async fn test_start_on_empty_day() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = write_test_vocabulary(dir.path())?;
        let config = server_config(path, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let (status, html) =
            post(port, &[("action", "Start"), ("day", "Day3"), ("count", "1")]).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("No data available for Day3"));
        // Still idle.
        assert!(html.contains("value=\"Start\""));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_count() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = write_test_vocabulary(dir.path())?;
        let config = server_config(path, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let (status, html) =
            post(port, &[("action", "Start"), ("day", "Day1"), ("count", "11")]).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Question count must be between 1 and 10, got 11."));

        let (status, html) =
            post(port, &[("action", "Start"), ("day", "Day1"), ("count", "many")]).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Invalid question count: many"));

        Ok(())
    }

    #[tokio::test]
    async fn test_restart_while_answering() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = write_test_vocabulary(dir.path())?;
        let config = server_config(path, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let (status, _) =
            post(port, &[("action", "Start"), ("day", "Day2"), ("count", "2")]).await?;
        assert!(status.is_success());

        let (status, html) = post(port, &[("action", "Restart")]).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Cannot restart while the quiz is awaiting an answer"));

        let (status, html) = post(port, &[("action", "Skip")]).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Unknown action: Skip"));

        Ok(())
    }

    #[tokio::test]
    async fn test_day_flag_starts_quiz() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempdir()?;
        let path = write_test_vocabulary(dir.path())?;
        let questions = expected_questions(&path, "Day2", 2)?;
        let mut config = server_config(path, port);
        config.day = Some("Day2".to_string());
        config.count = Some(2);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let response = fetch(port, "/").await?;
        assert!(response.status().is_success());
        let html = response.text().await.map_err(http_error)?;
        assert!(html.contains(questions.get(1).unwrap().prompt()));
        assert!(html.contains("1 / 2"));

        Ok(())
    }
}
