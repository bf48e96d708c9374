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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use chrono::Local;
use serde::Deserialize;
use wordquiz_core::error::ErrorReport;
use wordquiz_core::error::Fallible;
use wordquiz_core::error::fail;
use wordquiz_core::session::Phase;
use wordquiz_core::types::day::Day;

use crate::cmd::drill::get::render_page;
use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::page_template;

#[derive(Deserialize)]
pub struct ActionForm {
    action: String,
    day: Option<String>,
    count: Option<String>,
    choice: Option<String>,
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<ActionForm>) -> Response {
    if form.action == "Shutdown" {
        return shutdown(&state);
    }
    let mut mutable = state.mutable.lock().unwrap();
    match apply(&state, &mut mutable, &form) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            log::debug!("Rejected action '{}': {e}", form.action);
            let body = render_page(&state, &mutable, Some(e.message()));
            (
                StatusCode::BAD_REQUEST,
                Html(page_template(body).into_string()),
            )
                .into_response()
        }
    }
}

fn apply(state: &ServerState, m: &mut MutableState, form: &ActionForm) -> Fallible<()> {
    match form.action.as_str() {
        "Start" => {
            let Some(day) = form.day.as_deref() else {
                return fail("Choose a day.");
            };
            let count = parse_count(state, form.count.as_deref())?;
            let MutableState { session, rng, .. } = m;
            session.start(&state.generator, &state.bank, &Day::new(day), count, rng)?;
            m.started_at = Some(Local::now());
            m.finished_at = None;
        }
        "Answer" => {
            let Some(choice) = form.choice.as_deref() else {
                return fail("Choose an option.");
            };
            m.session.submit_answer(choice)?;
        }
        "Next" => {
            if m.session.advance()? == Phase::Finished {
                m.finished_at = Some(Local::now());
                m.completed += 1;
            }
        }
        "Restart" => {
            m.session.restart()?;
            m.started_at = None;
            m.finished_at = None;
        }
        other => return fail(format!("Unknown action: {other}")),
    }
    Ok(())
}

fn parse_count(state: &ServerState, count: Option<&str>) -> Fallible<usize> {
    let config = &state.quiz_config;
    let count = match count.map(str::trim) {
        None | Some("") => config.default_count,
        Some(text) => text
            .parse::<usize>()
            .map_err(|_| ErrorReport::new(format!("Invalid question count: {text}")))?,
    };
    config.check_count(count)
}

fn shutdown(state: &ServerState) -> Response {
    if let Some(tx) = state.shutdown_tx.lock().unwrap().take() {
        let _ = tx.send(());
    }
    let body = maud::html! {
        div.finished {
            h1 { "Goodbye" }
            p { "The server is shutting down." }
        }
    };
    (StatusCode::OK, Html(page_template(body).into_string())).into_response()
}
