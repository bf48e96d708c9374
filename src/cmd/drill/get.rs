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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;
use wordquiz_core::session::Action;
use wordquiz_core::session::Phase;
use wordquiz_core::session::SessionState;

use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::page_template;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let body = render_page(&state, &mutable, None);
    (StatusCode::OK, Html(page_template(body).into_string()))
}

/// Render the page for the session's current phase, with an optional error
/// banner.
pub fn render_page(state: &ServerState, m: &MutableState, error: Option<&str>) -> Markup {
    let session = &m.session;
    let content = match session.phase() {
        Phase::Idle => html! {
            h1 { "Vocabulary Quiz" }
        },
        Phase::AwaitingAnswer | Phase::ShowingResult => render_question(session),
        Phase::Finished => render_report(m),
    };
    // Which controls exist is decided by the phase alone.
    let controls: Vec<Markup> = session
        .phase()
        .available_actions()
        .into_iter()
        .map(|action| render_control(state, session, action))
        .collect();
    html! {
        div.root {
            @if let Some(fraction) = session.progress_fraction() {
                div.header {
                    div.progress-bar {
                        div.progress-fill style=(format!("width: {:.0}%;", fraction * 100.0)) {}
                    }
                    div.progress-label {
                        (session.current_index()) " / " (session.total_questions())
                    }
                }
            }
            @if let Some(error) = error {
                div.error { (error) }
            }
            (content)
            div.controls {
                @for control in controls {
                    (control)
                }
            }
        }
    }
}

fn render_question(session: &SessionState) -> Markup {
    let Some(question) = session.current_question() else {
        return html! {};
    };
    let outcome = session.last_outcome();
    html! {
        div.card {
            div.counter {
                "(" (session.current_index()) "/" (session.total_questions()) ")"
            }
            h1.prompt { (question.prompt()) }
            @if let Some(outcome) = outcome {
                ul.options {
                    @for option in question.options() {
                        @let correct = option == &outcome.correct_answer;
                        @let chosen = option == &outcome.choice;
                        li.correct[correct].chosen[chosen] { (option) }
                    }
                }
                @if outcome.correct {
                    div.result.success { "Correct!" }
                } @else {
                    div.result.failure {
                        "Wrong! The answer is " (outcome.correct_answer) "."
                    }
                }
            }
        }
    }
}

fn render_report(m: &MutableState) -> Markup {
    let session = &m.session;
    let Some(report) = session.report() else {
        return html! {};
    };
    let started = m
        .started_at
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default();
    let finished = m
        .finished_at
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default();
    let duration = match (m.started_at, m.finished_at) {
        (Some(start), Some(end)) => (end - start).num_seconds().to_string(),
        _ => String::new(),
    };
    html! {
        div.finished {
            h1 { "Quiz Completed" }
            div.summary {
                (report.score) " / " (report.total_questions) " correct"
            }
            h2 { "Quiz Stats" }
            div.stats {
                table {
                    tbody {
                        tr {
                            td.key { "Day" }
                            td.val { (session.day().map(|d| d.to_string()).unwrap_or_default()) }
                        }
                        tr {
                            td.key { "Correct Answers" }
                            td.val { (report.score) " / " (report.total_questions) }
                        }
                        tr {
                            td.key { "Score" }
                            td.val { (report.percentage) "%" }
                        }
                        tr {
                            td.key { "Started" }
                            td.val { (started) }
                        }
                        tr {
                            td.key { "Finished" }
                            td.val { (finished) }
                        }
                        tr {
                            td.key { "Duration (seconds)" }
                            td.val { (duration) }
                        }
                    }
                }
            }
        }
    }
}

fn render_control(state: &ServerState, session: &SessionState, action: Action) -> Markup {
    match action {
        Action::Start => render_start_form(state, session),
        Action::SubmitAnswer => render_answer_form(session),
        Action::Advance => {
            let label = if session.current_index() < session.total_questions() {
                "Next Question"
            } else {
                "See Results"
            };
            html! {
                form action="/" method="post" {
                    button id="next" type="submit" name="action" value="Next" title="Shortcut: n." { (label) }
                }
            }
        }
        Action::Restart => html! {
            form action="/" method="post" {
                input id="restart" type="submit" name="action" value="Restart" title="Clear the results and choose a new quiz.";
            }
            form action="/" method="post" {
                input id="shutdown" class="shutdown-button" type="submit" name="action" value="Shutdown" title="Shut down the server";
            }
        },
    }
}

fn render_start_form(state: &ServerState, session: &SessionState) -> Markup {
    let config = &state.quiz_config;
    let selected = session.day();
    html! {
        form.start action="/" method="post" {
            label for="day" { "Day" }
            select id="day" name="day" {
                @for day in state.bank.days() {
                    option value=(day.as_str()) selected[selected == Some(day)] { (day.as_str()) }
                }
            }
            label for="count" { "Questions" }
            input id="count" type="number" name="count" min="1" max=(config.max_count) value=(config.default_count);
            input id="start" type="submit" name="action" value="Start";
        }
    }
}

fn render_answer_form(session: &SessionState) -> Markup {
    let Some(question) = session.current_question() else {
        return html! {};
    };
    html! {
        form.answer action="/" method="post" {
            ul.options {
                @for (idx, option) in question.options().iter().enumerate() {
                    li {
                        label {
                            input type="radio" name="choice" value=(option) required[idx == 0];
                            " " (option)
                        }
                    }
                }
            }
            input id="answer" type="submit" name="action" value="Answer" title="Check the answer. Shortcuts: 1-5 to choose.";
        }
    }
}
