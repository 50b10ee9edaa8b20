//! HTML rendering for every page of the dashboard.
//!
//! Pages are leptos views rendered to a string on the server; text and
//! attribute values are escaped by the renderer.

pub mod layout;
pub mod login;
pub mod qr;
pub mod urls;
pub mod users;

use leptos::prelude::*;

pub use layout::{dashboard_page, render_document, Nav};

/// Inline notice rendered above a form or table.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Error(String),
    Success(String),
}

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let (class, message) = match notice {
        Notice::Error(message) => ("notice error", message),
        Notice::Success(message) => ("notice success", message),
    };
    view! { <div class=class>{message}</div> }
}

/// Percent-encodes a value for use as a single path segment or query value.
pub fn encode_component(input: &str) -> String {
    ::url::form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

pub fn error_page(status: u16, message: &str) -> String {
    let title = format!("Error {status}");
    let heading = title.clone();
    let message = message.to_string();
    render_document(&title, move || {
        view! {
            <main class="centered">
                <div class="card">
                    <h1>{heading}</h1>
                    <p>{message}</p>
                    <p><a href="/dashboard">"Back to the dashboard"</a></p>
                </div>
            </main>
        }
    })
}

pub fn home(nav: &Nav, subject: &str) -> String {
    let welcome = format!("Welcome to the Skylapp dashboard, {subject}. Select an option from the sidebar.");
    dashboard_page(nav, "Dashboard", move || {
        view! {
            <h1>"Dashboard"</h1>
            <p class="muted">{welcome}</p>
        }
    })
}
