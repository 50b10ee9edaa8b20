use leptos::prelude::*;

use super::{render_document, Notice, NoticeBanner};

pub fn login_page(email: &str, error: Option<&str>) -> String {
    let email = email.to_string();
    let error = error.map(|message| Notice::Error(message.to_string()));

    render_document("Login", move || {
        view! {
            <main class="centered">
                <form class="card" method="post" action="/">
                    <h1>"Skylapp Login"</h1>
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        required=true
                        value=email
                        placeholder="sky@gmail.com"
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        required=true
                        placeholder="superskylab"
                    />
                    {error.map(|notice| view! { <NoticeBanner notice=notice/> })}
                    <button type="submit">"Sign in"</button>
                </form>
            </main>
        }
    })
}

/// Shown after logout; the handler adds a `Refresh` header back to `/`.
pub fn logged_out_page() -> String {
    render_document("Logged out", || {
        view! {
            <main class="centered">
                <div class="card">
                    <h1>"You have been successfully logged out."</h1>
                    <p class="muted">"Redirecting to the login page..."</p>
                </div>
            </main>
        }
    })
}
