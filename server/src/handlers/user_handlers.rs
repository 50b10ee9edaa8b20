use axum::{
    extract::{Form, Path, State},
    response::Html,
    Extension,
};
use serde::Deserialize;
use skylapp_client::NewUser;

use super::{describe, FORBIDDEN};
use crate::models::session::Session;
use crate::state::AppState;
use crate::views::{users::manage_users_page, Nav, Notice};

const MANAGE_USERS: &str = "/dashboard/manage-users";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPayload {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

async fn users_page(state: &AppState, session: &Session, form: &NewUser, notice: Option<Notice>) -> Html<String> {
    let nav = Nav::new(MANAGE_USERS, session.is_admin());
    let html = match state.api.users(&session.token).await {
        Ok(users) => manage_users_page(&nav, Ok(users.as_slice()), form, notice),
        Err(e) => {
            tracing::error!("error fetching users: {}", e);
            let message = describe(&e, "Failed to fetch users", FORBIDDEN);
            manage_users_page(&nav, Err(message), form, notice)
        }
    };
    Html(html)
}

pub async fn manage_users(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Html<String> {
    users_page(&state, &session, &NewUser::default(), None).await
}

pub async fn create_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(payload): Form<NewUserPayload>,
) -> Html<String> {
    let user = NewUser {
        first_name: payload.first_name.trim().to_string(),
        last_name: payload.last_name.trim().to_string(),
        email: payload.email.trim().to_string(),
        password: payload.password,
    };

    if user.email.is_empty() || user.password.is_empty() {
        let notice = Notice::Error("Email and password are required.".to_string());
        return users_page(&state, &session, &user, Some(notice)).await;
    }

    match state.api.register_user(&session.token, &user).await {
        Ok(()) => {
            tracing::info!("{} created user {}", session.subject(), user.email);
            let notice = Notice::Success("User created successfully!".to_string());
            users_page(&state, &session, &NewUser::default(), Some(notice)).await
        }
        Err(e) => {
            tracing::error!("error creating user {}: {}", user.email, e);
            let notice = Notice::Error(describe(&e, "Failed to create user", FORBIDDEN));
            users_page(&state, &session, &user, Some(notice)).await
        }
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Html<String> {
    let notice = match state.api.delete_user(&session.token, id).await {
        Ok(()) => {
            tracing::info!("{} deleted user {}", session.subject(), id);
            Notice::Success("User deleted successfully!".to_string())
        }
        Err(e) => {
            tracing::error!("error deleting user {}: {}", id, e);
            Notice::Error(describe(&e, "Failed to delete user", FORBIDDEN))
        }
    };
    users_page(&state, &session, &NewUser::default(), Some(notice)).await
}
