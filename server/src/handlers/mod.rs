pub mod auth_handlers;
pub mod jwt;
pub mod qr_handlers;
pub mod url_handlers;
pub mod user_handlers;

use skylapp_client::ApiError;

/// Turns a failed API call into the single line shown next to the form or table.
///
/// `context` prefixes bare status failures ("Failed to fetch URLs: 500 Internal Server Error");
/// `unauthorized` replaces 401/403 responses.
pub fn describe(err: &ApiError, context: &str, unauthorized: &str) -> String {
    match err {
        ApiError::Unauthorized(_) => unauthorized.to_string(),
        ApiError::Status {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Status {
            status,
            message: None,
        } => format!("{context}: {status}"),
        ApiError::AliasTaken(alias) => format!(
            "Error: The alias \"{alias}\" is already taken. Please choose another one or leave it blank for a random alias."
        ),
        other => other.to_string(),
    }
}

pub const UNAUTHORIZED: &str = "Unauthorized. Please log in again.";
pub const FORBIDDEN: &str =
    "Unauthorized or Forbidden. You might not have permission or need to log in again.";
