use crate::handlers::jwt::Claims;

/// Bearer token of the signed-in user together with its decoded payload.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.claims.is_admin()
    }

    pub fn subject(&self) -> &str {
        &self.claims.sub
    }
}
