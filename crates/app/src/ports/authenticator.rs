//! Authentication port — bearer token to actor resolution.

use std::future::Future;

use homegate_domain::error::GatewayError;
use homegate_domain::user::User;

/// Resolves a bearer token to an authenticated actor.
///
/// `Ok(None)` means the token is unknown or revoked; the HTTP edge turns that
/// into a 401 before any gateway logic runs. Token issuance is out of scope —
/// this port only maps existing tokens to users.
pub trait TokenAuthenticator {
    fn resolve(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send;
}
