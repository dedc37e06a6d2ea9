//! In-memory user directory with token resolution.

use std::collections::HashMap;
use std::future::Future;

use homegate_app::ports::{TokenAuthenticator, UserRepository};
use homegate_domain::error::GatewayError;
use homegate_domain::id::UserId;
use homegate_domain::user::User;

/// In-memory ownership store seeded at construction time.
#[derive(Default)]
pub struct VirtualUserDirectory {
    by_id: HashMap<UserId, User>,
    by_token: HashMap<String, UserId>,
}

impl VirtualUserDirectory {
    /// Add a user reachable under the given bearer token.
    #[must_use]
    pub fn with_user(mut self, token: impl Into<String>, user: User) -> Self {
        self.by_token.insert(token.into(), user.id);
        self.by_id.insert(user.id, user);
        self
    }
}

impl UserRepository for VirtualUserDirectory {
    fn get_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send {
        let result = self.by_id.get(&id).cloned();
        async { Ok(result) }
    }
}

impl TokenAuthenticator for VirtualUserDirectory {
    fn resolve(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send {
        let result = self
            .by_token
            .get(token)
            .and_then(|id| self.by_id.get(id))
            .cloned();
        async { Ok(result) }
    }
}
