//! Ownership store port — user lookup with materialized devices.

use std::future::Future;

use homegate_domain::error::GatewayError;
use homegate_domain::id::UserId;
use homegate_domain::user::User;

/// Lookup into the external ownership store.
///
/// `Ok(None)` means the user does not exist — distinct from a user that
/// exists with an empty device set. The returned [`User`] carries its owned
/// devices fully materialized, in store order.
pub trait UserRepository {
    fn get_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send;
}
