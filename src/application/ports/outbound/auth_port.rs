use async_trait::async_trait;

use crate::domain::value_objects::UserId;

/// Identity of the caller, as established by the external auth provider.
///
/// Implementations are request-scoped: one instance answers for one caller.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// `None` when the caller is not signed in
    async fn current_user_id(&self) -> Option<UserId>;
}
