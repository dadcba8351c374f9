pub mod identity_mirror;

use async_trait::async_trait;

/// External identity provider the local account store is mirrored to.
/// Every call site is best-effort: failures are logged and never fail the
/// primary operation, since the provider is non-authoritative.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityMirror {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> anyhow::Result<()>;

    async fn send_reset_link(&self, email: &str) -> anyhow::Result<()>;

    async fn update_password(&self, email: &str, new_password: &str) -> anyhow::Result<()>;
}

pub type ImplIdentityMirror = Box<dyn IdentityMirror>;
