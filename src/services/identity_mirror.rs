use crate::{config, utils};
use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

/// Mirrors account changes to the configured identity provider over plain
/// JSON/HTTP. An empty base URL turns every call into a logged no-op.
#[derive(Clone)]
pub struct HttpIdentityMirror {
    pub base_url: String,
    pub api_key: String,
}

impl HttpIdentityMirror {
    pub fn from_config(app_config: &config::AppConfig) -> Self {
        Self {
            base_url: app_config.identity_mirror_url.clone(),
            api_key: app_config.identity_mirror_api_key.clone(),
        }
    }

    fn enabled(&self) -> bool {
        !self.base_url.is_empty()
    }

    async fn post(&self, path: &str, payload: serde_json::Value) -> anyhow::Result<()> {
        utils::REQUEST_CLIENT
            .post(format!("{}{}", self.base_url.trim_end_matches('/'), path))
            .header("x-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .context("identity provider unreachable")?
            .error_for_status()
            .context("identity provider rejected the request")?;

        Ok(())
    }
}

#[async_trait]
impl crate::services::IdentityMirror for HttpIdentityMirror {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> anyhow::Result<()> {
        if !self.enabled() {
            log::debug!("identity mirror disabled, skipping account creation");
            return Ok(());
        }

        self.post(
            "/accounts",
            json!({
                "email": email,
                "password": password,
                "display_name": display_name,
            }),
        )
        .await
    }

    async fn send_reset_link(&self, email: &str) -> anyhow::Result<()> {
        if !self.enabled() {
            log::debug!("identity mirror disabled, skipping reset link");
            return Ok(());
        }

        self.post("/accounts/reset_link", json!({ "email": email }))
            .await
    }

    async fn update_password(&self, email: &str, new_password: &str) -> anyhow::Result<()> {
        if !self.enabled() {
            log::debug!("identity mirror disabled, skipping password update");
            return Ok(());
        }

        self.post(
            "/accounts/password",
            json!({ "email": email, "password": new_password }),
        )
        .await
    }
}
