//! OAuth2 client-credentials grant for the tool server

use std::sync::Arc;

use serde::Deserialize;

use crate::logging::Logger;
use crate::types::CancellationToken;

use super::client::{ToolServerError, ToolServerResult};

/// Directory authority the token endpoint lives under
const AUTHORITY: &str = "https://login.microsoftonline.com";

/// Client credentials for the tool server's directory tenant
#[derive(Clone)]
pub struct ToolServerCredentials {
    /// Directory tenant id
    pub tenant_id: String,
    /// Application (client) id
    pub client_id: String,
    /// Application client secret
    pub client_secret: String,
}

impl ToolServerCredentials {
    /// Requested scope: the application's `.default` scope
    pub fn scope(&self) -> String {
        format!("{}/.default", self.client_id)
    }

    /// Token endpoint for this tenant
    pub fn token_endpoint(&self) -> String {
        format!("{AUTHORITY}/{}/oauth2/v2.0/token", self.tenant_id)
    }
}

impl std::fmt::Debug for ToolServerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolServerCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Acquires bearer tokens via the client-credentials grant
///
/// Tokens are not cached: every discovery or invocation call performs a full
/// credential exchange. Callers adding a cache must keep refresh single-flight
/// per (tenant, client, scope).
pub struct TokenClient {
    http: reqwest::Client,
    logger: Arc<dyn Logger>,
}

impl TokenClient {
    /// Create a token client
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            http: reqwest::Client::new(),
            logger,
        }
    }

    /// Exchange the credentials for a bearer token
    ///
    /// Any failure during the exchange is an authentication error.
    pub async fn acquire(
        &self,
        credentials: &ToolServerCredentials,
        cancel: &CancellationToken,
    ) -> ToolServerResult<String> {
        if cancel.is_cancelled() {
            return Err(ToolServerError::Cancelled);
        }

        self.logger.info(&format!(
            "[TokenClient] acquiring token: tenant={}, client={}",
            credentials.tenant_id, credentials.client_id
        ));

        let scope = credentials.scope();
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("scope", scope.as_str()),
        ];

        let request = self.http.post(credentials.token_endpoint()).form(&form);

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(ToolServerError::Cancelled),
            result = request.send() => {
                result.map_err(|e| ToolServerError::Authentication(e.to_string()))?
            }
        };

        let response = response
            .error_for_status()
            .map_err(|e| ToolServerError::Authentication(e.to_string()))?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ToolServerError::Authentication(e.to_string()))?;

        self.logger.info("[TokenClient] token acquired");

        Ok(token.access_token)
    }
}
