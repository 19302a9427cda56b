use anyhow::{Context, Result};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// How requests to the TTS endpoint authenticate
#[derive(Debug, Clone)]
pub enum TtsAuth {
    ServiceAccount(ServiceAccountKey),
    ApiKey(String),
    Anonymous,
}

/// The fields of a service-account JSON key file that the token exchange needs
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read credentials file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid service account file {}", path.display()))
    }

    /// RS256-signed JWT asserting this account for the cloud-platform scope.
    fn assertion(&self, now: i64) -> Result<String> {
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: CLOUD_PLATFORM_SCOPE,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .context("service account private key is not a valid RSA PEM")?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
    }

    /// Exchange a signed assertion for an OAuth2 access token.
    pub async fn fetch_access_token(&self, client: &Client) -> Result<String> {
        let assertion = self.assertion(chrono::Utc::now().timestamp())?;
        debug!("Requesting access token for {}", self.client_email);

        let response = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("token request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("token endpoint returned {}: {}", status, body.trim());
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("invalid token response")?;
        Ok(token.access_token)
    }
}
