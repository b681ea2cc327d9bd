//! Push notification dispatcher via Firebase Cloud Messaging
//!
//! Exchanges service-account credentials for a short-lived bearer token and
//! posts an FCM v1 message with a deep link back to the case page. Sends are
//! single-shot: no retry, no dead-letter; failures are logged by the caller.

use std::fs;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::model::{Case, Comment, PushConfig};

const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const OAUTH_JWT_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Bearer token lifetime requested from the token endpoint
const TOKEN_LIFETIME_SECS: i64 = 3600;

const NOTIFICATION_TITLE: &str = "The jury has spoken!";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PushError {
    /// The case was submitted without a device token; nothing to deliver to
    #[error("Case has no registered device token")]
    MissingDeviceToken,

    #[error("Service account credentials error: {0}")]
    Credentials(String),

    #[error("Bearer token exchange failed: {0}")]
    TokenExchange(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FCM send rejected with status {status}: {body}")]
    Send { status: u16, body: String },
}

/// Firebase service-account credentials, as downloaded from the console
#[derive(Debug, Clone, Deserialize)]
struct ServiceAccount {
    project_id: String,
    client_email: String,
    private_key: String,
}

/// Claims for the service-account JWT assertion
#[derive(Debug, Serialize)]
struct TokenClaims<'a> {
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

/// FCM client for comment push notifications
#[derive(Clone)]
pub struct PushService {
    client: reqwest::Client,
    account: Arc<ServiceAccount>,
    site_url: String,
}

impl PushService {
    /// Build the push service from configuration.
    /// Returns Ok(None) when no credentials path is configured (push disabled).
    pub fn from_config(config: &PushConfig) -> Result<Option<Self>, PushError> {
        let path = match &config.credentials_path {
            Some(path) => path,
            None => return Ok(None),
        };

        let contents = fs::read_to_string(path)
            .map_err(|e| PushError::Credentials(format!("{}: {}", path, e)))?;
        let account: ServiceAccount = serde_json::from_str(&contents)
            .map_err(|e| PushError::Credentials(format!("{}: {}", path, e)))?;

        tracing::info!(
            project_id = %account.project_id,
            "Push notifications enabled"
        );

        Ok(Some(Self {
            client: reqwest::Client::new(),
            account: Arc::new(account),
            site_url: config.site_url.trim_end_matches('/').to_string(),
        }))
    }

    /// Deep link back into the site for a case
    fn case_link(&self, case_id: i64) -> String {
        format!("{}/case/{}", self.site_url, case_id)
    }

    /// Exchange the service-account key for a short-lived bearer token
    async fn access_token(&self) -> Result<String, PushError> {
        let now = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            iss: &self.account.client_email,
            scope: FCM_SCOPE,
            aud: OAUTH_TOKEN_URL,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        let key = EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())
            .map_err(|e| PushError::Credentials(e.to_string()))?;
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| PushError::Credentials(e.to_string()))?;

        let response = self
            .client
            .post(OAUTH_TOKEN_URL)
            .form(&[("grant_type", OAUTH_JWT_GRANT), ("assertion", &assertion)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::TokenExchange(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PushError::TokenExchange(e.to_string()))?;

        Ok(token.access_token)
    }

    /// Notify the case submitter that a new juror comment arrived
    pub async fn notify_comment(&self, case: &Case, comment: &Comment) -> Result<(), PushError> {
        let device_token = case
            .fcm_token
            .as_deref()
            .ok_or(PushError::MissingDeviceToken)?;

        let access_token = self.access_token().await?;
        let link = self.case_link(case.id);

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.account.project_id
        );

        let message = serde_json::json!({
            "message": {
                "token": device_token,
                "notification": {
                    "title": NOTIFICATION_TITLE,
                    "body": comment.comment,
                },
                "webpush": {
                    "fcm_options": { "link": link },
                    "notification": {
                        "data": {
                            "url": link,
                            "caseId": case.id.to_string(),
                            "commentId": comment.id.to_string(),
                        }
                    }
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Send { status, body });
        }

        tracing::info!(case_id = %case.id, comment_id = %comment.id, "Push notification sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseStatus, PushConfig};
    use chrono::Utc;
    use uuid::Uuid;

    fn service_with_site(site_url: &str) -> PushService {
        PushService {
            client: reqwest::Client::new(),
            account: Arc::new(ServiceAccount {
                project_id: "lovecourt-test".to_string(),
                client_email: "svc@lovecourt-test.iam.gserviceaccount.com".to_string(),
                private_key: "irrelevant".to_string(),
            }),
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    #[test]
    fn test_case_link_format() {
        let service = service_with_site("https://www.love-court.site");
        assert_eq!(
            service.case_link(42),
            "https://www.love-court.site/case/42"
        );
    }

    #[test]
    fn test_case_link_strips_trailing_slash() {
        let service = service_with_site("https://www.love-court.site/");
        assert_eq!(service.case_link(7), "https://www.love-court.site/case/7");
    }

    #[test]
    fn test_token_claims_shape() {
        let claims = TokenClaims {
            iss: "svc@lovecourt-test.iam.gserviceaccount.com",
            scope: FCM_SCOPE,
            aud: OAUTH_TOKEN_URL,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };

        let value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();

        let mut fields: Vec<&str> = object.keys().map(String::as_str).collect();
        fields.sort_unstable();
        assert_eq!(fields, ["aud", "exp", "iat", "iss", "scope"]);

        assert_eq!(
            value["iss"],
            "svc@lovecourt-test.iam.gserviceaccount.com"
        );
        assert_eq!(value["scope"], FCM_SCOPE);
        assert_eq!(value["aud"], OAUTH_TOKEN_URL);
        let lifetime = value["exp"].as_i64().unwrap() - value["iat"].as_i64().unwrap();
        assert_eq!(lifetime, TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_disabled_without_credentials() {
        let config = PushConfig {
            credentials_path: None,
            site_url: "https://www.love-court.site".to_string(),
        };

        assert!(PushService::from_config(&config).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_device_token_is_skipped() {
        let service = service_with_site("https://www.love-court.site");
        let case = Case {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            person_a: "a".to_string(),
            person_b: "b".to_string(),
            relationship: "dating".to_string(),
            duration: "1y".to_string(),
            category: "promise".to_string(),
            tags: vec![],
            status: CaseStatus::Pending,
            user_id: Uuid::new_v4(),
            fcm_token: None,
            view_count: 0,
            created_at: Utc::now(),
        };
        let comment = Comment {
            id: 1,
            case_id: 1,
            nickname: "Fair Juror".to_string(),
            comment: "Agreed with the complainant".to_string(),
            created_at: Utc::now(),
        };

        let err = service.notify_comment(&case, &comment).await.unwrap_err();
        assert!(matches!(err, PushError::MissingDeviceToken));
    }
}
