use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SendGrid returned {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("SendGrid request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoadmapMailer: Send + Sync {
    /// Sends an HTML email and returns the provider's status code.
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<u16, MailError>;
}

pub struct SendGridMailer {
    client: Client,
    api_key: String,
    from_email: String,
    send_url: String,
}

impl SendGridMailer {
    pub fn new(client: Client, api_key: impl Into<String>, from_email: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            from_email: from_email.into(),
            send_url: SENDGRID_SEND_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_send_url(mut self, url: &str) -> Self {
        self.send_url = url.to_string();
        self
    }
}

#[async_trait]
impl RoadmapMailer for SendGridMailer {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<u16, MailError> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.from_email },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html }]
        });

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("SendGrid rejected roadmap email: {} {}", status, body);
            return Err(MailError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Roadmap email accepted by SendGrid, status: {}", status);
        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_provider_is_a_request_error() {
        let mailer = SendGridMailer::new(Client::new(), "sg-key", "noreply@nexark.io")
            .with_send_url("http://127.0.0.1:9/v3/mail/send");
        let err = mailer
            .send_html("founder@example.com", "Roadmap", "<p>hi</p>")
            .await
            .unwrap_err();
        assert!(matches!(err, MailError::Request(_)));
        assert!(err.to_string().starts_with("SendGrid request failed"));
    }
}
