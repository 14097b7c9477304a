//! Outbound email capability.
//!
//! The orchestrator only sees the `Mailer` trait: one `send` call carrying a
//! recipient, a subject and the action link. Which transport backs it is a
//! deployment decision; the SMTP implementation here is the default, and
//! tests substitute a recording double. Send failures are the caller's to
//! log, never to propagate.

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::str::FromStr;

use crate::config::EmailConfig;
use crate::errors::{ServiceError, ServiceResult};

/// Abstract email transport: delivers a single action link to one recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to_email: &str, subject: &str, link: &str) -> ServiceResult<()>;
}

/// SMTP-backed mailer built from the configured relay credentials.
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> ServiceResult<Self> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| ServiceError::internal_error(format!("Invalid SMTP host: {e}")))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self { mailer, config })
    }

    fn build_html(&self, subject: &str, link: &str) -> String {
        format!(
            r#"
            <div style="font-family:Arial,sans-serif;max-width:600px;margin:40px auto;padding:20px;line-height:1.6">
                <h2>{subject}</h2>
                <p>
                    <a href="{link}" style="display:inline-block;padding:12px 24px;background:#667eea;color:white;text-decoration:none;border-radius:5px">
                        {subject}
                    </a>
                </p>
                <p style="color:#666;font-size:12px">Or copy this link: <code style="background:#f5f5f5;padding:2px 6px">{link}</code></p>
            </div>
            "#
        )
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to_email: &str, subject: &str, link: &str) -> ServiceResult<()> {
        let from_mailbox = Mailbox::from_str(&format!(
            "{} <{}>",
            self.config.from_name, self.config.from_email
        ))
        .map_err(|e| ServiceError::internal_error(format!("Invalid from email: {e}")))?;

        let to_mailbox = Mailbox::from_str(to_email)
            .map_err(|e| ServiceError::internal_error(format!("Invalid recipient email: {e}")))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                lettre::message::MultiPart::alternative()
                    .singlepart(
                        lettre::message::SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(link.to_string()),
                    )
                    .singlepart(
                        lettre::message::SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(self.build_html(subject, link)),
                    ),
            )
            .map_err(|e| ServiceError::internal_error(format!("Failed to build email: {e}")))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| ServiceError::internal_error(format!("Failed to send email: {e}")))?;

        Ok(())
    }
}
