use common::env_config::SmtpConfig;
use common::error::Res;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Async dispatcher for account email.
///
/// The SMTP transport is built once at startup and shared; lettre keeps
/// a connection pool behind it, so clones are cheap handles onto the
/// same pool.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl Mailer {
    pub fn from_config(config: &SmtpConfig) -> Res<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Mailer {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    /// Queues a password-reset email for asynchronous delivery.
    ///
    /// Fire-and-forget: the caller never blocks on the SMTP round trip
    /// and is not told about delivery failures. Those are logged and
    /// dropped.
    pub fn send_password_reset_email(&self, recipient: String, reset_url: String) {
        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(err) = mailer.deliver(&recipient, &reset_url).await {
                log::error!(
                    "failed to send password reset email to {}: {}",
                    recipient,
                    err
                );
            }
        });
    }

    async fn deliver(&self, recipient: &str, reset_url: &str) -> Res<()> {
        let message = Message::builder()
            .from(self.from_address.parse()?)
            .to(recipient.parse()?)
            .subject("Password Reset Request")
            .header(ContentType::TEXT_PLAIN)
            .body(reset_body(reset_url))?;

        self.transport.send(message).await?;
        log::info!("password reset email sent to {}", recipient);
        Ok(())
    }
}

fn reset_body(reset_url: &str) -> String {
    format!("Click the link to reset your password: {}", reset_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "mailer".to_string(),
            password: "hunter2".to_string(),
            from_address: "noreply@example.com".to_string(),
        }
    }

    #[test]
    fn transport_is_built_once_and_shared_by_clones() {
        let mailer = Mailer::from_config(&smtp_config()).unwrap();
        let handle = mailer.clone();
        assert_eq!(handle.from_address, mailer.from_address);
    }

    #[test]
    fn body_contains_the_reset_link() {
        let url = "http://localhost:3000/reset-password/abc/def/";
        assert!(reset_body(url).contains(url));
    }
}
