use crate::types::Context;
use lettre::{AsyncTransport, Message};
use std::sync::Arc;

pub enum Error {
    NotSent,
}

/// Login OTPs go to the configured admin inbox, not to the end user.
pub async fn send_login_otp(ctx: Arc<Context>, otp: &str) -> Result<(), Error> {
    let from = ctx.mail.sender.parse().map_err(|err| {
        tracing::error!("Invalid mail sender address: {}", err);
        Error::NotSent
    })?;
    let to = ctx.mail.otp_receiver.parse().map_err(|err| {
        tracing::error!("Invalid OTP receiver address: {}", err);
        Error::NotSent
    })?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject("Login OTP")
        .body(format!("OTP: {}\nValid for 5 minutes", otp))
        .map_err(|err| {
            tracing::error!("Failed to build login OTP email: {}", err);
            Error::NotSent
        })?;

    ctx.mail.transport.send(message).await.map_err(|err| {
        tracing::error!("Failed to send login OTP email: {}", err);
        Error::NotSent
    })?;

    Ok(())
}
