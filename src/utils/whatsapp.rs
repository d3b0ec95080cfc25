//! WhatsApp Cloud API collaborator. Delivery is template-based
//! ("otp_verification"); in development the HTTP call is skipped and a
//! synthetic message id is returned so the flow can be exercised end to end
//! without provider credentials.

use crate::types::{AppEnvironment, Context};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

use super::phone;

pub struct SendReport {
    pub message_id: Option<String>,
    pub phone_number: String,
}

/// Carries the provider's error message verbatim; callers surface it as-is.
pub struct SendError(pub String);

/// Recipient numbers need the 91 country code and no leading zeros.
pub fn to_wa_number(raw: &str) -> String {
    let digits = phone::normalize(raw);
    let with_country_code = if digits.starts_with("91") {
        digits
    } else {
        format!("91{}", digits)
    };
    with_country_code.trim_start_matches('0').to_string()
}

pub async fn send_otp(
    ctx: Arc<Context>,
    phone_number: &str,
    code: &str,
) -> Result<SendReport, SendError> {
    let to_number = to_wa_number(phone_number);

    if let AppEnvironment::Development = ctx.app.environment {
        tracing::info!("[dev] WhatsApp OTP for {}: {}", to_number, code);
        return Ok(SendReport {
            message_id: Some(format!("dev_{}", Utc::now().timestamp_millis())),
            phone_number: to_number,
        });
    }

    let endpoint = format!(
        "{}/{}/messages",
        ctx.whatsapp.api_url, ctx.whatsapp.phone_number_id
    );

    let body = json!({
        "messaging_product": "whatsapp",
        "to": to_number,
        "type": "template",
        "template": {
            "name": "otp_verification",
            "language": { "code": "en" },
            "components": [
                {
                    "type": "body",
                    "parameters": [
                        { "type": "text", "text": code },
                        { "type": "text", "text": "10" }
                    ]
                }
            ]
        }
    });

    let res = Client::new()
        .post(endpoint)
        .bearer_auth(ctx.whatsapp.access_token.clone())
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("WhatsApp API request failed: {}", err);
            SendError("Failed to send WhatsApp OTP".to_string())
        })?;

    let payload = res.json::<Value>().await.map_err(|err| {
        tracing::error!("Failed to parse WhatsApp API response: {}", err);
        SendError("Failed to send WhatsApp OTP".to_string())
    })?;

    if let Some(api_error) = payload.get("error") {
        let message = api_error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Failed to send WhatsApp OTP")
            .to_string();
        tracing::error!("WhatsApp API error: {}", message);
        return Err(SendError(message));
    }

    let message_id = payload
        .pointer("/messages/0/id")
        .and_then(Value::as_str)
        .map(String::from);

    Ok(SendReport {
        message_id,
        phone_number: to_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_country_code_when_missing() {
        assert_eq!(to_wa_number("9876543210"), "919876543210");
        assert_eq!(to_wa_number("+91 98765 43210"), "919876543210");
    }

    #[test]
    fn keeps_existing_country_code() {
        assert_eq!(to_wa_number("919876543210"), "919876543210");
    }
}
