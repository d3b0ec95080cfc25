use super::types::{request, response};

// Placeholder code until a real WhatsApp sender is wired up for the chatbot
// widget. The frontend knows to prompt for this value.
const DUMMY_OTP: &str = "123456";

pub fn service(payload: request::Payload) -> response::Response {
    if payload.phone.trim().is_empty() || payload.otp.trim().is_empty() {
        return Err(response::Error::MissingRequiredFields);
    }

    if payload.otp != DUMMY_OTP {
        return Err(response::Error::InvalidOtp);
    }

    Ok(response::Success::OtpVerified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(phone: &str, otp: &str) -> request::Payload {
        request::Payload {
            phone: phone.to_owned(),
            otp: otp.to_owned(),
        }
    }

    #[test]
    fn accepts_the_placeholder_code_for_any_phone() {
        assert!(service(payload("9876543210", "123456")).is_ok());
        assert!(service(payload("1112223334", "123456")).is_ok());
    }

    #[test]
    fn rejects_any_other_code() {
        assert!(matches!(
            service(payload("9876543210", "654321")),
            Err(response::Error::InvalidOtp)
        ));
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            service(payload("", "123456")),
            Err(response::Error::MissingRequiredFields)
        ));
        assert!(matches!(
            service(payload("9876543210", "  ")),
            Err(response::Error::MissingRequiredFields)
        ));
    }
}
