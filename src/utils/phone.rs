/// Strips everything but digits. All phone comparisons (duplicate guard,
/// OTP lookups, token/phone match) happen on this normalized form.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_ten_digit(normalized: &str) -> bool {
    normalized.len() == 10 && normalized.chars().all(|c| c.is_ascii_digit())
}

/// Coerces whatever the form sent into `+91XXXXXXXXXX`. Inputs already in
/// that shape pass through; anything else is reduced to digits and the last
/// ten are kept. Returns `None` when the result is not a valid number.
pub fn to_indian_format(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let formatted = if let Some(rest) = trimmed.strip_prefix("+91") {
        format!("+91{}", rest)
    } else {
        let digits = normalize(trimmed);
        if digits.len() == 10 {
            format!("+91{}", digits)
        } else {
            let tail: String = digits
                .chars()
                .skip(digits.len().saturating_sub(10))
                .collect();
            format!("+91{}", tail)
        }
    };

    let suffix = formatted.strip_prefix("+91")?;
    if is_ten_digit(suffix) {
        Some(formatted)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_non_digits() {
        assert_eq!(normalize("+91 98765-43210"), "919876543210");
        assert_eq!(normalize("(987) 654 3210"), "9876543210");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn indian_format_accepts_bare_ten_digits() {
        assert_eq!(
            to_indian_format("9876543210").as_deref(),
            Some("+919876543210")
        );
        assert_eq!(
            to_indian_format("+919876543210").as_deref(),
            Some("+919876543210")
        );
    }

    #[test]
    fn indian_format_keeps_last_ten_digits_of_longer_input() {
        assert_eq!(
            to_indian_format("0 98765 43210").as_deref(),
            Some("+919876543210")
        );
    }

    #[test]
    fn indian_format_rejects_short_numbers() {
        assert_eq!(to_indian_format("12345"), None);
        assert_eq!(to_indian_format("+9112345"), None);
    }

    #[test]
    fn ten_digit_check() {
        assert!(is_ten_digit("9876543210"));
        assert!(!is_ten_digit("919876543210"));
        assert!(!is_ten_digit(""));
    }
}
