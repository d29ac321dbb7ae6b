//! UK phone number formatting

const UK_COUNTRY_CODE: &str = "44";

/// Format phone input typed with a UK country code as `+44 AAA BBB CCCC`.
///
/// Input whose digits do not start with `44` is returned untouched.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let Some(national) = digits.strip_prefix(UK_COUNTRY_CODE) else {
        return raw.to_string();
    };

    let group = |start: usize, end: usize| {
        let end = end.min(national.len());
        national.get(start.min(end)..end).unwrap_or("")
    };

    format!(
        "+44 {} {} {}",
        group(0, 3),
        group(3, 6),
        group(6, 10)
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_uk_number() {
        assert_eq!(format_phone("441234567890"), "+44 123 456 7890");
    }

    #[test]
    fn test_strips_punctuation_before_grouping() {
        assert_eq!(format_phone("+44 (1234) 567-890"), "+44 123 456 7890");
    }

    #[test]
    fn test_reformatting_is_stable() {
        let once = format_phone("4412345");
        assert_eq!(once, "+44 123 45");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn test_partial_number_trims_trailing_space() {
        assert_eq!(format_phone("4412"), "+44 12");
        assert_eq!(format_phone("44"), "+44");
    }

    #[test]
    fn test_extra_digits_are_dropped() {
        assert_eq!(format_phone("44123456789012"), "+44 123 456 7890");
    }

    #[test]
    fn test_non_uk_input_is_kept() {
        assert_eq!(format_phone("+1 555 0100"), "+1 555 0100");
        assert_eq!(format_phone("call me"), "call me");
    }
}
