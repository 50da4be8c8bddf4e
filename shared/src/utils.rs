// Number formatting helpers shared by the composer and the form layer.

// Indian numbering: the last three digits form one group, everything to the left
// is grouped in pairs ("1234567" -> "12,34,567").
pub mod indian_format {
    // Keeps ASCII digits and dots only. Commas, currency signs, spaces and a
    // leading '-' all disappear here.
    fn strip_to_numeric(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
    }

    // Splits on the first dot. Any later dots are dropped and the digits around
    // them are kept as part of the fraction, so "1.2.3" reads as 1.23.
    fn split_decimal(numeric: &str) -> (&str, Option<String>) {
        match numeric.split_once('.') {
            Some((int_part, rest)) => (int_part, Some(rest.replace('.', ""))),
            None => (numeric, None),
        }
    }

    fn group_integer(digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }

        let (head, last_three) = digits.split_at(digits.len() - 3);
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

        // An odd-length head leaves a single leading digit before the pairs.
        let lead = head.len() % 2;
        if lead == 1 {
            grouped.push_str(&head[..1]);
        }
        for (idx, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
            if idx > 0 || lead == 1 {
                grouped.push(',');
            }
            // Only ASCII digits survive stripping, so every chunk is valid UTF-8.
            grouped.extend(pair.iter().map(|b| *b as char));
        }

        grouped.push(',');
        grouped.push_str(last_three);
        grouped
    }

    /// Formats a raw amount with Indian digit grouping.
    ///
    /// Takes a `&str` or an `Option<&str>`; `None`, empty input, or input with
    /// no digits or dots at all, gives an empty string. Placeholders for missing
    /// rates are the caller's business.
    pub fn group_digits<'a>(raw: impl Into<Option<&'a str>>) -> String {
        let Some(raw) = raw.into().filter(|r| !r.is_empty()) else {
            return String::new();
        };

        let numeric = strip_to_numeric(raw);
        if numeric.is_empty() {
            return String::new();
        }

        let (int_part, fraction) = split_decimal(&numeric);
        let grouped = group_integer(int_part);

        match fraction {
            Some(frac) => format!("{}.{}", grouped, frac),
            None => grouped,
        }
    }

    /// Live filter for rate inputs: digits and a single decimal point.
    /// "12.3.4a" becomes "12.34".
    pub fn sanitize_amount_input(raw: &str) -> String {
        let numeric = strip_to_numeric(raw);
        match split_decimal(&numeric) {
            (int_part, Some(frac)) => format!("{}.{}", int_part, frac),
            (int_part, None) => int_part.to_string(),
        }
    }

    // Decides whether an edit should trigger the auto-preview.
    pub fn is_positive_amount(raw: &str) -> bool {
        let cleaned = sanitize_amount_input(raw);
        if cleaned.is_empty() {
            return false;
        }
        // A bare "." or "5." still parses once padded.
        let padded = if cleaned.ends_with('.') {
            format!("{}0", cleaned)
        } else {
            cleaned
        };
        let padded = if padded.starts_with('.') {
            format!("0{}", padded)
        } else {
            padded
        };
        padded.parse::<f64>().map(|v| v > 0.0).unwrap_or(false)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_group_digits_empty() {
            assert_eq!(group_digits(""), "");
            assert_eq!(group_digits(None::<&str>), "");
            assert_eq!(group_digits(Some("")), "");
            assert_eq!(group_digits(Some("7250")), "7,250");
        }

        #[test]
        fn test_group_digits_no_numeric_content() {
            assert_eq!(group_digits("abc"), "");
            assert_eq!(group_digits("₹ -"), "");
        }

        #[test]
        fn test_group_digits_short_values_untouched() {
            assert_eq!(group_digits("7"), "7");
            assert_eq!(group_digits("123"), "123");
        }

        #[test]
        fn test_group_digits_thousands_and_lakhs() {
            assert_eq!(group_digits("1234"), "1,234");
            assert_eq!(group_digits("12345"), "12,345");
            assert_eq!(group_digits("123456"), "1,23,456");
            assert_eq!(group_digits("1234567"), "12,34,567");
            assert_eq!(group_digits("123456789"), "12,34,56,789");
        }

        #[test]
        fn test_group_digits_strips_noise() {
            assert_eq!(group_digits("12,34.56"), "1,234.56");
            assert_eq!(group_digits("₹ 7,250/-"), "7,250");
            assert_eq!(group_digits("-5000"), "5,000");
        }

        #[test]
        fn test_group_digits_fraction_kept_verbatim() {
            assert_eq!(group_digits("98765.4321"), "98,765.4321");
            assert_eq!(group_digits("100."), "100.");
            assert_eq!(group_digits(".5"), ".5");
        }

        #[test]
        fn test_group_digits_extra_dots_fold_into_fraction() {
            assert_eq!(group_digits("1234.5.6"), "1,234.56");
        }

        #[test]
        fn test_group_digits_regrouping_is_stable() {
            for raw in ["1234567", "12,34.56", "98765.4321", "₹ 1,00,000", "42"] {
                let once = group_digits(raw);
                assert_eq!(group_digits(once.as_str()), once, "regrouping changed {:?}", raw);
            }
        }

        #[test]
        fn test_sanitize_amount_input() {
            assert_eq!(sanitize_amount_input("12.3.4a"), "12.34");
            assert_eq!(sanitize_amount_input("6,950"), "6950");
            assert_eq!(sanitize_amount_input(""), "");
        }

        #[test]
        fn test_is_positive_amount() {
            assert!(is_positive_amount("6950"));
            assert!(is_positive_amount("0.5"));
            assert!(is_positive_amount(".5"));
            assert!(!is_positive_amount("0"));
            assert!(!is_positive_amount("0.00"));
            assert!(!is_positive_amount("."));
            assert!(!is_positive_amount("abc"));
        }
    }
}
