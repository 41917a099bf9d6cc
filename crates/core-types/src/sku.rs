//! SKU identity derivation.
//!
//! A SKU is a style code followed by a size suffix (separator plus two size
//! characters, e.g. `BOOT-41`). These rules are shared by the product master,
//! the stock ledger and the grouping stage, so they live here in one place.

/// Derives the style code from a SKU: everything before the trailing size
/// suffix (last 3 characters). A SKU of 3 characters or fewer is its own
/// style code.
pub fn style_code_from_sku(sku: &str) -> String {
    let chars: Vec<char> = sku.chars().collect();
    if chars.len() > 3 {
        chars[..chars.len() - 3].iter().collect()
    } else {
        sku.to_string()
    }
}

/// Derives the size label from a SKU: its last 2 characters.
pub fn size_label_from_sku(sku: &str) -> String {
    let chars: Vec<char> = sku.chars().collect();
    if chars.len() > 2 {
        chars[chars.len() - 2..].iter().collect()
    } else {
        sku.to_string()
    }
}

/// Parses a size label into a numeric size.
///
/// Mirrors the lenient parse the source data was built around: leading
/// whitespace is ignored and parsing stops at the first non-digit, so
/// `"41"`, `" 41"` and `"41.5"` all yield 41. A label with no leading
/// digits yields `None` — not an error, just no size.
pub fn parse_size_label(label: &str) -> Option<i64> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_code_strips_trailing_size_suffix() {
        assert_eq!(style_code_from_sku("BOOT-41"), "BOOT");
        assert_eq!(style_code_from_sku("X-37"), "X");
    }

    #[test]
    fn style_code_of_short_sku_is_the_sku() {
        assert_eq!(style_code_from_sku("SKU"), "SKU");
        assert_eq!(style_code_from_sku(""), "");
    }

    #[test]
    fn size_label_is_last_two_characters() {
        assert_eq!(size_label_from_sku("BOOT-41"), "41");
        assert_eq!(size_label_from_sku("41"), "41");
    }

    #[test]
    fn parse_accepts_leading_digits_only() {
        assert_eq!(parse_size_label("41"), Some(41));
        assert_eq!(parse_size_label(" 38"), Some(38));
        assert_eq!(parse_size_label("41.5"), Some(41));
        assert_eq!(parse_size_label("EU40"), None);
        assert_eq!(parse_size_label(""), None);
    }
}
