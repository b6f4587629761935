//! Parsing and validation of raw menu input.
//!
//! Pure string-to-value translation: the domain layer never sees
//! unvalidated text. Each parser returns a message suitable for re-prompting
//! on failure.

use bottlekeep_inventory::Barcode;

/// A non-empty, trimmed line of text.
pub fn required_text(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err("a value is required".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Blank input means "keep the current value" on the edit screen.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Blank input is `None`; anything else must parse.
pub fn optional<T, F>(input: &str, parse: F) -> Result<Option<T>, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse(input).map(Some)
    }
}

/// Retail barcodes are exactly 12 decimal digits (which always fit a u64).
pub fn parse_barcode(input: &str) -> Result<Barcode, String> {
    let digits = input.trim();
    if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("barcode must be exactly 12 digits".to_string());
    }
    let value: u64 = digits
        .parse()
        .map_err(|_| "barcode must be exactly 12 digits".to_string())?;
    Ok(Barcode::new(value))
}

pub fn parse_strength(input: &str) -> Result<f64, String> {
    input
        .trim()
        .parse()
        .map_err(|_| "enter the alcohol content as a number".to_string())
}

/// Container sizes are validated here; the value object itself accepts
/// anything.
pub fn parse_size(input: &str) -> Result<i64, String> {
    let size: i64 = input
        .trim()
        .parse()
        .map_err(|_| "enter the size as a whole number".to_string())?;
    if size < 0 {
        return Err("size cannot be negative".to_string());
    }
    Ok(size)
}

pub fn parse_metric_flag(input: &str) -> Result<bool, String> {
    match input.trim() {
        "1" | "y" | "Y" => Ok(true),
        "0" | "n" | "N" => Ok(false),
        _ => Err("enter 1 for metric (ml) or 0 for fl oz".to_string()),
    }
}

/// Adds require a strictly positive quantity.
pub fn parse_positive_quantity(input: &str) -> Result<i64, String> {
    let quantity: i64 = input
        .trim()
        .parse()
        .map_err(|_| "enter the quantity as a whole number".to_string())?;
    if quantity <= 0 {
        return Err("quantity must be a positive value".to_string());
    }
    Ok(quantity)
}

/// Edits may set a quantity down to zero, but never below.
pub fn parse_non_negative_quantity(input: &str) -> Result<i64, String> {
    let quantity: i64 = input
        .trim()
        .parse()
        .map_err(|_| "enter the quantity as a whole number".to_string())?;
    if quantity < 0 {
        return Err("quantity cannot be negative".to_string());
    }
    Ok(quantity)
}

pub fn parse_id(input: &str) -> Result<u64, String> {
    input
        .trim()
        .parse()
        .map_err(|_| "enter the item id as a whole number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barcode_requires_exactly_twelve_digits() {
        assert_eq!(parse_barcode("036000291452").unwrap().value(), 36000291452);
        assert_eq!(parse_barcode(" 036000291452 ").unwrap().value(), 36000291452);
        assert!(parse_barcode("36000291452").is_err()); // 11 digits
        assert!(parse_barcode("0360002914521").is_err()); // 13 digits
        assert!(parse_barcode("03600029145x").is_err());
        assert!(parse_barcode("").is_err());
    }

    #[test]
    fn positive_quantity_rejects_zero_and_below() {
        assert_eq!(parse_positive_quantity("24").unwrap(), 24);
        assert!(parse_positive_quantity("0").is_err());
        assert!(parse_positive_quantity("-3").is_err());
        assert!(parse_positive_quantity("many").is_err());
    }

    #[test]
    fn non_negative_quantity_allows_zero() {
        assert_eq!(parse_non_negative_quantity("0").unwrap(), 0);
        assert!(parse_non_negative_quantity("-1").is_err());
    }

    #[test]
    fn size_rejects_negatives() {
        assert_eq!(parse_size("355").unwrap(), 355);
        assert_eq!(parse_size("0").unwrap(), 0);
        assert!(parse_size("-12").is_err());
    }

    #[test]
    fn metric_flag_accepts_both_spellings() {
        assert!(parse_metric_flag("1").unwrap());
        assert!(parse_metric_flag("y").unwrap());
        assert!(!parse_metric_flag("0").unwrap());
        assert!(!parse_metric_flag("N").unwrap());
        assert!(parse_metric_flag("metric").is_err());
    }

    #[test]
    fn blank_lines_keep_current_values() {
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" Pale Ale "), Some("Pale Ale".to_string()));
        assert_eq!(optional("", parse_strength).unwrap(), None);
        assert_eq!(optional("7.2", parse_strength).unwrap(), Some(7.2));
        assert!(optional("strong", parse_strength).is_err());
    }

    #[test]
    fn required_text_rejects_blank() {
        assert!(required_text(" ").is_err());
        assert_eq!(required_text(" Stout ").unwrap(), "Stout");
    }
}
