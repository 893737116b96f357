/// Strips invisible characters spreadsheets leave behind and collapses
/// internal whitespace. Returns `None` when nothing printable remains.
pub(crate) fn clean_text(value: &str) -> Option<String> {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Parses a rent cell such as `$1,250.00`. Negative or unparsable amounts
/// are treated as absent.
pub(crate) fn parse_rent(value: &str) -> Option<f64> {
    let digits: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    digits
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "open"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_spreadsheet_noise() {
        assert_eq!(
            clean_text("\u{feff} Grace   Hopper ").as_deref(),
            Some("Grace Hopper")
        );
        assert_eq!(clean_text(" \u{200b} "), None);
    }

    #[test]
    fn parses_currency_formatted_rent() {
        assert_eq!(parse_rent("$1,250.50"), Some(1250.5));
        assert_eq!(parse_rent("900"), Some(900.0));
        assert_eq!(parse_rent("-5"), None);
        assert_eq!(parse_rent("n/a"), None);
        assert_eq!(parse_rent(""), None);
    }

    #[test]
    fn reads_maintenance_flags() {
        assert!(parse_flag("Yes"));
        assert!(parse_flag("OPEN"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }
}
