// src/core/sanitize.rs
use std::sync::OnceLock;

use regex::Regex;

fn price_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d,.]+").expect("static price pattern"))
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First run of digits/commas/periods, commas dropped, parsed as a float.
/// `"$1,234.56 to $2,000.00"` → 1234.56. No run, or an unparsable run
/// like `"1.2.3"`, gives `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    let m = price_re().find(text)?;
    m.as_str().replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_forms() {
        assert_eq!(parse_price("$12.50"), Some(12.5));
        assert_eq!(parse_price("US $1,234.56"), Some(1234.56));
        assert_eq!(parse_price("$20.00 to $35.00"), Some(20.0));
        assert_eq!(parse_price("Free shipping"), None);
        assert_eq!(parse_price("1.2.3"), None);
        assert_eq!(parse_price(","), None);
    }

    #[test]
    fn ws_collapsed() {
        assert_eq!(normalize_ws("  $5.00 \n\t each "), "$5.00 each");
    }
}
