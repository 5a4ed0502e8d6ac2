//! Formatting helpers for presenting order data.

use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

/// Format an ISO date (plain `2024-03-05` or a full RFC 3339 timestamp, the
/// upstream API emits both) as e.g. "Mar 5, 2024". Unparseable input is
/// passed through verbatim.
pub fn format_date(iso: &str) -> String {
    parse_date(iso)
        .and_then(|date| {
            date.format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .ok()
        })
        .unwrap_or_else(|| iso.to_string())
}

fn parse_date(iso: &str) -> Option<Date> {
    if let Ok(stamp) = OffsetDateTime::parse(iso, &Rfc3339) {
        return Some(stamp.date());
    }
    Date::parse(iso, &format_description!("[year]-[month]-[day]")).ok()
}

/// Format a decimal amount string per its ISO 4217 currency code, e.g.
/// `("149.5", "USD")` -> "$149.50". Unknown codes fall back to
/// "CODE amount"; non-numeric amounts are passed through verbatim.
pub fn format_currency(amount: &str, currency: &str) -> String {
    let value: f64 = match amount.trim().parse() {
        Ok(v) => v,
        Err(_) => return format!("{currency} {amount}"),
    };

    let sign = if value < 0.0 { "-" } else { "" };
    match currency_symbol(currency) {
        Some((symbol, decimals)) => {
            format!("{sign}{symbol}{}", group_digits(value.abs(), decimals))
        }
        None => format!("{sign}{currency} {}", group_digits(value.abs(), 2)),
    }
}

/// Symbol and minor-unit count for the currencies the storefront trades in.
fn currency_symbol(code: &str) -> Option<(&'static str, usize)> {
    match code {
        "USD" => Some(("$", 2)),
        "CAD" => Some(("CA$", 2)),
        "AUD" => Some(("A$", 2)),
        "EUR" => Some(("€", 2)),
        "GBP" => Some(("£", 2)),
        "JPY" => Some(("¥", 0)),
        _ => None,
    }
}

/// Render `value` with `decimals` fraction digits and thousands separators.
fn group_digits(value: f64, decimals: usize) -> String {
    let plain = format!("{value:.decimals$}");
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_iso_date() {
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
    }

    #[test]
    fn formats_rfc3339_timestamp() {
        assert_eq!(format_date("2021-06-15T08:30:00Z"), "Jun 15, 2021");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn formats_usd_with_two_decimals() {
        assert_eq!(format_currency("149.5", "USD"), "$149.50");
    }

    #[test]
    fn formats_zero_decimal_currency_with_grouping() {
        assert_eq!(format_currency("12500", "JPY"), "¥12,500");
    }

    #[test]
    fn groups_thousands_in_large_totals() {
        assert_eq!(format_currency("1234567.8", "EUR"), "€1,234,567.80");
    }

    #[test]
    fn unknown_code_uses_code_prefix() {
        assert_eq!(format_currency("10", "XTS"), "XTS 10.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_symbol() {
        assert_eq!(format_currency("-42", "GBP"), "-£42.00");
    }

    #[test]
    fn non_numeric_amount_passes_through() {
        assert_eq!(format_currency("free", "USD"), "USD free");
    }
}
