//! Display formatting for numbers and timestamps

use chrono::{DateTime, NaiveDate, Utc};

/// `1234567.8` -> `"1,234,568"`
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Market cap / volume style: `$1.23T`, `$4.5B`, `$6.7M`, `$12,345`
pub fn usd_compact(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else {
        format!("${}", group_thousands(value))
    }
}

pub fn supply_compact(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else {
        group_thousands(value)
    }
}

/// Sub-dollar prices keep eight decimals
pub fn price(value: f64) -> String {
    if value.abs() < 1.0 {
        format!("${value:.8}")
    } else {
        let total_cents = (value * 100.0).round();
        let whole = (total_cents / 100.0).trunc();
        let cents = (total_cents % 100.0).abs();
        format!("${}.{:02}", group_thousands(whole), cents as u64)
    }
}

/// `+1.23%` / `-0.50%`
pub fn percent_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Jan 5, 2025`; unparseable input is returned as is
pub fn date(value: &str) -> String {
    parse_timestamp(value)
        .map(|ts| ts.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// `14:03`
pub fn time(value: &str) -> String {
    parse_timestamp(value)
        .map(|ts| ts.format("%H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|ts| ts.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.8), "1,234,568");
        assert_eq!(group_thousands(-45000.0), "-45,000");
    }

    #[test]
    fn test_usd_compact() {
        assert_eq!(usd_compact(1.234e12), "$1.23T");
        assert_eq!(usd_compact(4.56e9), "$4.6B");
        assert_eq!(usd_compact(7.0e6), "$7.0M");
        assert_eq!(usd_compact(12345.0), "$12,345");
    }

    #[test]
    fn test_supply_compact() {
        assert_eq!(supply_compact(21e6), "21.0M");
        assert_eq!(supply_compact(1.5e9), "1.5B");
        assert_eq!(supply_compact(500_000.0), "500,000");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(65000.5), "$65,000.50");
        assert_eq!(price(1.0), "$1.00");
        assert_eq!(price(1.999), "$2.00");
        assert_eq!(price(0.00001234), "$0.00001234");
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(1.234), "+1.23%");
        assert_eq!(percent_change(-0.5), "-0.50%");
        assert_eq!(percent(12.0), "12.00%");
    }

    #[test]
    fn test_dates() {
        assert_eq!(date("2025-01-05T14:03:22.000Z"), "Jan 5, 2025");
        assert_eq!(time("2025-01-05T14:03:22.000Z"), "14:03");
        assert_eq!(date_time("2025-01-05T14:03:22Z"), "Jan 5, 2025 14:03");
        assert_eq!(date("2009-01-03"), "Jan 3, 2009");
        assert_eq!(date("soon"), "soon");
    }
}
