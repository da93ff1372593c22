use chrono::{DateTime, Utc};

pub fn format_number(number: i64) -> String {
    use numfmt::*;
    let mut formatter = Formatter::default()
        .scales(Scales::metric())
        .precision(Precision::Decimals(0));
    formatter.fmt(number as f64).to_string()
}

/// Format a timestamp into the short form shown in lists and the
/// full form shown in tooltips / accessibility labels.
pub fn format_datetime(date: &DateTime<Utc>) -> (String, String) {
    let human = date.format("%b %e, %H:%M").to_string();
    let full = date.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    (human, full)
}
