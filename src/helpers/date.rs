//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_RU: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
    "Dez.",
];

/// Format a date for display in the given locale
///
/// # Examples
/// ```ignore
/// format_date(&date, "en-US", Tz::UTC) // -> "Jan 15, 2024"
/// format_date(&date, "ru-RU", Tz::UTC) // -> "15 янв. 2024 г."
/// ```
pub fn format_date(date: &DateTime<Utc>, locale: &str, tz: Tz) -> String {
    let local = tz.from_utc_datetime(&date.naive_utc());
    let month = local.month0() as usize;
    let (day, year) = (local.day(), local.year());

    match language(locale) {
        "ru" => format!("{:02} {} {} г.", day, MONTHS_RU[month], year),
        "de" => format!("{:02}. {} {}", day, MONTHS_DE[month], year),
        _ => format!("{} {:02}, {}", MONTHS_EN[month], day, year),
    }
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &DateTime<Utc>, locale: &str, tz: Tz) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date_xml(date),
        format_date(date, locale, tz)
    )
}

/// Primary language subtag of a locale, e.g. `ru` for `ru-RU`
pub fn language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}
