use crate::catalog::OptionCatalog;
use crate::models::{Selection, SelectionQuery};
use chrono::{Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How selection values are written into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Values are inserted as-is; reserved characters leak into the URL.
    #[default]
    Verbatim,
    Percent,
}

impl QueryEncoding {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "verbatim" | "raw" => Some(QueryEncoding::Verbatim),
            "percent" | "encoded" => Some(QueryEncoding::Percent),
            _ => None,
        }
    }

    fn apply(self, value: &str) -> String {
        match self {
            QueryEncoding::Verbatim => value.to_string(),
            QueryEncoding::Percent => urlencoding::encode(value).into_owned(),
        }
    }
}

/// Builds `?date=<d>&channel=<c>&product=<p>`.
pub fn navigation_target(selection: &Selection, encoding: QueryEncoding) -> String {
    format!(
        "?date={}&channel={}&product={}",
        encoding.apply(&selection.date),
        encoding.apply(&selection.channel),
        encoding.apply(&selection.product)
    )
}

pub fn correct_product(raw: Option<&str>, catalog: &OptionCatalog) -> String {
    raw.and_then(|value| {
        let value = value.trim();
        catalog
            .products
            .iter()
            .find(|product| product.eq_ignore_ascii_case(value))
    })
    .or_else(|| catalog.products.first())
    .cloned()
    .unwrap_or_default()
}

pub fn correct_channel(raw: Option<&str>, catalog: &OptionCatalog) -> String {
    raw.map(|value| value.trim().to_lowercase())
        .filter(|value| catalog.channels.iter().any(|channel| channel == value))
        .or_else(|| catalog.channels.first().cloned())
        .unwrap_or_default()
}

/// Accepts `today`, `today-N`, `yesterday`, `tomorrow` and `YYYY-MM-DD`;
/// anything else means today.
pub fn correct_date(raw: Option<&str>, today: NaiveDate) -> String {
    parse_date_param(raw, today)
        .unwrap_or(today)
        .format(DATE_FORMAT)
        .to_string()
}

fn parse_date_param(raw: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    let value = raw?.trim();
    match value {
        "today" => return Some(today),
        "yesterday" => return today.pred_opt(),
        "tomorrow" => return today.succ_opt(),
        _ => {}
    }
    if let Some(rest) = value.strip_prefix("today-") {
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let days = rest.parse::<i64>().ok()?;
        return today.checked_sub_signed(Duration::try_days(days)?);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn normalize_query(query: &SelectionQuery, catalog: &OptionCatalog, today: NaiveDate) -> Selection {
    Selection {
        date: correct_date(query.date.as_deref(), today),
        channel: correct_channel(query.channel.as_deref(), catalog),
        product: correct_product(query.product.as_deref(), catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn verbatim_target_is_plain_concatenation() {
        let selection = Selection::new("2024-01-01", "beta", "Firefox");
        assert_eq!(
            navigation_target(&selection, QueryEncoding::Verbatim),
            "?date=2024-01-01&channel=beta&product=Firefox"
        );
    }

    #[test]
    fn verbatim_target_leaks_reserved_characters() {
        let selection = Selection::new("2024-01-01", "a&b", "x=y");
        assert_eq!(
            navigation_target(&selection, QueryEncoding::Verbatim),
            "?date=2024-01-01&channel=a&b&product=x=y"
        );
    }

    #[test]
    fn percent_target_escapes_values() {
        let selection = Selection::new("2024-01-01", "a&b", "Fennec Android");
        assert_eq!(
            navigation_target(&selection, QueryEncoding::Percent),
            "?date=2024-01-01&channel=a%26b&product=Fennec%20Android"
        );
    }

    #[test]
    fn encoding_names_parse() {
        assert_eq!(QueryEncoding::parse("Percent"), Some(QueryEncoding::Percent));
        assert_eq!(QueryEncoding::parse("verbatim"), Some(QueryEncoding::Verbatim));
        assert_eq!(QueryEncoding::parse("base64"), None);
    }

    #[test]
    fn date_param_variants() {
        assert_eq!(correct_date(Some("today"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("today-3"), today()), "2024-03-12");
        assert_eq!(correct_date(Some("2023-12-31"), today()), "2023-12-31");
        assert_eq!(correct_date(Some("today-x"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("yesterday"), today()), "2024-03-14");
        assert_eq!(correct_date(Some("tomorrow"), today()), "2024-03-16");
        assert_eq!(correct_date(Some("someday"), today()), "2024-03-15");
        assert_eq!(correct_date(None, today()), "2024-03-15");
    }

    #[test]
    fn today_offset_accepts_only_plain_digits() {
        assert_eq!(correct_date(Some("today--3"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("today-+3"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("today-"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("today3"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("today-0"), today()), "2024-03-15");
        assert_eq!(correct_date(Some("today-99999999999999999999"), today()), "2024-03-15");
    }

    #[test]
    fn product_and_channel_fall_back_to_catalog_defaults() {
        let catalog = OptionCatalog::default();
        assert_eq!(correct_product(Some("fennecandroid"), &catalog), "FennecAndroid");
        assert_eq!(correct_product(Some("Thunderbird"), &catalog), "Firefox");
        assert_eq!(correct_channel(Some("BETA"), &catalog), "beta");
        assert_eq!(correct_channel(Some("aurora"), &catalog), "nightly");
        assert_eq!(correct_channel(None, &catalog), "nightly");
    }

    #[test]
    fn normalize_query_fills_every_field() {
        let catalog = OptionCatalog::default();
        let query = SelectionQuery {
            date: Some("today-1".into()),
            channel: Some("release".into()),
            product: None,
        };
        assert_eq!(
            normalize_query(&query, &catalog, today()),
            Selection::new("2024-03-14", "release", "Firefox")
        );
    }
}
