//! Keeps the date/channel/product controls and the page query string in step.
//!
//! `SelectorSync` never touches the page location itself. Every navigating
//! operation returns a [`Navigation`] and the caller performs the reload.

use crate::controls::Controls;
use crate::errors::SyncError;
use crate::models::{Selection, SelectorName};
use crate::query::{DATE_FORMAT, QueryEncoding, navigation_target};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Ready,
}

/// Where the page should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub selection: Selection,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCheck {
    NotReady,
    Current,
    Stale(Navigation),
}

pub struct SelectorSync<C> {
    controls: C,
    encoding: QueryEncoding,
    readiness: Readiness,
}

impl<C: Controls> SelectorSync<C> {
    pub fn new(controls: C, encoding: QueryEncoding) -> Self {
        Self {
            controls,
            encoding,
            readiness: Readiness::Loading,
        }
    }

    pub fn mark_ready(&mut self) {
        if self.readiness == Readiness::Loading {
            debug!("selector controls ready");
        }
        self.readiness = Readiness::Ready;
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn read_selections(&self) -> Result<Selection, SyncError> {
        let [date, channel, product] = SelectorName::ALL;
        Ok(Selection {
            date: self.controls.selected_value(date)?,
            channel: self.controls.selected_value(channel)?,
            product: self.controls.selected_value(product)?,
        })
    }

    pub fn navigate_with(
        &self,
        date: impl Into<String>,
        channel: impl Into<String>,
        product: impl Into<String>,
    ) -> Navigation {
        let selection = Selection::new(date, channel, product);
        let query = navigation_target(&selection, self.encoding);
        Navigation { selection, query }
    }

    /// Handler for a change on any of the three controls.
    pub fn update(&self) -> Result<Navigation, SyncError> {
        let Selection {
            date,
            channel,
            product,
        } = self.read_selections()?;
        Ok(self.navigate_with(date, channel, product))
    }

    /// Replaces a stale first date option with today's UTC date.
    ///
    /// Does nothing before [`mark_ready`](Self::mark_ready). When the first
    /// option of the date control is not today, returns the navigation to
    /// today's date (keeping channel and product) and resets the date
    /// control to its first option.
    pub fn check_date<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<DateCheck, SyncError> {
        if !self.is_ready() {
            return Ok(DateCheck::NotReady);
        }

        let today = normalize_to_utc_date(now);
        let first = self.controls.option_value(SelectorName::Date, 0)?;
        let shown = parse_option_date(&first).ok_or(SyncError::InvalidDate { value: first })?;
        if shown == today {
            return Ok(DateCheck::Current);
        }

        let Selection {
            channel, product, ..
        } = self.read_selections()?;
        let navigation = self.navigate_with(today.format(DATE_FORMAT).to_string(), channel, product);
        self.controls.set_selected_index(SelectorName::Date, 0)?;
        debug!(%shown, %today, query = %navigation.query, "default date is stale");
        Ok(DateCheck::Stale(navigation))
    }
}

/// UTC calendar date of `date`, time of day dropped.
pub fn normalize_to_utc_date<Tz: TimeZone>(date: &DateTime<Tz>) -> NaiveDate {
    date.with_timezone(&Utc).date_naive()
}

fn parse_option_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| normalize_to_utc_date(&dt)))
}
