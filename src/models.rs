use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three selector controls on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorName {
    Date,
    Channel,
    Product,
}

impl SelectorName {
    /// Read order of the selection triple.
    pub const ALL: [SelectorName; 3] = [SelectorName::Date, SelectorName::Channel, SelectorName::Product];

    pub fn id(self) -> &'static str {
        match self {
            SelectorName::Date => "date",
            SelectorName::Channel => "channel",
            SelectorName::Product => "product",
        }
    }
}

impl fmt::Display for SelectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selection {
    pub date: String,
    pub channel: String,
    pub product: String,
}

impl Selection {
    pub fn new(date: impl Into<String>, channel: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            channel: channel.into(),
            product: product.into(),
        }
    }
}

/// Raw query parameters for the page, before normalization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SelectionQuery {
    pub date: Option<String>,
    pub channel: Option<String>,
    pub product: Option<String>,
}

/// Form body posted by the page when a control changes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateForm {
    pub date: String,
    pub channel: String,
    pub product: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub date: String,
    pub channel: String,
    pub product: String,
    pub query: String,
}
