//! Domain models for Tally

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// 1-based, assigned by the store at insertion
    pub id: u64,
    pub category: String,
    pub amount: f64,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
}

/// Raw payload for creating an expense
///
/// Every field is optional so that a missing field can be reported as such
/// instead of as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExpense {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewExpense {
    pub fn new(category: &str, amount: impl Into<AmountInput>, date: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            amount: Some(amount.into()),
            date: Some(date.to_string()),
        }
    }

    /// True when category, amount and date are all present and non-blank
    pub fn is_complete(&self) -> bool {
        let present = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.trim().is_empty());

        present(&self.category)
            && self.amount.as_ref().is_some_and(|a| !a.is_blank())
            && present(&self.date)
    }
}

/// An amount as sent by a client: either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Parse a client amount into a finite number
///
/// Strings must be a complete number ("12.50", " 3 "); trailing garbage
/// such as "12abc" is rejected rather than truncated.
pub fn parse_amount(input: &AmountInput) -> Result<f64> {
    let value = match input {
        AmountInput::Number(n) => *n,
        AmountInput::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::validation(format!("Invalid amount: {:?} is not a number", s)))?,
    };

    if !value.is_finite() {
        return Err(Error::validation("Invalid amount: must be a finite number"));
    }

    Ok(value)
}

/// Local date-time layouts accepted when no offset is given
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an expense date
///
/// Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates (midnight UTC), and
/// offset-less date-times, which are read in the server's local time zone.
pub fn parse_expense_date(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    for fmt in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| {
                    Error::validation(format!("Invalid date: {} does not exist locally", s))
                });
        }
    }

    Err(Error::validation(format!(
        "Invalid date: {:?} (use YYYY-MM-DD or an RFC 3339 timestamp)",
        input
    )))
}

/// Report cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Start of the window a report generated at `now` covers
    ///
    /// Calendar arithmetic on `now`'s wall-clock time: one day, seven days,
    /// or one month back. Month subtraction clamps to the last valid day
    /// (31 March becomes 28/29 February). If the shifted wall-clock time does
    /// not exist in the zone, a fixed-length duration is subtracted instead.
    pub fn window_start<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let shifted = match self {
            Self::Daily => now.clone().checked_sub_days(Days::new(1)),
            Self::Weekly => now.clone().checked_sub_days(Days::new(7)),
            Self::Monthly => now.clone().checked_sub_months(Months::new(1)),
        };

        shifted.unwrap_or_else(|| now.clone() - self.nominal_length())
    }

    fn nominal_length(&self) -> Duration {
        match self {
            Self::Daily => Duration::days(1),
            Self::Weekly => Duration::days(7),
            Self::Monthly => Duration::days(30),
        }
    }
}

/// Exact lowercase names only, matching the serde representation
impl std::str::FromStr for ReportPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| {
                Error::validation(format!(
                    "Unknown report period: {} (valid: daily, weekly, monthly)",
                    s
                ))
            })
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Totals over a set of expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalysis {
    pub total_by_category: BTreeMap<String, f64>,
    pub total_amount: f64,
}

/// A generated report, kept in the history for its period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub period: ReportPeriod,
    #[serde(with = "timestamp")]
    pub generated_at: DateTime<Utc>,
    pub total_amount: f64,
    pub total_by_category: BTreeMap<String, f64>,
}

/// RFC 3339 with millisecond precision and a `Z` suffix
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
