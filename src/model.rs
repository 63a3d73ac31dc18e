//! Input data of a report: the printable rows and the report options.
//!
//! Everything arrives display-ready. Amounts, dates and percentages are
//! formatted by the caller, this crate only places the strings on the page.

use serde::{Deserialize as _, Deserializer};
use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One transaction line of the report table
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintableRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    /// Income / expense marker, shown in the "Type" column
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

impl PrintableRow {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// Spending totals shown in the summary block of the first page
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub real_expenses: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub future_expenses: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difference: String,
}

/// End-of-period projections shown in the summary block of the first page
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionsBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub expected_end_balance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub safe_spending_margin: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub negative_risk: String,
}

/// Everything about a report that is not a table row
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    /// Adds a "User:" line to the header when present
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub scope_label: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub period_label: String,
    /// `None` stamps the report with the current time
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub generated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub stats: Option<StatsBlock>,
    #[serde(default)]
    pub projections: Option<ProjectionsBlock>,
}

impl ReportOptions {
    pub fn new(scope_label: impl Into<String>, period_label: impl Into<String>) -> Self {
        Self {
            scope_label: scope_label.into(),
            period_label: period_label.into(),
            ..Default::default()
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_generated_at(mut self, generated_at: OffsetDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    pub fn with_stats(mut self, stats: StatsBlock) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_projections(mut self, projections: ProjectionsBlock) -> Self {
        self.projections = Some(projections);
        self
    }

    /// Label / value pairs of the summary block, stats first.
    ///
    /// Empty when neither block is present.
    pub fn summary_items(&self) -> Vec<(&'static str, &str)> {
        let mut items = Vec::new();
        if let Some(stats) = &self.stats {
            items.push(("Real expenses", stats.real_expenses.as_str()));
            items.push(("Future expenses", stats.future_expenses.as_str()));
            items.push(("Difference", stats.difference.as_str()));
        }
        if let Some(projections) = &self.projections {
            items.push(("Expected end balance", projections.expected_end_balance.as_str()));
            items.push(("Safe spending margin", projections.safe_spending_margin.as_str()));
            items.push(("Negative balance risk", projections.negative_risk.as_str()));
        }
        items
    }
}

/// A complete report request as delivered by the report data service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub rows: Vec<PrintableRow>,
    #[serde(default)]
    pub options: ReportOptions,
}

/// Accepts any JSON scalar where a display string is expected.
///
/// Strings pass through, numbers and booleans are stringified, `null` and
/// nested values become an empty string, so one malformed field blanks a
/// cell instead of rejecting the whole report.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
