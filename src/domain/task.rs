use crate::{
    domain::{due, id::TaskId},
    error::{BoardError, Result},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Creator recorded when a task is created without one
pub const DEFAULT_CREATOR: &str = "Current User";

/// Priority of a task, ordered by rank (low < medium < high)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Numeric rank used for sorting
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(BoardError::InvalidPriority(s.to_string())),
        }
    }
}

/// A unit of work living in exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Markdown text, empty when not provided
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_creator")]
    pub created_by: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_due_date")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with default metadata and a fresh identifier
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_new(NewTask::new(title), Utc::now())
    }

    /// Builds a task from creation fields, filling in the defaults
    pub fn from_new(fields: NewTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description.unwrap_or_default(),
            created_by: fields
                .created_by
                .filter(|c| !c.is_empty())
                .unwrap_or_else(default_creator),
            assigned_to: fields.assigned_to.filter(|a| !a.is_empty()),
            priority: fields.priority.unwrap_or_default(),
            due_date: fields.due_date,
            created_at,
        }
    }

    /// Case-insensitive match of an already lowercased term against title and description
    pub(crate) fn matches_lowercase(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.description.to_lowercase().contains(term)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        due::is_overdue(self.due_date, today)
    }

    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        due::is_due_soon(self.due_date, today)
    }
}

/// Fields accepted when creating a task
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.created_by = Some(creator.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_not_blank(&self.title, "title")
    }
}

/// Partial update merged into an existing task.
///
/// `None` leaves a field untouched. Nullable fields take `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn assignee(mut self, assignee: Option<String>) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) => ensure_not_blank(title, "title"),
            None => Ok(()),
        }
    }

    pub(crate) fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(assignee) = self.assigned_to {
            task.assigned_to = assignee.filter(|a| !a.is_empty());
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
    }
}

pub(crate) fn ensure_not_blank(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoardError::EmptyField(field));
    }
    Ok(())
}

fn default_creator() -> String {
    DEFAULT_CREATOR.to_string()
}

/// Reads legacy empty strings as absent values
pub(crate) fn empty_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Missing, null and empty priorities load as medium; names match case-insensitively
fn lenient_priority<'de, D>(deserializer: D) -> std::result::Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw.parse().map_err(serde::de::Error::custom),
        _ => Ok(Priority::default()),
    }
}

/// Accepts `YYYY-MM-DD`, a full RFC 3339 timestamp, an empty string or null
fn lenient_due_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.with_timezone(&Utc).date_naive()))
        .map_err(serde::de::Error::custom)
}
