// Task model and its fixed enumerations

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire format for `createdAt`. Fixed (rather than locale-dependent) so a
/// persisted snapshot round-trips byte-for-byte.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unique task identifier.
///
/// UUID v7 embeds the creation timestamp, so ids are monotonically
/// distinguishable and cannot collide at any realistic creation rate.
pub type TaskId = Uuid;

/// One to-do entry.
///
/// Snapshot field names (`dueDate`, `createdAt`) are part of the persisted
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: Category,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Task {
    /// Build a fresh, uncompleted task stamped with the current local time.
    ///
    /// Text validation (blank rejection) is the store's job, not this
    /// constructor's.
    pub(crate) fn new(
        text: String,
        priority: Priority,
        category: Category,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            text,
            completed: false,
            priority,
            category,
            due_date,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// Task priority, lowest to highest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{other}' (expected low, medium or high)")),
        }
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    #[default]
    Personal,
    Shopping,
    Health,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Shopping => "shopping",
            Category::Health => "health",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "shopping" => Ok(Category::Shopping),
            "health" => Ok(Category::Health),
            other => Err(format!(
                "unknown category '{other}' (expected work, personal, shopping or health)"
            )),
        }
    }
}
