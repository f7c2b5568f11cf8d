use crate::{
    domain::{
        id::{BoardId, ColumnId, TaskId},
        task::{empty_as_none, ensure_not_blank, Task},
    },
    error::Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named, ordered bucket of tasks owned by one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    pub fn task_position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}

/// Top-level container of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self::new_at(name, description, Utc::now())
    }

    pub fn new_at(
        name: impl Into<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            description: description.filter(|d| !d.is_empty()),
            columns: Vec::new(),
            created_at,
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    pub fn column_position(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// All tasks of the board, column by column
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// Partial update merged into a board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl BoardUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match &self.name {
            Some(name) => ensure_not_blank(name, "name"),
            None => Ok(()),
        }
    }

    pub(crate) fn apply_to(self, board: &mut Board) {
        if let Some(name) = self.name {
            board.name = name;
        }
        if let Some(description) = self.description {
            board.description = description.filter(|d| !d.is_empty());
        }
    }
}

/// Partial update merged into a column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnUpdate {
    pub name: Option<String>,
}

impl ColumnUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match &self.name {
            Some(name) => ensure_not_blank(name, "name"),
            None => Ok(()),
        }
    }

    pub(crate) fn apply_to(self, column: &mut Column) {
        if let Some(name) = self.name {
            column.name = name;
        }
    }
}
