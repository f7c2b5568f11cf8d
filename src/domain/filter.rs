use crate::domain::{
    board::Board,
    due,
    sorting::{sort_tasks, SortField, SortOrder},
    task::{Priority, Task},
};
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Due date bucket a task must fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DueDateFilter {
    Today,
    ThisWeek,
    Overdue,
}

impl DueDateFilter {
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::Today => due::is_due_today(task.due_date, today),
            Self::ThisWeek => due::is_due_this_week(task.due_date, today),
            Self::Overdue => due::is_overdue(task.due_date, today),
        }
    }
}

impl FromStr for DueDateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "thisweek" | "this-week" | "week" => Ok(Self::ThisWeek),
            "overdue" => Ok(Self::Overdue),
            _ => Err(format!(
                "Invalid due date filter '{}'. Valid filters: today, this-week, overdue",
                s
            )),
        }
    }
}

impl fmt::Display for DueDateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "Due Today"),
            Self::ThisWeek => write!(f, "Due This Week"),
            Self::Overdue => write!(f, "Overdue"),
        }
    }
}

/// Predicates applied to the tasks of a column. All active predicates must hold.
///
/// Empty sets and an empty search term place no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub priorities: BTreeSet<Priority>,
    pub assignees: BTreeSet<String>,
    pub due: Option<DueDateFilter>,
}

impl TaskFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priorities.insert(priority);
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignees.insert(assignee.into());
        self
    }

    pub fn due(mut self, due: DueDateFilter) -> Self {
        self.due = Some(due);
        self
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.priorities.is_empty()
            || !self.assignees.is_empty()
            || self.due.is_some()
    }

    /// Number of individual selections, as shown on a filter badge
    pub fn active_count(&self) -> usize {
        self.priorities.len() + self.assignees.len() + usize::from(self.due.is_some())
    }

    fn matches(&self, task: &Task, search: &str, today: NaiveDate) -> bool {
        if !search.is_empty() && !task.matches_lowercase(search) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority) {
            return false;
        }
        if !self.assignees.is_empty() {
            let assigned = task
                .assigned_to
                .as_ref()
                .is_some_and(|a| self.assignees.contains(a));
            if !assigned {
                return false;
            }
        }
        match self.due {
            Some(bucket) => bucket.matches(task, today),
            None => true,
        }
    }
}

/// Returns the tasks satisfying every active predicate of `filter`, in input order.
///
/// Due buckets are evaluated against the calendar day of `now` in its own
/// time zone, so pass a local `DateTime` to bucket by the viewer's day.
pub fn filter_tasks<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    filter: &TaskFilter,
    now: DateTime<Tz>,
) -> Vec<&'a Task> {
    filter_tasks_on(tasks, filter, due::today_in(&now))
}

fn filter_tasks_on<'a>(tasks: &'a [Task], filter: &TaskFilter, today: NaiveDate) -> Vec<&'a Task> {
    let search = filter.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.matches(task, &search, today))
        .collect()
}

/// Builds a view of `board` with each column's tasks filtered, then sorted.
///
/// The board itself is not modified; the view is a detached copy.
pub fn filter_board<Tz: TimeZone>(
    board: &Board,
    filter: &TaskFilter,
    sort: Option<(SortField, SortOrder)>,
    now: DateTime<Tz>,
) -> Board {
    let mut view = board.clone();
    if !filter.is_active() && sort.is_none() {
        return view;
    }

    let today = due::today_in(&now);
    for column in &mut view.columns {
        if filter.is_active() {
            column.tasks = filter_tasks_on(&column.tasks, filter, today)
                .into_iter()
                .cloned()
                .collect();
        }
        if let Some((field, order)) = sort {
            sort_tasks(&mut column.tasks, field, order);
        }
    }
    view
}

/// Distinct values present on a board, used to populate filter choices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFacets {
    /// Sorted alphabetically; unassigned tasks contribute nothing
    pub assignees: Vec<String>,
    /// Sorted by rank
    pub priorities: Vec<Priority>,
}

pub fn board_facets(board: &Board) -> BoardFacets {
    let mut assignees = BTreeSet::new();
    let mut priorities = BTreeSet::new();

    for task in board.tasks() {
        if let Some(assignee) = &task.assigned_to {
            assignees.insert(assignee.clone());
        }
        priorities.insert(task.priority);
    }

    BoardFacets {
        assignees: assignees.into_iter().collect(),
        priorities: priorities.into_iter().collect(),
    }
}

/// Boards whose name contains `term`, case-insensitively. An empty term matches all.
pub fn search_boards<'a>(boards: &'a [Board], term: &str) -> Vec<&'a Board> {
    let term = term.to_lowercase();
    boards
        .iter()
        .filter(|b| term.is_empty() || b.name.to_lowercase().contains(&term))
        .collect()
}

/// Board-level classification computed over all of a board's tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardFilter {
    HasTasks,
    Empty,
    DueSoon,
    Overdue,
}

impl BoardFilter {
    pub fn matches(&self, board: &Board, today: NaiveDate) -> bool {
        match self {
            Self::HasTasks => board.task_count() > 0,
            Self::Empty => board.task_count() == 0,
            Self::DueSoon => count_due_soon(board, today) > 0,
            Self::Overdue => board.tasks().any(|t| t.is_overdue(today)),
        }
    }
}

/// Boards matching `filter`, with due classifications taken on the calendar day of `now`
pub fn filter_boards<'a, Tz: TimeZone>(
    boards: &'a [Board],
    filter: BoardFilter,
    now: DateTime<Tz>,
) -> Vec<&'a Board> {
    let today = due::today_in(&now);
    boards.iter().filter(|b| filter.matches(b, today)).collect()
}

/// Tasks on the board due today or within the next three days
pub fn count_due_soon(board: &Board, today: NaiveDate) -> usize {
    board
        .tasks()
        .filter(|t| due::is_due_within(t.due_date, today, due::BOARD_DUE_SOON_DAYS))
        .count()
}
