use crate::domain::{board::Board, task::Task};
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Priority,
    DueDate,
    Created,
}

/// Fields available for sorting boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSortField {
    Name,
    Created,
    TaskCount,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "priority" => Ok(SortField::Priority),
            "due" | "duedate" | "due-date" => Ok(SortField::DueDate),
            "created" | "createdat" | "created-at" => Ok(SortField::Created),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: title, priority, due, created",
                s
            )),
        }
    }
}

impl FromStr for BoardSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(BoardSortField::Name),
            "created" | "createdat" | "created-at" => Ok(BoardSortField::Created),
            "tasks" | "task-count" => Ok(BoardSortField::TaskCount),
            _ => Err(format!(
                "Invalid board sort field '{}'. Valid fields: name, created, tasks",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

impl SortOrder {
    fn apply(self, cmp: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    }
}

/// Sorts tasks in place by the given field and order.
///
/// The sort is stable: tasks comparing equal keep their relative order.
/// Priority compares by rank, not by name. A missing due date sorts as the
/// earliest possible date.
///
/// # Examples
/// ```
/// use taskboard_core::domain::sorting::{sort_tasks, SortField, SortOrder};
/// use taskboard_core::domain::task::Task;
///
/// let mut tasks = vec![Task::new("b"), Task::new("A"), Task::new("c")];
///
/// sort_tasks(&mut tasks, SortField::Title, SortOrder::Ascending);
/// assert_eq!(tasks[0].title, "A");
/// ```
pub fn sort_tasks(tasks: &mut [Task], field: SortField, order: SortOrder) {
    tasks.sort_by(|a, b| order.apply(compare_tasks(a, b, field)));
}

fn compare_tasks(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        // `None < Some(_)`, so undated tasks come first ascending
        SortField::DueDate => a.due_date.cmp(&b.due_date),
        SortField::Created => a.created_at.cmp(&b.created_at),
    }
}

/// Sorts boards in place by the given field and order (stable)
pub fn sort_boards(boards: &mut [Board], field: BoardSortField, order: SortOrder) {
    boards.sort_by(|a, b| {
        let cmp = match field {
            BoardSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            BoardSortField::Created => a.created_at.cmp(&b.created_at),
            BoardSortField::TaskCount => a.task_count().cmp(&b.task_count()),
        };
        order.apply(cmp)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        board::Column,
        task::{NewTask, Priority},
    };
    use chrono::{Duration, NaiveDate, Utc};

    fn task_with_priority(title: &str, priority: Priority) -> Task {
        Task::from_new(NewTask::new(title).with_priority(priority), Utc::now())
    }

    fn task_due(title: &str, due: Option<NaiveDate>) -> Task {
        let mut fields = NewTask::new(title);
        fields.due_date = due;
        Task::from_new(fields, Utc::now())
    }

    #[test]
    fn test_sort_tasks_by_title_case_insensitive() {
        let mut tasks = vec![Task::new("zebra"), Task::new("Apple"), Task::new("BANANA")];

        sort_tasks(&mut tasks, SortField::Title, SortOrder::Ascending);

        assert_eq!(tasks[0].title, "Apple");
        assert_eq!(tasks[1].title, "BANANA");
        assert_eq!(tasks[2].title, "zebra");
    }

    #[test]
    fn test_sort_tasks_by_title_descending() {
        let mut tasks = vec![Task::new("Alpha"), Task::new("Charlie"), Task::new("Bravo")];

        sort_tasks(&mut tasks, SortField::Title, SortOrder::Descending);

        assert_eq!(tasks[0].title, "Charlie");
        assert_eq!(tasks[1].title, "Bravo");
        assert_eq!(tasks[2].title, "Alpha");
    }

    #[test]
    fn test_sort_tasks_by_priority_rank_not_name() {
        let mut tasks = vec![
            task_with_priority("m", Priority::Medium),
            task_with_priority("h", Priority::High),
            task_with_priority("l", Priority::Low),
        ];

        sort_tasks(&mut tasks, SortField::Priority, SortOrder::Ascending);
        let order: Vec<_> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(order, vec![Priority::Low, Priority::Medium, Priority::High]);

        sort_tasks(&mut tasks, SortField::Priority, SortOrder::Descending);
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut tasks = vec![
            task_with_priority("first", Priority::High),
            task_with_priority("second", Priority::Low),
            task_with_priority("third", Priority::High),
        ];

        sort_tasks(&mut tasks, SortField::Priority, SortOrder::Descending);

        assert_eq!(tasks[0].title, "first");
        assert_eq!(tasks[1].title, "third");
        assert_eq!(tasks[2].title, "second");
    }

    #[test]
    fn test_missing_due_date_sorts_earliest() {
        let today = Utc::now().date_naive();
        let mut tasks = vec![
            task_due("later", Some(today + Duration::days(5))),
            task_due("none", None),
            task_due("sooner", Some(today)),
        ];

        sort_tasks(&mut tasks, SortField::DueDate, SortOrder::Ascending);

        assert_eq!(tasks[0].title, "none");
        assert_eq!(tasks[1].title, "sooner");
        assert_eq!(tasks[2].title, "later");

        sort_tasks(&mut tasks, SortField::DueDate, SortOrder::Descending);
        assert_eq!(tasks[2].title, "none");
    }

    #[test]
    fn test_sort_by_created() {
        let now = Utc::now();
        let older = Task::from_new(NewTask::new("older"), now - Duration::hours(1));
        let newer = Task::from_new(NewTask::new("newer"), now);
        let mut tasks = vec![newer, older];

        sort_tasks(&mut tasks, SortField::Created, SortOrder::Ascending);

        assert_eq!(tasks[0].title, "older");
    }

    #[test]
    fn test_sort_boards() {
        let mut busy = Board::new("busy", None);
        let mut column = Column::new("To Do");
        column.tasks.push(Task::new("t1"));
        column.tasks.push(Task::new("t2"));
        busy.columns.push(column);
        let quiet = Board::new("Alpha", None);
        let mut boards = vec![busy, quiet];

        sort_boards(&mut boards, BoardSortField::Name, SortOrder::Ascending);
        assert_eq!(boards[0].name, "Alpha");

        sort_boards(&mut boards, BoardSortField::TaskCount, SortOrder::Descending);
        assert_eq!(boards[0].name, "busy");
    }

    #[test]
    fn test_parse_sort_options() {
        assert_eq!("Priority".parse::<SortField>(), Ok(SortField::Priority));
        assert_eq!("due-date".parse::<SortField>(), Ok(SortField::DueDate));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert!("status".parse::<SortField>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
        assert_eq!("tasks".parse::<BoardSortField>(), Ok(BoardSortField::TaskCount));
    }
}
