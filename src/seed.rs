//! Demo boards used to populate an empty store.

use crate::domain::{Board, Column, NewTask, Priority, Task};
use chrono::{DateTime, Duration, Utc};
use rand::{seq::SliceRandom, Rng};

const DEMO_USERS: [&str; 4] = ["John Doe", "Jane Smith", "Alex Johnson", "Sarah Wilson"];

/// Probability that a generated task has an assignee
const ASSIGNED_RATIO: f64 = 0.7;

/// Builds the two sample boards with randomized tasks
pub fn sample_boards<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Board> {
    let sample = board(
        rng,
        now,
        now,
        "Sample Project",
        "This is a sample project board for task management and organization.",
        &[("To Do", 3), ("In Progress", 2), ("Done", 4)],
    );
    let redesign = board(
        rng,
        now,
        now - Duration::days(2),
        "Website Redesign",
        "Tracking tasks related to the website redesign initiative.",
        &[("Backlog", 2), ("In Progress", 1), ("Review", 2), ("Done", 3)],
    );
    vec![sample, redesign]
}

fn board<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    created_at: DateTime<Utc>,
    name: &str,
    description: &str,
    columns: &[(&str, usize)],
) -> Board {
    let mut board = Board::new_at(name, Some(description.to_string()), created_at);
    board.columns = columns
        .iter()
        .map(|(name, count)| {
            let mut column = Column::new(*name);
            column.tasks = sample_tasks(rng, *count, now);
            column
        })
        .collect();
    board
}

fn sample_tasks<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<Task> {
    (1..=count)
        .map(|n| {
            let mut fields = NewTask::new(format!("Task {n}"))
                .with_description(format!(
                    "This is a description for task {n}. It might contain some **markdown**."
                ))
                .with_creator(pick_user(rng))
                .with_priority(*Priority::ALL.choose(rng).unwrap_or(&Priority::Medium))
                .with_due_date(now.date_naive() + Duration::days(rng.gen_range(-3..14)));
            if rng.gen_bool(ASSIGNED_RATIO) {
                fields = fields.with_assignee(pick_user(rng));
            }
            Task::from_new(fields, now)
        })
        .collect()
}

fn pick_user<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DEMO_USERS.choose(rng).copied().unwrap_or(DEMO_USERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_sample_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();

        let boards = sample_boards(&mut rng, now);

        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].name, "Sample Project");
        let counts: Vec<_> = boards[0].columns.iter().map(|c| c.tasks.len()).collect();
        assert_eq!(counts, vec![3, 2, 4]);

        assert_eq!(boards[1].name, "Website Redesign");
        let names: Vec<_> = boards[1].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Backlog", "In Progress", "Review", "Done"]);
        assert_eq!(boards[1].task_count(), 8);
        assert_eq!(boards[1].created_at, now - Duration::days(2));
    }

    #[test]
    fn test_sample_tasks_are_plausible() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        let today = now.date_naive();

        let boards = sample_boards(&mut rng, now);

        let mut ids = HashSet::new();
        for board in &boards {
            for task in board.tasks() {
                assert!(ids.insert(task.id));
                assert!(DEMO_USERS.contains(&task.created_by.as_str()));
                let due = task.due_date.unwrap();
                assert!(due >= today - Duration::days(3));
                assert!(due <= today + Duration::days(13));
            }
        }
    }
}
