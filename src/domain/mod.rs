pub mod board;
pub mod due;
pub mod filter;
pub mod format;
pub mod id;
pub mod sorting;
pub mod task;

pub use board::{Board, BoardUpdate, Column, ColumnUpdate};
pub use filter::{
    board_facets, count_due_soon, filter_board, filter_boards, filter_tasks, search_boards,
    BoardFacets, BoardFilter, DueDateFilter, TaskFilter,
};
pub use format::{format_due_date, truncate, DEFAULT_TRUNCATE_LEN};
pub use id::{BoardId, ColumnId, TaskId};
pub use sorting::{sort_boards, sort_tasks, BoardSortField, SortField, SortOrder};
pub use task::{NewTask, Priority, Task, TaskUpdate};
