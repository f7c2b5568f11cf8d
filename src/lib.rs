//! # Taskboard Core
//!
//! Board state store and query helpers for a kanban task board.
//!
//! Boards own ordered columns, columns own ordered tasks. All mutations go
//! through [`BoardStore`], which applies them to an immutable-by-API
//! [`BoardState`] snapshot and writes the snapshot through a [`Storage`]
//! backend. Filtering and sorting live in [`domain`] as pure functions over a
//! snapshot.

pub mod config;
pub mod domain;
pub mod error;
pub mod seed;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{
    board::{Board, BoardUpdate, Column, ColumnUpdate},
    filter::{BoardFilter, DueDateFilter, TaskFilter},
    id::{BoardId, ColumnId, TaskId},
    sorting::{SortField, SortOrder},
    task::{NewTask, Priority, Task, TaskUpdate},
};
pub use error::{BoardError, Result};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{BoardState, BoardStore, TaskLocation};
