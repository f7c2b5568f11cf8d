//! The board store: single owner of the board snapshot.
//!
//! Every mutation runs as a pure transition on [`BoardState`] and, when it
//! succeeds, the whole snapshot is written through the injected [`Storage`].
//! A failed transition changes nothing and writes nothing.

pub mod state;

pub use state::{BoardState, TaskLocation};

use crate::{
    config::StoreConfig,
    domain::{
        Board, BoardId, BoardUpdate, Column, ColumnId, ColumnUpdate, NewTask, Task, TaskId,
        TaskUpdate,
    },
    error::Result,
    seed,
    storage::Storage,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct BoardStore {
    storage: Arc<dyn Storage>,
    state: BoardState,
    persisting: bool,
    /// Set when the persisted snapshot could not be read; saves are held
    /// back so the unreadable data is never overwritten
    load_failed: bool,
}

impl BoardStore {
    /// Opens the store on top of `storage`.
    ///
    /// A snapshot that cannot be loaded is logged and replaced by an empty
    /// in-memory one. The store then runs without saving, leaving the stored
    /// data untouched, until [`discard_persisted`](Self::discard_persisted)
    /// is called. Sample boards are seeded into an empty snapshot when the
    /// config asks for it and the load succeeded.
    pub async fn open(storage: Arc<dyn Storage>, config: &StoreConfig) -> Self {
        let mut persisting = true;
        if let Err(e) = storage.initialize().await {
            warn!(error = %e, "failed to initialize board storage, continuing in memory");
            persisting = false;
        }

        let (state, load_failed) = match storage.load_state().await {
            Ok(Some(state)) => (state, false),
            Ok(None) => (BoardState::default(), false),
            Err(e) => {
                warn!(error = %e, "failed to load board state, continuing in memory only");
                (BoardState::default(), true)
            }
        };

        let mut store = Self {
            storage,
            state,
            persisting: persisting && !load_failed,
            load_failed,
        };
        info!(boards = store.state.boards().len(), "board store opened");

        if !load_failed && store.state.is_empty() && config.seed_sample_data {
            store.seed().await;
        }
        store
    }

    /// Store that keeps the given snapshot without loading from `storage`
    pub fn with_state(storage: Arc<dyn Storage>, state: BoardState) -> Self {
        Self {
            storage,
            state,
            persisting: true,
            load_failed: false,
        }
    }

    async fn seed(&mut self) {
        let boards = seed::sample_boards(&mut rand::thread_rng(), Utc::now());
        info!(boards = boards.len(), "seeding sample boards");
        self.state = BoardState::from_boards(boards);
        self.persist().await;
    }

    /// Current snapshot
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn boards(&self) -> &[Board] {
        self.state.boards()
    }

    /// False once a save has failed, until the next save succeeds, and
    /// while the persisted snapshot is unreadable
    pub fn is_persisting(&self) -> bool {
        self.persisting
    }

    /// Whether the persisted snapshot could not be read when the store opened
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Drops the unreadable persisted snapshot and saves the in-memory one in its place
    pub async fn discard_persisted(&mut self) -> Result<()> {
        self.storage.clear().await?;
        self.load_failed = false;
        info!("discarded unreadable board state");
        self.persist().await;
        Ok(())
    }

    async fn persist(&mut self) {
        if self.load_failed {
            debug!("persisted board state unreadable, keeping changes in memory");
            return;
        }
        match self.storage.save_state(&self.state).await {
            Ok(()) => {
                if !self.persisting {
                    info!("board state persisted again");
                }
                self.persisting = true;
            }
            Err(e) => {
                warn!(error = %e, "failed to persist board state, keeping changes in memory");
                self.persisting = false;
            }
        }
    }

    // Boards

    pub async fn create_board(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Board> {
        let board = self.state.create_board(name, description)?;
        debug!(board_id = %board.id, name = %board.name, "board created");
        self.persist().await;
        Ok(board)
    }

    pub async fn update_board(&mut self, board_id: &BoardId, update: BoardUpdate) -> Result<()> {
        self.state.update_board(board_id, update)?;
        debug!(%board_id, "board updated");
        self.persist().await;
        Ok(())
    }

    pub async fn delete_board(&mut self, board_id: &BoardId) -> Result<Board> {
        let board = self.state.delete_board(board_id)?;
        debug!(%board_id, tasks = board.task_count(), "board deleted");
        self.persist().await;
        Ok(board)
    }

    pub fn get_board(&self, board_id: &BoardId) -> Option<&Board> {
        self.state.get_board(board_id)
    }

    // Columns

    pub async fn create_column(
        &mut self,
        board_id: &BoardId,
        name: impl Into<String>,
    ) -> Result<Column> {
        let column = self.state.create_column(board_id, name)?;
        debug!(%board_id, column_id = %column.id, "column created");
        self.persist().await;
        Ok(column)
    }

    pub async fn update_column(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        update: ColumnUpdate,
    ) -> Result<()> {
        self.state.update_column(board_id, column_id, update)?;
        debug!(%board_id, %column_id, "column updated");
        self.persist().await;
        Ok(())
    }

    pub async fn delete_column(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
    ) -> Result<Column> {
        let column = self.state.delete_column(board_id, column_id)?;
        debug!(%board_id, %column_id, tasks = column.tasks.len(), "column deleted");
        self.persist().await;
        Ok(column)
    }

    pub async fn move_column(
        &mut self,
        board_id: &BoardId,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        self.state
            .move_column(board_id, source_index, destination_index)?;
        debug!(%board_id, source_index, destination_index, "column moved");
        self.persist().await;
        Ok(())
    }

    pub fn get_column(&self, board_id: &BoardId, column_id: &ColumnId) -> Option<&Column> {
        self.state.get_column(board_id, column_id)
    }

    // Tasks

    pub async fn create_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        fields: NewTask,
    ) -> Result<Task> {
        let task = self.state.create_task(board_id, column_id, fields)?;
        debug!(%board_id, %column_id, task_id = %task.id, "task created");
        self.persist().await;
        Ok(task)
    }

    pub async fn update_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
        update: TaskUpdate,
    ) -> Result<()> {
        self.state.update_task(board_id, column_id, task_id, update)?;
        debug!(%board_id, %column_id, %task_id, "task updated");
        self.persist().await;
        Ok(())
    }

    pub async fn delete_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
    ) -> Result<Task> {
        let task = self.state.delete_task(board_id, column_id, task_id)?;
        debug!(%board_id, %column_id, %task_id, "task deleted");
        self.persist().await;
        Ok(task)
    }

    pub async fn move_task(
        &mut self,
        board_id: &BoardId,
        source_column_id: &ColumnId,
        destination_column_id: &ColumnId,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        self.state.move_task(
            board_id,
            source_column_id,
            destination_column_id,
            source_index,
            destination_index,
        )?;
        debug!(
            %board_id,
            %source_column_id,
            %destination_column_id,
            source_index,
            destination_index,
            "task moved"
        );
        self.persist().await;
        Ok(())
    }

    pub fn get_task(
        &self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
    ) -> Option<&Task> {
        self.state.get_task(board_id, column_id, task_id)
    }

    pub fn find_task(&self, task_id: &TaskId) -> Option<TaskLocation> {
        self.state.find_task(task_id)
    }
}
