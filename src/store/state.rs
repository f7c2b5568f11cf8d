use crate::{
    domain::{
        task::ensure_not_blank, Board, BoardId, BoardUpdate, Column, ColumnId, ColumnUpdate,
        NewTask, Task, TaskId, TaskUpdate,
    },
    error::{BoardError, Result},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Where a task currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub index: usize,
}

/// Snapshot of every board, in creation order.
///
/// Each operation validates its inputs before touching anything, so a failed
/// operation leaves the snapshot exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    boards: Vec<Board>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.boards.iter().map(Board::task_count).sum()
    }

    // Boards

    pub fn create_board(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Board> {
        let name = name.into();
        ensure_not_blank(&name, "name")?;

        let board = Board::new(name, description);
        self.boards.push(board.clone());
        Ok(board)
    }

    pub fn update_board(&mut self, board_id: &BoardId, update: BoardUpdate) -> Result<()> {
        update.validate()?;
        let board = self.board_mut(board_id)?;
        update.apply_to(board);
        Ok(())
    }

    /// Removes the board together with its columns and tasks
    pub fn delete_board(&mut self, board_id: &BoardId) -> Result<Board> {
        let index = self
            .boards
            .iter()
            .position(|b| &b.id == board_id)
            .ok_or_else(|| BoardError::BoardNotFound(board_id.to_string()))?;
        Ok(self.boards.remove(index))
    }

    pub fn get_board(&self, board_id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == board_id)
    }

    // Columns

    pub fn create_column(&mut self, board_id: &BoardId, name: impl Into<String>) -> Result<Column> {
        let name = name.into();
        ensure_not_blank(&name, "name")?;

        let board = self.board_mut(board_id)?;
        let column = Column::new(name);
        board.columns.push(column.clone());
        Ok(column)
    }

    pub fn update_column(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        update: ColumnUpdate,
    ) -> Result<()> {
        update.validate()?;
        let column = self.column_mut(board_id, column_id)?;
        update.apply_to(column);
        Ok(())
    }

    /// Removes the column together with its tasks
    pub fn delete_column(&mut self, board_id: &BoardId, column_id: &ColumnId) -> Result<Column> {
        let board = self.board_mut(board_id)?;
        let index = board
            .column_position(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
        Ok(board.columns.remove(index))
    }

    /// Moves the column at `source_index` to `destination_index`.
    ///
    /// Remove-then-insert: the destination is a position in the list after
    /// the column has been taken out.
    pub fn move_column(
        &mut self,
        board_id: &BoardId,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        let board = self.board_mut(board_id)?;
        reorder(&mut board.columns, source_index, destination_index)
    }

    pub fn get_column(&self, board_id: &BoardId, column_id: &ColumnId) -> Option<&Column> {
        self.get_board(board_id)?.column(column_id)
    }

    // Tasks

    pub fn create_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        fields: NewTask,
    ) -> Result<Task> {
        fields.validate()?;
        let column = self.column_mut(board_id, column_id)?;
        let task = Task::from_new(fields, Utc::now());
        column.tasks.push(task.clone());
        Ok(task)
    }

    pub fn update_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
        update: TaskUpdate,
    ) -> Result<()> {
        update.validate()?;
        let task = self
            .column_mut(board_id, column_id)?
            .task_mut(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;
        update.apply_to(task);
        Ok(())
    }

    pub fn delete_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
    ) -> Result<Task> {
        let column = self.column_mut(board_id, column_id)?;
        let index = column
            .task_position(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;
        Ok(column.tasks.remove(index))
    }

    /// Moves the task at `source_index` of one column to `destination_index`
    /// of another, or of the same column.
    ///
    /// Within one column this is a remove-then-insert reorder. Across columns
    /// the destination may equal the destination column's length (append).
    pub fn move_task(
        &mut self,
        board_id: &BoardId,
        source_column_id: &ColumnId,
        destination_column_id: &ColumnId,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        let board = self.board_mut(board_id)?;
        let source = board
            .column_position(source_column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(source_column_id.to_string()))?;
        let destination = board
            .column_position(destination_column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(destination_column_id.to_string()))?;

        if source == destination {
            return reorder(&mut board.columns[source].tasks, source_index, destination_index);
        }

        check_index(source_index, board.columns[source].tasks.len())?;
        check_index(destination_index, board.columns[destination].tasks.len() + 1)?;

        let task = board.columns[source].tasks.remove(source_index);
        board.columns[destination].tasks.insert(destination_index, task);
        Ok(())
    }

    pub fn get_task(
        &self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
    ) -> Option<&Task> {
        self.get_column(board_id, column_id)?.task(task_id)
    }

    /// Resolves the board and column currently owning a task
    pub fn find_task(&self, task_id: &TaskId) -> Option<TaskLocation> {
        self.boards.iter().find_map(|board| {
            board.columns.iter().find_map(|column| {
                column.task_position(task_id).map(|index| TaskLocation {
                    board_id: board.id,
                    column_id: column.id,
                    index,
                })
            })
        })
    }

    fn board_mut(&mut self, board_id: &BoardId) -> Result<&mut Board> {
        self.boards
            .iter_mut()
            .find(|b| &b.id == board_id)
            .ok_or_else(|| BoardError::BoardNotFound(board_id.to_string()))
    }

    fn column_mut(&mut self, board_id: &BoardId, column_id: &ColumnId) -> Result<&mut Column> {
        self.board_mut(board_id)?
            .column_mut(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(BoardError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// Standard list reorder: remove at `from`, then insert at `to` in the shortened list
fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    check_index(from, items.len())?;
    check_index(to, items.len())?;

    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
