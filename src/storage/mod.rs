use crate::{error::Result, store::BoardState};
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Repository persisting the board snapshot as a single blob
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Loads the persisted snapshot, or `None` when nothing was saved yet
    async fn load_state(&self) -> Result<Option<BoardState>>;

    /// Replaces the persisted snapshot
    async fn save_state(&self, state: &BoardState) -> Result<()>;

    /// Removes the persisted snapshot
    async fn clear(&self) -> Result<()>;

    /// Checks if the backend has been initialized
    async fn is_initialized(&self) -> bool;
}
