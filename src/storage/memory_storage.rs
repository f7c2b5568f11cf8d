use crate::{error::Result, storage::Storage, store::BoardState};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// In-process storage holding the serialized snapshot.
///
/// Goes through the same JSON encoding as [`FileStorage`](super::FileStorage),
/// so it behaves like a persisted blob without touching the filesystem.
#[derive(Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<String>>,
    initialized: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage that already holds `state`
    pub fn with_state(state: &BoardState) -> Result<Self> {
        let json = serde_json::to_string(state)?;
        Ok(Self {
            blob: Mutex::new(Some(json)),
            initialized: AtomicBool::new(true),
        })
    }

    /// Raw persisted JSON, if any
    pub async fn blob(&self) -> Option<String> {
        self.blob.lock().await.clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn load_state(&self) -> Result<Option<BoardState>> {
        let blob = self.blob.lock().await;
        match blob.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn save_state(&self, state: &BoardState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        *self.blob.lock().await = Some(json);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.blob.lock().await = None;
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }
}
