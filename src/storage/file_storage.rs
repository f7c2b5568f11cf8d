use crate::{config::StoreConfig, error::Result, storage::Storage, store::BoardState};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage keeping the whole snapshot in one JSON file
pub struct FileStorage {
    root_path: PathBuf,
    file_name: String,
}

impl FileStorage {
    pub const DATA_DIR: &'static str = ".taskboard";
    pub const STATE_FILE: &'static str = "task-board-storage.json";

    /// Creates a new FileStorage under `<root>/.taskboard`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::DATA_DIR),
            file_name: Self::STATE_FILE.to_string(),
        }
    }

    /// Creates a FileStorage at the configured data directory and file name
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            root_path: config.data_dir.clone(),
            file_name: config.state_file.clone(),
        }
    }

    pub fn state_file(&self) -> PathBuf {
        self.root_path.join(&self.file_name)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn load_state(&self) -> Result<Option<BoardState>> {
        let state_file = self.state_file();

        if !state_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&state_file).await?;
        let state: BoardState = serde_json::from_str(&contents)?;

        Ok(Some(state))
    }

    async fn save_state(&self, state: &BoardState) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(state)?;
        fs::write(self.state_file(), json).await?;

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let state_file = self.state_file();
        if state_file.exists() {
            fs::remove_file(state_file).await?;
        }
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewTask, Priority};
    use crate::error::BoardError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_storage_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(!storage.is_initialized().await);

        storage.initialize().await.unwrap();

        assert!(storage.is_initialized().await);
        assert!(!storage.state_file().exists());
    }

    #[tokio::test]
    async fn test_load_without_saved_state() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        assert!(storage.load_state().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_state_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        let mut state = BoardState::new();
        let board = state.create_board("Sprint 1", None).unwrap();
        let column = state.create_column(&board.id, "To Do").unwrap();
        state
            .create_task(
                &board.id,
                &column.id,
                NewTask::new("Fix bug").with_priority(Priority::High),
            )
            .unwrap();

        storage.save_state(&state).await.unwrap();
        let loaded = storage.load_state().await.unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested"));

        storage.save_state(&BoardState::new()).await.unwrap();

        assert!(storage.state_file().exists());
    }

    #[tokio::test]
    async fn test_load_browser_blob() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        let blob = r#"{
          "boards": [{
            "id": "0b8f1f5e-8a51-4d1e-9c55-0f3a3f1e4b10",
            "name": "Sample Project",
            "description": "",
            "createdAt": "2024-05-13T09:00:00.000Z",
            "columns": [{
              "id": "5a1a4a57-5f0e-4c4a-8d4b-9b7b8a0a9c21",
              "name": "To Do",
              "tasks": [{
                "id": "c2d7a8f1-1c9e-4b0e-8f3b-6a2f1e9d7c33",
                "title": "Task 1",
                "description": "This is a description for task 1.",
                "createdBy": "John Doe",
                "assignedTo": "Jane Smith",
                "priority": "low",
                "dueDate": null,
                "createdAt": "2024-05-13T09:00:00.000Z"
              }]
            }]
          }]
        }"#;
        fs::write(storage.state_file(), blob).await.unwrap();

        let state = storage.load_state().await.unwrap().unwrap();

        let board = &state.boards()[0];
        assert_eq!(board.name, "Sample Project");
        assert_eq!(board.description, None);
        assert_eq!(board.columns[0].tasks[0].assigned_to.as_deref(), Some("Jane Smith"));
        assert_eq!(board.columns[0].tasks[0].priority, Priority::Low);
    }

    #[tokio::test]
    async fn test_corrupt_state_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();
        fs::write(storage.state_file(), "{ not json").await.unwrap();

        let err = storage.load_state().await.unwrap_err();

        assert!(matches!(err, BoardError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.save_state(&BoardState::new()).await.unwrap();

        storage.clear().await.unwrap();

        assert!(storage.load_state().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig {
            data_dir: temp_dir.path().join("data"),
            state_file: "boards.json".to_string(),
            ..StoreConfig::default()
        };
        let storage = FileStorage::from_config(&config);

        storage.save_state(&BoardState::new()).await.unwrap();

        assert!(temp_dir.path().join("data").join("boards.json").exists());
    }
}
