//! Uploaded-file storage
//!
//! Multipart uploads are written under the configured upload directory with
//! UUID file names so concurrent uploads of identically-named files cannot
//! collide. The stored relative path is what gets persisted.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Build a unique storage name preserving the original extension
pub fn unique_file_name(original: &str) -> String {
    let ext = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if ext.is_empty() {
        Uuid::new_v4().simple().to_string()
    } else {
        format!("{}.{}", Uuid::new_v4().simple(), ext)
    }
}

/// Write uploaded bytes to the upload directory, returning the stored path
pub async fn save_file(upload_dir: &Path, original_name: &str, data: &[u8]) -> AppResult<PathBuf> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create upload dir: {}", e)))?;

    let file_path = upload_dir.join(unique_file_name(original_name));

    let mut file = tokio::fs::File::create(&file_path)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create file: {}", e)))?;
    file.write_all(data)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to write file: {}", e)))?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_file_name_keeps_extension() {
        let name = unique_file_name("cccd_front.jpg");
        assert!(name.ends_with(".jpg"));
        assert_ne!(name, unique_file_name("cccd_front.jpg"));
    }

    #[test]
    fn test_unique_file_name_without_extension() {
        let name = unique_file_name("license");
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_save_file_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_file(dir.path(), "photo.png", b"not-really-a-png")
            .await
            .unwrap();

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"not-really-a-png");
        assert!(path.to_string_lossy().ends_with(".png"));
    }
}
