use crate::domain::ports::SessionStore;
use crate::utils::error::Result;
use std::io::ErrorKind;
use std::path::PathBuf;

/// 把 session cookie 存在本機檔案，讓多次執行共用同一個登入狀態
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for LocalStorage {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let cookie = content.trim();
                Ok((!cookie.is_empty()).then(|| cookie.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, cookie: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, cookie).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_session_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested").join("session"));

        assert_eq!(storage.load().await.unwrap(), None);

        storage.save("user-session=abc").await.unwrap();
        assert_eq!(
            storage.load().await.unwrap(),
            Some("user-session=abc".to_string())
        );

        storage.clear().await.unwrap();
        assert_eq!(storage.load().await.unwrap(), None);
        // 重複清除不算錯誤
        storage.clear().await.unwrap();
    }
}
