use crate::domain::model::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 後端 REST API；非 2xx 也算成功取得回應，只有傳輸層失敗才回傳 Err
#[async_trait]
pub trait Backend: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;

    /// 登出成功後丟棄本地保存的 session
    async fn end_session(&self) -> Result<()> {
        Ok(())
    }
}

/// 保存伺服器設定的 session cookie
pub trait SessionStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn save(&self, cookie: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn session_file(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
