use crate::core::actions::Action;
use crate::core::status::StatusRegion;
use crate::domain::model::{Navigation, PageContext};
use crate::domain::ports::Backend;
use crate::utils::error::{ClientError, Result};

/// 一次成功送出的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub redirect: Option<String>,
    pub status: u16,
    pub body: String,
}

/// 所有表單共用的送出流程：隱藏狀態區 → 送出一個請求 → 跳轉或顯示錯誤
pub struct FormHandler<B: Backend> {
    backend: B,
    context: PageContext,
    status: StatusRegion,
    last_error: Option<ClientError>,
}

impl<B: Backend> FormHandler<B> {
    pub fn new(backend: B, context: PageContext) -> Self {
        Self {
            backend,
            context,
            status: StatusRegion::new(),
            last_error: None,
        }
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 取出最近一次失敗的原因
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.last_error.take()
    }

    pub async fn submit(&mut self, action: &Action) -> Navigation {
        self.status.hide();
        self.last_error = None;

        match self.execute(action).await {
            Ok(Submission {
                redirect: Some(target),
                ..
            }) => {
                tracing::info!("✅ {} succeeded, redirecting to {}", action.label(), target);
                Navigation::Redirect(target)
            }
            Ok(submission) => {
                let message = if submission.body.trim().is_empty() {
                    format!("{} succeeded", action.label())
                } else {
                    submission.body
                };
                self.status.show_result(message);
                Navigation::Stay
            }
            Err(e) => {
                match &e {
                    ClientError::HttpStatusError { status, body } => {
                        tracing::warn!("{}: {}", status, body.trim_end());
                    }
                    other => {
                        tracing::error!("❌ {} failed: {}", action.label(), other);
                    }
                }
                self.status.show_error(e.user_friendly_message());
                self.last_error = Some(e);
                Navigation::Stay
            }
        }
    }

    /// 不碰狀態區的送出；非 2xx 以 `HttpStatusError` 回傳
    pub async fn execute(&self, action: &Action) -> Result<Submission> {
        let request = action.request(&self.context)?;
        let redirect = action.success_redirect(&self.context)?;

        tracing::debug!("📡 {}: {} {}", action.label(), request.method, request.path);
        let response = self.backend.send(&request).await?;

        if !response.is_success() {
            return Err(ClientError::HttpStatusError {
                status: response.status,
                body: response.body,
            });
        }

        // 伺服器已完成登出，本地清除失敗只記錄
        if action.ends_session() {
            if let Err(e) = self.backend.end_session().await {
                tracing::warn!("⚠️ Couldn't clear the local session: {}", e);
            }
        }

        Ok(Submission {
            redirect,
            status: response.status,
            body: response.body,
        })
    }
}
