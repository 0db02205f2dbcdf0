use crate::core::actions::path_segment;
use crate::domain::model::{ApiRequest, ApiResponse, Group, GroupName, GroupUser, HttpMethod};
use crate::domain::ports::{Backend, ConfigProvider, SessionStore};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::{Client, Method};
use std::time::Duration;
use url::Url;

/// 以 reqwest 實作的後端，帶著伺服器發的 session cookie
pub struct ApiClient<S: SessionStore> {
    base_url: Url,
    client: Client,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new<C: ConfigProvider>(config: &C, session: S) -> Result<Self> {
        let mut base_url = Url::parse(config.base_url()).map_err(|e| {
            ClientError::InvalidConfigValueError {
                field: "server.base_url".to_string(),
                value: config.base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        // 路徑前綴（如 `/split`）要以 `/` 結尾，join 時才不會被蓋掉
        if !base_url.path().ends_with('/') {
            let prefix = format!("{}/", base_url.path());
            base_url.set_path(&prefix);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            base_url,
            client,
            session,
        })
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::ValidationError {
                message: format!("Couldn't build URL for '{}': {}", path, e),
            })
    }

    pub async fn create_group(&self, name: &str) -> Result<Group> {
        let request = ApiRequest {
            method: HttpMethod::Post,
            path: "/api/groups".to_string(),
            body: Some(serde_json::to_value(GroupName {
                name: name.trim().to_string(),
            })?),
        };
        self.fetch_json(&request).await
    }

    pub async fn group_users(&self, group_id: &str) -> Result<Vec<GroupUser>> {
        let request = ApiRequest {
            method: HttpMethod::Get,
            path: format!("/api/groups/{}/users", path_segment(group_id.trim())?),
            body: None,
        };
        self.fetch_json(&request).await
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let response = self.send(request).await?;

        if !response.is_success() {
            return Err(ClientError::HttpStatusError {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// 回應裡的 Set-Cookie，只留 `name=value`
fn session_cookies(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(cookie_pair)
        .collect()
}

/// `name=value; Path=/; HttpOnly` → `name=value`
fn cookie_pair(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    if pair.contains('=') {
        Some(pair.to_string())
    } else {
        None
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl<S: SessionStore> Backend for ApiClient<S> {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.endpoint(&request.path)?;
        tracing::debug!("Making API request: {} {}", request.method, url);

        let mut builder = self.client.request(to_method(request.method), url);

        if let Some(cookie) = self.session.load().await? {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => builder = builder.header(COOKIE, value),
                Err(_) => tracing::warn!("Ignoring malformed session cookie"),
            }
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        // 多個 cookie 以 `; ` 串接，直接可當 Cookie header 使用
        let cookies = session_cookies(response.headers());
        if !cookies.is_empty() {
            tracing::debug!("🍪 Storing {} session cookie(s)", cookies.len());
            self.session.save(&cookies.join("; ")).await?;
        }

        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }

    async fn end_session(&self) -> Result<()> {
        tracing::debug!("🍪 Clearing stored session");
        self.session.clear().await
    }
}
