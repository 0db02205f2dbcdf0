use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use split_ways_client::domain::model::{Navigation, PageContext};
use split_ways_client::domain::ports::SessionStore;
use split_ways_client::{Action, ApiClient, ClientConfig, FormHandler, LocalStorage};
use tempfile::TempDir;

fn client_for(server: &MockServer, storage: LocalStorage) -> Result<ApiClient<LocalStorage>> {
    let mut config = ClientConfig::default();
    config.server.base_url = server.base_url();
    Ok(ApiClient::new(&config, storage)?)
}

/// 登入取得 cookie → 之後的請求帶上 cookie → 登出後清除
#[tokio::test]
async fn test_login_cookie_is_reused_and_cleared_on_logout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session_path = temp_dir.path().join("session");
    let server = MockServer::start();

    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/login")
            .json_body(json!({"username": "alice", "password": "hunter2"}));
        then.status(204)
            .header("Set-Cookie", "user-session=abc123; Path=/; HttpOnly");
    });
    let group_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/groups")
            .header("cookie", "user-session=abc123");
        then.status(201).json_body(json!({"id": "g-1", "name": "Trip"}));
    });
    let logout_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/logout")
            .header("cookie", "user-session=abc123");
        then.status(204);
    });

    let mut handler = FormHandler::new(
        client_for(&server, LocalStorage::new(&session_path))?,
        PageContext::default(),
    );

    let logged_in = handler
        .submit(&Action::Login {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        })
        .await;
    assert_eq!(logged_in, Navigation::Redirect("/dashboard".to_string()));
    assert_eq!(
        handler.backend().session().load().await?,
        Some("user-session=abc123".to_string())
    );

    // 新的 client 模擬下一次執行，cookie 從檔案讀回
    let mut next_run = FormHandler::new(
        client_for(&server, LocalStorage::new(&session_path))?,
        PageContext::default(),
    );
    let created = next_run
        .submit(&Action::CreateGroup {
            name: "Trip".to_string(),
        })
        .await;
    assert_eq!(created, Navigation::Redirect("/dashboard".to_string()));

    let logged_out = next_run.submit(&Action::Logout).await;
    assert_eq!(logged_out, Navigation::Redirect("/login".to_string()));
    assert!(!session_path.exists());

    login_mock.assert();
    group_mock.assert();
    logout_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_failed_login_shows_message_and_keeps_no_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session_path = temp_dir.path().join("session");
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(401).body("Username and password do not match\n");
    });

    let mut handler = FormHandler::new(
        client_for(&server, LocalStorage::new(&session_path))?,
        PageContext::default(),
    );

    let navigation = handler
        .submit(&Action::Login {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert_eq!(navigation, Navigation::Stay);
    assert_eq!(
        handler.status().content(),
        "Username and password do not match"
    );
    assert!(!session_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_signup_posts_to_users() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let signup_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/users")
            .json_body(json!({"username": "dan", "password": "pw"}));
        then.status(204)
            .header("Set-Cookie", "user-session=new; Path=/");
    });

    let mut handler = FormHandler::new(
        client_for(&server, LocalStorage::new(temp_dir.path().join("session")))?,
        PageContext::default(),
    );

    let navigation = handler
        .submit(&Action::Signup {
            username: "dan".to_string(),
            password: "pw".to_string(),
        })
        .await;

    assert_eq!(navigation, Navigation::Redirect("/dashboard".to_string()));
    signup_mock.assert();
    Ok(())
}
