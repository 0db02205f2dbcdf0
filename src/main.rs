use anyhow::Context;
use clap::Parser;
use split_ways_client::config::Command;
use split_ways_client::domain::model::{GroupUser, Navigation};
use split_ways_client::domain::ports::ConfigProvider;
use split_ways_client::utils::error::{ClientError, ErrorSeverity};
use split_ways_client::utils::{logger, validation::Validate};
use split_ways_client::{canonicalize, Action, ApiClient, CliConfig, FormHandler, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let action = match cli.command.to_action() {
        Some(action) => action,
        None => {
            if let Command::FormatAmount { text } = &cli.command {
                println!("{}", canonicalize(text));
            }
            return Ok(());
        }
    };

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            exit_with(&e);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        exit_with(&e);
    }

    tracing::info!("🚀 {}", action.label());
    tracing::debug!(
        "Using server {} (session file: {})",
        config.base_url(),
        config.session_file()
    );

    let storage = LocalStorage::new(config.session_file());
    let client = ApiClient::new(&config, storage).context("couldn't build HTTP client")?;
    let mut handler = FormHandler::new(client, config.page_context().clone());

    match handler.submit(&action).await {
        Navigation::Redirect(target) => {
            println!("✅ {} succeeded", action.label());
            println!("➡️  {}", target);
        }
        Navigation::Stay => match handler.take_error() {
            Some(e) => {
                // 狀態區已帶有錯誤訊息
                eprintln!("{}", handler.status());
                exit_with(&e);
            }
            None => print_result(&action, handler.status().content()),
        },
    }

    Ok(())
}

fn print_result(action: &Action, body: &str) {
    if let Action::ListGroupUsers = action {
        match serde_json::from_str::<Vec<GroupUser>>(body) {
            Ok(users) => {
                println!("👥 {} member(s)", users.len());
                for user in users {
                    println!("  - {} ({})", user.username, user.id);
                }
                return;
            }
            Err(e) => tracing::warn!("Couldn't decode group users: {}", e),
        }
    }

    println!("{}", body);
}

fn exit_with(e: &ClientError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
