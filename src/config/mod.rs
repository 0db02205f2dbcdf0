pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use command::{CliConfig, Command, ExpenseCommand, GroupCommand, PaymentCommand};

#[cfg(feature = "cli")]
mod command {
    use super::toml_config::ClientConfig;
    use crate::core::actions::Action;
    use crate::core::currency::CurrencyInput;
    use crate::utils::error::Result;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "split-ways")]
    #[command(about = "Command line client for the split ways expense sharing API")]
    pub struct CliConfig {
        /// Path to TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        #[arg(long, global = true)]
        pub base_url: Option<String>,

        /// Where the session cookie is kept between runs
        #[arg(long, global = true)]
        pub session_file: Option<String>,

        /// Request timeout in seconds
        #[arg(long, global = true)]
        pub timeout: Option<u64>,

        /// Group the command acts on
        #[arg(short, long, global = true)]
        pub group: Option<String>,

        /// Transaction the command acts on (edit commands)
        #[arg(short, long, global = true)]
        pub transaction: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        Login {
            #[arg(short, long)]
            username: String,
            #[arg(short, long)]
            password: String,
        },
        Signup {
            #[arg(short, long)]
            username: String,
            #[arg(short, long)]
            password: String,
        },
        Logout,
        /// Change the password of the logged in user
        Password {
            #[arg(short, long)]
            password: String,
        },
        #[command(subcommand)]
        Group(GroupCommand),
        #[command(subcommand)]
        Expense(ExpenseCommand),
        #[command(subcommand)]
        Payment(PaymentCommand),
        /// Delete an expense or payment
        DeleteTransaction {
            #[arg(long)]
            id: String,
        },
        Health,
        /// Print the canonical form of a currency amount
        FormatAmount { text: String },
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum GroupCommand {
        Create {
            #[arg(short, long)]
            name: String,
        },
        Rename {
            #[arg(short, long)]
            name: String,
        },
        Delete,
        AddUser {
            #[arg(short, long)]
            username: String,
        },
        RemoveUser {
            #[arg(long)]
            user_id: String,
        },
        Users,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum ExpenseCommand {
        Create {
            #[arg(short, long, default_value = "")]
            description: String,
            #[arg(short, long)]
            amount: String,
            #[arg(long, default_value = "")]
            paid_by: String,
        },
        /// 空白欄位沿用原值
        Edit {
            #[arg(short, long, default_value = "")]
            description: String,
            #[arg(short, long, default_value = "")]
            amount: String,
        },
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum PaymentCommand {
        Create {
            #[arg(short, long)]
            amount: String,
            #[arg(long, default_value = "")]
            paid_by: String,
            #[arg(long, default_value = "")]
            paid_to: String,
        },
        /// 空白欄位沿用原值
        Edit {
            #[arg(short, long, default_value = "")]
            amount: String,
            #[arg(long, default_value = "")]
            paid_by: String,
            #[arg(long, default_value = "")]
            paid_to: String,
        },
    }

    /// 模擬金額欄位 blur 後的值
    fn blurred(amount: &str) -> String {
        CurrencyInput::from_raw(amount).value().to_string()
    }

    impl Command {
        /// 對應的 REST 動作；純本地命令回傳 None
        pub fn to_action(&self) -> Option<Action> {
            let action = match self {
                Command::Login { username, password } => Action::Login {
                    username: username.clone(),
                    password: password.clone(),
                },
                Command::Signup { username, password } => Action::Signup {
                    username: username.clone(),
                    password: password.clone(),
                },
                Command::Logout => Action::Logout,
                Command::Password { password } => Action::ChangePassword {
                    password: password.clone(),
                },
                Command::Group(group) => match group {
                    GroupCommand::Create { name } => Action::CreateGroup { name: name.clone() },
                    GroupCommand::Rename { name } => Action::RenameGroup { name: name.clone() },
                    GroupCommand::Delete => Action::DeleteGroup,
                    GroupCommand::AddUser { username } => Action::AddUser {
                        username: username.clone(),
                    },
                    GroupCommand::RemoveUser { user_id } => Action::RemoveUser {
                        user_id: user_id.clone(),
                    },
                    GroupCommand::Users => Action::ListGroupUsers,
                },
                Command::Expense(ExpenseCommand::Create {
                    description,
                    amount,
                    paid_by,
                }) => Action::CreateExpense {
                    description: description.clone(),
                    amount: blurred(amount),
                    paid_by: paid_by.clone(),
                },
                Command::Expense(ExpenseCommand::Edit {
                    description,
                    amount,
                }) => Action::EditExpense {
                    description: description.clone(),
                    amount: blurred(amount),
                },
                Command::Payment(PaymentCommand::Create {
                    amount,
                    paid_by,
                    paid_to,
                }) => Action::CreatePayment {
                    paid_by: paid_by.clone(),
                    paid_to: paid_to.clone(),
                    amount: blurred(amount),
                },
                Command::Payment(PaymentCommand::Edit {
                    amount,
                    paid_by,
                    paid_to,
                }) => Action::EditPayment {
                    paid_by: paid_by.clone(),
                    paid_to: paid_to.clone(),
                    amount: blurred(amount),
                },
                Command::DeleteTransaction { id } => Action::DeleteTransaction {
                    transaction_id: id.clone(),
                },
                Command::Health => Action::HealthCheck,
                Command::FormatAmount { .. } => return None,
            };

            Some(action)
        }
    }

    impl CliConfig {
        /// 讀取設定檔（若有）再套用命令列覆蓋
        pub fn resolve(&self) -> Result<ClientConfig> {
            let mut config = match &self.config {
                Some(path) => ClientConfig::from_file(path)?,
                None => ClientConfig::default(),
            };

            if let Some(base_url) = &self.base_url {
                config.server.base_url = base_url.clone();
            }
            if let Some(session_file) = &self.session_file {
                config.session.file = session_file.clone();
            }
            if let Some(timeout) = self.timeout {
                config.server.timeout_seconds = timeout;
            }
            if let Some(group) = &self.group {
                config.page.group_id = Some(group.clone());
            }
            if let Some(transaction) = &self.transaction {
                config.page.transaction_id = Some(transaction.clone());
            }

            Ok(config)
        }
    }

}
