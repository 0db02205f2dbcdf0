//! 每個表單 / 按鈕對應的 REST 呼叫

use crate::core::currency::clean_amount;
use crate::domain::model::{
    ApiRequest, Credentials, ExpenseUpdate, GroupName, HttpMethod, IdBody, NewExpense,
    PageContext, PasswordChange, PaymentBody, UsernameBody,
};
use crate::utils::error::{ClientError, Result};
use serde::Serialize;

/// 修改付款時金額留空，後端會沿用原本的金額
pub const KEEP_AMOUNT: &str = "-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateGroup { name: String },
    RenameGroup { name: String },
    DeleteGroup,
    AddUser { username: String },
    RemoveUser { user_id: String },
    ListGroupUsers,
    CreateExpense {
        description: String,
        amount: String,
        paid_by: String,
    },
    EditExpense { description: String, amount: String },
    CreatePayment {
        paid_by: String,
        paid_to: String,
        amount: String,
    },
    EditPayment {
        paid_by: String,
        paid_to: String,
        amount: String,
    },
    DeleteTransaction { transaction_id: String },
    Login { username: String, password: String },
    Signup { username: String, password: String },
    ChangePassword { password: String },
    Logout,
    HealthCheck,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::CreateGroup { .. } => "Create group",
            Action::RenameGroup { .. } => "Rename group",
            Action::DeleteGroup => "Delete group",
            Action::AddUser { .. } => "Add user",
            Action::RemoveUser { .. } => "Remove user",
            Action::ListGroupUsers => "List group users",
            Action::CreateExpense { .. } => "Create expense",
            Action::EditExpense { .. } => "Edit expense",
            Action::CreatePayment { .. } => "Create payment",
            Action::EditPayment { .. } => "Edit payment",
            Action::DeleteTransaction { .. } => "Delete transaction",
            Action::Login { .. } => "Login",
            Action::Signup { .. } => "Signup",
            Action::ChangePassword { .. } => "Change password",
            Action::Logout => "Logout",
            Action::HealthCheck => "Health check",
        }
    }

    /// 組出要送出的請求；需要的頁面識別碼缺少時不發出任何請求
    pub fn request(&self, context: &PageContext) -> Result<ApiRequest> {
        let request = match self {
            Action::CreateGroup { name } => post(
                "/api/groups".to_string(),
                &GroupName {
                    name: name.trim().to_string(),
                },
            )?,
            Action::RenameGroup { name } => put(
                format!("/api/groups/{}", self.group_id(context)?),
                &GroupName {
                    name: name.trim().to_string(),
                },
            )?,
            Action::DeleteGroup => ApiRequest {
                method: HttpMethod::Delete,
                path: format!("/api/groups/{}", self.group_id(context)?),
                body: None,
            },
            Action::AddUser { username } => post(
                format!("/api/groups/{}/users", self.group_id(context)?),
                &UsernameBody {
                    username: username.trim().to_string(),
                },
            )?,
            Action::RemoveUser { user_id } => delete(
                format!("/api/groups/{}/users", self.group_id(context)?),
                &IdBody {
                    id: user_id.trim().to_string(),
                },
            )?,
            Action::ListGroupUsers => ApiRequest {
                method: HttpMethod::Get,
                path: format!("/api/groups/{}/users", self.group_id(context)?),
                body: None,
            },
            Action::CreateExpense {
                description,
                amount,
                paid_by,
            } => post(
                format!("/api/groups/{}/expenses", self.group_id(context)?),
                &NewExpense {
                    description: description.trim().to_string(),
                    amount: clean_amount(amount),
                    paid_by: paid_by.trim().to_string(),
                },
            )?,
            Action::EditExpense {
                description,
                amount,
            } => put(
                format!(
                    "/api/groups/{}/expenses?id={}",
                    self.group_id(context)?,
                    query_value(self.transaction_id(context)?)
                ),
                &ExpenseUpdate {
                    description: description.trim().to_string(),
                    amount: clean_amount(amount),
                },
            )?,
            Action::CreatePayment {
                paid_by,
                paid_to,
                amount,
            } => post(
                format!("/api/groups/{}/payments", self.group_id(context)?),
                &PaymentBody {
                    paid_by: paid_by.trim().to_string(),
                    paid_to: paid_to.trim().to_string(),
                    amount: clean_amount(amount),
                },
            )?,
            Action::EditPayment {
                paid_by,
                paid_to,
                amount,
            } => {
                let amount = clean_amount(amount);
                put(
                    format!(
                        "/api/groups/{}/payments?id={}",
                        self.group_id(context)?,
                        query_value(self.transaction_id(context)?)
                    ),
                    &PaymentBody {
                        paid_by: paid_by.trim().to_string(),
                        paid_to: paid_to.trim().to_string(),
                        amount: if amount.is_empty() {
                            KEEP_AMOUNT.to_string()
                        } else {
                            amount
                        },
                    },
                )?
            }
            Action::DeleteTransaction { transaction_id } => delete(
                format!("/api/groups/{}/transactions", self.group_id(context)?),
                &IdBody {
                    id: transaction_id.trim().to_string(),
                },
            )?,
            // 密碼不做 trim
            Action::Login { username, password } => post(
                "/api/login".to_string(),
                &Credentials {
                    username: username.trim().to_string(),
                    password: password.clone(),
                },
            )?,
            Action::Signup { username, password } => post(
                "/api/users".to_string(),
                &Credentials {
                    username: username.trim().to_string(),
                    password: password.clone(),
                },
            )?,
            Action::ChangePassword { password } => put(
                "/api/users".to_string(),
                &PasswordChange {
                    password: password.clone(),
                },
            )?,
            Action::Logout => ApiRequest {
                method: HttpMethod::Post,
                path: "/api/logout".to_string(),
                body: None,
            },
            Action::HealthCheck => ApiRequest {
                method: HttpMethod::Get,
                path: "/api/healthcheck".to_string(),
                body: None,
            },
        };

        Ok(request)
    }

    /// 成功後要前往的頁面；None 表示留在原頁顯示結果
    pub fn success_redirect(&self, context: &PageContext) -> Result<Option<String>> {
        let target = match self {
            Action::CreateGroup { .. }
            | Action::Login { .. }
            | Action::Signup { .. }
            | Action::ChangePassword { .. } => Some("/dashboard".to_string()),
            Action::DeleteGroup => Some("/".to_string()),
            Action::Logout => Some("/login".to_string()),
            Action::RenameGroup { .. }
            | Action::AddUser { .. }
            | Action::RemoveUser { .. }
            | Action::CreateExpense { .. }
            | Action::EditExpense { .. }
            | Action::CreatePayment { .. }
            | Action::EditPayment { .. }
            | Action::DeleteTransaction { .. } => {
                Some(format!("/groups/{}", self.group_id(context)?))
            }
            Action::ListGroupUsers | Action::HealthCheck => None,
        };

        Ok(target)
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, Action::Logout)
    }

    fn group_id<'a>(&self, context: &'a PageContext) -> Result<&'a str> {
        let id = required(self, "group_id", context.group_id.as_deref())?;
        path_segment(id)
    }

    fn transaction_id<'a>(&self, context: &'a PageContext) -> Result<&'a str> {
        required(self, "transaction_id", context.transaction_id.as_deref())
    }
}

fn required<'a>(action: &Action, field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ClientError::MissingContextError {
            action: action.label().to_string(),
            field: field.to_string(),
        }),
    }
}

/// 要放進路徑的 id 不可含 `/ ? #` 或空白
pub(crate) fn path_segment(id: &str) -> Result<&str> {
    if id.contains(['/', '?', '#', ' ']) {
        return Err(ClientError::ValidationError {
            message: format!("'{}' is not a valid id", id),
        });
    }
    Ok(id)
}

fn query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn json_request<T: Serialize>(method: HttpMethod, path: String, body: &T) -> Result<ApiRequest> {
    Ok(ApiRequest {
        method,
        path,
        body: Some(serde_json::to_value(body)?),
    })
}

fn post<T: Serialize>(path: String, body: &T) -> Result<ApiRequest> {
    json_request(HttpMethod::Post, path, body)
}

fn put<T: Serialize>(path: String, body: &T) -> Result<ApiRequest> {
    json_request(HttpMethod::Put, path, body)
}

fn delete<T: Serialize>(path: String, body: &T) -> Result<ApiRequest> {
    json_request(HttpMethod::Delete, path, body)
}
