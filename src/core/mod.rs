pub mod actions;
pub mod currency;
pub mod handler;
pub mod status;

pub use crate::domain::model::{ApiRequest, ApiResponse, Navigation, PageContext};
pub use crate::domain::ports::{Backend, ConfigProvider, SessionStore};
pub use crate::utils::error::Result;
