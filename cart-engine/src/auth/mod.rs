//! 认证模块
//!
//! - [`Session`] - 当前会话 (simplified, no credential checks)
//! - [`CurrentUser`] - 当前用户上下文

pub mod session;

pub use session::{CurrentUser, Session};
