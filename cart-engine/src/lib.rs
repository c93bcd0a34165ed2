//! Cart Engine - 外卖购物车引擎
//!
//! # 架构概述
//!
//! 单用户购物车：从目录选择菜品 (尺寸 + 配料)，计算价格、配送费和优惠，
//! 每次变更后持久化到本地 KV 存储。
//!
//! - **定价** (`pricing`): 行项目价格、每餐厅配送费、优惠码校验
//! - **购物车** (`cart`): 状态机 + 结账模拟
//! - **存储** (`storage`): redb KV 存储
//! - **认证** (`auth`): 简化会话
//! - **目录** (`services`): 静态餐厅、菜品、配料、优惠码
//!
//! # 模块结构
//!
//! ```text
//! cart-engine/src/
//! ├── core/          # 配置
//! ├── auth/          # 会话
//! ├── cart/          # 购物车状态机、结账
//! ├── pricing/       # 价格计算
//! ├── services/      # 目录
//! ├── storage/       # 持久化
//! └── utils/         # 日志
//! ```

pub mod auth;
pub mod cart;
pub mod core;
pub mod pricing;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, Session};
pub use cart::{CartError, CartManager, CartResult, CartState, OrderReceipt};
pub use core::Config;
pub use services::Catalog;
pub use storage::{CartStore, KvStore, RedbStore, StorageError};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、创建工作目录、初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 可选
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    init_logger_with_file(
        &config.log_level,
        config.log_json || config.is_production(),
        config.log_dir.as_deref(),
    )?;

    tracing::debug!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Environment ready"
    );
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______           __
  / ____/___ ______/ /_
 / /   / __ `/ ___/ __/
/ /___/ /_/ / /  / /_
\____/\__,_/_/   \__/
    "#
    );
}
