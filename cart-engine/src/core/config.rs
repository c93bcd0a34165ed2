use std::path::PathBuf;

/// 购物车引擎配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | CART_DB_FILE | cart.redb | 购物车数据库文件 (相对于 WORK_DIR) |
/// | CATALOG_PATH | (内置目录) | 目录 JSON 文件 |
/// | LOG_LEVEL | info | 日志级别 / EnvFilter 指令 |
/// | LOG_DIR | (仅控制台) | 日志文件目录 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/tmp/cart CATALOG_PATH=./menu.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放数据库和日志
    pub work_dir: String,
    /// 数据库文件名
    pub db_file: String,
    /// 目录文件，`None` 时使用内置目录
    pub catalog_path: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_file: std::env::var("CART_DB_FILE").unwrap_or_else(|_| "cart.redb".into()),
            catalog_path: non_empty_var("CATALOG_PATH"),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: non_empty_var("LOG_DIR"),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 数据库文件完整路径
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(work_dir: &str, environment: &str) -> Config {
        Config {
            work_dir: work_dir.into(),
            db_file: "cart.redb".into(),
            catalog_path: None,
            log_level: "info".into(),
            log_dir: None,
            log_json: false,
            environment: environment.into(),
        }
    }

    #[test]
    fn test_db_path_joins_work_dir() {
        let config = config("/tmp/cart-test", "development");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/cart-test/cart.redb"));
    }

    #[test]
    fn test_is_production() {
        assert!(config("/tmp/cart-test", "production").is_production());
        assert!(!config("/tmp/cart-test", "staging").is_production());
    }
}
