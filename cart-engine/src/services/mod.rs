//! 服务模块
//!
//! - [`Catalog`] - 静态目录 (restaurants, dishes, addons, promo codes)

pub mod catalog_service;

pub use catalog_service::Catalog;
