use cart_engine::{
    CartManager, CartStore, Catalog, Config, RedbStore, Session, print_banner, setup_environment,
};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 工作目录, 日志)
    setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("🛒 Cart Engine starting...");

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 加载目录
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    // 4. 打开存储并恢复购物车
    let store = CartStore::new(Arc::new(RedbStore::open(config.db_path())?));
    let manager = CartManager::new(store, Arc::new(catalog), Arc::new(Session::new()));

    let cart = manager.cart();
    tracing::info!(
        db = %config.db_path().display(),
        restaurants = manager.catalog().restaurants().len(),
        dishes = manager.catalog().dishes().len(),
        items = cart.items.len(),
        quantity = manager.item_count(),
        delivery_fee = cart.delivery_fee,
        discount = cart.discount,
        promo_code = cart.promo_code.as_deref().unwrap_or("-"),
        total = cart.total,
        payable = manager.payable_total(),
        fulfillment_mode = %manager.fulfillment_mode(),
        "Cart restored"
    );

    Ok(())
}
