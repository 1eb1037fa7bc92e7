//! InventoryHub 服务端

use std::path::PathBuf;

use clap::Parser;
use inventory_hub::{
    infrastructure::logger::Logger, load_config, server, AppState, InMemoryProductProvider,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "inventory-server", version, about = "InventoryHub 产品目录 API 服务")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, env = "INVENTORY_HUB_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let _guard = Logger::init(&config.logging)?;
    info!("启动 InventoryHub 服务器...");

    let state = AppState::new(InMemoryProductProvider::new());
    server::run(state, &config.server).await
}
