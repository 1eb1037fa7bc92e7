//! InventoryHub 客户端：获取并显示产品目录

use std::path::PathBuf;

use clap::Parser;
use inventory_hub::{
    config::LoggingConfig,
    core::constant::{LOADING_MESSAGE, NO_DATA_MESSAGE},
    infrastructure::logger::Logger,
    load_config, CatalogFetcher, LoadState,
};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
#[command(name = "inventory-client", version, about = "获取并显示 InventoryHub 产品目录")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, env = "INVENTORY_HUB_CONFIG")]
    config: Option<PathBuf>,

    /// 服务地址，覆盖配置文件
    #[arg(long)]
    base_url: Option<String>,

    /// 请求超时（秒），覆盖配置文件
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;

    if let Some(base_url) = args.base_url {
        config.client.base_url = base_url;
    }
    if let Some(timeout) = args.timeout {
        config.client.timeout_seconds = timeout;
    }
    config.validate()?;

    // 控制台只用于渲染结果，日志只写文件
    let guard = Logger::init(&LoggingConfig {
        file_prefix: "inventory-client".to_string(),
        console_output: false,
        ..config.logging.clone()
    })?;

    let fetcher = CatalogFetcher::new(config.client.clone())?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    render(&LoadState::Loading);
    let state = LoadState::from(fetcher.fetch_products(&cancel).await);
    render(&state);

    if matches!(state, LoadState::Failed(_)) {
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}

fn render(state: &LoadState) {
    match state {
        LoadState::Loading => println!("{}", LOADING_MESSAGE),
        LoadState::Failed(message) => eprintln!("❌ {}", message),
        LoadState::Loaded(products) if products.is_empty() => println!("{}", NO_DATA_MESSAGE),
        LoadState::Loaded(products) => {
            println!(
                "{:<4} {:<20} {:>10} {:>6}  {}",
                "ID", "Name", "Price", "Stock", "Category"
            );
            for product in products {
                println!(
                    "{:<4} {:<20} {:>10} {:>6}  {}",
                    product.id,
                    product.name,
                    format!("{:.2}", product.price),
                    product.stock,
                    product.category.name
                );
            }
        }
    }
}
