//! 产品目录客户端

pub mod error;
pub mod fetcher;
pub mod state;

pub use error::FetchError;
pub use fetcher::{decode_product_list, CatalogFetcher};
pub use state::LoadState;
