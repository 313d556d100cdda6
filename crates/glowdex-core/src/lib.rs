pub mod error;
pub mod feed;
pub mod hub;
pub mod listing;
pub mod stores;

pub use error::{ConfigError, FeedError};
pub use feed::{load_feed, parse_feed};
pub use hub::CatalogHub;
pub use listing::RawListing;
pub use stores::{load_stores, StoreConfig, StoresFile};
