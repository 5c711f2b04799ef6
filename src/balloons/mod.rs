mod clean;
mod error;
mod feed;
mod types;

pub use clean::clean_fixes;
pub use error::FeedError;
pub use feed::{FeedClient, DEFAULT_FEED_URL};
pub use types::BalloonFix;
