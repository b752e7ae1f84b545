//! Upstream data source clients

mod reddit;

pub use crate::config::RedditCredentials;
pub use reddit::{PostSource, RedditClient};

#[cfg(test)]
pub(crate) use reddit::MockPostSource;
