pub mod client;
pub mod interface;
pub mod query;
pub mod types;

pub use client::NewsApiClient;
pub use interface::NewsRetriever;
pub use query::{Language, SearchInput, SearchRequest};
pub use types::Article;
