pub mod http;

pub use self::http::HttpCompletionClient;
