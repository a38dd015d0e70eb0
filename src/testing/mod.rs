
pub use fake_completion_client::FakeCompletionClient;
