//! Fake chat completion endpoints backed by mockito.

use mockito::{Mock, Server, ServerGuard};

pub(crate) const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Start a mock server. Its base URL is `{url}/v1`.
pub(crate) fn start() -> ServerGuard {
    Server::new()
}

pub(crate) fn base_url(server: &ServerGuard) -> String {
    format!("{}/v1", server.url())
}

/// Body of a well-formed response with a single choice.
pub(crate) fn single_choice_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
    .to_string()
}

/// Mock answering every completion call with `content`.
pub(crate) fn reply_with(server: &mut ServerGuard, content: &str) -> Mock {
    server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(single_choice_body(content))
        .create()
}

/// Mock that fails the test if any completion call arrives.
pub(crate) fn expect_no_calls(server: &mut ServerGuard) -> Mock {
    server.mock("POST", COMPLETIONS_PATH).with_status(200).expect(0).create()
}

/// Base URL of a local port nothing listens on.
pub(crate) fn refused_base_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr").port()
    };
    format!("http://127.0.0.1:{port}/v1")
}
