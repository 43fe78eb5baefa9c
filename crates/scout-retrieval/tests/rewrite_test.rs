//! LLM rewriter against a one-shot local HTTP server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use scout_core::config::QueryRewriteConfig;
use scout_core::errors::RetrievalError;
use scout_core::models::PromptSpec;
use scout_core::traits::IQueryRewriter;
use scout_core::ScoutError;
use scout_retrieval::{create_rewriter, LlmRewriter};

/// Serve exactly one request with `status` and `body`; return the request body.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
        String::from_utf8(request_body).unwrap()
    });
    (format!("http://{addr}/v1/chat/completions"), handle)
}

fn config(endpoint: String, key_env: &str) -> QueryRewriteConfig {
    QueryRewriteConfig {
        enabled: true,
        provider: "llm".to_string(),
        endpoint,
        model: "test-model".to_string(),
        api_key_env: key_env.to_string(),
        timeout_secs: 10,
    }
}

#[test]
fn returns_completion_text() {
    std::env::set_var("SCOUT_TEST_REWRITE_KEY_OK", "sk-test");
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"  A BART model finetuned for news summarization. "}}]}"#,
    );
    let rewriter = create_rewriter(&config(endpoint, "SCOUT_TEST_REWRITE_KEY_OK")).unwrap();
    assert_eq!(rewriter.name(), "llm");

    let prompt = PromptSpec::new("Summarize news").with_examples("input: long article");
    let text = rewriter.rewrite(&prompt).unwrap();
    assert_eq!(text, "A BART model finetuned for news summarization.");

    let request: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
    assert_eq!(request["model"], "test-model");
    let user = request["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Summarize news"));
    assert!(user.contains("input: long article"));
}

#[test]
fn http_error_is_rewrite_failure() {
    std::env::set_var("SCOUT_TEST_REWRITE_KEY_500", "sk-test");
    let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
    let rewriter = LlmRewriter::from_config(&config(endpoint, "SCOUT_TEST_REWRITE_KEY_500")).unwrap();

    let err = rewriter.rewrite(&PromptSpec::new("x")).unwrap_err();
    assert!(matches!(
        err,
        ScoutError::Retrieval(RetrievalError::RewriteFailed { .. })
    ));
    server.join().unwrap();
}

#[test]
fn empty_completion_is_rewrite_failure() {
    std::env::set_var("SCOUT_TEST_REWRITE_KEY_EMPTY", "sk-test");
    let (endpoint, server) = serve_once("200 OK", r#"{"choices":[]}"#);
    let rewriter =
        LlmRewriter::from_config(&config(endpoint, "SCOUT_TEST_REWRITE_KEY_EMPTY")).unwrap();

    assert!(rewriter.rewrite(&PromptSpec::new("x")).is_err());
    server.join().unwrap();
}

#[test]
fn missing_api_key_fails_without_request() {
    let rewriter = LlmRewriter::from_config(&config(
        "http://127.0.0.1:9/unused".to_string(),
        "SCOUT_TEST_REWRITE_KEY_UNSET",
    ))
    .unwrap();
    let err = rewriter.rewrite(&PromptSpec::new("x")).unwrap_err();
    assert!(err.to_string().contains("SCOUT_TEST_REWRITE_KEY_UNSET"));
}
