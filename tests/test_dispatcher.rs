use std::fs;
use std::path::PathBuf;

use rawserve::http::dispatcher::Dispatcher;
use rawserve::http::request::{Method, Request, RequestBuilder};

fn public_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "rawserve-dispatch-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    root
}

fn request(method: Method, path: &str) -> Request {
    RequestBuilder::new()
        .method(method)
        .path(path)
        .version("HTTP/1.1")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_root_serves_index() {
    let root = public_root("index");
    fs::write(root.join("index.html"), "hi").unwrap();

    let response = Dispatcher::new(&root).dispatch(&request(Method::GET, "/")).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.reason_phrase, "OK");
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Content-Length"), Some("2"));
    assert_eq!(response.header("Connection"), Some("close"));
    assert_eq!(response.payload, b"hi".to_vec());
    assert_eq!(
        response.message(),
        b"HTTP/1.1 200 OK\r\nContent-Type:text/html\r\nContent-Length:2\r\nConnection:close\r\n\r\nhi"
    );
}

#[tokio::test]
async fn test_content_type_ignores_extension() {
    let root = public_root("css");
    fs::write(root.join("style.css"), "body{}").unwrap();

    let response = Dispatcher::new(&root)
        .dispatch(&request(Method::GET, "/style.css"))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Content-Length"), Some("6"));
}

#[tokio::test]
async fn test_content_length_counts_bytes() {
    let root = public_root("utf8");
    fs::write(root.join("cafe.html"), "café").unwrap();

    let response = Dispatcher::new(&root)
        .dispatch(&request(Method::GET, "/cafe.html"))
        .await;

    assert_eq!(response.header("Content-Length"), Some("5"));
}

#[tokio::test]
async fn test_nested_path() {
    let root = public_root("nested");
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/a.html"), "<p>a</p>").unwrap();

    let response = Dispatcher::new(&root)
        .dispatch(&request(Method::GET, "/docs/a.html"))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.payload, b"<p>a</p>".to_vec());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let root = public_root("missing");

    let response = Dispatcher::new(&root)
        .dispatch(&request(Method::GET, "/nope.html"))
        .await;

    assert_eq!(response.status_code, 404);
    assert_eq!(response.reason_phrase, "Not Found");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Connection"), Some("close"));
    assert_eq!(response.payload, b"File Not Found".to_vec());
}

#[tokio::test]
async fn test_directory_is_not_found() {
    let root = public_root("dir");
    fs::create_dir_all(root.join("sub")).unwrap();

    let response = Dispatcher::new(&root)
        .dispatch(&request(Method::GET, "/sub"))
        .await;

    assert_eq!(response.status_code, 404);
}

#[tokio::test]
async fn test_dot_dot_is_forbidden_even_if_file_exists() {
    let root = public_root("traversal");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("index.html"), "secret").unwrap();

    let dispatcher = Dispatcher::new(root.join("a"));
    for path in ["/../index.html", "/a/../index.html", "/..", "/x..y"] {
        let response = dispatcher.dispatch(&request(Method::GET, path)).await;
        assert_eq!(response.status_code, 403, "path {}", path);
        assert_eq!(response.reason_phrase, "Forbidden");
        assert!(response.payload.is_empty());
    }
}

#[tokio::test]
async fn test_non_get_is_not_implemented() {
    let root = public_root("methods");
    fs::write(root.join("index.html"), "hi").unwrap();
    let dispatcher = Dispatcher::new(&root);

    for method in [Method::POST, Method::HEAD, Method::DELETE, Method::OPTIONS] {
        let response = dispatcher.dispatch(&request(method, "/")).await;
        assert_eq!(response.status_code, 501);
        assert_eq!(response.reason_phrase, "Not Implemented");
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.payload, b"501 Not Implemented".to_vec());
    }
}

#[tokio::test]
async fn test_method_checked_before_traversal() {
    let root = public_root("order");

    let response = Dispatcher::new(&root)
        .dispatch(&request(Method::PUT, "/../etc/passwd"))
        .await;

    assert_eq!(response.status_code, 501);
}
