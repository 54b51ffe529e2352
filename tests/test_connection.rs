use std::fs;
use std::path::PathBuf;

use rawserve::http::connection::{Connection, ConnectionState};
use rawserve::http::dispatcher::Dispatcher;
use rawserve::server::listener;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn public_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "rawserve-conn-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("index.html"), "hi").unwrap();
    root
}

#[tokio::test]
async fn test_connection_serves_single_request() {
    let (mut client, server) = tokio::io::duplex(8192);
    let mut conn = Connection::new(server, Dispatcher::new(public_root("single")));

    let task = tokio::spawn(async move {
        conn.run().await.unwrap();
        assert!(matches!(conn.state(), ConnectionState::Closed));
    });

    client.write_all(b"GET / HTTP/1.1\r\n").await.unwrap();
    client.write_all(b"Host: example\r\n\r\n").await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    task.await.unwrap();

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type:text/html\r\nContent-Length:2\r\nConnection:close\r\n\r\nhi"
    );
}

#[tokio::test]
async fn test_connection_overflow_writes_nothing() {
    let (mut client, server) = tokio::io::duplex(16 * 1024);
    let mut conn = Connection::new(server, Dispatcher::new(public_root("overflow")));

    let task = tokio::spawn(async move {
        conn.run().await.unwrap();
        assert!(matches!(conn.state(), ConnectionState::Closed));
    });

    let flood = vec![b'a'; 5000];
    client.write_all(&flood).await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    task.await.unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_connection_parse_failure_is_fatal() {
    let (mut client, server) = tokio::io::duplex(8192);
    let mut conn = Connection::new(server, Dispatcher::new(public_root("badline")));

    client.write_all(b"FOO / HTTP/1.1\r\n\r\n").await.unwrap();

    let result = conn.run().await;
    assert!(result.is_err());
    drop(conn);

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_connection_peer_closes_before_headers() {
    let (mut client, server) = tokio::io::duplex(8192);
    let mut conn = Connection::new(server, Dispatcher::new(public_root("early-close")));

    client.write_all(b"GET / HTTP/1.1\r\n").await.unwrap();
    client.shutdown().await.unwrap();

    conn.run().await.unwrap();
    assert!(matches!(conn.state(), ConnectionState::Closed));
}

#[tokio::test]
async fn test_connection_unsupported_method_gets_response() {
    let (mut client, server) = tokio::io::duplex(8192);
    let mut conn = Connection::new(server, Dispatcher::new(public_root("post")));

    let task = tokio::spawn(async move { conn.run().await });

    client.write_all(b"POST /form HTTP/1.1\r\n\r\n").await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    task.await.unwrap().unwrap();

    let text = String::from_utf8(response).unwrap();
    assert!(text.starts_with("HTTP/1.1 501 Not Implemented\r\n"));
    assert!(text.ends_with("\r\n\r\n501 Not Implemented"));
}

#[tokio::test]
async fn test_listener_over_tcp() {
    let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = tcp.local_addr().unwrap();
    let server = tokio::spawn(listener::serve(tcp, Dispatcher::new(public_root("tcp"))));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /missing.html HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();

    assert_eq!(
        response,
        b"HTTP/1.1 404 Not Found\r\nContent-Type:text/plain\r\nConnection:close\r\n\r\nFile Not Found"
    );

    server.abort();
}
