//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x subset: one GET request per connection,
//! answered from a static directory, after which the connection is closed.
//!
//! # Architecture
//!
//! - **`framer`**: Buffers inbound chunks and detects the end of the header block
//! - **`parser`**: Decodes a buffered block into a [`request::Request`]
//! - **`headers`**: Ordered, case-sensitive header map and known header names
//! - **`request`**: HTTP request representation and methods
//! - **`response`**: HTTP response representation with builder and presets
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`dispatcher`**: Turns a request into a response from the public root
//! - **`connection`**: The per-connection state machine tying it together
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingHeaders  │ ← Buffer chunks until "\r\n\r\n"
//!        └──────┬───────────┘
//!               │ > 4096 bytes buffered ──► Aborted (nothing written)
//!               │ Terminator found, request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Generate response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rawserve::http::connection::Connection;
//! use rawserve::http::dispatcher::Dispatcher;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8083").await?;
//!     let dispatcher = Dispatcher::new("public");
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let dispatcher = dispatcher.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, dispatcher);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod dispatcher;
pub mod framer;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
