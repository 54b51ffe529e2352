//! rawserve - Primitive static file server
//!
//! A narrow HTTP/1.x message layer over raw TCP: framing, request parsing,
//! response serialization and a static file dispatcher.

pub mod config;
pub mod http;
pub mod server;
