use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::http::dispatcher::Dispatcher;
use crate::http::framer::{FrameStatus, Framer};
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

/// A single-shot connection: one request, one response, then close.
pub struct Connection<S> {
    stream: S,
    framer: Framer,
    dispatcher: Dispatcher,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingHeaders,
    Dispatching(Request),
    Writing(ResponseWriter),
    Aborted,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Dispatcher) -> Self {
        Self {
            stream,
            framer: Framer::new(),
            dispatcher,
            state: ConnectionState::AwaitingHeaders,
        }
    }

    /// Drives the state machine until the connection is closed.
    ///
    /// A request line that fails to parse ends the connection with an
    /// error and no response bytes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::AwaitingHeaders => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Dispatching(req);
                        }
                        None => {
                            if matches!(self.state, ConnectionState::AwaitingHeaders) {
                                self.state = ConnectionState::Closed;
                            }
                        }
                    }
                }

                ConnectionState::Dispatching(req) => {
                    let response = self.dispatcher.dispatch(req).await;
                    debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status_code,
                        "Dispatched request"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Aborted => {
                    // Nothing is written back
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads chunks until the framer reports a complete header block.
    ///
    /// Returns `None` when the peer closes first or the buffer overflows;
    /// in the overflow case the state has already moved to `Aborted`.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut temp = [0u8; READ_CHUNK];

        loop {
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            match self.framer.push(&temp[..n]) {
                FrameStatus::Pending => {
                    debug!(buffered = ?String::from_utf8_lossy(self.framer.buffered()), "Received data");
                }

                FrameStatus::Ready(block) => {
                    debug!(buffered = ?String::from_utf8_lossy(&block), "Received data");
                    let request = parse_http_request(&block)
                        .map_err(|e| anyhow::anyhow!("HTTP parse error: {}", e))?;
                    return Ok(Some(request));
                }

                FrameStatus::Overflow => {
                    warn!("Request too long, closing socket");
                    self.state = ConnectionState::Aborted;
                    return Ok(None);
                }
            }
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }
}
