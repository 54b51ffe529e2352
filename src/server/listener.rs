use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::dispatcher::Dispatcher;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.server.listen_addr()).await?;
    info!(
        "Serving {} on http://{}",
        cfg.static_files.root.display(),
        listener.local_addr()?
    );

    serve(listener, Dispatcher::new(cfg.static_files.root.clone())).await
}

/// Accept loop over an already bound listener.
pub async fn serve(listener: TcpListener, dispatcher: Dispatcher) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Client connected: {}", peer);

        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, dispatcher);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            info!("Client disconnected: {}", peer);
        });
    }
}
