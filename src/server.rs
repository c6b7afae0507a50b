//! HTTP server lifecycle: bind, serve, shut down.
//!
//! The listening socket is the only process-wide state. It is owned by
//! [`Server`] until serving starts, then by the serve task behind
//! [`ServerHandle`].

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A bound, not yet serving, HTTP server
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind the listener. Port `0` picks a free port.
    pub async fn bind(addr: SocketAddr, router: Router) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }

    /// Serve on a background task, stopped through the returned handle
    pub fn spawn(self) -> io::Result<ServerHandle> {
        let addr = self.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(self.run_until(async move {
            // A dropped sender also stops the server.
            let _ = shutdown_rx.await;
        }));

        Ok(ServerHandle {
            addr,
            shutdown_tx,
            task,
        })
    }
}

/// Running server started by [`Server::spawn`]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for the serve task to finish
    pub async fn shutdown(self) -> io::Result<()> {
        let _ = self.shutdown_tx.send(());
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

/// Resolve on Ctrl+C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "Error handling Ctrl+C signal");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C signal");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut handler) => {
                handler.recv().await;
                tracing::info!("Received SIGTERM signal");
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, initiating graceful shutdown");
}
