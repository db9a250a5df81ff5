//! Native HTTP server implementation
//!
//! Accept loop on a tokio listener with:
//! - One task per connection, served by hyper's HTTP/1.1 connection driver
//! - TCP_NODELAY on accepted sockets
//! - Exclusive port ownership (no SO_REUSEPORT), so a second instance fails to bind

use crate::responder::{handle_request, Responder};
use crate::{Error, Jitter, Result};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Port the dummy listens on
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub hostname: String,
    pub workers: usize,
    pub backlog: i32,
    pub jitter: Jitter,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            hostname: "0.0.0.0".to_string(),
            workers: num_cpus::get(),
            backlog: 1024,
            jitter: Jitter::default(),
        }
    }
}

impl ServerConfig {
    /// `hostname:port` as written in logs and errors
    pub fn address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = self.address();
        addr.parse()
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", addr, e)))
    }
}

/// Create a non-blocking listening TCP socket
pub fn create_listener_socket(addr: &SocketAddr, backlog: i32) -> std::io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow binding to address in TIME_WAIT.
    // SO_REUSEPORT stays off: the port must belong to one process.
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;

    socket.bind(&(*addr).into())?;
    socket.listen(backlog)?;

    Ok(socket)
}

/// Bound listener plus the shared responder
pub struct Server {
    listener: TcpListener,
    responder: Arc<Responder>,
}

impl Server {
    /// Acquire the configured address. Must be called inside a tokio runtime.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let addr = config.socket_addr()?;
        let listener = create_listener_socket(&addr, config.backlog)
            .and_then(|socket| TcpListener::from_std(socket.into()))
            .map_err(|source| Error::Bind {
                addr: config.address(),
                source,
            })?;

        tracing::debug!(
            addr = %addr,
            min_delay_ms = config.jitter.bounds().0.as_millis() as u64,
            max_delay_ms = config.jitter.bounds().1.as_millis() as u64,
            "listener bound"
        );

        Ok(Self {
            listener,
            responder: Arc::new(Responder::new(config.jitter)),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::warn!(error = %e, "accept failed");
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                tracing::debug!(peer = %peer, error = %e, "could not set TCP_NODELAY");
            }

            let responder = self.responder.clone();
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req| handle_request(responder.clone(), req));

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    let err = Error::from(e);
                    tracing::debug!(peer = %peer, error = %err, "connection closed with error");
                }
            });
        }
    }
}
