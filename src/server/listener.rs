// Listener module
// Creates the TCP listener the server accepts connections on

use socket2::{Domain, Protocol, Socket, Type};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Create a `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` lets a restarted server rebind while old connections sit
/// in `TIME_WAIT`. `SO_REUSEPORT` stays off, so binding a port another
/// process is listening on fails.
///
/// The IPv6 wildcard `[::]` is bound dual-stack so IPv4 clients reach it
/// too. On a host without IPv6 it falls back to `0.0.0.0` on the same
/// port; a port already in use is never retried.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully created and bound listener
/// * `Err(ServerError::Bind)` - Failed to create or bind socket
pub fn create_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    match bind_socket(addr) {
        Ok(listener) => Ok(listener),
        Err(e) if is_v6_wildcard(addr) && e.kind() != ErrorKind::AddrInUse => {
            let fallback = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), addr.port());
            crate::logger::log_warning(&format!(
                "IPv6 unavailable on {addr} ({e}), listening on {fallback}"
            ));
            bind_socket(fallback).map_err(|source| ServerError::Bind {
                addr: fallback,
                source,
            })
        }
        Err(source) => Err(ServerError::Bind { addr, source }),
    }
}

fn is_v6_wildcard(addr: SocketAddr) -> bool {
    addr.is_ipv6() && addr.ip().is_unspecified()
}

fn bind_socket(addr: SocketAddr) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Accept IPv4 clients on an IPv6 wildcard as well
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }

    socket.set_reuse_address(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;

    // Start listening with a backlog queue size of 1024
    socket.listen(1024)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
