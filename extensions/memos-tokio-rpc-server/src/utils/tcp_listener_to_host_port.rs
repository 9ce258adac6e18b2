use std::io::Result;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Extracts the IP address and port from a bound `TcpListener`.
///
/// Handy when the listener was bound to an ephemeral port (port 0) and the
/// OS-assigned port number is needed to build a client URL.
pub fn tcp_listener_to_host_port(listener: &TcpListener) -> Result<(IpAddr, u16)> {
    let local_addr: SocketAddr = listener.local_addr()?;

    Ok((local_addr.ip(), local_addr.port()))
}
