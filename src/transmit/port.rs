use crate::notify::Notifier;
use crate::render::GeneratedScript;
use crate::settings::Settings;
use crate::transmit::error::TransmitError;

use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;

/// Write `script` to the command port in one go, then hold the connection for
/// the grace delay before closing it.
///
/// Single attempt, nothing is read back. On failure the notifier is called
/// once and the error is returned to the caller as well. Returns the number
/// of bytes written.
pub fn send_script(
    script: &GeneratedScript,
    settings: &Settings,
    notifier: &mut dyn Notifier,
) -> Result<usize, TransmitError> {
    match deliver(script, settings) {
        Ok(sent) => Ok(sent),
        Err(err) => {
            tracing::error!(error = %err, "command port delivery failed");
            notifier.error(&err.notification());
            Err(err)
        }
    }
}

fn deliver(script: &GeneratedScript, settings: &Settings) -> Result<usize, TransmitError> {
    let endpoint = settings.endpoint();
    let port = endpoint.port;

    let addresses = resolve_tcp_addresses(endpoint.host, port).map_err(|source| {
        TransmitError::Resolve {
            endpoint: endpoint.to_string(),
            port,
            source,
        }
    })?;

    // The stream only exists once connected; dropping it closes the socket on
    // every path below.
    let (mut stream, address) = connect_any(&addresses, settings).map_err(|source| {
        TransmitError::Connect {
            endpoint: endpoint.to_string(),
            port,
            source,
        }
    })?;
    tracing::debug!(%address, "connected to command port");

    stream
        .set_write_timeout(Some(settings.connect_timeout()))
        .and_then(|()| stream.write_all(script.as_bytes()))
        .and_then(|()| stream.flush())
        .map_err(|source| TransmitError::Write {
            endpoint: endpoint.to_string(),
            port,
            source,
        })?;

    thread::sleep(settings.grace());
    drop(stream);

    tracing::info!(%endpoint, bytes = script.len(), "sent reload script");
    Ok(script.len())
}

fn resolve_tcp_addresses(host: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
    let addresses: Vec<SocketAddr> = (host, port).to_socket_addrs()?.collect();
    if addresses.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "no resolved addresses",
        ));
    }
    Ok(addresses)
}

/// Try each resolved address in order; `localhost` may list `::1` before an
/// IPv4-only listener. The last failure is reported.
fn connect_any(addresses: &[SocketAddr], settings: &Settings) -> io::Result<(TcpStream, SocketAddr)> {
    let mut last_err = None;
    for address in addresses {
        match TcpStream::connect_timeout(address, settings.connect_timeout()) {
            Ok(stream) => return Ok((stream, *address)),
            Err(err) => {
                tracing::debug!(%address, error = %err, "command port address refused");
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "no resolved addresses")
    }))
}
