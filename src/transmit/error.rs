use std::io;

#[derive(Debug, thiserror::Error)]
pub enum TransmitError {
    #[error("failed to resolve command port address {endpoint}: {source}")]
    Resolve {
        endpoint: String,
        port: u16,
        source: io::Error,
    },
    #[error("failed to connect to command port at {endpoint}: {source}")]
    Connect {
        endpoint: String,
        port: u16,
        source: io::Error,
    },
    #[error("failed to send script to command port at {endpoint}: {source}")]
    Write {
        endpoint: String,
        port: u16,
        source: io::Error,
    },
}

impl TransmitError {
    pub fn port(&self) -> u16 {
        match self {
            Self::Resolve { port, .. } | Self::Connect { port, .. } | Self::Write { port, .. } => {
                *port
            }
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Resolve { source, .. }
            | Self::Connect { source, .. }
            | Self::Write { source, .. } => source,
        }
    }

    /// Text shown to the user: the port plus the underlying error.
    pub fn notification(&self) -> String {
        format!(
            "Can't communicate with Maya on port {}. {}",
            self.port(),
            self.io_error()
        )
    }
}
