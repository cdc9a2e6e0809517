use std::io;

/// Errors that can happen while opening a grid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported device path {0:?}, expected osc.udp://host:port/prefix")]
    UnsupportedPath(String),

    #[error("could not resolve device address {0:?}")]
    InvalidAddress(String),

    #[error("invalid protocol identifier {0:?}, expected a local port number")]
    InvalidProtocol(String),

    #[error("could not bind local port {port}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("could not connect to the device")]
    Connect(#[source] io::Error),

    #[error("could not encode OSC packet: {0}")]
    Encode(String),

    #[error("could not send to the device")]
    Send(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
