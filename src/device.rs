use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};

use futures::future::poll_fn;
use futures::Future;
use tokio::net::UdpSocket;

use rosc::encoder::encode;
use rosc::{OscMessage, OscPacket, OscType};

use crate::error::{Error, Result};
use crate::grid::{Grid, MAX_INTENSITY};

/// The scheme of the device paths we know how to open.
pub const OSC_SCHEME: &str = "osc.udp://";

/// The prefix used when the device path doesn't specify one.
pub const DEFAULT_PREFIX: &str = "/monome";

/// Returns an osc packet from a address and arguments
fn message(addr: &str, args: Vec<OscType>) -> OscPacket {
    let message = OscMessage {
        addr: addr.to_owned(),
        args: Some(args),
    };
    OscPacket::Message(message)
}

/// Splits a device path of the form `osc.udp://host:port/prefix` into the address of the device
/// and the prefix to use. The prefix is optional.
fn parse_path(path: &str) -> Result<(SocketAddr, String)> {
    if !path.starts_with(OSC_SCHEME) {
        return Err(Error::UnsupportedPath(path.to_string()));
    }
    let rest = &path[OSC_SCHEME.len()..];
    let (host, prefix) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    let prefix = match prefix.trim_end_matches('/') {
        "" => DEFAULT_PREFIX.to_string(),
        p => p.to_string(),
    };
    let addr = host
        .to_socket_addrs()
        .map_err(|_| Error::InvalidAddress(host.to_string()))?
        .next()
        .ok_or_else(|| Error::InvalidAddress(host.to_string()))?;
    Ok((addr, prefix))
}

/// A handle to a monome grid, reached over OSC.
pub struct Monome {
    /// The socket with which we send to the device. It is connected to `addr`.
    socket: UdpSocket,
    /// The address of the device.
    addr: SocketAddr,
    /// The local port, at which the device sends its events.
    port: u16,
    /// The prefix set for this device
    prefix: String,
}

impl Monome {
    /// Opens a grid.
    ///
    /// # Arguments
    ///
    /// * `path` - where the device is, as `osc.udp://host:port/prefix`, the prefix defaulting to
    /// `/monome`.
    /// * `protocol` - the local port to listen on, as a decimal string.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use monome_clock::{Grid, Monome};
    ///
    /// match Monome::open("osc.udp://127.0.0.1:8080/monome", "8000") {
    ///   Ok(mut monome) => {
    ///     println!("{:?}", monome);
    ///     monome.all(true);
    ///   }
    ///   Err(e) => {
    ///     println!("Could not open the monome: {}", e);
    ///   }
    /// }
    /// ```
    pub fn open(path: &str, protocol: &str) -> Result<Monome> {
        let (addr, prefix) = parse_path(path)?;
        let port: u16 = protocol
            .parse()
            .map_err(|_| Error::InvalidProtocol(protocol.to_string()))?;

        let local_addr = if addr.is_ipv4() {
            format!("0.0.0.0:{}", port)
        } else {
            format!("[::]:{}", port)
        };
        let local_addr: SocketAddr = local_addr
            .parse()
            .map_err(|_| Error::InvalidProtocol(protocol.to_string()))?;
        let socket = UdpSocket::bind(&local_addr).map_err(|source| Error::Bind { port, source })?;
        socket.connect(&addr).map_err(Error::Connect)?;
        let local = socket.local_addr().map_err(Error::Connect)?;

        let mut monome = Monome {
            socket,
            addr,
            port: local.port(),
            prefix,
        };

        // Tell the device where to send its events, and with which prefix.
        let host = local.ip().to_string();
        let prefix = monome.prefix.clone();
        monome.try_send("/sys/port", vec![OscType::Int(i32::from(local.port()))])?;
        monome.try_send("/sys/host", vec![OscType::String(host)])?;
        monome.try_send("/sys/prefix", vec![OscType::String(prefix)])?;

        info!("opened {:?}", monome);

        Ok(monome)
    }

    /// Get the address of this device.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the local port this handle listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the current prefix of this device.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Adds the prefix and sends the message, logging failures.
    fn send(&mut self, addr: &str, args: Vec<OscType>) {
        let with_prefix = format!("{}{}", self.prefix, addr);
        if let Err(e) = self.try_send(&with_prefix, args) {
            error!("{}: {}", with_prefix, e);
        }
    }

    /// Packs the OSC message into an u8 vector and sends it to the device.
    fn try_send(&mut self, addr: &str, args: Vec<OscType>) -> Result<()> {
        let packet = message(addr, args);
        debug!("⇨ {:?}", packet);
        let bytes: Vec<u8> = encode(&packet).map_err(|e| Error::Encode(format!("{:?}", e)))?;
        let socket = &mut self.socket;
        poll_fn(|| socket.poll_send(&bytes))
            .wait()
            .map_err(Error::Send)?;
        Ok(())
    }
}

impl Grid for Monome {
    fn set(&mut self, x: i32, y: i32, on: bool) {
        self.send("/grid/led/set",
                  vec![OscType::Int(x), OscType::Int(y), OscType::Int(if on { 1 } else { 0 })]);
    }

    fn all(&mut self, on: bool) {
        self.send("/grid/led/all", vec![OscType::Int(if on { 1 } else { 0 })]);
    }

    fn intensity(&mut self, level: u8) {
        let level = level.min(MAX_INTENSITY);
        self.send("/grid/led/intensity", vec![OscType::Int(i32::from(level))]);
    }
}

impl fmt::Debug for Monome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Monome {}{}\nport: {}\nprefix: {}",
               OSC_SCHEME,
               self.addr,
               self.port,
               self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosc::decoder::decode;

    /// Binds a fake device on localhost.
    fn fake_device(port: u16) -> UdpSocket {
        let addr = format!("127.0.0.1:{}", port).parse().unwrap();
        UdpSocket::bind(&addr).unwrap()
    }

    fn receive_and_expect(socket: UdpSocket,
                          expected_addr: &str)
                          -> (UdpSocket, Option<Vec<OscType>>) {
        let (socket, data, len, _) = socket.recv_dgram(vec![0u8; 1024]).wait().unwrap();
        let packet = decode(&data[..len]).unwrap();

        let msg = match packet {
            OscPacket::Message(m) => m,
            OscPacket::Bundle(_b) => panic!("unexpected bundle"),
        };

        assert_eq!(msg.addr, expected_addr);

        (socket, msg.args)
    }

    #[test]
    fn paths() {
        let (addr, prefix) = parse_path("osc.udp://127.0.0.1:8080/monome").unwrap();
        assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(prefix, "/monome");

        let (_, prefix) = parse_path("osc.udp://127.0.0.1:8080/plop/").unwrap();
        assert_eq!(prefix, "/plop");

        let (addr, prefix) = parse_path("osc.udp://127.0.0.1:9000").unwrap();
        assert_eq!(addr.port(), 9000);
        assert_eq!(prefix, DEFAULT_PREFIX);
    }

    #[test]
    fn bad_paths() {
        match parse_path("/dev/tty.usbserial-m40h0924") {
            Err(Error::UnsupportedPath(p)) => assert_eq!(p, "/dev/tty.usbserial-m40h0924"),
            other => panic!("unexpected {:?}", other.map(|(a, _)| a)),
        }
        match parse_path("osc.udp://127.0.0.1/monome") {
            Err(Error::InvalidAddress(h)) => assert_eq!(h, "127.0.0.1"),
            other => panic!("unexpected {:?}", other.map(|(a, _)| a)),
        }
    }

    #[test]
    fn bad_protocol() {
        match Monome::open("osc.udp://127.0.0.1:17200/monome", "eight thousand") {
            Err(Error::InvalidProtocol(p)) => assert_eq!(p, "eight thousand"),
            other => panic!("unexpected {:?}", other.map(|m| m.port())),
        }
    }

    #[test]
    fn setup_and_leds() {
        let device = fake_device(17100);
        let mut monome = Monome::open("osc.udp://127.0.0.1:17100/plop", "17101").unwrap();
        assert_eq!(monome.port(), 17101);
        assert_eq!(monome.prefix(), "/plop");

        let (device, args) = receive_and_expect(device, "/sys/port");
        assert_eq!(args, Some(vec![OscType::Int(17101)]));
        let (device, args) = receive_and_expect(device, "/sys/host");
        assert_eq!(args, Some(vec![OscType::String("127.0.0.1".into())]));
        let (device, args) = receive_and_expect(device, "/sys/prefix");
        assert_eq!(args, Some(vec![OscType::String("/plop".into())]));

        monome.set(3, 4, true);
        monome.all(false);
        monome.intensity(42);

        let (device, args) = receive_and_expect(device, "/plop/grid/led/set");
        assert_eq!(args,
                   Some(vec![OscType::Int(3), OscType::Int(4), OscType::Int(1)]));
        let (device, args) = receive_and_expect(device, "/plop/grid/led/all");
        assert_eq!(args, Some(vec![OscType::Int(0)]));
        let (_device, args) = receive_and_expect(device, "/plop/grid/led/intensity");
        assert_eq!(args, Some(vec![OscType::Int(15)]));
    }
}
