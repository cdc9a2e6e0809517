/// The grid opened when no device path is given.
pub const DEFAULT_DEVICE: &str = "osc.udp://127.0.0.1:8080/monome";

/// The protocol identifier passed when opening the grid: the local port to listen on.
pub const DEFAULT_PROTOCOL: &str = "8000";

/// What to open.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The device path, see `Monome::open`.
    pub device: String,
    pub protocol: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            device: DEFAULT_DEVICE.to_string(),
            protocol: DEFAULT_PROTOCOL.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from the command line arguments, program name excluded.
    ///
    /// A single argument is the device path. With none, or more than one, the default device is
    /// used.
    pub fn from_args<I>(args: I) -> Config
        where I: IntoIterator<Item = String>
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = Config::default();
        match args.len() {
            0 => {}
            1 => config.device = args[0].clone(),
            n => warn!("{} arguments given, expected at most one, opening {}", n, config.device),
        }
        config
    }
}
