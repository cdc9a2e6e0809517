extern crate env_logger;
#[macro_use]
extern crate log;
extern crate monome_clock;

use std::{env, process, thread};

use monome_clock::{demo, Config, Monome};

fn main() {
    env_logger::init();

    let config = Config::from_args(env::args().skip(1));

    let mut monome = match Monome::open(&config.device, &config.protocol) {
        Ok(monome) => monome,
        Err(e) => {
            error!("Could not open {}: {}", config.device, e);
            process::exit(-1);
        }
    };

    demo::run(&mut monome, &mut thread::sleep);
}
