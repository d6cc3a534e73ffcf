use cspot_core::crypto::RealCrypto;
use cspot_core::error::Error;
use cspot_core::session::Session;
use cspot_core::zeroconf::{ZeroConfEndpoint, DEFAULT_PORT};
use std::env;
use std::io;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();

    let device_name = env::args().nth(1).unwrap_or_else(|| "cspot".to_string());
    let port: u16 = env::var("CSPOT_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    if let Err(err) = run(&device_name, port) {
        log::error!("fatal: {}", err);
        std::process::exit(1);
    }
}

fn run(device_name: &str, port: u16) -> Result<(), Error> {
    let endpoint = ZeroConfEndpoint::new(device_name, RealCrypto::default());

    let _daemon = match endpoint.advertise(port) {
        Ok(daemon) => Some(daemon),
        Err(err) => {
            log::warn!(
                "mDNS advertisement failed, falling back to manual discovery: {}",
                err
            );
            None
        }
    };

    let server = tiny_http::Server::http(("0.0.0.0", port))
        .map_err(|err| Error::Io(io::Error::new(io::ErrorKind::Other, err.to_string())))?;
    log::info!("{} listening on port {}", device_name, port);

    thread::scope(|scope| -> Result<(), Error> {
        scope.spawn(|| {
            if let Err(err) = endpoint.run(&server) {
                log::error!("zeroconf server loop exited: {}", err);
            }
        });

        while !endpoint.is_auth_ready() {
            if endpoint.is_closed() {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(200));
        }

        let credentials = endpoint
            .take_credentials()
            .expect("auth_ready implies credentials were decoded");

        log::info!(
            "received credentials for user {}, authenticating",
            credentials.username
        );

        let mut session = Session::connect()?;
        let reusable_auth = session.authenticate(&credentials)?;
        log::info!(
            "authenticated, received {} bytes of reusable credentials",
            reusable_auth.len()
        );

        Ok(())
    })
}
