use std::process::ExitCode;

use tokio::net::TcpListener;
use unscramble::config::Config;
use unscramble::startup;

#[tokio::main]
async fn main() -> ExitCode {
    std_logger::Config::logfmt().init();

    let config = match Config::get() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Unable to get the Config. Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(error) => {
            log::error!("Failed to bind address. Address: '{address}', Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };

    let server = match startup::create_web_server(config, listener) {
        Ok(server) => server,
        Err(error) => {
            log::error!("Unable to start the server. Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = server.await {
        log::error!("Server stopped with an error. Error: '{error}'.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
