/// Point Cube Terminal - spinning point-cloud cube
///
/// Usage: cube-terminal [config-file]
///
/// The config file holds `key = value` lines overriding the defaults.
/// Controls:
///   - Q/ESC/Ctrl+C: Quit
///
/// Logs go to stderr; the default level is `warn` since the terminal is taken
/// over by the renderer. Use `RUST_LOG=info cube-terminal 2>cube.log` to keep them.
use cube_core::RenderConfig;
use cube_terminal::TerminalApp;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config file: {}", path);
            RenderConfig::load(&path)
        }
        None => Ok(RenderConfig::default()),
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Surface {}x{}, {} points, edge length {}, frame delay {:?}",
        config.width,
        config.height,
        config.total_points,
        config.edge_length,
        config.frame_delay
    );

    let result = TerminalApp::new(config).and_then(|mut app| app.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
