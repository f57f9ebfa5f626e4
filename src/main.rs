use panel_workspace::WorkspaceConfig;

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "PANEL_WORKSPACE_CONFIG";

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match WorkspaceConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.to_string_lossy());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                WorkspaceConfig::default()
            }
        },
        None => WorkspaceConfig::default(),
    };

    // Run the workspace application
    panel_workspace::run_app(config)
}
