// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{apply_overrides, default_config_path, load_config, load_from_file};
pub use settings::Config;
