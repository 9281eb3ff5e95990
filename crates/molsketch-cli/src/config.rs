use crate::cli::SketchArgs;
use crate::error::{CliError, Result};
use molsketch::workflows::config::SketchConfig;
use std::path::Path;
use tracing::debug;

pub fn load_file(path: &Path) -> Result<SketchConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Builds the session configuration: defaults, then the config file, then
/// command-line overrides.
pub fn resolve(args: &SketchArgs, label: Option<&str>) -> Result<SketchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading sketch configuration from {:?}", path);
            load_file(path)?
        }
        None => SketchConfig::default(),
    };

    if let Some(bond_length) = args.bond_length {
        config.bond_length = bond_length;
    }
    if let Some(label) = label {
        if label.is_empty() {
            return Err(CliError::Config("Atom label cannot be empty".to_string()));
        }
        config.grow_label = label.to_string();
    }

    config.validate()?;
    debug!("Resolved sketch configuration: {:?}", config);
    Ok(config)
}
