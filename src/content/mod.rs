//! Content domain: platformer configuration loading and validation.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::PlatformerConfig;
pub use loader::{ContentLoadError, load_config, parse_config};
pub use validation::{
    ConfigError, validate_actor_tuning, validate_body_tuning, validate_config, validate_geometry,
};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::movement::{ActorTuning, BodyGeometry, BodyTuning};

/// Loads `PlatformerConfig` and sets the fixed simulation rate from it.
pub struct ContentPlugin {
    pub config_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("assets/data/platformer.ron"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlatformerConfig>()
            .register_type::<BodyGeometry>()
            .register_type::<BodyTuning>()
            .register_type::<ActorTuning>();

        let config = load_or_default(&self.config_path);
        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(config);
    }
}

/// Load and validate the config, falling back to defaults on any failure.
pub fn load_or_default(path: &Path) -> PlatformerConfig {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default platformer config", e);
            return PlatformerConfig::default();
        }
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}: {}", path.display(), e);
        }
        warn!(
            "{} config errors in {}; using default platformer config",
            errors.len(),
            path.display()
        );
        return PlatformerConfig::default();
    }

    info!(
        "Loaded platformer config from {} (schema v{}, {} Hz)",
        path.display(),
        config.schema_version,
        config.fixed_hz
    );
    config
}
