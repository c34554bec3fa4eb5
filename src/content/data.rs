//! Data definitions for the platformer RON config.
//!
//! Mirrors the structure in assets/data/platformer.ron. Every section falls
//! back to its defaults, so a file only needs to name what it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ActorTuning, BodyGeometry, BodyTuning};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PlatformerConfig {
    pub schema_version: u32,
    /// Simulation steps per second.
    pub fixed_hz: f64,
    pub geometry: BodyGeometry,
    pub body: BodyTuning,
    pub actor: ActorTuning,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            fixed_hz: 60.0,
            geometry: BodyGeometry::default(),
            body: BodyTuning::default(),
            actor: ActorTuning::default(),
        }
    }
}
