use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use liblife::Topology;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    pub generations: u64,
    pub toroidal: bool,

    /// Skip the per-generation terminal display.
    pub silent: bool,

    /// How long each generation stays on screen.
    pub delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            toroidal: false,
            silent: false,
            delay_ms: 50,
        }
    }
}

impl RunConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn topology(&self) -> Topology {
        Topology::from_toroidal(self.toroidal)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
