use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Error, Result};

/// Window and start-up settings. Every field falls back to its default, so
/// a config file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub initial_route: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "Exercise 5 - Navigation".to_string(),
            window_width: 450.,
            window_height: 800.,
            initial_route: "/".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_json(&contents)
    }
}
