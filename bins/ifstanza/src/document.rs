//! Desired-state documents (YAML/JSON).

use anyhow::{Context, Result};
use clap::ValueEnum;
use ifstanza::{AttributeRecord, Interface, InterfaceMap, InterfaceRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn encode<T: Serialize>(self, value: &T) -> Result<String> {
        match self {
            DocumentFormat::Yaml => {
                serde_yaml::to_string(value).context("YAML serialization failed")
            }
            DocumentFormat::Json => {
                serde_json::to_string_pretty(value).context("JSON serialization failed")
            }
        }
    }

    pub fn decode<T: DeserializeOwned>(self, text: &str) -> Result<T> {
        match self {
            DocumentFormat::Yaml => serde_yaml::from_str(text).context("YAML parse failed"),
            DocumentFormat::Json => serde_json::from_str(text).context("JSON parse failed"),
        }
    }
}

/// Interfaces in the order they are written out.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub interfaces: Vec<Interface>,
}

impl Document {
    pub fn from_map(map: InterfaceMap) -> Self {
        Self {
            interfaces: map
                .into_iter()
                .map(|(name, attributes)| Interface::new(name, attributes))
                .collect(),
        }
    }

    /// Give entries that list only a name the attributes of a newly managed
    /// interface (`auto` plus `iface <name> inet dhcp`).
    pub fn with_managed_defaults(mut self) -> Self {
        for interface in &mut self.interfaces {
            if *interface.attributes() == AttributeRecord::default() {
                debug!(interface = interface.name(), "using managed defaults");
                *interface.attributes_mut() = AttributeRecord::managed_default();
            }
        }
        self
    }
}
