use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct BridgeConfig {
    pub logging: LoggingSection,
    #[serde(default)]
    pub world: WorldSection,
    #[serde(default)]
    pub pick_block: PickBlockSection,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct WorldSection {
    /// Keep Java chunk data so block lookups can be answered locally.
    #[serde(default = "default_cache_chunks")]
    pub cache_chunks: bool,
}

fn default_cache_chunks() -> bool {
    true
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            cache_chunks: default_cache_chunks(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PickBlockSection {
    /// Bedrock entity spawned when the picked block is not in the inventory.
    #[serde(default = "default_proxy_identifier")]
    pub proxy_identifier: String,
    #[serde(default = "default_proxy_scale")]
    pub proxy_scale: f32,
    /// Mount the proxy on the player after spawning it.
    #[serde(default)]
    pub mount_proxy: bool,
}

fn default_proxy_identifier() -> String {
    "minecraft:shulker".into()
}

fn default_proxy_scale() -> f32 {
    0.5
}

impl Default for PickBlockSection {
    fn default() -> Self {
        Self {
            proxy_identifier: default_proxy_identifier(),
            proxy_scale: default_proxy_scale(),
            mount_proxy: false,
        }
    }
}

impl BridgeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
