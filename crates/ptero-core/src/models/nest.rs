use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nest {
    pub id: u64,
    pub uuid: String,
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Egg {
    pub id: u64,
    pub uuid: String,
    pub name: String,
    pub nest: u64,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Older panels expose a single image only
    #[serde(default)]
    pub docker_image: Option<String>,
    /// Display name to image
    #[serde(default)]
    pub docker_images: BTreeMap<String, String>,
    pub startup: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Egg {
    /// Image to use when the caller has no preference.
    pub fn default_image(&self) -> Option<&str> {
        self.docker_image
            .as_deref()
            .or_else(|| self.docker_images.values().next().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_egg_default_image() {
        let json = r#"{
            "id": 3, "uuid": "d3b6e4a1-0000-4000-8000-000000000003", "name": "Paper", "nest": 1,
            "author": "parker@pterodactyl.io", "description": "High performance Spigot fork",
            "docker_images": {"Java 17": "ghcr.io/pterodactyl/yolks:java_17"},
            "startup": "java -jar {{SERVER_JARFILE}}",
            "config": {"stop": "stop"},
            "created_at": "2024-03-02T18:31:08+00:00", "updated_at": "2024-03-02T18:31:08+00:00"
        }"#;
        let egg: Egg = serde_json::from_str(json).unwrap();
        assert_eq!(egg.default_image(), Some("ghcr.io/pterodactyl/yolks:java_17"));
    }
}
