use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::Result;
use crate::validate;

const MAX_DATABASE_NAME: usize = 48;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerDatabase {
    pub id: u64,
    pub server: u64,
    /// Database host id
    pub host: u64,
    pub database: String,
    pub username: String,
    pub remote: String,
    #[serde(default)]
    pub max_connections: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Present only when the request asked for `include=password` or `host`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<DatabaseRelationships>,
}

impl ServerDatabase {
    pub fn password(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.password.as_ref())
            .map(|p| p.attributes.password.as_str())
    }

    pub fn database_host(&self) -> Option<&DatabaseHost> {
        self.relationships
            .as_ref()
            .and_then(|r| r.host.as_ref())
            .map(|h| &h.attributes)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseRelationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Resource<DatabasePassword>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Resource<DatabaseHost>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabasePassword {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHost {
    pub id: u64,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(default)]
    pub node: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDatabase {
    /// Name without the `s<server>_` prefix the panel adds
    pub database: String,
    /// Host mask allowed to connect, `%` for anywhere
    pub remote: String,
    /// Database host id
    pub host: u64,
}

impl NewDatabase {
    pub fn new(database: impl Into<String>, remote: impl Into<String>, host: u64) -> Self {
        Self {
            database: database.into(),
            remote: remote.into(),
            host,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::alpha_dash("database", &self.database, MAX_DATABASE_NAME)?;
        validate::remote("remote", &self.remote)?;
        validate::id("host", self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_relationship() {
        let json = r#"{
            "id": 1, "server": 5, "host": 4,
            "database": "s5_world", "username": "u5_9f2KsLwQ", "remote": "%",
            "max_connections": 0,
            "created_at": "2024-03-02T18:31:08+00:00",
            "updated_at": "2024-03-02T18:31:08+00:00",
            "relationships": {
                "password": {"object": "database_password", "attributes": {"password": "s3cret!"}}
            }
        }"#;
        let db: ServerDatabase = serde_json::from_str(json).unwrap();
        assert_eq!(db.password(), Some("s3cret!"));
        assert!(db.database_host().is_none());
    }

    #[test]
    fn test_without_relationships() {
        let json = r#"{"id": 1, "server": 5, "host": 4, "database": "s5_world",
            "username": "u5_9f2KsLwQ", "remote": "%", "max_connections": null}"#;
        let db: ServerDatabase = serde_json::from_str(json).unwrap();
        assert!(db.password().is_none());
        assert!(db.max_connections.is_none());
    }

    #[test]
    fn test_new_database_validation() {
        assert!(NewDatabase::new("world", "%", 1).validate().is_ok());
        assert!(NewDatabase::new("world data", "%", 1).validate().is_err());
        assert!(NewDatabase::new("world", "anywhere", 1).validate().is_err());
        assert!(NewDatabase::new("world", "%", 0).validate().is_err());
    }
}
