use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};
use crate::validate;

const MAX_NODE_NAME: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub uuid: String,
    #[serde(default)]
    pub public: bool,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location_id: u64,
    pub fqdn: String,
    pub scheme: String,
    #[serde(default)]
    pub behind_proxy: bool,
    #[serde(default)]
    pub maintenance_mode: bool,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    #[serde(default)]
    pub upload_size: u64,
    pub daemon_listen: u16,
    pub daemon_sftp: u16,
    #[serde(default)]
    pub daemon_base: String,
    #[serde(default)]
    pub allocated_resources: Option<AllocatedResources>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatedResources {
    pub memory: u64,
    pub disk: u64,
}

/// Body for both `POST /nodes` and `PATCH /nodes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    pub fqdn: String,
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_size: Option<u64>,
    pub daemon_sftp: u32,
    pub daemon_listen: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daemon_base: Option<String>,
}

impl From<&Node> for NewNode {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            description: node.description.clone(),
            location_id: node.location_id,
            public: Some(node.public),
            fqdn: node.fqdn.clone(),
            scheme: node.scheme.clone(),
            behind_proxy: Some(node.behind_proxy),
            maintenance_mode: Some(node.maintenance_mode),
            memory: node.memory,
            memory_overallocate: node.memory_overallocate,
            disk: node.disk,
            disk_overallocate: node.disk_overallocate,
            upload_size: Some(node.upload_size),
            daemon_sftp: node.daemon_sftp as u32,
            daemon_listen: node.daemon_listen as u32,
            daemon_base: (!node.daemon_base.is_empty()).then(|| node.daemon_base.clone()),
        }
    }
}

impl NewNode {
    pub fn validate(&self) -> Result<()> {
        validate::length("name", &self.name, 1, MAX_NODE_NAME)?;
        validate::id("location_id", self.location_id)?;
        validate::fqdn("fqdn", &self.fqdn)?;
        if self.scheme != "http" && self.scheme != "https" {
            return Err(PanelError::invalid("scheme", "must be 'http' or 'https'"));
        }
        validate::range_i64("memory_overallocate", self.memory_overallocate, -1, i64::MAX)?;
        validate::range_i64("disk_overallocate", self.disk_overallocate, -1, i64::MAX)?;
        validate::port("daemon_sftp", self.daemon_sftp)?;
        validate::port("daemon_listen", self.daemon_listen)?;
        if let Some(upload_size) = self.upload_size {
            validate::range_i64("upload_size", upload_size as i64, 1, 1024)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub id: u64,
    pub ip: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned: bool,
}

/// Body for `POST /nodes/{id}/allocations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAllocations {
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Single ports or `start-end` ranges
    pub ports: Vec<String>,
}

impl NewAllocations {
    pub fn validate(&self) -> Result<()> {
        validate::length("ip", &self.ip, 1, validate::MAX_STRING)?;
        validate::optional_length("alias", self.alias.as_deref(), 1, validate::MAX_STRING)?;
        if self.ports.is_empty() {
            return Err(PanelError::invalid("ports", "at least one port is required"));
        }
        for spec in &self.ports {
            validate::port_spec("ports", spec)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_node() -> NewNode {
        NewNode {
            name: "node-1".to_string(),
            description: None,
            location_id: 1,
            public: Some(true),
            fqdn: "node1.example.com".to_string(),
            scheme: "https".to_string(),
            behind_proxy: None,
            maintenance_mode: None,
            memory: 32768,
            memory_overallocate: 0,
            disk: 512000,
            disk_overallocate: -1,
            upload_size: Some(100),
            daemon_sftp: 2022,
            daemon_listen: 8080,
            daemon_base: None,
        }
    }

    #[test]
    fn test_node_validation() {
        assert!(new_node().validate().is_ok());

        let mut node = new_node();
        node.scheme = "ftp".to_string();
        assert!(node.validate().is_err());

        let mut node = new_node();
        node.daemon_listen = 70000;
        assert!(node.validate().is_err());

        let mut node = new_node();
        node.memory_overallocate = -5;
        assert!(node.validate().is_err());
    }

    #[test]
    fn test_node_round_trip_into_update() {
        let json = r#"{
            "id": 1, "uuid": "b5d4c1a2-0000-4000-8000-000000000001", "public": true,
            "name": "node-1", "description": null, "location_id": 1,
            "fqdn": "node1.example.com", "scheme": "https", "behind_proxy": false,
            "maintenance_mode": false, "memory": 32768, "memory_overallocate": 0,
            "disk": 512000, "disk_overallocate": 0, "upload_size": 100,
            "daemon_listen": 8080, "daemon_sftp": 2022, "daemon_base": "/var/lib/pterodactyl/volumes",
            "allocated_resources": {"memory": 4096, "disk": 20480},
            "created_at": "2024-03-02T18:31:08+00:00", "updated_at": "2024-03-02T18:31:08+00:00"
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.allocated_resources.as_ref().unwrap().memory, 4096);

        let update = NewNode::from(&node);
        assert!(update.validate().is_ok());
        assert_eq!(update.daemon_base.as_deref(), Some("/var/lib/pterodactyl/volumes"));
    }

    #[test]
    fn test_allocations_validation() {
        let allocations = NewAllocations {
            ip: "10.0.0.5".to_string(),
            alias: None,
            ports: vec!["25565".to_string(), "25570-25580".to_string()],
        };
        assert!(allocations.validate().is_ok());

        let empty = NewAllocations {
            ports: vec![],
            ..allocations.clone()
        };
        assert!(empty.validate().is_err());
    }
}
