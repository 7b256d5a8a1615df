use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};
use crate::validate;

const MAX_DESCRIPTION: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub uuid: String,
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `installing`, `install_failed`, `suspended`, `restoring_backup` or null
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub suspended: bool,
    pub limits: ServerLimits,
    pub feature_limits: FeatureLimits,
    pub user: u64,
    pub node: u64,
    pub allocation: u64,
    pub nest: u64,
    pub egg: u64,
    pub container: ServerContainer,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Server {
    pub fn is_suspended(&self) -> bool {
        self.suspended || self.status.as_deref() == Some("suspended")
    }
}

/// Resource limits. Memory, swap and disk are MiB; cpu is percent of one
/// core (0 = unlimited); io is the block-IO weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerLimits {
    pub memory: u64,
    /// `-1` for unlimited swap, `0` to disable
    pub swap: i64,
    pub disk: u64,
    pub io: u32,
    pub cpu: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oom_disabled: Option<bool>,
}

impl ServerLimits {
    pub fn new(memory: u64, disk: u64) -> Self {
        Self {
            memory,
            swap: 0,
            disk,
            io: 500,
            cpu: 0,
            threads: None,
            oom_disabled: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::range_i64("swap", self.swap, -1, i64::MAX)?;
        validate::range_i64("io", self.io as i64, 10, 1000)?;
        if let Some(threads) = &self.threads {
            validate::threads("threads", threads)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLimits {
    pub databases: u32,
    pub allocations: u32,
    #[serde(default)]
    pub backups: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerContainer {
    pub startup_command: String,
    pub image: String,
    #[serde(default, deserialize_with = "super::bool_or_int")]
    pub installed: bool,
    #[serde(default)]
    pub environment: BTreeMap<String, serde_json::Value>,
}

/// Either a fixed allocation or let the panel pick one on a node in the
/// given locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSpec {
    pub default: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploySpec {
    pub locations: Vec<u64>,
    #[serde(default)]
    pub dedicated_ip: bool,
    #[serde(default)]
    pub port_range: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServer {
    pub name: String,
    pub user: u64,
    pub egg: u64,
    pub docker_image: String,
    pub startup: String,
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
    pub limits: ServerLimits,
    #[serde(default)]
    pub feature_limits: FeatureLimits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<AllocationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy: Option<DeploySpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_on_completion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oom_disabled: Option<bool>,
}

impl NewServer {
    pub fn validate(&self) -> Result<()> {
        validate::length("name", &self.name, 1, validate::MAX_STRING)?;
        validate::id("user", self.user)?;
        validate::id("egg", self.egg)?;
        validate::length("docker_image", &self.docker_image, 1, validate::MAX_STRING)?;
        validate::required("startup", &self.startup)?;
        validate::optional_length("description", self.description.as_deref(), 0, MAX_DESCRIPTION)?;
        validate::optional_length("external_id", self.external_id.as_deref(), 1, validate::MAX_STRING)?;
        for key in self.environment.keys() {
            validate::env_key("environment", key)?;
        }
        self.limits.validate()?;

        match (&self.allocation, &self.deploy) {
            (Some(_), Some(_)) => Err(PanelError::invalid(
                "allocation",
                "set either allocation or deploy, not both",
            )),
            (None, None) => Err(PanelError::invalid(
                "allocation",
                "one of allocation or deploy is required",
            )),
            (Some(allocation), None) => {
                validate::id("allocation.default", allocation.default)?;
                for id in &allocation.additional {
                    validate::id("allocation.additional", *id)?;
                }
                Ok(())
            }
            (None, Some(deploy)) => {
                if deploy.locations.is_empty() {
                    return Err(PanelError::invalid(
                        "deploy.locations",
                        "at least one location is required",
                    ));
                }
                for id in &deploy.locations {
                    validate::id("deploy.locations", *id)?;
                }
                for spec in &deploy.port_range {
                    validate::port_spec("deploy.port_range", spec)?;
                }
                Ok(())
            }
        }
    }
}

/// Body for `PATCH /servers/{id}/details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerDetails {
    pub name: String,
    pub user: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Server> for ServerDetails {
    fn from(server: &Server) -> Self {
        Self {
            name: server.name.clone(),
            user: server.user,
            external_id: server.external_id.clone(),
            description: server.description.clone(),
        }
    }
}

impl ServerDetails {
    pub fn validate(&self) -> Result<()> {
        validate::length("name", &self.name, 1, validate::MAX_STRING)?;
        validate::id("user", self.user)?;
        validate::optional_length("external_id", self.external_id.as_deref(), 1, validate::MAX_STRING)?;
        validate::optional_length("description", self.description.as_deref(), 0, MAX_DESCRIPTION)
    }
}

/// Body for `PATCH /servers/{id}/build`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerBuild {
    pub allocation: u64,
    #[serde(flatten)]
    pub limits: ServerLimits,
    pub feature_limits: FeatureLimits,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_allocations: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_allocations: Vec<u64>,
}

impl From<&Server> for ServerBuild {
    fn from(server: &Server) -> Self {
        Self {
            allocation: server.allocation,
            limits: server.limits.clone(),
            feature_limits: server.feature_limits.clone(),
            add_allocations: Vec::new(),
            remove_allocations: Vec::new(),
        }
    }
}

impl ServerBuild {
    pub fn validate(&self) -> Result<()> {
        validate::id("allocation", self.allocation)?;
        self.limits.validate()?;
        for id in &self.add_allocations {
            validate::id("add_allocations", *id)?;
        }
        for id in &self.remove_allocations {
            validate::id("remove_allocations", *id)?;
            if *id == self.allocation {
                return Err(PanelError::invalid(
                    "remove_allocations",
                    "cannot remove the primary allocation",
                ));
            }
        }
        Ok(())
    }
}

/// Body for `PATCH /servers/{id}/startup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStartup {
    pub startup: String,
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
    pub egg: u64,
    pub image: String,
    #[serde(default)]
    pub skip_scripts: bool,
}

impl From<&Server> for ServerStartup {
    fn from(server: &Server) -> Self {
        let environment = server
            .container
            .environment
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (k.clone(), value)
            })
            .collect();

        Self {
            startup: server.container.startup_command.clone(),
            environment,
            egg: server.egg,
            image: server.container.image.clone(),
            skip_scripts: false,
        }
    }
}

impl ServerStartup {
    pub fn validate(&self) -> Result<()> {
        validate::required("startup", &self.startup)?;
        validate::id("egg", self.egg)?;
        validate::length("image", &self.image, 1, validate::MAX_STRING)?;
        for key in self.environment.keys() {
            validate::env_key("environment", key)?;
        }
        Ok(())
    }
}
