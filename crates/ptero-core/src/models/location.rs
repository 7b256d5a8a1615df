use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};
use crate::validate;

const MAX_SHORT: usize = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    /// Short code, e.g. `eu-west`
    pub short: String,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

impl NewLocation {
    pub fn validate(&self) -> Result<()> {
        validate::length("short", &self.short, 1, MAX_SHORT)?;
        validate::optional_length("long", self.long.as_deref(), 1, validate::MAX_STRING)
    }
}

/// Body for `PATCH /locations/{id}`; unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

impl LocationUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.short.is_none() && self.long.is_none() {
            return Err(PanelError::invalid("location", "nothing to update"));
        }
        validate::optional_length("short", self.short.as_deref(), 1, MAX_SHORT)?;
        validate::optional_length("long", self.long.as_deref(), 1, validate::MAX_STRING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validation() {
        let location = NewLocation {
            short: "eu-west".to_string(),
            long: Some("Frankfurt".to_string()),
        };
        assert!(location.validate().is_ok());

        let location = NewLocation {
            short: "x".repeat(61),
            long: None,
        };
        assert!(location.validate().is_err());

        assert!(LocationUpdate::default().validate().is_err());
        let update = LocationUpdate {
            long: Some("Amsterdam".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("short").is_none());
    }
}
