//! Field checks run before a request leaves the process.
//!
//! These mirror the panel's own request rules closely enough that an
//! obviously bad payload fails fast with [`PanelError::InvalidInput`]
//! instead of a round trip and a 422.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PanelError, Result};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref USERNAME: Regex = Regex::new(r"^[a-z0-9]([\w.-]*[a-z0-9])?$").unwrap();
    static ref ALPHA_DASH: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    static ref REMOTE: Regex = Regex::new(r"^[0-9%.]{1,15}$").unwrap();
    static ref THREADS: Regex = Regex::new(r"^[0-9]+(-[0-9]+)?(,[0-9]+(-[0-9]+)?)*$").unwrap();
    static ref PORT_SPEC: Regex = Regex::new(r"^(\d{1,5})(?:-(\d{1,5}))?$").unwrap();
    static ref ENV_KEY: Regex = Regex::new(r"^[A-Za-z0-9_]{1,191}$").unwrap();
}

pub const MAX_STRING: usize = 191;
pub const MAX_PORT_RANGE: u32 = 1000;
/// Allocation ports must sit above the privileged range.
pub const MIN_ALLOCATION_PORT: u32 = 1025;

pub fn id(field: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(PanelError::invalid(field, "must be a positive id"));
    }
    Ok(())
}

/// Non-blank and at most `max` characters.
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.trim().chars().count();
    if len < min || value.chars().count() > max {
        return Err(PanelError::invalid(
            field,
            format!("must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}

pub fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PanelError::invalid(field, "must not be empty"));
    }
    Ok(())
}

pub fn optional_length(field: &str, value: Option<&str>, min: usize, max: usize) -> Result<()> {
    match value {
        Some(v) => length(field, v, min, max),
        None => Ok(()),
    }
}

pub fn email(field: &str, value: &str) -> Result<()> {
    length(field, value, 1, MAX_STRING)?;
    if !EMAIL.is_match(value) {
        return Err(PanelError::invalid(field, "must be a valid email address"));
    }
    Ok(())
}

pub fn username(field: &str, value: &str) -> Result<()> {
    length(field, value, 1, MAX_STRING)?;
    if !USERNAME.is_match(value) {
        return Err(PanelError::invalid(
            field,
            "must be lowercase letters, digits, '_', '-' or '.', starting and ending with a letter or digit",
        ));
    }
    Ok(())
}

pub fn alpha_dash(field: &str, value: &str, max: usize) -> Result<()> {
    length(field, value, 1, max)?;
    if !ALPHA_DASH.is_match(value) {
        return Err(PanelError::invalid(
            field,
            "may only contain letters, digits, '-' and '_'",
        ));
    }
    Ok(())
}

/// MySQL host mask for database users, e.g. `%` or `10.0.%`.
pub fn remote(field: &str, value: &str) -> Result<()> {
    if !REMOTE.is_match(value) {
        return Err(PanelError::invalid(
            field,
            "must be up to 15 characters of digits, '.' and '%'",
        ));
    }
    Ok(())
}

pub fn threads(field: &str, value: &str) -> Result<()> {
    if !THREADS.is_match(value) {
        return Err(PanelError::invalid(
            field,
            "must be a CPU list such as '0', '0-3' or '0,2,4-7'",
        ));
    }
    Ok(())
}

pub fn range_i64(field: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(PanelError::invalid(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn port(field: &str, value: u32) -> Result<()> {
    if value == 0 || value > 65535 {
        return Err(PanelError::invalid(field, "must be a port between 1 and 65535"));
    }
    Ok(())
}

fn allocation_port(field: &str, value: u32) -> Result<()> {
    if !(MIN_ALLOCATION_PORT..=65535).contains(&value) {
        return Err(PanelError::invalid(
            field,
            format!("port {} must be between {} and 65535", value, MIN_ALLOCATION_PORT),
        ));
    }
    Ok(())
}

/// A single allocation port (`25565`) or an inclusive range
/// (`25565-25570`) of at most [`MAX_PORT_RANGE`] ports.
pub fn port_spec(field: &str, value: &str) -> Result<()> {
    let caps = PORT_SPEC.captures(value.trim()).ok_or_else(|| {
        PanelError::invalid(field, format!("'{}' is not a port or port range", value))
    })?;

    let start: u32 = caps[1].parse().unwrap_or(0);
    allocation_port(field, start)?;
    if let Some(end) = caps.get(2) {
        let end: u32 = end.as_str().parse().unwrap_or(0);
        allocation_port(field, end)?;
        if end <= start {
            return Err(PanelError::invalid(
                field,
                format!("range '{}' must end after it starts", value),
            ));
        }
        if end - start + 1 > MAX_PORT_RANGE {
            return Err(PanelError::invalid(
                field,
                format!("range '{}' spans more than {} ports", value, MAX_PORT_RANGE),
            ));
        }
    }
    Ok(())
}

pub fn env_key(field: &str, key: &str) -> Result<()> {
    if !ENV_KEY.is_match(key) {
        return Err(PanelError::invalid(
            field,
            format!("'{}' is not a valid variable name", key),
        ));
    }
    Ok(())
}

/// Hostname or IP without scheme or path.
pub fn fqdn(field: &str, value: &str) -> Result<()> {
    length(field, value, 1, MAX_STRING)?;
    if value.contains("://") || value.contains('/') || value.contains(char::is_whitespace) {
        return Err(PanelError::invalid(
            field,
            "must be a bare host name or IP address",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(email("email", "admin@example.com").is_ok());
        assert!(email("email", "first.last+tag@sub.example.io").is_ok());
        assert!(email("email", "").is_err());
        assert!(email("email", "admin").is_err());
        assert!(email("email", "admin@localhost").is_err());
        assert!(email("email", "a b@example.com").is_err());
    }

    #[test]
    fn test_username() {
        assert!(username("username", "steve").is_ok());
        assert!(username("username", "a").is_ok());
        assert!(username("username", "mc_admin-2.0").is_ok());
        assert!(username("username", "Steve").is_err());
        assert!(username("username", "_steve").is_err());
        assert!(username("username", "steve.").is_err());
        assert!(username("username", &"a".repeat(192)).is_err());
    }

    #[test]
    fn test_length_counts_blank_as_empty() {
        assert!(length("name", "   ", 1, 10).is_err());
        assert!(length("name", "ok", 1, 10).is_ok());
        assert!(length("name", "elevenchars", 1, 10).is_err());
        assert!(optional_length("long", None, 1, 10).is_ok());
    }

    #[test]
    fn test_database_fields() {
        assert!(alpha_dash("database", "world_data", 48).is_ok());
        assert!(alpha_dash("database", "world data", 48).is_err());
        assert!(alpha_dash("database", &"d".repeat(49), 48).is_err());
        assert!(remote("remote", "%").is_ok());
        assert!(remote("remote", "10.0.%").is_ok());
        assert!(remote("remote", "localhost").is_err());
        assert!(remote("remote", "").is_err());
    }

    #[test]
    fn test_port_spec() {
        assert!(port_spec("ports", "25565").is_ok());
        assert!(port_spec("ports", "25565-25575").is_ok());
        assert!(port_spec("ports", "0").is_err());
        assert!(port_spec("ports", "70000").is_err());
        assert!(port_spec("ports", "25575-25565").is_err());
        assert!(port_spec("ports", "2000-3000").is_err());
        assert!(port_spec("ports", "abc").is_err());
    }

    #[test]
    fn test_port_range_boundaries() {
        // 1000 ports is the most one range may hold.
        assert!(port_spec("ports", "25565-26564").is_ok());
        assert!(port_spec("ports", "25565-26565").is_err());
        assert!(port_spec("ports", "1025").is_ok());
        assert!(port_spec("ports", "1024").is_err());
        assert!(port_spec("ports", "80").is_err());
        assert!(port_spec("ports", "1000-1100").is_err());
        assert!(port_spec("ports", "65535").is_ok());
    }

    #[test]
    fn test_env_key() {
        assert!(env_key("environment", "SERVER_JARFILE").is_ok());
        assert!(env_key("environment", "2FA_TOKEN").is_ok());
        assert!(env_key("environment", "_").is_ok());
        assert!(env_key("environment", "").is_err());
        assert!(env_key("environment", "BAD-KEY").is_err());
        assert!(env_key("environment", &"K".repeat(192)).is_err());
    }

    #[test]
    fn test_required() {
        assert!(required("startup", "java -jar server.jar").is_ok());
        assert!(required("startup", &"x".repeat(20_000)).is_ok());
        assert!(required("startup", "  ").is_err());
    }

    #[test]
    fn test_threads_and_ids() {
        assert!(threads("threads", "0-3").is_ok());
        assert!(threads("threads", "0,2,4-7").is_ok());
        assert!(threads("threads", "0-").is_err());
        assert!(id("user", 0).is_err());
        assert!(id("user", 7).is_ok());
    }

    #[test]
    fn test_fqdn() {
        assert!(fqdn("fqdn", "node1.example.com").is_ok());
        assert!(fqdn("fqdn", "10.0.0.5").is_ok());
        assert!(fqdn("fqdn", "https://node1.example.com").is_err());
        assert!(fqdn("fqdn", "node1.example.com/").is_err());
    }
}
