use serde::{Deserialize, Serialize};
use std::fmt;

/// Display field that the backend emits either as a pre-formatted string
/// (e.g. `"1.23 MB"`, `"N/A"`) or as a raw number. The client shows
/// whichever representation arrived, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Number(n) => write!(f, "{n}"),
            DisplayValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        DisplayValue::Text(value.to_string())
    }
}

impl From<u64> for DisplayValue {
    fn from(value: u64) -> Self {
        DisplayValue::Number(value.into())
    }
}

/// One network interface record as reported by the backend. All fields are
/// display-only; nothing is validated or converted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub id: u32,
    pub name: String,
    pub is_up: bool,
    pub ipv4: String,
    pub netmask: String,
    pub ipv6: String,
    pub mac: String,
    pub speed: DisplayValue,
    pub mtu: DisplayValue,
    pub bytes_sent: DisplayValue,
    pub bytes_recv: DisplayValue,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub errors_out: u64,
    pub drops_in: u64,
    pub drops_out: u64,
}

/// One device found by a subnet scan. Ephemeral: rendered once, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    pub ip: String,
    pub hostname: String,
}

/// Body of `POST /api/ping`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingRequest {
    pub host: String,
    pub count: u32,
}

/// Body of `POST /api/discover`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverRequest {
    pub network_prefix: String,
}

// Response envelopes. `success` defaults to false so a body without the
// flag is treated as a failure; unknown extra fields are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct NicsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub nics: Vec<NetworkInterface>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PingEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub devices: Vec<DiscoveredDevice>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nic_record_parses_mixed_display_fields() {
        let body = r#"{
            "id": 1, "name": "eth0", "is_up": true,
            "ipv4": "192.168.1.10", "netmask": "255.255.255.0",
            "ipv6": "fe80::1", "mac": "aa:bb:cc:dd:ee:ff",
            "speed": "1000 Mbps", "mtu": 1500,
            "bytes_sent": "1.23 MB", "bytes_recv": "N/A",
            "packets_sent": 100, "packets_recv": 200,
            "errors_in": 0, "errors_out": 0, "drops_in": 3, "drops_out": 4
        }"#;
        let nic: NetworkInterface = serde_json::from_str(body).unwrap();
        assert_eq!(nic.name, "eth0");
        assert_eq!(nic.mtu.to_string(), "1500");
        assert_eq!(nic.speed.to_string(), "1000 Mbps");
        assert_eq!(nic.bytes_recv.to_string(), "N/A");
        assert_eq!(nic.drops_out, 4);
    }

    #[test]
    fn test_missing_success_flag_defaults_to_failure() {
        let envelope: NicsEnvelope = serde_json::from_str(r#"{"nics": []}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_envelope_ignores_extra_fields() {
        let body = r#"{"success": true, "output": "pong", "host": "8.8.8.8"}"#;
        let envelope: PingEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.output, "pong");
    }
}
