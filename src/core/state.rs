//! Process-wide cache of the last successfully loaded interface list.
//!
//! The slot has exactly one writer: the interface loader's settle path in
//! the core worker. Everyone else goes through [`nics_snapshot`]. The list
//! is replaced wholesale on every successful load and never merged; a
//! failed load does not touch it.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::protocol::types::NetworkInterface;

static NIC_CACHE: Lazy<RwLock<Vec<NetworkInterface>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// Replace the cached list with a fresh generation.
pub(crate) fn replace_nics(nics: Vec<NetworkInterface>) {
    *NIC_CACHE.write() = nics;
}

/// Clone of the current generation, for display only.
pub fn nics_snapshot() -> Vec<NetworkInterface> {
    NIC_CACHE.read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::DisplayValue;

    fn nic(id: u32, name: &str) -> NetworkInterface {
        NetworkInterface {
            id,
            name: name.to_string(),
            is_up: true,
            ipv4: "10.0.0.1".to_string(),
            netmask: "255.255.255.0".to_string(),
            ipv6: "N/A".to_string(),
            mac: "aa:bb:cc:dd:ee:ff".to_string(),
            speed: DisplayValue::from("1000 Mbps"),
            mtu: DisplayValue::from(1500),
            bytes_sent: DisplayValue::from("1.00 KB"),
            bytes_recv: DisplayValue::from("2.00 KB"),
            packets_sent: 1,
            packets_recv: 2,
            errors_in: 0,
            errors_out: 0,
            drops_in: 0,
            drops_out: 0,
        }
    }

    // Single test so the global slot sees no concurrent writers.
    #[test]
    fn test_replace_is_wholesale() {
        replace_nics(vec![nic(1, "eth0"), nic(2, "wlan0")]);
        let first = nics_snapshot();
        assert_eq!(first.len(), 2);

        replace_nics(vec![nic(3, "lo")]);
        let second = nics_snapshot();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "lo");

        // earlier snapshot is an independent clone
        assert_eq!(first.len(), 2);
    }
}
