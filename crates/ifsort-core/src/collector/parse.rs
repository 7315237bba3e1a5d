// ── Attribute extraction ──
//
// The collaborators' output formats are not a stable contract, so
// extraction is pattern-based and takes the first match only. Malformed or
// multi-line output can pick the wrong token; absence is always reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::model::{BusLocation, MacAddress};

#[allow(clippy::unwrap_used)]
static MAC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}").unwrap());

// `.` stops at a newline, so the match runs to the end of the line.
#[allow(clippy::unwrap_used)]
static BUS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"0000:.*").unwrap());

/// Compile a name-selection pattern.
pub fn compile_name_pattern(pattern: &str) -> Result<Regex, CoreError> {
    Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

/// All non-overlapping matches of `pattern` in `text`, in text order.
///
/// Duplicates are kept: an interface mentioned twice in the lister output
/// yields two entries.
pub fn find_interface_names(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// First MAC-shaped token in the text.
pub fn parse_hardware_address(text: &str) -> Option<MacAddress> {
    MAC_RE.find(text).map(|m| MacAddress::new(m.as_str()))
}

/// First `0000:`-prefixed token, through the end of its line.
pub fn parse_bus_location(text: &str) -> Option<BusLocation> {
    BUS_RE
        .find(text)
        .map(|m| BusLocation::new(m.as_str().trim_end()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const IFCONFIG: &str = "\
eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        ether cc:46:d6:4e:d6:68  txqueuelen 1000  (Ethernet)

eth1: flags=4099<UP,BROADCAST,MULTICAST>  mtu 1500
        ether cc:46:d6:4e:d6:69  txqueuelen 1000  (Ethernet)

lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536
        loop  txqueuelen 1000  (Local Loopback)

eth12: flags=4099<UP,BROADCAST,MULTICAST>  mtu 1500
";

    const ETHTOOL_I: &str = "\
driver: ixgbe
version: 5.1.0-k
firmware-version: 0x800003e1
expansion-rom-version:
bus-info: 0000:04:00.1
supports-statistics: yes
";

    #[test]
    fn names_are_returned_in_enumeration_order() {
        let re = compile_name_pattern("eth[0-9]+").unwrap();
        assert_eq!(
            find_interface_names(&re, IFCONFIG),
            vec!["eth0", "eth1", "eth12"]
        );
    }

    #[test]
    fn single_digit_pattern_truncates_wide_names() {
        let re = compile_name_pattern("eth[0-9]").unwrap();
        assert_eq!(
            find_interface_names(&re, IFCONFIG),
            vec!["eth0", "eth1", "eth1"]
        );
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = compile_name_pattern("eth[0-9").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPattern { ref pattern, .. } if pattern == "eth[0-9"));
    }

    #[test]
    fn hardware_address_takes_first_match() {
        let text = "Permanent address: CC:46:D6:4E:D6:68\nother: 00:11:22:33:44:55\n";
        assert_eq!(
            parse_hardware_address(text),
            Some(MacAddress::new("cc:46:d6:4e:d6:68"))
        );
    }

    #[test]
    fn hardware_address_missing() {
        assert_eq!(parse_hardware_address("Permanent address: not set\n"), None);
        assert_eq!(parse_hardware_address(""), None);
    }

    #[test]
    fn bus_location_runs_to_end_of_line() {
        assert_eq!(
            parse_bus_location(ETHTOOL_I),
            Some(BusLocation::new("0000:04:00.1"))
        );
    }

    #[test]
    fn bus_location_strips_carriage_return() {
        assert_eq!(
            parse_bus_location("bus-info: 0000:01:00.0\r\n"),
            Some(BusLocation::new("0000:01:00.0"))
        );
    }

    #[test]
    fn bus_location_missing() {
        assert_eq!(parse_bus_location("driver: virtio_net\nbus-info: \n"), None);
    }
}
