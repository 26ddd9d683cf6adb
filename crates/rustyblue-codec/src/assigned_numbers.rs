//! Bluetooth SIG assigned 16-bit UUID names
//!
//! The table is materialized into a map the first time a name is looked up
//! and never mutated afterwards.

use lazy_static::lazy_static;
use std::collections::HashMap;

const ASSIGNED_16BIT_UUIDS: &[(u16, &str)] = &[
    // Services
    (0x1800, "Generic Access"),
    (0x1801, "Generic Attribute"),
    (0x1802, "Immediate Alert"),
    (0x1803, "Link Loss"),
    (0x1804, "Tx Power"),
    (0x1805, "Current Time"),
    (0x180A, "Device Information"),
    (0x180D, "Heart Rate"),
    (0x180F, "Battery Service"),
    (0x1810, "Blood Pressure"),
    (0x1812, "Human Interface Device"),
    (0x181F, "Continuous Glucose Monitoring"),
    // GATT declarations
    (0x2800, "Primary Service"),
    (0x2801, "Secondary Service"),
    (0x2802, "Include"),
    (0x2803, "Characteristic"),
    // Descriptors
    (0x2900, "Characteristic Extended Properties"),
    (0x2901, "Characteristic User Description"),
    (0x2902, "Client Characteristic Configuration"),
    (0x2903, "Server Characteristic Configuration"),
    (0x2904, "Characteristic Presentation Format"),
    (0x2905, "Characteristic Aggregate Format"),
    // Characteristics
    (0x2A00, "Device Name"),
    (0x2A01, "Appearance"),
    (0x2A05, "Service Changed"),
    (0x2A19, "Battery Level"),
    (0x2A37, "Heart Rate Measurement"),
    (0x2AA7, "CGM Measurement"),
    (0x2AA8, "CGM Feature"),
    (0x2AA9, "CGM Status"),
    (0x2AAA, "CGM Session Start Time"),
    (0x2AAB, "CGM Session Run Time"),
    (0x2AAC, "CGM Specific Ops Control Point"),
    // Member UUIDs
    (0xFEA9, "Savant Systems LLC"),
    (0xFEAA, "Google"),
    (0xFEC7, "Apple, Inc."),
    (0xFEC8, "Apple, Inc."),
    (0xFEC9, "Apple, Inc."),
    (0xFED8, "Google"),
];

lazy_static! {
    static ref NAMES: HashMap<u16, &'static str> = ASSIGNED_16BIT_UUIDS.iter().copied().collect();
}

/// Looks up the assigned name of a 16-bit UUID.
pub fn name_for_u16(value: u16) -> Option<&'static str> {
    NAMES.get(&value).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(name_for_u16(0xFEA9), Some("Savant Systems LLC"));
        assert_eq!(name_for_u16(0x2800), Some("Primary Service"));
        assert_eq!(name_for_u16(0x2AAB), Some("CGM Session Run Time"));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(name_for_u16(0x0000), None);
        assert_eq!(name_for_u16(0xFFFF), None);
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(NAMES.len(), ASSIGNED_16BIT_UUIDS.len());
    }
}
