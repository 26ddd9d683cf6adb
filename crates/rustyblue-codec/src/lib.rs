//! RustyBlue codec - byte-exact Bluetooth LE wire formats
//!
//! This library decodes and encodes the binary structures exchanged over a
//! Bluetooth Low Energy link: fixed-width integers in either byte order,
//! 16/32/128-bit UUIDs, compact flag sets, ATT protocol PDUs and structured
//! GATT characteristic values. It performs no I/O; buffers come from and go to
//! the transport layer below.

pub mod assigned_numbers;
pub mod att;
pub mod bitmask;
pub mod bytes;
pub mod error;
pub mod gap;
pub mod gatt;
pub mod hci;
pub mod uuid;

// Re-export common types for convenience
pub use att::{AttErrorCode, AttOpcode, AttPdu, AttributePermission, AttributePermissions, Pdu};
pub use bitmask::{BitMaskOption, BitMaskOptionSet};
pub use bytes::{Endianness, WireInteger};
pub use error::{CodecError, CodecResult};
pub use gap::{AddressType, BdAddr};
pub use gatt::{
    CgmSessionRunTime, CharacteristicProperties, CharacteristicProperty, E2eCrc,
    GattCharacteristic,
};
pub use hci::{LowEnergyFeature, LowEnergyFeatureSet};
pub use uuid::Uuid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_response_carries_characteristic_value() {
        let response = match Pdu::decode(&[0x0B, 0x18, 0x00, 0xFF, 0xFF]).unwrap() {
            Pdu::ReadResponse(response) => response,
            other => panic!("expected a read response, got {:?}", other),
        };

        let value = CgmSessionRunTime::decode(&response.attribute_value).unwrap();
        assert_eq!(value.session_run_time, 24);
        assert_eq!(value.e2e_crc, Some(E2eCrc::NotSupported));
    }
}
