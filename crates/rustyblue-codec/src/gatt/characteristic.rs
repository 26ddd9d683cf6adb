//! GATT characteristic and descriptor value codecs
//!
//! Each value type is keyed by the attribute type it decodes. Mapping an
//! attribute-type UUID to the right decoder is the attribute database's job.

use super::types::{CharacteristicProperties, ClientConfigurations};
use crate::bytes::{read_le, write_le, Endianness};
use crate::error::{CodecError, CodecResult};
use crate::uuid::Uuid;
use std::fmt;

/// Encode/decode contract for a structured characteristic value
pub trait GattCharacteristic: Sized {
    /// Attribute type this value is stored under
    const UUID: Uuid;

    /// Decodes the attribute value
    fn decode(data: &[u8]) -> CodecResult<Self>;

    /// Encodes the attribute value
    fn encode(&self) -> Vec<u8>;
}

/// Battery Level: remaining charge in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    pub const MAX: u8 = 100;

    /// Creates a battery level, rejecting values above 100 %.
    pub fn new(percentage: u8) -> CodecResult<Self> {
        if percentage > Self::MAX {
            return Err(CodecError::InvalidValue(format!(
                "battery level {}% exceeds {}%",
                percentage,
                Self::MAX
            )));
        }
        Ok(Self(percentage))
    }

    pub fn percentage(&self) -> u8 {
        self.0
    }
}

impl GattCharacteristic for BatteryLevel {
    const UUID: Uuid = Uuid::BATTERY_LEVEL;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        CodecError::check_exact_len(data, 1)?;
        Self::new(data[0])
    }

    fn encode(&self) -> Vec<u8> {
        vec![self.0]
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Client Characteristic Configuration descriptor value
///
/// Reserved bits are carried through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClientCharacteristicConfiguration {
    pub configuration: ClientConfigurations,
}

impl ClientCharacteristicConfiguration {
    const LENGTH: usize = 2;
}

impl GattCharacteristic for ClientCharacteristicConfiguration {
    const UUID: Uuid = Uuid::CLIENT_CHARACTERISTIC_CONFIGURATION;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        CodecError::check_exact_len(data, Self::LENGTH)?;
        Ok(Self {
            configuration: ClientConfigurations::from_raw(read_le(data, 0)),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::LENGTH);
        write_le(&mut data, self.configuration.raw_value());
        data
    }
}

/// Characteristic declaration attribute value
///
/// Format: properties (1 byte), value handle (2 bytes), UUID (2 or 16 bytes).
/// A 32-bit UUID may not appear in a declaration, so it is written in its
/// 128-bit Base UUID form and decodes back as [`Uuid::Bit128`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacteristicDeclaration {
    /// Characteristic properties
    pub properties: CharacteristicProperties,
    /// Handle of the characteristic value attribute
    pub value_handle: u16,
    /// Characteristic UUID
    pub uuid: Uuid,
}

impl CharacteristicDeclaration {
    const HEADER_LENGTH: usize = 3;
}

impl GattCharacteristic for CharacteristicDeclaration {
    const UUID: Uuid = Uuid::CHARACTERISTIC;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        CodecError::check_min_len(data, Self::HEADER_LENGTH + 2)?;

        let uuid_bytes = &data[Self::HEADER_LENGTH..];
        let uuid = match uuid_bytes.len() {
            2 | 16 => Uuid::from_bytes(uuid_bytes, Endianness::Little)?,
            len => return Err(CodecError::InvalidByteLength(len)),
        };

        Ok(Self {
            properties: CharacteristicProperties::from_raw(data[0]),
            value_handle: read_le(data, 1),
            uuid,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let uuid = match self.uuid {
            Uuid::Bit32(_) => self.uuid.to_uuid128(),
            other => other,
        };

        let mut data = Vec::with_capacity(Self::HEADER_LENGTH + uuid.width());
        data.push(self.properties.raw_value());
        write_le(&mut data, self.value_handle);
        data.extend_from_slice(&uuid.to_le_bytes());
        data
    }
}
