//! GATT (Generic Attribute Profile) value codecs
//!
//! This module provides decoders and encoders for structured characteristic
//! and descriptor values, plus the flag sets used in declarations.

pub mod cgm;
pub mod characteristic;
pub mod types;

#[cfg(test)]
mod tests;

pub use cgm::{CgmSessionRunTime, E2eCrc};
pub use characteristic::{
    BatteryLevel, CharacteristicDeclaration, ClientCharacteristicConfiguration, GattCharacteristic,
};
pub use types::{
    CharacteristicProperties, CharacteristicProperty, ClientConfiguration, ClientConfigurations,
};
