//! Common flag types for GATT declarations and descriptors

use crate::bitmask::{bit_mask_option, BitMaskOptionSet};

bit_mask_option! {
    /// Characteristic properties as defined in the Bluetooth specification
    pub enum CharacteristicProperty: u8 {
        Broadcast = 0x01,
        Read = 0x02,
        WriteWithoutResponse = 0x04,
        Write = 0x08,
        Notify = 0x10,
        Indicate = 0x20,
        AuthenticatedSignedWrites = 0x40,
        ExtendedProperties = 0x80,
    }
}

/// The properties byte of a characteristic declaration
pub type CharacteristicProperties = BitMaskOptionSet<CharacteristicProperty>;

impl BitMaskOptionSet<CharacteristicProperty> {
    pub fn can_read(&self) -> bool {
        self.contains(CharacteristicProperty::Read)
    }

    pub fn can_write(&self) -> bool {
        self.contains(CharacteristicProperty::Write)
    }

    pub fn can_write_without_response(&self) -> bool {
        self.contains(CharacteristicProperty::WriteWithoutResponse)
    }

    pub fn can_notify(&self) -> bool {
        self.contains(CharacteristicProperty::Notify)
    }

    pub fn can_indicate(&self) -> bool {
        self.contains(CharacteristicProperty::Indicate)
    }
}

bit_mask_option! {
    /// Client Characteristic Configuration descriptor bits
    pub enum ClientConfiguration: u16 {
        Notify = 0x0001,
        Indicate = 0x0002,
    }
}

/// Value of a Client Characteristic Configuration descriptor
pub type ClientConfigurations = BitMaskOptionSet<ClientConfiguration>;
