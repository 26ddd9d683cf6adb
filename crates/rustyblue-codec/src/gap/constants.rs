// Address types, as carried in HCI LE events and advertising reports
pub const PUBLIC_DEVICE_ADDRESS: u8 = 0x00;
pub const RANDOM_DEVICE_ADDRESS: u8 = 0x01;
pub const PUBLIC_IDENTITY_ADDRESS: u8 = 0x02;
pub const RANDOM_IDENTITY_ADDRESS: u8 = 0x03;

/// Length of a Bluetooth device address in bytes
pub const BD_ADDR_LENGTH: usize = 6;
