use crate::assigned_numbers;
use crate::bytes::{Endianness, WireInteger};
use crate::error::{CodecError, CodecResult};
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

/// The base UUID used for expanding 16-bit and 32-bit UUIDs.
/// Defined as "00000000-0000-1000-8000-00805F9B34FB".
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805F9B34FB;

/// A Bluetooth UUID in one of its three wire widths.
///
/// Values are stored exactly as given. A 16-bit UUID and the 128-bit UUID it
/// expands to through [`BLUETOOTH_BASE_UUID`] are different values and do not
/// compare equal; use [`Uuid::to_uuid128`] when an expanded comparison is wanted.
///
/// The canonical string form is the big-endian hex of the value (`"2800"`,
/// `"60F14FE2-F972-11E5-B84F-23E070D5A8C7"`). GATT attributes carry the same
/// value little-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Uuid {
    /// 16-bit SIG-assigned UUID
    Bit16(u16),
    /// 32-bit SIG-assigned UUID
    Bit32(u32),
    /// Full 128-bit UUID
    Bit128(u128),
}

impl Uuid {
    pub const PRIMARY_SERVICE: Uuid = Uuid::Bit16(0x2800);
    pub const SECONDARY_SERVICE: Uuid = Uuid::Bit16(0x2801);
    pub const INCLUDE: Uuid = Uuid::Bit16(0x2802);
    pub const CHARACTERISTIC: Uuid = Uuid::Bit16(0x2803);
    pub const CLIENT_CHARACTERISTIC_CONFIGURATION: Uuid = Uuid::Bit16(0x2902);
    pub const BATTERY_LEVEL: Uuid = Uuid::Bit16(0x2A19);
    pub const CGM_MEASUREMENT: Uuid = Uuid::Bit16(0x2AA7);
    pub const CGM_FEATURE: Uuid = Uuid::Bit16(0x2AA8);
    pub const CGM_STATUS: Uuid = Uuid::Bit16(0x2AA9);
    pub const CGM_SESSION_START_TIME: Uuid = Uuid::Bit16(0x2AAA);
    pub const CGM_SESSION_RUN_TIME: Uuid = Uuid::Bit16(0x2AAB);

    /// Creates a 16-bit UUID
    pub const fn from_u16(value: u16) -> Self {
        Uuid::Bit16(value)
    }

    /// Creates a 32-bit UUID
    pub const fn from_u32(value: u32) -> Self {
        Uuid::Bit32(value)
    }

    /// Creates a 128-bit UUID
    pub const fn from_u128(value: u128) -> Self {
        Uuid::Bit128(value)
    }

    /// Generates a random (Version 4) 128-bit UUID.
    pub fn new_random() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);

        // Big-endian RFC 4122 layout: version nibble in byte 6, variant in byte 8
        bytes[6] = (bytes[6] & 0x0F) | 0x40;
        bytes[8] = (bytes[8] & 0x3F) | 0x80;

        Uuid::Bit128(u128::from_bytes(&bytes, Endianness::Big))
    }

    /// Decodes a UUID from a 2, 4 or 16 byte buffer in the declared byte order.
    pub fn from_bytes(bytes: &[u8], order: Endianness) -> CodecResult<Self> {
        match bytes.len() {
            2 => Ok(Uuid::Bit16(u16::from_bytes(bytes, order))),
            4 => Ok(Uuid::Bit32(u32::from_bytes(bytes, order))),
            16 => Ok(Uuid::Bit128(u128::from_bytes(bytes, order))),
            len => Err(CodecError::InvalidByteLength(len)),
        }
    }

    /// Decodes a UUID from GATT attribute (little-endian) bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> CodecResult<Self> {
        Self::from_bytes(bytes, Endianness::Little)
    }

    /// Encodes the UUID in the given byte order.
    pub fn to_bytes(&self, order: Endianness) -> Vec<u8> {
        match *self {
            Uuid::Bit16(value) => value.to_bytes(order).to_vec(),
            Uuid::Bit32(value) => value.to_bytes(order).to_vec(),
            Uuid::Bit128(value) => value.to_bytes(order).to_vec(),
        }
    }

    /// GATT attribute wire bytes
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.to_bytes(Endianness::Little)
    }

    /// Bytes in canonical string order
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.to_bytes(Endianness::Big)
    }

    /// Number of bytes the UUID occupies on the wire (2, 4 or 16)
    pub fn width(&self) -> usize {
        match self {
            Uuid::Bit16(_) => u16::WIDTH,
            Uuid::Bit32(_) => u32::WIDTH,
            Uuid::Bit128(_) => u128::WIDTH,
        }
    }

    /// Returns the same-width UUID with its bytes reversed.
    pub fn swap_bytes(&self) -> Self {
        match *self {
            Uuid::Bit16(value) => Uuid::Bit16(value.swap_order()),
            Uuid::Bit32(value) => Uuid::Bit32(value.swap_order()),
            Uuid::Bit128(value) => Uuid::Bit128(value.swap_order()),
        }
    }

    /// Expands a 16-bit or 32-bit UUID through the Bluetooth Base UUID.
    pub fn to_uuid128(&self) -> Self {
        match *self {
            Uuid::Bit16(value) => Uuid::Bit128(((value as u128) << 96) | BLUETOOTH_BASE_UUID),
            Uuid::Bit32(value) => Uuid::Bit128(((value as u128) << 96) | BLUETOOTH_BASE_UUID),
            Uuid::Bit128(_) => *self,
        }
    }

    /// The canonical string form
    pub fn raw_value(&self) -> String {
        self.to_string()
    }

    /// The Bluetooth-assigned name of a well-known 16-bit UUID
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Uuid::Bit16(value) => assigned_numbers::name_for_u16(value),
            _ => None,
        }
    }

    /// Get the 16-bit UUID value if this is a 16-bit UUID
    pub fn as_u16(&self) -> Option<u16> {
        match *self {
            Uuid::Bit16(value) => Some(value),
            _ => None,
        }
    }

    /// Get the 32-bit UUID value if this is a 32-bit UUID
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Uuid::Bit32(value) => Some(value),
            _ => None,
        }
    }

    /// Get the 128-bit UUID value if this is a 128-bit UUID
    pub fn as_u128(&self) -> Option<u128> {
        match *self {
            Uuid::Bit128(value) => Some(value),
            _ => None,
        }
    }
}

impl From<u16> for Uuid {
    fn from(value: u16) -> Self {
        Uuid::Bit16(value)
    }
}

impl From<u32> for Uuid {
    fn from(value: u32) -> Self {
        Uuid::Bit32(value)
    }
}

impl From<u128> for Uuid {
    fn from(value: u128) -> Self {
        Uuid::Bit128(value)
    }
}

impl fmt::Display for Uuid {
    /// `{}` prints the canonical string; `{:#}` appends the assigned name, if any.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Uuid::Bit16(value) => write!(f, "{:04X}", value)?,
            Uuid::Bit32(value) => write!(f, "{:08X}", value)?,
            Uuid::Bit128(value) => write!(
                f,
                "{:08X}-{:04X}-{:04X}-{:04X}-{:012X}",
                (value >> 96) as u32,
                (value >> 80) as u16,
                (value >> 64) as u16,
                (value >> 48) as u16,
                value & 0xFFFF_FFFF_FFFF
            )?,
        }

        if f.alternate() {
            if let Some(name) = self.name() {
                write!(f, " ({})", name)?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uuid::Bit16(_) => write!(f, "Uuid::Bit16({})", self),
            Uuid::Bit32(_) => write!(f, "Uuid::Bit32({})", self),
            Uuid::Bit128(_) => write!(f, "Uuid::Bit128({})", self),
        }
    }
}

/// Decodes a run of hex digits into exactly `N` bytes
fn decode_hex<const N: usize>(digits: &str, input: &str) -> CodecResult<[u8; N]> {
    let mut bytes = [0u8; N];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|_| CodecError::MalformedString(input.to_string()))?;
    Ok(bytes)
}

impl FromStr for Uuid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            4 => {
                let bytes = decode_hex::<2>(s, s)?;
                Ok(Uuid::Bit16(u16::from_bytes(&bytes, Endianness::Big)))
            }
            8 => {
                let bytes = decode_hex::<4>(s, s)?;
                Ok(Uuid::Bit32(u32::from_bytes(&bytes, Endianness::Big)))
            }
            36 => {
                let groups: Vec<&str> = s.split('-').collect();
                let lengths: Vec<usize> = groups.iter().map(|group| group.len()).collect();
                if lengths != [8, 4, 4, 4, 12] {
                    return Err(CodecError::MalformedString(s.to_string()));
                }

                let bytes = decode_hex::<16>(&groups.concat(), s)?;
                Ok(Uuid::Bit128(u128::from_bytes(&bytes, Endianness::Big)))
            }
            _ => Err(CodecError::MalformedString(s.to_string())),
        }
    }
}
