use crate::bytes::Endianness;
use crate::error::{CodecError, CodecResult};
use crate::gap::constants::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Public,
    Random,
    PublicIdentity,
    RandomIdentity,
}

impl TryFrom<u8> for AddressType {
    type Error = CodecError;

    fn try_from(value: u8) -> CodecResult<Self> {
        match value {
            PUBLIC_DEVICE_ADDRESS => Ok(AddressType::Public),
            RANDOM_DEVICE_ADDRESS => Ok(AddressType::Random),
            PUBLIC_IDENTITY_ADDRESS => Ok(AddressType::PublicIdentity),
            RANDOM_IDENTITY_ADDRESS => Ok(AddressType::RandomIdentity),
            other => Err(CodecError::InvalidValue(format!(
                "unknown address type 0x{:02X}",
                other
            ))),
        }
    }
}

impl From<AddressType> for u8 {
    fn from(value: AddressType) -> Self {
        match value {
            AddressType::Public => PUBLIC_DEVICE_ADDRESS,
            AddressType::Random => RANDOM_DEVICE_ADDRESS,
            AddressType::PublicIdentity => PUBLIC_IDENTITY_ADDRESS,
            AddressType::RandomIdentity => RANDOM_IDENTITY_ADDRESS,
        }
    }
}

/// Bluetooth device address
///
/// Bytes are kept in wire order, least significant first. The text form
/// prints the most significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BdAddr {
    pub bytes: [u8; BD_ADDR_LENGTH],
}

impl BdAddr {
    pub const ZERO: BdAddr = BdAddr {
        bytes: [0; BD_ADDR_LENGTH],
    };

    /// Creates an address from little-endian bytes
    pub const fn new(bytes: [u8; BD_ADDR_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Reads an address from exactly six bytes in the given order
    pub fn from_bytes(slice: &[u8], order: Endianness) -> CodecResult<Self> {
        CodecError::check_exact_len(slice, BD_ADDR_LENGTH)?;

        let mut bytes = [0u8; BD_ADDR_LENGTH];
        bytes.copy_from_slice(slice);
        if order == Endianness::Big {
            bytes.reverse();
        }
        Ok(Self { bytes })
    }

    /// Writes the address in the given order
    pub fn to_bytes(&self, order: Endianness) -> [u8; BD_ADDR_LENGTH] {
        let mut bytes = self.bytes;
        if order == Endianness::Big {
            bytes.reverse();
        }
        bytes
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

impl FromStr for BdAddr {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        let malformed = || CodecError::MalformedString(s.to_string());

        let mut bytes = [0u8; BD_ADDR_LENGTH];
        let mut octets = s.split(':');
        for byte in bytes.iter_mut().rev() {
            let octet = octets.next().ok_or_else(malformed)?;
            if octet.len() != 2 {
                return Err(malformed());
            }
            hex::decode_to_slice(octet, std::slice::from_mut(byte)).map_err(|_| malformed())?;
        }

        if octets.next().is_some() {
            return Err(malformed());
        }
        Ok(Self { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_string() {
        let address: BdAddr = "00:1A:7D:DA:71:13".parse().unwrap();
        assert_eq!(address.bytes, [0x13, 0x71, 0xDA, 0x7D, 0x1A, 0x00]);
        assert_eq!(address.to_string(), "00:1A:7D:DA:71:13");

        let lowercase: BdAddr = "00:1a:7d:da:71:13".parse().unwrap();
        assert_eq!(lowercase, address);
    }

    #[test]
    fn test_address_bytes() {
        let address = BdAddr::new([0x13, 0x71, 0xDA, 0x7D, 0x1A, 0x00]);
        assert_eq!(
            address.to_bytes(Endianness::Big),
            [0x00, 0x1A, 0x7D, 0xDA, 0x71, 0x13]
        );
        assert_eq!(address.to_bytes(Endianness::Little), address.bytes);
        assert_eq!(
            BdAddr::from_bytes(&address.to_bytes(Endianness::Big), Endianness::Big).unwrap(),
            address
        );
        assert_eq!(
            BdAddr::from_bytes(&[0x00; 5], Endianness::Little),
            Err(CodecError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_malformed_address_strings() {
        for s in [
            "",
            "00:1A:7D:DA:71",
            "00:1A:7D:DA:71:13:FF",
            "001A7DDA7113",
            "00:1A:7D:DA:71:1",
            "00:1A:7D:DA:71:GG",
            "000:1A:7D:DA:71:13",
        ] {
            assert_eq!(
                s.parse::<BdAddr>(),
                Err(CodecError::MalformedString(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn test_address_type() {
        assert_eq!(AddressType::try_from(0x01u8), Ok(AddressType::Random));
        assert_eq!(u8::from(AddressType::RandomIdentity), 0x03);
        assert!(AddressType::try_from(0x04u8).is_err());
    }
}
