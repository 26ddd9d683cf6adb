//! Fixed-width integer codec
//!
//! Converts between unsigned integers and their exact byte sequences in either
//! byte order. Everything above this module (UUIDs, PDUs, characteristic
//! values) is assembled from these primitives.

use crate::error::{CodecError, CodecResult};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of a multi-byte integer on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first (every ATT/GATT field)
    Little,
    /// Most significant byte first (canonical UUID strings)
    Big,
}

impl Endianness {
    /// The other byte order
    pub fn reversed(self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }
}

/// An unsigned integer with a fixed wire width
pub trait WireInteger: Copy + Eq + Sized {
    /// Width in bytes
    const WIDTH: usize;

    /// Byte array holding exactly `WIDTH` bytes
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Encodes the value in the given byte order.
    fn to_bytes(self, order: Endianness) -> Self::Bytes;

    /// Decodes a value from exactly `WIDTH` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != WIDTH`. Callers decoding external input must
    /// length-check first or use [`WireInteger::try_from_bytes`].
    fn from_bytes(bytes: &[u8], order: Endianness) -> Self;

    /// Reverses the byte order of the value.
    fn swap_order(self) -> Self;

    /// Decodes a value, reporting a wrong-sized buffer as an error.
    fn try_from_bytes(bytes: &[u8], order: Endianness) -> CodecResult<Self> {
        CodecError::check_exact_len(bytes, Self::WIDTH)?;
        Ok(Self::from_bytes(bytes, order))
    }
}

macro_rules! impl_wire_integer {
    ($ty:ty, $width:expr, $read:ident, $write:ident) => {
        impl WireInteger for $ty {
            const WIDTH: usize = $width;

            type Bytes = [u8; $width];

            fn to_bytes(self, order: Endianness) -> Self::Bytes {
                let mut bytes = [0u8; $width];
                match order {
                    Endianness::Little => LittleEndian::$write(&mut bytes, self),
                    Endianness::Big => BigEndian::$write(&mut bytes, self),
                }
                bytes
            }

            fn from_bytes(bytes: &[u8], order: Endianness) -> Self {
                assert_eq!(
                    bytes.len(),
                    $width,
                    concat!(stringify!($ty), " requires exactly ", stringify!($width), " bytes")
                );
                match order {
                    Endianness::Little => LittleEndian::$read(bytes),
                    Endianness::Big => BigEndian::$read(bytes),
                }
            }

            fn swap_order(self) -> Self {
                self.swap_bytes()
            }
        }
    };
}

impl_wire_integer!(u16, 2, read_u16, write_u16);
impl_wire_integer!(u32, 4, read_u32, write_u32);
impl_wire_integer!(u64, 8, read_u64, write_u64);
impl_wire_integer!(u128, 16, read_u128, write_u128);

/// Reads a little-endian integer at `offset`; the caller guarantees the range is in bounds.
pub(crate) fn read_le<T: WireInteger>(data: &[u8], offset: usize) -> T {
    T::from_bytes(&data[offset..offset + T::WIDTH], Endianness::Little)
}

/// Appends a little-endian integer to `buf`.
pub(crate) fn write_le<T: WireInteger>(buf: &mut Vec<u8>, value: T) {
    buf.extend_from_slice(value.to_bytes(Endianness::Little).as_ref());
}
