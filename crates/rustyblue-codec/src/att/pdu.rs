//! ATT Protocol Data Units
//!
//! Each PDU type carries its reserved opcode as [`AttPdu::OPCODE`] and knows
//! how to encode itself and decode itself from one complete buffer. All
//! multi-byte fields are little-endian. [`Pdu`] wraps every modeled PDU and
//! dispatches decoding on the leading opcode byte.
use super::constants::*;
use super::error_code::AttErrorCode;
use crate::bytes::{read_le, write_le};
use crate::error::{CodecError, CodecResult};
use log::debug;
use std::convert::TryFrom;

/// Encode/decode contract shared by every ATT PDU
pub trait AttPdu: Sized {
    /// Opcode for this PDU
    const OPCODE: AttOpcode;

    /// Decodes the PDU from one complete buffer, opcode byte included.
    fn decode(data: &[u8]) -> CodecResult<Self>;

    /// Encodes the PDU, opcode byte first.
    fn encode(&self) -> Vec<u8>;
}

/// Checks the minimum length and the leading opcode of a received PDU.
fn check_header(data: &[u8], opcode: AttOpcode, min_len: usize) -> CodecResult<()> {
    if let Err(err) = CodecError::check_min_len(data, min_len) {
        debug!("Rejecting {:?}: {}", opcode, err);
        return Err(err);
    }

    if data[0] != opcode.value() {
        debug!(
            "Rejecting {:?}: leading byte 0x{:02X} is not its opcode",
            opcode, data[0]
        );
        return Err(CodecError::OpcodeMismatch {
            expected: opcode.value(),
            actual: data[0],
        });
    }

    Ok(())
}

/// Header check for PDUs that only ever have one length.
fn check_fixed(data: &[u8], opcode: AttOpcode, len: usize) -> CodecResult<()> {
    check_header(data, opcode, len)?;
    CodecError::check_exact_len(data, len).map_err(|err| {
        debug!("Rejecting {:?}: {}", opcode, err);
        err
    })
}

/// Error Response
///
/// Sent by a server when a request cannot be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Opcode of the request that failed
    pub request_opcode: u8,
    /// Attribute handle in error
    pub handle: u16,
    /// Error code
    pub error_code: AttErrorCode,
}

impl ErrorResponse {
    const LENGTH: usize = 5;

    /// Create a new error response
    pub fn new(request_opcode: AttOpcode, handle: u16, error_code: AttErrorCode) -> Self {
        Self {
            request_opcode: request_opcode.value(),
            handle,
            error_code,
        }
    }
}

impl AttPdu for ErrorResponse {
    const OPCODE: AttOpcode = AttOpcode::ErrorResponse;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, Self::LENGTH)?;

        Ok(Self {
            request_opcode: data[1],
            handle: read_le(data, 2),
            error_code: data[4].into(),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(Self::LENGTH);

        packet.push(Self::OPCODE.value());
        packet.push(self.request_opcode);
        write_le(&mut packet, self.handle);
        packet.push(self.error_code.into());

        packet
    }
}

/// Exchange MTU Request
///
/// Informs the server of the client's maximum receive MTU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeMtuRequest {
    /// Client Rx MTU size
    pub client_mtu: u16,
}

impl ExchangeMtuRequest {
    const LENGTH: usize = 3;
}

impl AttPdu for ExchangeMtuRequest {
    const OPCODE: AttOpcode = AttOpcode::ExchangeMtuRequest;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, Self::LENGTH)?;

        Ok(Self {
            client_mtu: read_le(data, 1),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(Self::LENGTH);

        packet.push(Self::OPCODE.value());
        write_le(&mut packet, self.client_mtu);

        packet
    }
}

/// Exchange MTU Response
///
/// Sent in reply to a received Exchange MTU Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeMtuResponse {
    /// Server Rx MTU size
    pub server_mtu: u16,
}

impl ExchangeMtuResponse {
    const LENGTH: usize = 3;
}

impl AttPdu for ExchangeMtuResponse {
    const OPCODE: AttOpcode = AttOpcode::ExchangeMtuResponse;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, Self::LENGTH)?;

        Ok(Self {
            server_mtu: read_le(data, 1),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(Self::LENGTH);

        packet.push(Self::OPCODE.value());
        write_le(&mut packet, self.server_mtu);

        packet
    }
}

/// Find Information Request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindInformationRequest {
    /// First requested handle
    pub start_handle: u16,
    /// Last requested handle
    pub end_handle: u16,
}

impl FindInformationRequest {
    const LENGTH: usize = 5;
}

impl AttPdu for FindInformationRequest {
    const OPCODE: AttOpcode = AttOpcode::FindInformationRequest;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, Self::LENGTH)?;

        Ok(Self {
            start_handle: read_le(data, 1),
            end_handle: read_le(data, 3),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(Self::LENGTH);

        packet.push(Self::OPCODE.value());
        write_le(&mut packet, self.start_handle);
        write_le(&mut packet, self.end_handle);

        packet
    }
}

/// Read Request
///
/// Requests the server to read the value of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRequest {
    /// Handle of the attribute to read
    pub handle: u16,
}

impl ReadRequest {
    const LENGTH: usize = 3;
}

impl AttPdu for ReadRequest {
    const OPCODE: AttOpcode = AttOpcode::ReadRequest;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, Self::LENGTH)?;

        Ok(Self {
            handle: read_le(data, 1),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(Self::LENGTH);

        packet.push(Self::OPCODE.value());
        write_le(&mut packet, self.handle);

        packet
    }
}

/// Read Response
///
/// Sent in reply to a Read Request and carries the attribute value. A long
/// value is truncated to fit the MTU; the remainder is fetched with Read Blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadResponse {
    /// The value of the attribute with the handle given
    pub attribute_value: Vec<u8>,
}

impl AttPdu for ReadResponse {
    const OPCODE: AttOpcode = AttOpcode::ReadResponse;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_header(data, Self::OPCODE, ATT_OPCODE_SIZE)?;

        Ok(Self {
            attribute_value: data[ATT_OPCODE_SIZE..].to_vec(),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(ATT_OPCODE_SIZE + self.attribute_value.len());

        packet.push(Self::OPCODE.value());
        packet.extend_from_slice(&self.attribute_value);

        packet
    }
}

/// Read Blob Request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadBlobRequest {
    /// Handle of the attribute to read
    pub handle: u16,
    /// Offset of the first octet to read
    pub offset: u16,
}

impl ReadBlobRequest {
    const LENGTH: usize = 5;
}

impl AttPdu for ReadBlobRequest {
    const OPCODE: AttOpcode = AttOpcode::ReadBlobRequest;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, Self::LENGTH)?;

        Ok(Self {
            handle: read_le(data, 1),
            offset: read_le(data, 3),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(Self::LENGTH);

        packet.push(Self::OPCODE.value());
        write_le(&mut packet, self.handle);
        write_le(&mut packet, self.offset);

        packet
    }
}

/// Read Blob Response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadBlobResponse {
    /// Part of the attribute value starting at the requested offset
    pub part_attribute_value: Vec<u8>,
}

impl AttPdu for ReadBlobResponse {
    const OPCODE: AttOpcode = AttOpcode::ReadBlobResponse;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_header(data, Self::OPCODE, ATT_OPCODE_SIZE)?;

        Ok(Self {
            part_attribute_value: data[ATT_OPCODE_SIZE..].to_vec(),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(ATT_OPCODE_SIZE + self.part_attribute_value.len());

        packet.push(Self::OPCODE.value());
        packet.extend_from_slice(&self.part_attribute_value);

        packet
    }
}

/// Write Response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteResponse;

impl AttPdu for WriteResponse {
    const OPCODE: AttOpcode = AttOpcode::WriteResponse;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, ATT_OPCODE_SIZE)?;
        Ok(Self)
    }

    fn encode(&self) -> Vec<u8> {
        vec![Self::OPCODE.value()]
    }
}

/// Handle Value Confirmation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleValueConfirmation;

impl AttPdu for HandleValueConfirmation {
    const OPCODE: AttOpcode = AttOpcode::HandleValueConfirmation;

    fn decode(data: &[u8]) -> CodecResult<Self> {
        check_fixed(data, Self::OPCODE, ATT_OPCODE_SIZE)?;
        Ok(Self)
    }

    fn encode(&self) -> Vec<u8> {
        vec![Self::OPCODE.value()]
    }
}

/// Defines a PDU made of an opcode, an attribute handle and a trailing value.
macro_rules! handle_value_pdu {
    ($(#[$meta:meta])* $name:ident, $opcode:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            /// Handle of the attribute
            pub handle: u16,
            /// Attribute value
            pub value: Vec<u8>,
        }

        impl AttPdu for $name {
            const OPCODE: AttOpcode = $opcode;

            fn decode(data: &[u8]) -> CodecResult<Self> {
                check_header(data, Self::OPCODE, ATT_HANDLE_HEADER_SIZE)?;

                Ok(Self {
                    handle: read_le(data, 1),
                    value: data[ATT_HANDLE_HEADER_SIZE..].to_vec(),
                })
            }

            fn encode(&self) -> Vec<u8> {
                let mut packet = Vec::with_capacity(ATT_HANDLE_HEADER_SIZE + self.value.len());

                packet.push(Self::OPCODE.value());
                write_le(&mut packet, self.handle);
                packet.extend_from_slice(&self.value);

                packet
            }
        }
    };
}

handle_value_pdu!(
    /// Write Request
    WriteRequest,
    AttOpcode::WriteRequest
);

handle_value_pdu!(
    /// Write Command (no response expected)
    WriteCommand,
    AttOpcode::WriteCommand
);

handle_value_pdu!(
    /// Handle Value Notification
    HandleValueNotification,
    AttOpcode::HandleValueNotification
);

handle_value_pdu!(
    /// Handle Value Indication
    HandleValueIndication,
    AttOpcode::HandleValueIndication
);

macro_rules! pdu_enum {
    ($($variant:ident),+ $(,)?) => {
        /// Any ATT PDU modeled by this crate
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Pdu {
            $($variant($variant),)+
        }

        impl Pdu {
            /// Opcode of the wrapped PDU
            pub fn opcode(&self) -> AttOpcode {
                match self {
                    $(Pdu::$variant(_) => <$variant as AttPdu>::OPCODE,)+
                }
            }

            /// Encodes the wrapped PDU
            pub fn encode(&self) -> Vec<u8> {
                match self {
                    $(Pdu::$variant(pdu) => pdu.encode(),)+
                }
            }

            /// Decodes a PDU, choosing its type from the leading opcode byte.
            pub fn decode(data: &[u8]) -> CodecResult<Self> {
                CodecError::check_min_len(data, ATT_OPCODE_SIZE)?;
                let opcode = AttOpcode::try_from(data[0]).map_err(|err| {
                    debug!("Rejecting PDU: {}", err);
                    err
                })?;

                $(
                    if opcode == <$variant as AttPdu>::OPCODE {
                        return $variant::decode(data).map(Pdu::$variant);
                    }
                )+

                debug!("No decoder for ATT opcode {:?}", opcode);
                Err(CodecError::UnsupportedOpcode(data[0]))
            }
        }

        $(
            impl From<$variant> for Pdu {
                fn from(pdu: $variant) -> Self {
                    Pdu::$variant(pdu)
                }
            }
        )+
    };
}

pdu_enum!(
    ErrorResponse,
    ExchangeMtuRequest,
    ExchangeMtuResponse,
    FindInformationRequest,
    ReadRequest,
    ReadResponse,
    ReadBlobRequest,
    ReadBlobResponse,
    WriteRequest,
    WriteResponse,
    WriteCommand,
    HandleValueNotification,
    HandleValueIndication,
    HandleValueConfirmation,
);
