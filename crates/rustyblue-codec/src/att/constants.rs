//! ATT Protocol constants
use crate::error::CodecError;
use std::convert::TryFrom;

/// ATT opcode values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AttOpcode {
    ErrorResponse = 0x01,
    ExchangeMtuRequest = 0x02,
    ExchangeMtuResponse = 0x03,
    FindInformationRequest = 0x04,
    FindInformationResponse = 0x05,
    FindByTypeValueRequest = 0x06,
    FindByTypeValueResponse = 0x07,
    ReadByTypeRequest = 0x08,
    ReadByTypeResponse = 0x09,
    ReadRequest = 0x0A,
    ReadResponse = 0x0B,
    ReadBlobRequest = 0x0C,
    ReadBlobResponse = 0x0D,
    ReadMultipleRequest = 0x0E,
    ReadMultipleResponse = 0x0F,
    ReadByGroupTypeRequest = 0x10,
    ReadByGroupTypeResponse = 0x11,
    WriteRequest = 0x12,
    WriteResponse = 0x13,
    PrepareWriteRequest = 0x16,
    PrepareWriteResponse = 0x17,
    ExecuteWriteRequest = 0x18,
    ExecuteWriteResponse = 0x19,
    HandleValueNotification = 0x1B,
    HandleValueIndication = 0x1D,
    HandleValueConfirmation = 0x1E,
    MultipleHandleValueNotification = 0x23,
    WriteCommand = 0x52,
    SignedWriteCommand = 0xD2,
}

impl AttOpcode {
    const ALL: [AttOpcode; 29] = [
        AttOpcode::ErrorResponse,
        AttOpcode::ExchangeMtuRequest,
        AttOpcode::ExchangeMtuResponse,
        AttOpcode::FindInformationRequest,
        AttOpcode::FindInformationResponse,
        AttOpcode::FindByTypeValueRequest,
        AttOpcode::FindByTypeValueResponse,
        AttOpcode::ReadByTypeRequest,
        AttOpcode::ReadByTypeResponse,
        AttOpcode::ReadRequest,
        AttOpcode::ReadResponse,
        AttOpcode::ReadBlobRequest,
        AttOpcode::ReadBlobResponse,
        AttOpcode::ReadMultipleRequest,
        AttOpcode::ReadMultipleResponse,
        AttOpcode::ReadByGroupTypeRequest,
        AttOpcode::ReadByGroupTypeResponse,
        AttOpcode::WriteRequest,
        AttOpcode::WriteResponse,
        AttOpcode::PrepareWriteRequest,
        AttOpcode::PrepareWriteResponse,
        AttOpcode::ExecuteWriteRequest,
        AttOpcode::ExecuteWriteResponse,
        AttOpcode::HandleValueNotification,
        AttOpcode::HandleValueIndication,
        AttOpcode::HandleValueConfirmation,
        AttOpcode::MultipleHandleValueNotification,
        AttOpcode::WriteCommand,
        AttOpcode::SignedWriteCommand,
    ];

    /// The opcode byte
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Command flag (bit 6): the PDU expects no response
    pub fn is_command(self) -> bool {
        self.value() & ATT_OPCODE_COMMAND_FLAG != 0
    }

    /// Authentication signature flag (bit 7)
    pub fn is_signed(self) -> bool {
        self.value() & ATT_OPCODE_SIGNED_FLAG != 0
    }
}

impl TryFrom<u8> for AttOpcode {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AttOpcode::ALL
            .iter()
            .copied()
            .find(|opcode| opcode.value() == value)
            .ok_or(CodecError::UnsupportedOpcode(value))
    }
}

impl From<AttOpcode> for u8 {
    fn from(opcode: AttOpcode) -> Self {
        opcode.value()
    }
}

// ATT opcode flag bits
pub const ATT_OPCODE_COMMAND_FLAG: u8 = 0x40;
pub const ATT_OPCODE_SIGNED_FLAG: u8 = 0x80;

// ATT error codes
pub const ATT_ERROR_INVALID_HANDLE: u8 = 0x01;
pub const ATT_ERROR_READ_NOT_PERMITTED: u8 = 0x02;
pub const ATT_ERROR_WRITE_NOT_PERMITTED: u8 = 0x03;
pub const ATT_ERROR_INVALID_PDU: u8 = 0x04;
pub const ATT_ERROR_INSUFFICIENT_AUTHENTICATION: u8 = 0x05;
pub const ATT_ERROR_REQUEST_NOT_SUPPORTED: u8 = 0x06;
pub const ATT_ERROR_INVALID_OFFSET: u8 = 0x07;
pub const ATT_ERROR_INSUFFICIENT_AUTHORIZATION: u8 = 0x08;
pub const ATT_ERROR_PREPARE_QUEUE_FULL: u8 = 0x09;
pub const ATT_ERROR_ATTRIBUTE_NOT_FOUND: u8 = 0x0A;
pub const ATT_ERROR_ATTRIBUTE_NOT_LONG: u8 = 0x0B;
pub const ATT_ERROR_INSUFFICIENT_ENCRYPTION_KEY_SIZE: u8 = 0x0C;
pub const ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH: u8 = 0x0D;
pub const ATT_ERROR_UNLIKELY: u8 = 0x0E;
pub const ATT_ERROR_INSUFFICIENT_ENCRYPTION: u8 = 0x0F;
pub const ATT_ERROR_UNSUPPORTED_GROUP_TYPE: u8 = 0x10;
pub const ATT_ERROR_INSUFFICIENT_RESOURCES: u8 = 0x11;
pub const ATT_ERROR_DATABASE_OUT_OF_SYNC: u8 = 0x12;
pub const ATT_ERROR_VALUE_NOT_ALLOWED: u8 = 0x13;
pub const ATT_ERROR_APPLICATION_ERROR_START: u8 = 0x80;
pub const ATT_ERROR_APPLICATION_ERROR_END: u8 = 0x9F;
pub const ATT_ERROR_COMMON_PROFILE_ERROR_START: u8 = 0xE0;
pub const ATT_ERROR_COMMON_PROFILE_ERROR_END: u8 = 0xFF;

// ATT attribute permission bits
pub const ATT_PERM_READ: u8 = 0x01;
pub const ATT_PERM_WRITE: u8 = 0x02;
pub const ATT_PERM_READ_ENCRYPTED: u8 = 0x04;
pub const ATT_PERM_WRITE_ENCRYPTED: u8 = 0x08;
pub const ATT_PERM_READ_AUTHENTICATED: u8 = 0x10;
pub const ATT_PERM_WRITE_AUTHENTICATED: u8 = 0x20;
pub const ATT_PERM_READ_AUTHORIZED: u8 = 0x40;
pub const ATT_PERM_WRITE_AUTHORIZED: u8 = 0x80;

// ATT handle values
pub const ATT_HANDLE_MIN: u16 = 0x0001;
pub const ATT_HANDLE_MAX: u16 = 0xFFFF;

// ATT MTU limits
pub const ATT_DEFAULT_MTU: u16 = 23;
pub const ATT_MAX_MTU: u16 = 517;

// ATT PDU header size
pub const ATT_OPCODE_SIZE: usize = 1;
pub const ATT_HANDLE_HEADER_SIZE: usize = 3; // Opcode (1) + handle (2)

// ATT L2CAP channel ID
pub const ATT_CID: u16 = 0x0004;
