//! Attribute Protocol (ATT) codecs
//!
//! This module provides the ATT opcode space, the PDU types with their
//! byte-exact encode/decode contracts, ATT error codes and the attribute
//! permission flag set. Transport and request/response sequencing are left
//! to the layers above and below.

pub mod constants;
pub mod error_code;
pub mod pdu;
pub mod permission;


pub use self::constants::*;
pub use self::error_code::AttErrorCode;
pub use self::pdu::*;
pub use self::permission::{AttributePermission, AttributePermissions};
