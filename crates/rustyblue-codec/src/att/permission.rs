//! Attribute permission flags
use super::constants::*;
use crate::bitmask::{bit_mask_option, BitMaskOptionSet};

bit_mask_option! {
    /// A single ATT attribute permission bit
    pub enum AttributePermission: u8 {
        Read = ATT_PERM_READ,
        Write = ATT_PERM_WRITE,
        ReadEncrypted = ATT_PERM_READ_ENCRYPTED,
        WriteEncrypted = ATT_PERM_WRITE_ENCRYPTED,
        ReadAuthenticated = ATT_PERM_READ_AUTHENTICATED,
        WriteAuthenticated = ATT_PERM_WRITE_AUTHENTICATED,
        ReadAuthorized = ATT_PERM_READ_AUTHORIZED,
        WriteAuthorized = ATT_PERM_WRITE_AUTHORIZED,
    }
}

/// Set of attribute permissions
pub type AttributePermissions = BitMaskOptionSet<AttributePermission>;

impl BitMaskOptionSet<AttributePermission> {
    /// Encrypted read and write
    pub const ENCRYPT: Self = Self::from_raw(ATT_PERM_READ_ENCRYPTED | ATT_PERM_WRITE_ENCRYPTED);

    /// Authenticated read and write
    pub const AUTHENTICATION: Self =
        Self::from_raw(ATT_PERM_READ_AUTHENTICATED | ATT_PERM_WRITE_AUTHENTICATED);

    /// Authorized read and write
    pub const AUTHORIZATION: Self =
        Self::from_raw(ATT_PERM_READ_AUTHORIZED | ATT_PERM_WRITE_AUTHORIZED);

    /// Check if read is permitted
    pub fn can_read(&self) -> bool {
        self.contains(AttributePermission::Read)
    }

    /// Check if write is permitted
    pub fn can_write(&self) -> bool {
        self.contains(AttributePermission::Write)
    }
}
