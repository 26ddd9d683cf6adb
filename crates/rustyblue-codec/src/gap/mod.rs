//! GAP (Generic Access Profile) addressing types

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::{AddressType, BdAddr};
