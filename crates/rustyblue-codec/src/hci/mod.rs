//! Bluetooth HCI (Host Controller Interface) types
//!
//! Only the controller feature bits live here; command and event framing is
//! handled by the transport layer.

pub mod features;

pub use features::{LowEnergyFeature, LowEnergyFeatureSet, LE_FEATURES_LENGTH};
