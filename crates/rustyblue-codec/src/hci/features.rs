//! LE controller feature bits
//!
//! Reported by the LE Read Local Supported Features command and the LL
//! feature exchange as a 64-bit little-endian field.

use crate::bitmask::{bit_mask_option, BitMaskOptionSet};

bit_mask_option! {
    /// LE feature bits 0 through 16 (Core 5.0, Vol 6, Part B, 4.6)
    pub enum LowEnergyFeature: u64 {
        Encryption = 1 << 0,
        ConnectionParametersRequestProcedure = 1 << 1,
        ExtendedRejectIndication = 1 << 2,
        SlaveInitiatedFeaturesExchange = 1 << 3,
        Ping = 1 << 4,
        DataPacketLengthExtension = 1 << 5,
        LlPrivacy = 1 << 6,
        ExtendedScannerFilterPolicies = 1 << 7,
        Le2mPhy = 1 << 8,
        StableModulationIndexTransmitter = 1 << 9,
        StableModulationIndexReceiver = 1 << 10,
        LeCodedPhy = 1 << 11,
        ExtendedAdvertising = 1 << 12,
        PeriodicAdvertising = 1 << 13,
        ChannelSelectionAlgorithm2 = 1 << 14,
        LePowerClass1 = 1 << 15,
        MinimumNumberOfUsedChannelsProcedure = 1 << 16,
    }
}

/// Feature set as reported by a controller
pub type LowEnergyFeatureSet = BitMaskOptionSet<LowEnergyFeature>;

/// Width of the feature field in HCI events and LL PDUs
pub const LE_FEATURES_LENGTH: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::{Endianness, WireInteger};

    #[test]
    fn test_feature_bits_from_wire() {
        // Encryption, Ping and LE 2M PHY, as read from a controller
        let raw = u64::from_bytes(&[0x11, 0x01, 0, 0, 0, 0, 0, 0], Endianness::Little);
        let features = LowEnergyFeatureSet::from_raw(raw);
        assert_eq!(
            features.iter().collect::<Vec<_>>(),
            vec![
                LowEnergyFeature::Encryption,
                LowEnergyFeature::Ping,
                LowEnergyFeature::Le2mPhy
            ]
        );
        assert_eq!(
            features.raw_value().to_bytes(Endianness::Little).as_ref().len(),
            LE_FEATURES_LENGTH
        );
    }

    #[test]
    fn test_all_features() {
        let features = LowEnergyFeatureSet::all();
        assert_eq!(features.count(), 17);
        assert_eq!(features.raw_value(), 0x1_FFFF);
    }
}
