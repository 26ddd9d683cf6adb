//! Compact bit-flag sets
//!
//! [`BitMaskOptionSet<T>`] stores a set of flags from the enumeration `T` in a
//! single unsigned integer of `T`'s raw width, so it can sit inline in a PDU or
//! parameter block with no extra storage.
//!
//! Bits that match no flag of `T` are kept in [`BitMaskOptionSet::raw_value`]
//! so that decoding and re-encoding never loses data, but they are not counted
//! or iterated. Iteration yields the known flags in ascending bit order.

use bitflags::Bits;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::marker::PhantomData;

/// An enumeration of named single-bit flags
pub trait BitMaskOption: Copy + Eq + fmt::Debug + 'static {
    /// Unsigned integer the flags are stored in
    type RawValue: Bits + Eq + Hash + fmt::Debug;

    /// Every flag, in ascending bit order
    const ALL: &'static [Self];

    /// The flag's single set bit
    fn raw_value(self) -> Self::RawValue;
}

/// Defines a `repr` enum of single-bit flags and implements [`BitMaskOption`] for it.
macro_rules! bit_mask_option {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $raw:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr($raw)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Returns the flag whose bit is exactly `raw`, if any
            pub fn from_raw(raw: $raw) -> Option<Self> {
                <Self as $crate::bitmask::BitMaskOption>::ALL
                    .iter()
                    .copied()
                    .find(|flag| *flag as $raw == raw)
            }
        }

        impl $crate::bitmask::BitMaskOption for $name {
            type RawValue = $raw;

            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn raw_value(self) -> $raw {
                self as $raw
            }
        }
    };
}

pub(crate) use bit_mask_option;

/// A set of `T` flags backed by one `T::RawValue` integer
pub struct BitMaskOptionSet<T: BitMaskOption> {
    raw_value: T::RawValue,
    _marker: PhantomData<T>,
}

impl<T: BitMaskOption> BitMaskOptionSet<T> {
    /// Creates an empty set
    pub const fn new() -> Self {
        Self::from_raw(<T::RawValue as Bits>::EMPTY)
    }

    /// Creates a set from a raw integer, keeping unknown bits
    pub const fn from_raw(raw_value: T::RawValue) -> Self {
        Self {
            raw_value,
            _marker: PhantomData,
        }
    }

    /// Creates a set holding every flag of `T`
    pub fn all() -> Self {
        T::ALL.iter().copied().collect()
    }

    /// The raw integer, including bits that match no flag
    pub fn raw_value(&self) -> T::RawValue {
        self.raw_value
    }

    /// Adds a flag. Returns `true` if it was not already present.
    pub fn insert(&mut self, flag: T) -> bool {
        let present = self.contains(flag);
        self.raw_value = self.raw_value | flag.raw_value();
        !present
    }

    /// Removes a flag. Returns `true` if it was present.
    pub fn remove(&mut self, flag: T) -> bool {
        let present = self.contains(flag);
        self.raw_value = self.raw_value & !flag.raw_value();
        present
    }

    /// Checks whether every bit of `other` (a flag or a set) is present
    pub fn contains<S: Into<Self>>(&self, other: S) -> bool {
        let other = other.into().raw_value;
        (self.raw_value & other) == other
    }

    pub fn is_superset(&self, other: Self) -> bool {
        self.contains(other)
    }

    pub fn is_subset(&self, other: Self) -> bool {
        other.contains(*self)
    }

    /// Flags present in either set
    pub fn union(&self, other: Self) -> Self {
        Self::from_raw(self.raw_value | other.raw_value)
    }

    /// Flags present in both sets
    pub fn intersection(&self, other: Self) -> Self {
        Self::from_raw(self.raw_value & other.raw_value)
    }

    /// Flags present in `self` but not in `other`
    pub fn difference(&self, other: Self) -> Self {
        Self::from_raw(self.raw_value & !other.raw_value)
    }

    /// Number of known flags set
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// `true` when no known flag is set
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterates over the known flags in ascending bit order
    pub fn iter(&self) -> Iter<T> {
        Iter {
            set: *self,
            index: 0,
        }
    }
}

impl<T: BitMaskOption> Clone for BitMaskOptionSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: BitMaskOption> Copy for BitMaskOptionSet<T> {}

impl<T: BitMaskOption> PartialEq for BitMaskOptionSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw_value == other.raw_value
    }
}

impl<T: BitMaskOption> Eq for BitMaskOptionSet<T> {}

impl<T: BitMaskOption> Hash for BitMaskOptionSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_value.hash(state);
    }
}

impl<T: BitMaskOption> Default for BitMaskOptionSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BitMaskOption> fmt::Debug for BitMaskOptionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: BitMaskOption> From<T> for BitMaskOptionSet<T> {
    fn from(flag: T) -> Self {
        Self::from_raw(flag.raw_value())
    }
}

impl<T: BitMaskOption, const N: usize> From<[T; N]> for BitMaskOptionSet<T> {
    fn from(flags: [T; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl<T: BitMaskOption> FromIterator<T> for BitMaskOptionSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: BitMaskOption> Extend<T> for BitMaskOptionSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

/// Iterator over the flags of a [`BitMaskOptionSet`]
#[derive(Debug, Clone)]
pub struct Iter<T: BitMaskOption> {
    set: BitMaskOptionSet<T>,
    index: usize,
}

impl<T: BitMaskOption> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(flag) = T::ALL.get(self.index).copied() {
            self.index += 1;
            if self.set.contains(flag) {
                return Some(flag);
            }
        }
        None
    }
}

impl<T: BitMaskOption> IntoIterator for BitMaskOptionSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<'a, T: BitMaskOption> IntoIterator for &'a BitMaskOptionSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::att::{AttributePermission, AttributePermissions};
    use crate::gatt::{CharacteristicProperties, CharacteristicProperty};
    use crate::hci::{LowEnergyFeature, LowEnergyFeatureSet};
    use std::mem::size_of;

    #[test]
    fn test_sets_are_as_large_as_their_raw_value() {
        assert_eq!(size_of::<CharacteristicProperties>(), size_of::<u8>());
        assert_eq!(size_of::<AttributePermissions>(), size_of::<u8>());
        assert_eq!(size_of::<LowEnergyFeatureSet>(), size_of::<u64>());
        assert_eq!(
            size_of::<LowEnergyFeatureSet>(),
            size_of::<<LowEnergyFeature as BitMaskOption>::RawValue>()
        );
    }

    #[test]
    fn test_all_permissions() {
        let all = AttributePermissions::all();
        assert_eq!(all.count(), AttributePermission::ALL.len());
        assert_eq!(all.count(), 8);
        assert_eq!(all.raw_value(), 0xFF);
        assert!(all.contains(AttributePermissions::ENCRYPT));
        assert!(all.contains(AttributePermissions::AUTHENTICATION));
        assert!(all.contains(AttributePermission::ReadAuthorized));
        assert_eq!(all.iter().collect::<Vec<_>>(), AttributePermission::ALL.to_vec());

        let empty = AttributePermissions::new();
        assert!(!empty.contains(AttributePermission::Read));
        assert!(!empty.contains(AttributePermissions::all()));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = CharacteristicProperties::new();
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
        assert_eq!(set.raw_value(), 0);

        assert!(set.insert(CharacteristicProperty::Read));
        assert_eq!(set.raw_value(), CharacteristicProperty::Read as u8);
        assert_eq!(set.count(), 1);
        assert!(!set.is_empty());

        assert!(!set.insert(CharacteristicProperty::Read));
        assert_eq!(set.raw_value(), CharacteristicProperty::Read as u8);
        assert_eq!(set.count(), 1);

        set.insert(CharacteristicProperty::Write);
        assert_eq!(
            set.raw_value(),
            CharacteristicProperty::Read as u8 | CharacteristicProperty::Write as u8
        );
        assert_eq!(set.count(), 2);
        assert!(set.contains([CharacteristicProperty::Read, CharacteristicProperty::Write]));
        assert_eq!(
            set,
            CharacteristicProperties::from([
                CharacteristicProperty::Write,
                CharacteristicProperty::Read
            ])
        );
    }

    #[test]
    fn test_remove() {
        let mut set =
            CharacteristicProperties::from([CharacteristicProperty::Read, CharacteristicProperty::Notify]);
        assert!(set.remove(CharacteristicProperty::Read));
        assert!(!set.remove(CharacteristicProperty::Read));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![CharacteristicProperty::Notify]);
        set.remove(CharacteristicProperty::Notify);
        assert!(set.is_empty());
        assert_eq!(set.raw_value(), 0);
    }

    #[test]
    fn test_set_algebra() {
        let a = CharacteristicProperties::from([CharacteristicProperty::Read, CharacteristicProperty::Write]);
        let b = CharacteristicProperties::from([CharacteristicProperty::Write, CharacteristicProperty::Notify]);
        assert_eq!(a.union(b).count(), 3);
        assert_eq!(
            a.intersection(b).iter().collect::<Vec<_>>(),
            vec![CharacteristicProperty::Write]
        );
        assert_eq!(
            a.difference(b).iter().collect::<Vec<_>>(),
            vec![CharacteristicProperty::Read]
        );
        assert!(a.union(b).contains(a));
        assert!(!a.contains(b));
        assert!(a.union(b).is_superset(b));
        assert!(a.intersection(b).is_subset(a));
        assert!(!a.is_subset(b));
    }

    #[test]
    fn test_feature_set() {
        let mut features = LowEnergyFeatureSet::from([
            LowEnergyFeature::Encryption,
            LowEnergyFeature::ConnectionParametersRequestProcedure,
            LowEnergyFeature::Ping,
        ]);
        assert_eq!(features.count(), 3);
        assert!(features.contains(LowEnergyFeature::Encryption));
        assert!(features.contains(LowEnergyFeature::ConnectionParametersRequestProcedure));
        assert!(features.contains(LowEnergyFeature::Ping));
        assert!(!features.contains(LowEnergyFeature::Le2mPhy));

        assert_ne!(features.raw_value(), LowEnergyFeature::Encryption as u64);
        assert_eq!(LowEnergyFeature::from_raw(features.raw_value()), None);
        assert_eq!(LowEnergyFeature::from_raw(0x10), Some(LowEnergyFeature::Ping));

        features = LowEnergyFeatureSet::all();
        assert!(!features.is_empty());
        assert_eq!(features.count(), LowEnergyFeature::ALL.len());
        for feature in features {
            assert!(LowEnergyFeature::ALL.contains(&feature));
        }
    }

    #[test]
    fn test_unknown_bits_are_preserved_but_not_counted() {
        let set = CharacteristicProperties::from_raw(0x02);
        assert_eq!(set.count(), 1);

        let set = LowEnergyFeatureSet::from_raw(1 << 40 | 1);
        assert_eq!(set.raw_value(), 1 << 40 | 1);
        assert_eq!(set.count(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![LowEnergyFeature::Encryption]);

        let unknown_only = LowEnergyFeatureSet::from_raw(1 << 63);
        assert!(unknown_only.is_empty());
        assert_eq!(unknown_only.raw_value(), 1 << 63);
    }

    #[test]
    fn test_iteration_is_ascending() {
        for window in LowEnergyFeature::ALL.windows(2) {
            assert!((window[0] as u64) < (window[1] as u64));
        }
        for window in CharacteristicProperty::ALL.windows(2) {
            assert!((window[0] as u8) < (window[1] as u8));
        }
        let set = CharacteristicProperties::from([
            CharacteristicProperty::Indicate,
            CharacteristicProperty::Broadcast,
            CharacteristicProperty::Write,
        ]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![
                CharacteristicProperty::Broadcast,
                CharacteristicProperty::Write,
                CharacteristicProperty::Indicate
            ]
        );
        assert_eq!(
            format!("{:?}", set),
            "{Broadcast, Write, Indicate}"
        );
    }
}
