/*!
 * Serde Support
 *
 * Guards serialize a snapshot of their payload taken under the read lock and
 * deserialize into a fresh guard.
 */

use super::{MapGuard, SliceGuard, ValueGuard};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

impl<T: Serialize> Serialize for ValueGuard<T> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.read_scoped(|value| value.serialize(serializer))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueGuard<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(ValueGuard::new)
    }
}

impl<K: Serialize, V: Serialize, S> Serialize for MapGuard<K, V, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        use super::ScopedAccess;
        self.read_scoped(|map| serializer.collect_map(map))
    }
}

impl<'de, K, V, S> Deserialize<'de> for MapGuard<K, V, S>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HashMap::<K, V, S>::deserialize(deserializer).map(MapGuard::from_map)
    }
}

impl<T: Serialize> Serialize for SliceGuard<T> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        use super::ScopedAccess;
        self.read_scoped(|items| items.serialize(serializer))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SliceGuard<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(SliceGuard::from_vec)
    }
}
