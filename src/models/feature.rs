// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Capability markers that vary across MongoDB releases.
//!
//! `Feature` is append-only: new markers go at the end of the enum so that
//! historical catalog entries keep their meaning. `FeatureSet` is a small
//! bitset keyed by the declaration index of each feature.

use crate::error::{MongoDistError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// `--syncdelay` is accepted
    SyncDelay,
    /// Text search has to be switched on with a server parameter
    TextSearch,
    /// `--storageEngine` is accepted
    StorageEngine,
    /// No 32 bit builds are published
    Only64Bit,
    /// `--chunkSize` was removed from mongos
    NoChunksizeArg,
    /// mongos expects `--configdb` as a replica set string
    MongosConfigdbSetStyle,
    /// `--nohttpinterface` was removed
    NoHttpInterfaceArg,
    /// Windows builds are only published with SSL
    OnlyWithSsl,
    /// Windows builds target Server 2008 R2 and later only
    OnlyWindows2008Server,
    /// No Solaris builds are published
    NoSolarisSupport,
    /// mongod binds to localhost unless told otherwise
    NoBindIpToLocalhost,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::SyncDelay,
        Feature::TextSearch,
        Feature::StorageEngine,
        Feature::Only64Bit,
        Feature::NoChunksizeArg,
        Feature::MongosConfigdbSetStyle,
        Feature::NoHttpInterfaceArg,
        Feature::OnlyWithSsl,
        Feature::OnlyWindows2008Server,
        Feature::NoSolarisSupport,
        Feature::NoBindIpToLocalhost,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Feature::SyncDelay => "sync-delay",
            Feature::TextSearch => "text-search",
            Feature::StorageEngine => "storage-engine",
            Feature::Only64Bit => "only-64bit",
            Feature::NoChunksizeArg => "no-chunksize-arg",
            Feature::MongosConfigdbSetStyle => "mongos-configdb-set-style",
            Feature::NoHttpInterfaceArg => "no-http-interface-arg",
            Feature::OnlyWithSsl => "only-with-ssl",
            Feature::OnlyWindows2008Server => "only-windows-2008-server",
            Feature::NoSolarisSupport => "no-solaris-support",
            Feature::NoBindIpToLocalhost => "no-bind-ip-to-localhost",
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl FromStr for Feature {
    type Err = MongoDistError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Feature::ALL
            .into_iter()
            .find(|feature| feature.id() == wanted)
            .ok_or_else(|| MongoDistError::UnknownFeature(s.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Feature::from_str(&id).map_err(serde::de::Error::custom)
    }
}

/// Order-independent set of [`Feature`]s.
///
/// The set is `Copy`, so every value handed out by the catalog is an
/// independent snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureSet {
    bits: u16,
}

impl FeatureSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Builds the union of the given features. Duplicates collapse.
    pub const fn of(features: &[Feature]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < features.len() {
            bits |= features[i].bit();
            i += 1;
        }
        Self { bits }
    }

    pub const fn contains(&self, feature: Feature) -> bool {
        self.bits & feature.bit() != 0
    }

    pub const fn union(self, other: FeatureSet) -> FeatureSet {
        FeatureSet {
            bits: self.bits | other.bits,
        }
    }

    pub fn insert(&mut self, feature: Feature) {
        self.bits |= feature.bit();
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates in declaration order of [`Feature`].
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = FeatureSet::empty();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.iter().map(|feature| feature.id()).collect();
        write!(f, "{}", ids.join(", "))
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let features = Vec::<Feature>::deserialize(deserializer)?;
        Ok(features.into_iter().collect())
    }
}
