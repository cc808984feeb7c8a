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

//! Rolling names for releases.
//!
//! An alias such as `production` or `4.2` points at a release or at an alias
//! declared before it. Moving a name to a new release is a one-line change in
//! [`ALIASES`]; callers keep using the name.

use crate::models::feature::FeatureSet;
use crate::version::FeatureAwareVersion;
use crate::version::catalog::Release;
use serde::{Serialize, Serializer};
use std::fmt;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alias {
    V1_8,
    V2_0,
    V2_1,
    V2_2,
    V2_3,
    V2_4,
    V2_5,
    V2_6,
    V2_7,
    V3_0,
    V3_1,
    V3_2,
    V3_3,
    V3_4,
    V3_5,
    V3_6,
    V4_0,
    V4_2,
    Legacy,
    Production,
    Development,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    Release(Release),
    Alias(Alias),
}

#[derive(Debug, Clone, Copy)]
pub struct AliasRecord {
    pub key: Alias,
    pub name: &'static str,
    pub target: AliasTarget,
    pub deprecated: bool,
}

const fn to_release(key: Alias, name: &'static str, release: Release) -> AliasRecord {
    AliasRecord {
        key,
        name,
        target: AliasTarget::Release(release),
        deprecated: false,
    }
}

const fn to_alias(key: Alias, name: &'static str, alias: Alias) -> AliasRecord {
    AliasRecord {
        key,
        name,
        target: AliasTarget::Alias(alias),
        deprecated: false,
    }
}

const fn deprecated(record: AliasRecord) -> AliasRecord {
    AliasRecord {
        deprecated: true,
        ..record
    }
}

const ALIAS_TABLE: [AliasRecord; 21] = [
    deprecated(to_release(Alias::V1_8, "1.8", Release::V1_8_5)),
    deprecated(to_release(Alias::V2_0, "2.0", Release::V2_0_9)),
    deprecated(to_release(Alias::V2_1, "2.1", Release::V2_1_2)),
    deprecated(to_release(Alias::V2_2, "2.2", Release::V2_2_7)),
    deprecated(to_release(Alias::V2_3, "2.3", Release::V2_3_0)),
    deprecated(to_release(Alias::V2_4, "2.4", Release::V2_4_10)),
    deprecated(to_release(Alias::V2_5, "2.5", Release::V2_5_4)),
    deprecated(to_release(Alias::V2_6, "2.6", Release::V2_6_11)),
    deprecated(to_release(Alias::V2_7, "2.7", Release::V2_7_1)),
    deprecated(to_release(Alias::V3_0, "3.0", Release::V3_0_8)),
    deprecated(to_release(Alias::V3_1, "3.1", Release::V3_1_6)),
    deprecated(to_release(Alias::V3_2, "3.2", Release::V3_2_20)),
    to_release(Alias::V3_3, "3.3", Release::V3_3_1),
    to_release(Alias::V3_4, "3.4", Release::V3_4_15),
    to_release(Alias::V3_5, "3.5", Release::V3_5_5),
    to_release(Alias::V3_6, "3.6", Release::V3_6_5),
    to_release(Alias::V4_0, "4.0", Release::V4_0_12),
    to_release(Alias::V4_2, "4.2", Release::V4_2_10),
    deprecated(to_alias(Alias::Legacy, "legacy", Alias::V3_6)),
    to_alias(Alias::Production, "production", Alias::V4_2),
    to_alias(Alias::Development, "development", Alias::V4_2),
];

/// Rows must sit at the index of their key, and an alias may only point at
/// an alias declared above it. Together these rule out cycles.
const fn is_well_formed(table: &[AliasRecord]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].key as usize != i {
            return false;
        }
        if let AliasTarget::Alias(target) = table[i].target
            && target as usize >= i
        {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_well_formed(&ALIAS_TABLE));

pub static ALIASES: [AliasRecord; 21] = ALIAS_TABLE;

impl Alias {
    pub fn record(self) -> &'static AliasRecord {
        &ALIASES[self as usize]
    }

    pub fn all() -> impl Iterator<Item = Alias> {
        ALIASES.iter().map(|record| record.key)
    }

    pub fn name(self) -> &'static str {
        self.record().name
    }

    /// Case-insensitive lookup by name, e.g. `"Production"` or `"3.6"`.
    pub fn from_name(name: &str) -> Option<Alias> {
        ALIASES
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
            .map(|record| record.key)
    }

    pub fn target(self) -> AliasTarget {
        self.record().target
    }

    pub fn is_deprecated(self) -> bool {
        self.record().deprecated
    }

    /// Follows the reference chain to the terminal release.
    pub fn resolve(self) -> Release {
        let mut target = self.target();
        loop {
            match target {
                AliasTarget::Release(release) => return release,
                AliasTarget::Alias(alias) => target = alias.target(),
            }
        }
    }

    /// Number of references followed by [`Alias::resolve`].
    pub fn chain_len(self) -> usize {
        let mut len = 1;
        let mut target = self.target();
        while let AliasTarget::Alias(alias) = target {
            len += 1;
            target = alias.target();
        }
        len
    }
}

impl FeatureAwareVersion for Alias {
    fn as_in_download_path(&self) -> &'static str {
        self.resolve().as_in_download_path()
    }

    fn features(&self) -> FeatureSet {
        self.resolve().features()
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Alias {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
