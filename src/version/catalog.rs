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

//! The catalog of concrete MongoDB releases.
//!
//! Every release is a key into [`RELEASES`], a static table binding the
//! download path token to an explicit feature set. Features are listed per
//! release and never derived from the version number.

use crate::error::Result;
use crate::models::feature::Feature::{
    MongosConfigdbSetStyle, NoBindIpToLocalhost, NoChunksizeArg, NoHttpInterfaceArg,
    NoSolarisSupport, Only64Bit, OnlyWindows2008Server, OnlyWithSsl, StorageEngine, SyncDelay,
    TextSearch,
};
use crate::models::feature::{Feature, FeatureSet};
use crate::version::{FeatureAwareVersion, VersionOrder};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Release {
    V1_6_5,
    V1_7_6,
    V1_8_0_RC0,
    V1_8_0,
    V1_8_1,
    V1_8_2_RC0,
    V1_8_2,
    V1_8_4,
    V1_8_5,
    V1_9_0,
    V2_0_1,
    V2_0_4,
    V2_0_5,
    V2_0_6,
    V2_0_7_RC1,
    V2_0_7,
    V2_0_8_RC0,
    V2_0_9,
    V2_1_0,
    V2_1_1,
    V2_1_2,
    V2_2_0_RC0,
    V2_2_0,
    V2_2_1,
    V2_2_3,
    V2_2_4,
    V2_2_5,
    V2_2_6,
    V2_2_7,
    V2_3_0,
    V2_4_0_RC3,
    V2_4_0,
    V2_4_1,
    V2_4_2,
    V2_4_3,
    V2_4_5,
    V2_4_6,
    V2_4_7,
    V2_4_8,
    V2_4_9,
    V2_4_10,
    V2_5_0,
    V2_5_1,
    V2_5_3,
    V2_5_4,
    V2_6_0,
    V2_6_1,
    V2_6_8,
    V2_6_10,
    V2_6_11,
    V2_7_0,
    V2_7_1,
    V3_0_0,
    V3_0_1,
    V3_0_2,
    V3_0_4,
    V3_0_5,
    V3_0_6,
    V3_0_7,
    V3_0_8,
    V3_1_0,
    V3_1_5,
    V3_1_6,
    V3_2_0,
    V3_2_1_RC3,
    V3_2_1,
    V3_2_20,
    V3_3_1,
    V3_4_3,
    V3_4_5,
    V3_4_15,
    V3_5_5,
    V3_6_0,
    V3_6_2,
    V3_6_3,
    V3_6_5,
    V4_0_2,
    V4_0_12,
    V4_2_10,
    V4_4_1,
    LatestNightly,
}

#[derive(Debug, Clone, Copy)]
pub struct ReleaseRecord {
    pub key: Release,
    pub download_path: &'static str,
    pub features: FeatureSet,
    pub deprecated: bool,
}

const fn release(
    key: Release,
    download_path: &'static str,
    features: &[Feature],
) -> ReleaseRecord {
    ReleaseRecord {
        key,
        download_path,
        features: FeatureSet::of(features),
        deprecated: false,
    }
}

const fn deprecated(
    key: Release,
    download_path: &'static str,
    features: &[Feature],
) -> ReleaseRecord {
    ReleaseRecord {
        deprecated: true,
        ..release(key, download_path, features)
    }
}

const RELEASE_COUNT: usize = 81;

const RELEASE_TABLE: [ReleaseRecord; RELEASE_COUNT] = [
    deprecated(Release::V1_6_5, "1.6.5", &[]),
    deprecated(Release::V1_7_6, "1.7.6", &[]),
    deprecated(Release::V1_8_0_RC0, "1.8.0-rc0", &[]),
    deprecated(Release::V1_8_0, "1.8.0", &[]),
    deprecated(Release::V1_8_1, "1.8.1", &[]),
    deprecated(Release::V1_8_2_RC0, "1.8.2-rc0", &[]),
    deprecated(Release::V1_8_2, "1.8.2", &[]),
    deprecated(Release::V1_8_4, "1.8.4", &[]),
    deprecated(Release::V1_8_5, "1.8.5", &[]),
    deprecated(Release::V1_9_0, "1.9.0", &[]),
    deprecated(Release::V2_0_1, "2.0.1", &[]),
    deprecated(Release::V2_0_4, "2.0.4", &[]),
    deprecated(Release::V2_0_5, "2.0.5", &[]),
    deprecated(Release::V2_0_6, "2.0.6", &[]),
    deprecated(Release::V2_0_7_RC1, "2.0.7-rc1", &[]),
    deprecated(Release::V2_0_7, "2.0.7", &[]),
    deprecated(Release::V2_0_8_RC0, "2.0.8-rc0", &[]),
    deprecated(Release::V2_0_9, "2.0.9", &[]),
    deprecated(Release::V2_1_0, "2.1.0", &[]),
    deprecated(Release::V2_1_1, "2.1.1", &[]),
    deprecated(Release::V2_1_2, "2.1.2", &[]),
    deprecated(Release::V2_2_0_RC0, "2.2.0-rc0", &[]),
    deprecated(Release::V2_2_0, "2.2.0", &[]),
    deprecated(Release::V2_2_1, "2.2.1", &[]),
    deprecated(Release::V2_2_3, "2.2.3", &[]),
    deprecated(Release::V2_2_4, "2.2.4", &[]),
    deprecated(Release::V2_2_5, "2.2.5", &[]),
    deprecated(Release::V2_2_6, "2.2.6", &[]),
    deprecated(Release::V2_2_7, "2.2.7", &[]),
    deprecated(Release::V2_3_0, "2.3.0", &[]),
    deprecated(Release::V2_4_0_RC3, "2.4.0-rc3", &[]),
    deprecated(Release::V2_4_0, "2.4.0", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_1, "2.4.1", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_2, "2.4.2", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_3, "2.4.3", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_5, "2.4.5", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_6, "2.4.6", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_7, "2.4.7", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_8, "2.4.8", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_9, "2.4.9", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_4_10, "2.4.10", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_5_0, "2.5.0", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_5_1, "2.5.1", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_5_3, "2.5.3", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_5_4, "2.5.4", &[SyncDelay, TextSearch]),
    deprecated(Release::V2_6_0, "2.6.0", &[SyncDelay]),
    deprecated(Release::V2_6_1, "2.6.1", &[SyncDelay]),
    deprecated(Release::V2_6_8, "2.6.8", &[SyncDelay]),
    deprecated(Release::V2_6_10, "2.6.10", &[SyncDelay]),
    deprecated(Release::V2_6_11, "2.6.11", &[SyncDelay]),
    deprecated(Release::V2_7_0, "2.7.0", &[SyncDelay]),
    deprecated(Release::V2_7_1, "2.7.1", &[SyncDelay]),
    deprecated(Release::V3_0_0, "3.0.0", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_1, "3.0.1", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_2, "3.0.2", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_4, "3.0.4", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_5, "3.0.5", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_6, "3.0.6", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_7, "3.0.7", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_0_8, "3.0.8", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_1_0, "3.1.0", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_1_5, "3.1.5", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_1_6, "3.1.6", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_2_0, "3.2.0", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_2_1_RC3, "3.2.1-rc3", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_2_1, "3.2.1", &[SyncDelay, StorageEngine]),
    release(Release::V3_2_20, "3.2.20", &[SyncDelay, StorageEngine]),
    deprecated(Release::V3_3_1, "3.3.1", &[SyncDelay, StorageEngine]),
    deprecated(
        Release::V3_4_3,
        "3.4.3",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
        ],
    ),
    release(
        Release::V3_4_5,
        "3.4.5",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
        ],
    ),
    release(
        Release::V3_4_15,
        "3.4.15",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoSolarisSupport,
        ],
    ),
    release(
        Release::V3_5_5,
        "3.5.5",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
        ],
    ),
    deprecated(
        Release::V3_6_0,
        "3.6.0",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    deprecated(
        Release::V3_6_2,
        "3.6.2",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    deprecated(
        Release::V3_6_3,
        "3.6.3",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    release(
        Release::V3_6_5,
        "3.6.5",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    deprecated(
        Release::V4_0_2,
        "4.0.2",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    release(
        Release::V4_0_12,
        "4.0.12",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    release(
        Release::V4_2_10,
        "4.2.10",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    release(
        Release::V4_4_1,
        "4.4.1",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
    release(
        Release::LatestNightly,
        "latest",
        &[
            SyncDelay,
            StorageEngine,
            Only64Bit,
            NoChunksizeArg,
            MongosConfigdbSetStyle,
            NoHttpInterfaceArg,
            OnlyWithSsl,
            OnlyWindows2008Server,
            NoSolarisSupport,
            NoBindIpToLocalhost,
        ],
    ),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Rows must sit at the index of their key and download paths must be unique.
const fn is_well_formed(table: &[ReleaseRecord]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].key as usize != i {
            return false;
        }
        let mut j = 0;
        while j < i {
            if str_eq(table[i].download_path, table[j].download_path) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_well_formed(&RELEASE_TABLE));

pub static RELEASES: [ReleaseRecord; RELEASE_COUNT] = RELEASE_TABLE;

impl Release {
    pub fn record(self) -> &'static ReleaseRecord {
        &RELEASES[self as usize]
    }

    /// All releases in catalog declaration order.
    pub fn all() -> impl Iterator<Item = Release> {
        RELEASES.iter().map(|record| record.key)
    }

    pub fn from_download_path(path: &str) -> Option<Release> {
        RELEASES
            .iter()
            .find(|record| record.download_path == path)
            .map(|record| record.key)
    }

    /// Deprecated releases stay resolvable but are skipped by
    /// [`testable_versions`].
    pub fn is_deprecated(self) -> bool {
        self.record().deprecated
    }

    pub fn version_order(self) -> VersionOrder {
        // Catalog paths are either numbered or the nightly token.
        VersionOrder::from_str(self.record().download_path).unwrap_or(VersionOrder::Nightly)
    }

    pub fn cmp_version(self, other: Release) -> Ordering {
        self.version_order().cmp(&other.version_order())
    }
}

impl FeatureAwareVersion for Release {
    fn as_in_download_path(&self) -> &'static str {
        self.record().download_path
    }

    fn features(&self) -> FeatureSet {
        self.record().features
    }

    fn enabled(&self, feature: Feature) -> bool {
        self.record().features.contains(feature)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version{{{}}}", self.as_in_download_path())
    }
}

impl Serialize for Release {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_in_download_path())
    }
}

/// All releases at or above `floor`, in ascending version order.
pub fn at_least(floor: &str) -> Result<Vec<Release>> {
    let floor = VersionOrder::from_str(floor)?;

    let mut releases: Vec<Release> = Release::all()
        .filter(|release| release.version_order() >= floor)
        .collect();
    releases.sort_by(|a, b| a.cmp_version(*b));

    log::debug!("{} releases at or above {floor}", releases.len());
    Ok(releases)
}

/// Non-deprecated releases at or above `floor`, in ascending version order.
pub fn testable_versions(floor: &str) -> Result<Vec<Release>> {
    Ok(at_least(floor)?
        .into_iter()
        .filter(|release| !release.is_deprecated())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    #[test]
    fn test_download_path_round_trip() {
        for record in RELEASES.iter() {
            assert_eq!(record.key.as_in_download_path(), record.download_path);
            assert_eq!(
                Release::from_download_path(record.download_path),
                Some(record.key)
            );
        }
        assert_eq!(Release::V4_2_10.as_in_download_path(), "4.2.10");
        assert_eq!(Release::V2_0_7_RC1.as_in_download_path(), "2.0.7-rc1");
        assert_eq!(Release::LatestNightly.as_in_download_path(), "latest");
    }

    #[test]
    fn test_catalog_paths_are_ordered_tokens() {
        for release in Release::all() {
            let order = VersionOrder::from_str(release.as_in_download_path()).unwrap();
            if release == Release::LatestNightly {
                assert_eq!(order, VersionOrder::Nightly);
            } else {
                assert!(matches!(order, VersionOrder::Numbered(_)));
            }
        }
    }

    #[test]
    fn test_declaration_order_is_ascending() {
        let releases: Vec<Release> = Release::all().collect();
        for pair in releases.windows(2) {
            assert_eq!(
                pair[0].cmp_version(pair[1]),
                Ordering::Less,
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_enabled_matches_construction_set() {
        assert!(Release::V1_8_5.features().is_empty());
        assert_eq!(
            Release::V2_4_10.features(),
            FeatureSet::of(&[SyncDelay, TextSearch])
        );
        assert!(!Release::V2_6_0.enabled(TextSearch));
        assert!(Release::V3_0_0.enabled(StorageEngine));

        // 3.4.5 is the last release with a Solaris build, 3.5.5 lists no marker
        assert!(!Release::V3_4_5.enabled(NoSolarisSupport));
        assert!(Release::V3_4_15.enabled(NoSolarisSupport));
        assert!(!Release::V3_5_5.enabled(NoSolarisSupport));

        // 4.2.10 is published without the SSL only restriction
        assert!(Release::V4_0_12.enabled(OnlyWithSsl));
        assert!(!Release::V4_2_10.enabled(OnlyWithSsl));
        assert!(!Release::V4_2_10.enabled(OnlyWindows2008Server));
        assert!(Release::V4_4_1.enabled(OnlyWithSsl));

        for release in Release::all() {
            for feature in Feature::ALL {
                assert_eq!(
                    release.enabled(feature),
                    release.record().features.contains(feature)
                );
            }
        }
    }

    #[test]
    fn test_features_is_a_snapshot() {
        let mut snapshot = Release::V2_6_11.features();
        snapshot.insert(Only64Bit);
        snapshot.insert(TextSearch);

        assert!(!Release::V2_6_11.enabled(Only64Bit));
        assert!(!Release::V2_6_11.enabled(TextSearch));
        assert_eq!(Release::V2_6_11.features(), FeatureSet::of(&[SyncDelay]));
    }

    #[test]
    fn test_deprecation_markers() {
        assert!(Release::V1_6_5.is_deprecated());
        assert!(Release::V3_6_0.is_deprecated());
        assert!(!Release::V3_2_20.is_deprecated());
        assert!(!Release::V3_6_5.is_deprecated());
        assert!(!Release::LatestNightly.is_deprecated());
    }

    #[test]
    fn test_cmp_version_numeric() {
        assert_eq!(Release::V2_4_10.cmp_version(Release::V2_4_0), Ordering::Greater);
        assert_eq!(Release::V2_4_10.cmp_version(Release::V2_4_2), Ordering::Greater);
        assert_eq!(Release::V2_0_7_RC1.cmp_version(Release::V2_0_7), Ordering::Less);
        assert_eq!(
            Release::LatestNightly.cmp_version(Release::V4_4_1),
            Ordering::Greater
        );
        assert_eq!(
            Release::V4_2_10.version_order(),
            VersionOrder::Numbered(Version::new(4, 2, 10))
        );
    }

    #[test]
    fn test_at_least() {
        let releases = at_least("4.0.0").unwrap();
        assert_eq!(
            releases,
            vec![
                Release::V4_0_2,
                Release::V4_0_12,
                Release::V4_2_10,
                Release::V4_4_1,
                Release::LatestNightly,
            ]
        );

        let releases = at_least("2.4.10").unwrap();
        assert_eq!(releases.first(), Some(&Release::V2_4_10));
        assert!(!releases.contains(&Release::V2_4_2));

        assert_eq!(at_least("latest").unwrap(), vec![Release::LatestNightly]);
        assert!(at_least("not-a-version").is_err());
    }

    #[test]
    fn test_testable_versions_skip_deprecated() {
        let releases = testable_versions("3.0").unwrap();
        assert_eq!(
            releases,
            vec![
                Release::V3_2_20,
                Release::V3_4_5,
                Release::V3_4_15,
                Release::V3_5_5,
                Release::V3_6_5,
                Release::V4_0_12,
                Release::V4_2_10,
                Release::V4_4_1,
                Release::LatestNightly,
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Release::V3_6_5.to_string(), "Version{3.6.5}");
    }
}
