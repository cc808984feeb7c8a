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

use crate::error::{MongoDistError, Result};
use crate::models::feature::{Feature, FeatureSet};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub mod alias;
pub mod catalog;
pub mod resolver;

pub use alias::{Alias, AliasTarget};
pub use catalog::Release;

/// Download path token of the rolling nightly build.
pub const NIGHTLY_TOKEN: &str = "latest";

/// Query contract shared by concrete releases and rolling aliases.
pub trait FeatureAwareVersion {
    /// The token used verbatim by artifact locators, e.g. `"4.2.10"`.
    fn as_in_download_path(&self) -> &'static str;

    /// Snapshot of the feature set. Changing it never affects the catalog.
    fn features(&self) -> FeatureSet;

    fn enabled(&self, feature: Feature) -> bool {
        self.features().contains(feature)
    }
}

/// Semantic version parsed from a download path token.
///
/// Components compare numerically; a missing component counts as zero. A
/// pre-release sorts before the final release of the same numbers.
#[derive(Debug, Clone)]
pub struct Version {
    pub components: Vec<u32>,
    pub pre_release: Option<String>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            components: vec![major, minor, patch],
            pre_release: None,
        }
    }

    pub fn with_pre_release(mut self, pre_release: &str) -> Self {
        self.pre_release = Some(pre_release.to_string());
        self
    }

    pub fn minor(&self) -> Option<u32> {
        self.components.get(1).copied()
    }

    pub fn patch(&self) -> Option<u32> {
        self.components.get(2).copied()
    }

    fn cmp_components(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Splits `rc12` into `("rc", Some(12))` so that `rc2 < rc10`.
fn pre_release_key(pre: &str) -> (&str, Option<u32>) {
    let split = pre
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(pre.len());
    let (tag, number) = pre.split_at(split);
    (tag, number.parse().ok())
}

fn cmp_pre_release(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => pre_release_key(a)
            .cmp(&pre_release_key(b))
            .then_with(|| a.cmp(b)),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_components(other)
            .then_with(|| cmp_pre_release(&self.pre_release, &other.pre_release))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = MongoDistError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (numbers, pre_release) = match s.split_once('-') {
            Some((_, "")) => return Err(MongoDistError::InvalidVersionFormat(s.to_string())),
            Some((numbers, pre)) => (numbers, Some(pre.to_string())),
            None => (s, None),
        };

        let components = numbers
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| MongoDistError::InvalidVersionFormat(s.to_string()))
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Version {
            components,
            pre_release,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }

        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{pre_release}")?;
        }

        Ok(())
    }
}

/// Position of a release in "at least version X" queries.
///
/// The nightly build has no number; it ranks above every numbered release.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionOrder {
    Numbered(Version),
    Nightly,
}

impl FromStr for VersionOrder {
    type Err = MongoDistError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(NIGHTLY_TOKEN) {
            return Ok(VersionOrder::Nightly);
        }
        Version::from_str(s).map(VersionOrder::Numbered)
    }
}

impl fmt::Display for VersionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionOrder::Numbered(version) => write!(f, "{version}"),
            VersionOrder::Nightly => write!(f, "{NIGHTLY_TOKEN}"),
        }
    }
}

/// A version as requested by a caller: a concrete release or a rolling alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MongoVersion {
    Release(Release),
    Alias(Alias),
}

impl MongoVersion {
    /// The concrete release this version stands for.
    pub fn release(&self) -> Release {
        match self {
            MongoVersion::Release(release) => *release,
            MongoVersion::Alias(alias) => alias.resolve(),
        }
    }
}

impl FeatureAwareVersion for MongoVersion {
    fn as_in_download_path(&self) -> &'static str {
        match self {
            MongoVersion::Release(release) => release.as_in_download_path(),
            MongoVersion::Alias(alias) => alias.as_in_download_path(),
        }
    }

    fn features(&self) -> FeatureSet {
        match self {
            MongoVersion::Release(release) => release.features(),
            MongoVersion::Alias(alias) => alias.features(),
        }
    }
}

impl From<Release> for MongoVersion {
    fn from(release: Release) -> Self {
        MongoVersion::Release(release)
    }
}

impl From<Alias> for MongoVersion {
    fn from(alias: Alias) -> Self {
        MongoVersion::Alias(alias)
    }
}

impl FromStr for MongoVersion {
    type Err = MongoDistError;

    /// Release download paths win over alias names.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(release) = Release::from_download_path(trimmed) {
            return Ok(MongoVersion::Release(release));
        }
        if let Some(alias) = Alias::from_name(trimmed) {
            return Ok(MongoVersion::Alias(alias));
        }
        Err(MongoDistError::UnknownVersion(s.to_string()))
    }
}

impl fmt::Display for MongoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MongoVersion::Release(release) => write!(f, "{}", release.as_in_download_path()),
            MongoVersion::Alias(alias) => write!(f, "{}", alias.name()),
        }
    }
}

impl Serialize for MongoVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::from_str(s).unwrap()
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!(v("4.2.10"), Version::new(4, 2, 10));
        assert_eq!(
            v("2.4.0-rc3"),
            Version::new(2, 4, 0).with_pre_release("rc3")
        );
        assert_eq!(v("4.2").minor(), Some(2));
        assert_eq!(v("4.2").patch(), None);
        assert!(Version::from_str("").is_err());
        assert!(Version::from_str("4.x").is_err());
        assert!(Version::from_str("4.2.").is_err());
        assert!(Version::from_str("4.2.0-").is_err());
        assert!(Version::from_str("latest").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(v("1.8.0-rc0").to_string(), "1.8.0-rc0");
        assert_eq!(v("3.6").to_string(), "3.6");
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert!(v("2.4.10") > v("2.4.0"));
        assert!(v("2.4.10") > v("2.4.2"));
        assert!(v("10.0.0") > v("9.9.9"));
    }

    #[test]
    fn test_pre_release_sorts_before_final() {
        assert!(v("1.8.0-rc0") < v("1.8.0"));
        assert!(v("1.8.0-rc0") > v("1.7.6"));
        assert!(v("2.4.0-rc1") < v("2.4.0-rc3"));
        assert!(v("2.4.0-rc2") < v("2.4.0-rc10"));
    }

    #[test]
    fn test_missing_components_count_as_zero() {
        assert_eq!(v("4.2"), v("4.2.0"));
        assert!(v("4.2") < v("4.2.1"));
    }

    #[test]
    fn test_nightly_is_greatest() {
        let nightly = VersionOrder::from_str("latest").unwrap();
        assert_eq!(nightly, VersionOrder::Nightly);
        assert!(nightly > VersionOrder::from_str("99.99.99").unwrap());
        assert_eq!(nightly.to_string(), "latest");
    }

    #[test]
    fn test_mongo_version_from_str() {
        assert_eq!(
            MongoVersion::from_str("4.2.10").unwrap(),
            MongoVersion::Release(Release::V4_2_10)
        );
        assert_eq!(
            MongoVersion::from_str("latest").unwrap(),
            MongoVersion::Release(Release::LatestNightly)
        );
        assert_eq!(
            MongoVersion::from_str("PRODUCTION").unwrap(),
            MongoVersion::Alias(Alias::Production)
        );
        assert_eq!(
            MongoVersion::from_str("3.6").unwrap(),
            MongoVersion::Alias(Alias::V3_6)
        );
        assert!(matches!(
            MongoVersion::from_str("9.9.9"),
            Err(MongoDistError::UnknownVersion(_))
        ));
    }

    #[test]
    fn test_mongo_version_delegates() {
        let production = MongoVersion::from(Alias::Production);
        assert_eq!(production.release(), Release::V4_2_10);
        assert_eq!(production.as_in_download_path(), "4.2.10");
        assert_eq!(production.features(), Release::V4_2_10.features());
        assert_eq!(production.to_string(), "production");

        let release = MongoVersion::from(Release::V3_4_5);
        assert!(release.enabled(Feature::Only64Bit));
        assert!(!release.enabled(Feature::NoSolarisSupport));
        assert_eq!(serde_json::to_string(&release).unwrap(), r#""3.4.5""#);
    }
}
