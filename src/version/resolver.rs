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

//! Turns a version and a platform into the key an artifact locator consumes.
//!
//! Resolution is pure: it never touches the file system. Callers that want
//! the Linux distribution refined must detect it first and put it on the
//! [`PlatformDescriptor`].

use crate::models::feature::{Feature, FeatureSet};
use crate::models::platform::{BitSize, OperatingSystem, PlatformDescriptor};
use crate::version::FeatureAwareVersion;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolutionKey {
    pub version: &'static str,
    pub features: FeatureSet,
    pub platform: PlatformDescriptor,
}

impl ResolutionKey {
    pub fn enabled(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    /// Whether MongoDB publishes a build for this combination at all.
    pub fn has_published_build(&self) -> bool {
        let bit_size = self.platform.bit_size;
        match self.platform.os {
            _ if bit_size == BitSize::B32 && self.enabled(Feature::Only64Bit) => false,
            OperatingSystem::MacOS => bit_size == BitSize::B64,
            OperatingSystem::Solaris => {
                bit_size == BitSize::B64 && !self.enabled(Feature::NoSolarisSupport)
            }
            _ => true,
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.version, self.platform)
    }
}

/// Binds a version's download path and features to a platform.
pub fn resolve<V>(version: &V, platform: PlatformDescriptor) -> ResolutionKey
where
    V: FeatureAwareVersion + ?Sized,
{
    ResolutionKey {
        version: version.as_in_download_path(),
        features: version.features(),
        platform,
    }
}
