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
use crate::platform::distro::LinuxDistro;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Linux,
    Windows,
    MacOS,
    Solaris,
    FreeBsd,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 5] = [
        OperatingSystem::Linux,
        OperatingSystem::Windows,
        OperatingSystem::MacOS,
        OperatingSystem::Solaris,
        OperatingSystem::FreeBsd,
    ];
}

impl FromStr for OperatingSystem {
    type Err = MongoDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(OperatingSystem::Linux),
            "windows" | "win" | "win32" => Ok(OperatingSystem::Windows),
            "macos" | "mac" | "osx" | "os_x" | "darwin" => Ok(OperatingSystem::MacOS),
            "solaris" | "sunos" => Ok(OperatingSystem::Solaris),
            "freebsd" => Ok(OperatingSystem::FreeBsd),
            _ => Err(MongoDistError::InvalidPlatform(format!(
                "Unknown operating system: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let os = match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOS => "macos",
            OperatingSystem::Solaris => "solaris",
            OperatingSystem::FreeBsd => "freebsd",
        };
        write!(f, "{os}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitSize {
    #[serde(rename = "32")]
    B32,
    #[serde(rename = "64")]
    B64,
}

impl BitSize {
    pub const ALL: [BitSize; 2] = [BitSize::B32, BitSize::B64];

    pub fn bits(&self) -> u32 {
        match self {
            BitSize::B32 => 32,
            BitSize::B64 => 64,
        }
    }
}

impl FromStr for BitSize {
    type Err = MongoDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "32" | "b32" | "x86" | "i686" => Ok(BitSize::B32),
            "64" | "b64" | "x64" | "x86_64" | "amd64" => Ok(BitSize::B64),
            _ => Err(MongoDistError::InvalidPlatform(format!(
                "Unknown word size: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for BitSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Operating system family, word size and, for Linux, the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    pub os: OperatingSystem,
    pub bit_size: BitSize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distro: Option<LinuxDistro>,
}

impl PlatformDescriptor {
    pub fn new(os: OperatingSystem, bit_size: BitSize) -> Self {
        Self {
            os,
            bit_size,
            distro: None,
        }
    }

    pub fn with_distro(mut self, distro: LinuxDistro) -> Self {
        self.distro = Some(distro);
        self
    }
}

impl std::fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.os, self.bit_size)?;
        if let Some(distro) = &self.distro {
            write!(f, "-{distro}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_system_parsing() {
        assert_eq!(
            OperatingSystem::from_str("linux").unwrap(),
            OperatingSystem::Linux
        );
        assert_eq!(
            OperatingSystem::from_str("Windows").unwrap(),
            OperatingSystem::Windows
        );
        assert_eq!(
            OperatingSystem::from_str("osx").unwrap(),
            OperatingSystem::MacOS
        );
        assert_eq!(
            OperatingSystem::from_str("sunos").unwrap(),
            OperatingSystem::Solaris
        );
        assert!(OperatingSystem::from_str("plan9").is_err());
    }

    #[test]
    fn test_bit_size_parsing() {
        assert_eq!(BitSize::from_str("32").unwrap(), BitSize::B32);
        assert_eq!(BitSize::from_str("B64").unwrap(), BitSize::B64);
        assert_eq!(BitSize::from_str("x86_64").unwrap(), BitSize::B64);
        assert!(BitSize::from_str("16").is_err());
    }

    #[test]
    fn test_descriptor_is_structural() {
        let a = PlatformDescriptor::new(OperatingSystem::Linux, BitSize::B64)
            .with_distro(LinuxDistro::Debian10);
        let b = PlatformDescriptor::new(OperatingSystem::Linux, BitSize::B64)
            .with_distro(LinuxDistro::Debian10);
        assert_eq!(a, b);
        assert_ne!(
            a,
            PlatformDescriptor::new(OperatingSystem::Linux, BitSize::B64)
        );
    }

    #[test]
    fn test_descriptor_display() {
        let plain = PlatformDescriptor::new(OperatingSystem::Windows, BitSize::B32);
        assert_eq!(plain.to_string(), "windows-32");

        let debian = PlatformDescriptor::new(OperatingSystem::Linux, BitSize::B64)
            .with_distro(LinuxDistro::Debian9_2);
        assert_eq!(debian.to_string(), "linux-64-debian-9.2");
    }

    #[test]
    fn test_descriptor_serialization() {
        let platform = PlatformDescriptor::new(OperatingSystem::MacOS, BitSize::B64);
        let json = serde_json::to_string(&platform).unwrap();
        assert_eq!(json, r#"{"os":"macos","bit_size":"64"}"#);

        let linux = PlatformDescriptor::new(OperatingSystem::Linux, BitSize::B64)
            .with_distro(LinuxDistro::Debian10);
        let json = serde_json::to_string(&linux).unwrap();
        assert_eq!(json, r#"{"os":"linux","bit_size":"64","distro":"debian-10"}"#);
    }
}
