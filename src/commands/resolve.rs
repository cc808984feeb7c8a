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

use crate::config::MongoDistConfig;
use crate::error::{MongoDistError, Result};
use crate::models::platform::{BitSize, OperatingSystem, PlatformDescriptor};
use crate::platform::distro::LinuxDistro;
use crate::platform::{get_current_bit_size, get_current_os};
use crate::version::MongoVersion;
use crate::version::resolver::{ResolutionKey, resolve};
use serde::Serialize;
use std::str::FromStr;

#[derive(Serialize)]
struct ResolveOutput<'a> {
    requested: MongoVersion,
    key: &'a ResolutionKey,
    published: bool,
}

pub struct ResolveCommand<'a> {
    config: &'a MongoDistConfig,
}

impl<'a> ResolveCommand<'a> {
    pub fn new(config: &'a MongoDistConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        version: Option<&str>,
        os: Option<&str>,
        bits: Option<&str>,
        distro: Option<&str>,
        json: bool,
    ) -> Result<()> {
        let version = version.unwrap_or(self.config.default_version.as_str());
        let requested = MongoVersion::from_str(version)?;
        let platform = self.platform(os, bits, distro)?;
        log::debug!("Resolving {requested} for {platform}");

        let key = resolve(&requested, platform);
        let published = key.has_published_build();

        if json {
            let output = ResolveOutput {
                requested,
                key: &key,
                published,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{key}");
        println!("  version:   {}", key.version);
        println!("  platform:  {}", key.platform);
        println!("  features:  {}", key.features);
        println!("  published: {}", if published { "yes" } else { "no" });
        Ok(())
    }

    fn platform(
        &self,
        os: Option<&str>,
        bits: Option<&str>,
        distro: Option<&str>,
    ) -> Result<PlatformDescriptor> {
        let os = match os {
            Some(os) => OperatingSystem::from_str(os)?,
            None => get_current_os().ok_or_else(|| {
                MongoDistError::InvalidPlatform(
                    "The current operating system has no MongoDB builds; pass --os".to_string(),
                )
            })?,
        };
        let bit_size = match bits {
            Some(bits) => BitSize::from_str(bits)?,
            None => get_current_bit_size(),
        };

        let platform = PlatformDescriptor::new(os, bit_size);
        if os != OperatingSystem::Linux {
            return Ok(platform);
        }

        let distro = match distro {
            Some(distro) => LinuxDistro::from_str(distro)?,
            None => LinuxDistro::detect_from(&self.config.os_release_path),
        };
        Ok(platform.with_distro(distro))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_platform_from_flags() {
        let config = MongoDistConfig::default();
        let command = ResolveCommand::new(&config).unwrap();

        let platform = command
            .platform(Some("windows"), Some("32"), None)
            .unwrap();
        assert_eq!(
            platform,
            PlatformDescriptor::new(OperatingSystem::Windows, BitSize::B32)
        );

        let platform = command
            .platform(Some("linux"), Some("64"), Some("debian-10"))
            .unwrap();
        assert_eq!(platform.distro, Some(LinuxDistro::Debian10));
    }

    #[test]
    fn test_platform_detects_distro_from_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let os_release = temp_dir.path().join("os-release");
        fs::write(&os_release, "ID=debian\nVERSION_ID=\"9.2\"\n").unwrap();

        let config = MongoDistConfig {
            os_release_path: os_release,
            ..MongoDistConfig::default()
        };
        let command = ResolveCommand::new(&config).unwrap();

        let platform = command.platform(Some("linux"), Some("64"), None).unwrap();
        assert_eq!(platform.distro, Some(LinuxDistro::Debian9_2));
    }

    #[test]
    fn test_platform_rejects_unknown_os() {
        let config = MongoDistConfig::default();
        let command = ResolveCommand::new(&config).unwrap();
        assert!(command.platform(Some("plan9"), Some("64"), None).is_err());
        assert!(command.platform(Some("linux"), Some("16"), None).is_err());
    }

    #[test]
    fn test_execute_unknown_version() {
        let config = MongoDistConfig::default();
        let command = ResolveCommand::new(&config).unwrap();
        assert!(
            command
                .execute(Some("0.0.1"), Some("windows"), Some("64"), None, false)
                .is_err()
        );
    }
}
