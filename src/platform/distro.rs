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

//! Linux distribution detection from the host's os-release file.
//!
//! Some MongoDB releases ship distinct Linux builds per distribution, so the
//! plain `linux` platform is refined into a [`LinuxDistro`] tag. Detection is
//! a best-effort refinement: any failure yields [`LinuxDistro::Unknown`].

use crate::error::{MongoDistError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_OS_RELEASE_PATH: &str = "/etc/os-release";

const ID_KEY: &str = "ID";
const VERSION_ID_KEY: &str = "VERSION_ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinuxDistro {
    #[serde(rename = "debian-9.2")]
    Debian9_2,
    #[serde(rename = "debian-10")]
    Debian10,
    Unknown,
}

impl LinuxDistro {
    /// Detects the distribution of the running host.
    pub fn detect() -> LinuxDistro {
        Self::detect_from(Path::new(DEFAULT_OS_RELEASE_PATH))
    }

    /// Detects the distribution described by the os-release file at `path`.
    ///
    /// Never fails: an unreadable file is logged and reported as `Unknown`.
    pub fn detect_from(path: &Path) -> LinuxDistro {
        let distro = OsRelease::read_or_default(path).distro();
        log::debug!("Detected Linux distribution {distro} from {path:?}");
        distro
    }

    pub fn id(&self) -> &'static str {
        match self {
            LinuxDistro::Debian9_2 => "debian-9.2",
            LinuxDistro::Debian10 => "debian-10",
            LinuxDistro::Unknown => "unknown",
        }
    }
}

impl FromStr for LinuxDistro {
    type Err = MongoDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "debian-9.2" | "debian9.2" | "debian9_2" => Ok(LinuxDistro::Debian9_2),
            "debian-10" | "debian10" => Ok(LinuxDistro::Debian10),
            "unknown" => Ok(LinuxDistro::Unknown),
            _ => Err(MongoDistError::InvalidPlatform(format!(
                "Unknown Linux distribution: {s}"
            ))),
        }
    }
}

impl fmt::Display for LinuxDistro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The keys of an os-release file that matter for distribution detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    pub id: Option<String>,
    pub version_id: Option<String>,
}

impl OsRelease {
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Reads `path`, logging a warning and returning an empty view when the
    /// file cannot be read. An empty view resolves to `Unknown`.
    pub fn read_or_default(path: &Path) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            log::warn!("Could not read file: {}: {e}", path.display());
            OsRelease::default()
        })
    }

    pub fn parse(contents: &str) -> Self {
        let mut properties = parse_properties(contents);
        OsRelease {
            id: properties.remove(ID_KEY),
            version_id: properties
                .remove(VERSION_ID_KEY)
                .map(|value| unwrap_quotes(&value).to_string()),
        }
    }

    pub fn distro(&self) -> LinuxDistro {
        match (self.id.as_deref(), self.version_id.as_deref()) {
            (Some("debian"), Some("9.2")) => LinuxDistro::Debian9_2,
            (Some("debian"), Some("10")) => LinuxDistro::Debian10,
            _ => LinuxDistro::Unknown,
        }
    }
}

/// Parses `KEY=value` (or `KEY:value`) lines. Later duplicates replace
/// earlier ones; comment lines and lines without a separator are skipped.
fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        if let Some((key, value)) = line.split_once(['=', ':']) {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            // Trailing whitespace is dropped too, so `VERSION_ID="10"  ` still matches.
            properties.insert(key.to_string(), value.trim().to_string());
        }
    }

    properties
}

/// Removes one pair of wrapping double quotes, if present.
fn unwrap_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
