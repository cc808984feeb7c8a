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

//! Host platform detection.
//!
//! The operating system family and word size are fixed at compile time. The
//! Linux distribution is read from the os-release file on request only.

use crate::models::platform::{BitSize, OperatingSystem, PlatformDescriptor};
use crate::platform::distro::LinuxDistro;
use std::path::Path;

/// Detect the current operating system family.
///
/// Returns `None` on targets MongoDB publishes no builds for.
pub fn get_current_os() -> Option<OperatingSystem> {
    #[cfg(target_os = "linux")]
    return Some(OperatingSystem::Linux);

    #[cfg(target_os = "windows")]
    return Some(OperatingSystem::Windows);

    #[cfg(target_os = "macos")]
    return Some(OperatingSystem::MacOS);

    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    return Some(OperatingSystem::Solaris);

    #[cfg(target_os = "freebsd")]
    return Some(OperatingSystem::FreeBsd);

    #[cfg(not(any(
        target_os = "linux",
        target_os = "windows",
        target_os = "macos",
        target_os = "solaris",
        target_os = "illumos",
        target_os = "freebsd"
    )))]
    return None;
}

/// Detect the word size of the current target.
pub fn get_current_bit_size() -> BitSize {
    #[cfg(target_pointer_width = "32")]
    return BitSize::B32;

    #[cfg(not(target_pointer_width = "32"))]
    return BitSize::B64;
}

/// Describe the current host, refining Linux with the distribution read from
/// `os_release`.
pub fn detect_current_platform(os_release: &Path) -> Option<PlatformDescriptor> {
    let os = get_current_os()?;
    let descriptor = PlatformDescriptor::new(os, get_current_bit_size());

    if os == OperatingSystem::Linux {
        Some(descriptor.with_distro(LinuxDistro::detect_from(os_release)))
    } else {
        Some(descriptor)
    }
}
