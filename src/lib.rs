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

//! Resolution of MongoDB server versions into feature sets and download keys.
//!
//! A caller names a version, either a concrete [`version::Release`] such as
//! `4.2.10` or a rolling [`version::Alias`] such as `production`, together
//! with a [`models::platform::PlatformDescriptor`]. [`version::resolver::resolve`]
//! binds the two into a [`version::resolver::ResolutionKey`] for an artifact
//! locator. On Linux the descriptor can be refined with
//! [`platform::distro::LinuxDistro::detect`] beforehand.
//!
//! ```
//! use mongodist::models::feature::Feature;
//! use mongodist::models::platform::{BitSize, OperatingSystem, PlatformDescriptor};
//! use mongodist::version::resolver::resolve;
//! use mongodist::version::{Alias, FeatureAwareVersion};
//!
//! let platform = PlatformDescriptor::new(OperatingSystem::Windows, BitSize::B64);
//! let key = resolve(&Alias::Production, platform);
//!
//! assert_eq!(key.version, Alias::Production.as_in_download_path());
//! assert!(key.enabled(Feature::StorageEngine));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod platform;
pub mod version;
