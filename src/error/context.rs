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

use crate::error::MongoDistError;
use crate::models::platform::{BitSize, OperatingSystem};
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a MongoDistError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a MongoDistError) -> Self {
        let (suggestion, details) = match error {
            MongoDistError::UnknownVersion(version) => {
                let suggestion = Some(
                    "Run 'mongodist versions' to list known releases or 'mongodist aliases' to \
                     list rolling names such as 'production'."
                        .to_string(),
                );
                let details = Some(format!("No release or alias is named '{version}'."));
                (suggestion, details)
            }
            MongoDistError::InvalidVersionFormat(msg) => {
                let suggestion = Some(
                    "Version format should be: '<major>.<minor>.<patch>[-<pre-release>]' (e.g., \
                     '4.2.10' or '2.4.0-rc3')."
                        .to_string(),
                );
                let details = Some(format!("Invalid format: {msg}"));
                (suggestion, details)
            }
            MongoDistError::InvalidPlatform(msg) => {
                let systems = OperatingSystem::ALL.map(|os| os.to_string()).join(", ");
                let sizes = BitSize::ALL.map(|size| size.to_string()).join(", ");
                let suggestion = Some(format!(
                    "Supported operating systems: {systems}. Supported word sizes: {sizes}."
                ));
                let details = Some(msg.clone());
                (suggestion, details)
            }
            MongoDistError::UnknownFeature(feature) => {
                let suggestion =
                    Some("Run 'mongodist versions' to see the feature ids in use.".to_string());
                let details = Some(format!("Feature '{feature}' is not defined."));
                (suggestion, details)
            }
            MongoDistError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check mongodist.toml in your config directory ($MONGODIST_HOME or \
                     ~/.mongodist)."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
