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

use crate::error::Result;
use crate::models::feature::FeatureSet;
use crate::version::FeatureAwareVersion;
use crate::version::catalog::{self, Release};
use comfy_table::{Cell, Table};
use serde::Serialize;

#[derive(Serialize)]
struct ReleaseOutput {
    version: &'static str,
    deprecated: bool,
    features: FeatureSet,
}

pub struct VersionsCommand;

impl VersionsCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn execute(&self, at_least: Option<&str>, testable: bool, json: bool) -> Result<()> {
        let releases = self.select(at_least, testable)?;

        if json {
            let output: Vec<ReleaseOutput> = releases
                .iter()
                .map(|release| ReleaseOutput {
                    version: release.as_in_download_path(),
                    deprecated: release.is_deprecated(),
                    features: release.features(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        if releases.is_empty() {
            println!("No releases match");
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("Version"),
            Cell::new("Deprecated"),
            Cell::new("Features"),
        ]);

        for release in &releases {
            table.add_row(vec![
                Cell::new(release.as_in_download_path()),
                Cell::new(if release.is_deprecated() { "yes" } else { "" }),
                Cell::new(release.features().to_string()),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    fn select(&self, at_least: Option<&str>, testable: bool) -> Result<Vec<Release>> {
        match (at_least, testable) {
            (Some(floor), true) => catalog::testable_versions(floor),
            (Some(floor), false) => catalog::at_least(floor),
            (None, true) => Ok(Release::all()
                .filter(|release| !release.is_deprecated())
                .collect()),
            (None, false) => Ok(Release::all().collect()),
        }
    }
}
