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
use crate::version::FeatureAwareVersion;
use crate::version::alias::{Alias, AliasTarget};
use comfy_table::{Cell, Table};
use serde::Serialize;

#[derive(Serialize)]
struct AliasOutput {
    name: &'static str,
    target: String,
    version: &'static str,
    deprecated: bool,
}

pub struct AliasesCommand;

impl AliasesCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn execute(&self, json: bool) -> Result<()> {
        let rows: Vec<AliasOutput> = Alias::all().map(describe).collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("Alias"),
            Cell::new("Points To"),
            Cell::new("Version"),
            Cell::new("Deprecated"),
        ]);

        for row in rows {
            table.add_row(vec![
                Cell::new(row.name),
                Cell::new(row.target),
                Cell::new(row.version),
                Cell::new(if row.deprecated { "yes" } else { "" }),
            ]);
        }

        println!("{table}");
        Ok(())
    }
}

fn describe(alias: Alias) -> AliasOutput {
    let target = match alias.target() {
        AliasTarget::Release(release) => release.as_in_download_path().to_string(),
        AliasTarget::Alias(target) => target.name().to_string(),
    };

    AliasOutput {
        name: alias.name(),
        target,
        version: alias.as_in_download_path(),
        deprecated: alias.is_deprecated(),
    }
}
