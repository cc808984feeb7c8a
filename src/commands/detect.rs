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
use crate::error::Result;
use crate::platform::distro::OsRelease;
use std::path::Path;

pub struct DetectCommand<'a> {
    config: &'a MongoDistConfig,
}

impl<'a> DetectCommand<'a> {
    pub fn new(config: &'a MongoDistConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, path: Option<&Path>, json: bool) -> Result<()> {
        let path = path.unwrap_or(self.config.os_release_path.as_path());
        let os_release = OsRelease::read_or_default(path);
        let distro = os_release.distro();

        if json {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "distro": distro,
                "id": os_release.id,
                "version_id": os_release.version_id,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{distro}");
        }

        Ok(())
    }
}
