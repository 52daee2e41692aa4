// Copyright 2025 Fernando Borretti
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

use std::time::Instant;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::update::MissingPolicy;
use crate::update::update_streaks;

pub fn run_update(collection: Option<String>, keep_missing: bool) -> Fallible<()> {
    let mut collection = Collection::open(collection)?;
    let policy = if keep_missing {
        MissingPolicy::LeaveUntouched
    } else {
        MissingPolicy::ResetToZero
    };
    let start = Instant::now();
    let updated = update_streaks(&mut collection.db, policy)?;
    let duration = Instant::now().duration_since(start).as_millis();
    log::debug!("Custom data updated in {duration}ms.");
    println!("Updated {updated} cards.");
    Ok(())
}
