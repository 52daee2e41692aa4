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

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::streaks::print_streaks;
use crate::cmd::update::run_update;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Recompute review streaks and write them into each card's custom data.
    Update {
        /// Optional path to the collection database.
        collection: Option<String>,
        /// Leave cards with no review history untouched instead of resetting
        /// their streak to zero.
        #[arg(long)]
        keep_missing: bool,
    },
    /// Print each card's streak without modifying the collection.
    Streaks {
        /// Optional path to the collection database.
        collection: Option<String>,
    },
    /// Check that the collection can be opened and report its size.
    Check {
        /// Optional path to the collection database.
        collection: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Update {
            collection,
            keep_missing,
        } => run_update(collection, keep_missing),
        Command::Streaks { collection } => print_streaks(collection),
        Command::Check { collection } => check_collection(collection),
    }
}
