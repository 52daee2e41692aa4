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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Error;
use crate::error::Fallible;
use crate::streak::Streak;
use crate::streak::compute_streaks;
use crate::types::card_id::CardId;

/// Print the streak of every card in the collection, without writing
/// anything. Cards with no review history are reported with a streak of
/// zero.
pub fn print_streaks(collection: Option<String>) -> Fallible<()> {
    let collection = Collection::open(collection)?;
    let events = collection.db.review_log()?;
    let computed = compute_streaks(&events);
    let mut streaks: BTreeMap<CardId, Streak> = BTreeMap::new();
    for card_id in collection.db.card_ids()? {
        let streak = computed.get(&card_id).copied().unwrap_or(0);
        streaks.insert(card_id, streak);
    }
    let report = StreakReport {
        card_count: streaks.len(),
        review_count: events.len(),
        streaks,
    };
    let report_json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::unavailable(format!("cannot serialize report: {e}")))?;
    println!("{}", report_json);
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakReport {
    card_count: usize,
    review_count: usize,
    streaks: BTreeMap<CardId, Streak>,
}
