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

use std::collections::HashMap;

use crate::custom_data::CustomData;
use crate::db::Database;
use crate::db::card_custom_data;
use crate::db::write_custom_data;
use crate::error::Error;
use crate::error::Fallible;
use crate::streak::Streak;
use crate::streak::compute_streaks;
use crate::types::card_id::CardId;

/// What to do with cards that have no review history. Such cards produce no
/// entry in the streak mapping, so the caller has to decide whether their
/// stored streak is stale state to flush or data to keep.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MissingPolicy {
    /// Write a streak of zero, flushing values left over from earlier runs.
    ResetToZero,
    /// Leave the card's custom data entirely untouched.
    LeaveUntouched,
}

/// Recompute every card's streak from the review log and write the counts
/// into the cards' custom data. Returns the number of cards updated.
///
/// The aggregation completes in memory before any write is staged, so a
/// failure while reading the log leaves the collection untouched.
pub fn update_streaks(db: &mut Database, policy: MissingPolicy) -> Fallible<usize> {
    let events = db.review_log()?;
    let streaks = compute_streaks(&events);
    log::debug!(
        "Computed streaks for {} cards from {} review events.",
        streaks.len(),
        events.len()
    );
    apply_streaks(db, &streaks, policy)
}

/// Write a streak mapping into the cards' custom data, one transaction for
/// the whole batch: either every card's custom data is consistent with the
/// mapping afterward, or the collection is untouched.
pub fn apply_streaks(
    db: &mut Database,
    streaks: &HashMap<CardId, Streak>,
    policy: MissingPolicy,
) -> Fallible<usize> {
    let tx = db.transaction()?;
    let cards = card_custom_data(&tx)?;
    let mut updated = 0;
    for (card_id, raw) in cards {
        let streak = match streaks.get(&card_id) {
            Some(streak) => *streak,
            None => match policy {
                MissingPolicy::ResetToZero => 0,
                MissingPolicy::LeaveUntouched => continue,
            },
        };
        let mut custom_data = CustomData::parse(card_id, &raw);
        custom_data.set_streak(streak);
        let raw = match custom_data.to_raw() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Skipping: {e}");
                continue;
            }
        };
        write_custom_data(&tx, card_id, &raw)?;
        updated += 1;
    }
    tx.commit()
        .map_err(|e| Error::persistence(format!("cannot commit custom data update: {e}")))?;
    log::debug!("Updated custom data for {updated} cards.");
    Ok(updated)
}
