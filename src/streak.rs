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

use crate::types::card_id::CardId;
use crate::types::review::ReviewEvent;

/// A card's streak: the number of consecutive most-recent reviews that were
/// successful, counted backward from the latest review and reset by the
/// first failure.
pub type Streak = u32;

/// Compute the streak of every card that appears in the review log.
///
/// Cards with no review events produce no entry; consumers treat absence as
/// a streak of zero. The result depends only on the `(reviewed_at,
/// review_id, grade)` tuples, not on the order events are stored in:
/// per-card history is sorted chronologically, with the log id breaking
/// timestamp ties so that the most-recently-logged event wins.
pub fn compute_streaks(events: &[ReviewEvent]) -> HashMap<CardId, Streak> {
    let mut history: HashMap<CardId, Vec<&ReviewEvent>> = HashMap::new();
    for event in events {
        history.entry(event.card_id).or_default().push(event);
    }
    let mut streaks = HashMap::with_capacity(history.len());
    for (card_id, mut events) in history {
        events.sort_by_key(|event| (event.reviewed_at, event.review_id));
        let streak = events
            .iter()
            .rev()
            .take_while(|event| event.grade.is_success())
            .count() as Streak;
        streaks.insert(card_id, streak);
    }
    streaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::grade::Grade;
    use crate::types::review::ReviewId;
    use crate::types::timestamp::Timestamp;

    fn event(card_id: i64, review_id: ReviewId, seconds: i64, grade: Grade) -> ReviewEvent {
        ReviewEvent {
            review_id,
            card_id: CardId::new(card_id),
            reviewed_at: Timestamp::from_epoch_seconds(seconds).unwrap(),
            grade,
        }
    }

    #[test]
    fn test_empty_log() {
        let streaks = compute_streaks(&[]);
        assert!(streaks.is_empty());
    }

    #[test]
    fn test_all_successful() {
        let events = vec![
            event(1, 1, 10, Grade::Good),
            event(1, 2, 20, Grade::Hard),
            event(1, 3, 30, Grade::Easy),
        ];
        let streaks = compute_streaks(&events);
        assert_eq!(streaks[&CardId::new(1)], 3);
    }

    #[test]
    fn test_stops_at_failure() {
        let events = vec![
            event(1, 1, 10, Grade::Forgot),
            event(1, 2, 20, Grade::Good),
            event(1, 3, 30, Grade::Good),
        ];
        let streaks = compute_streaks(&events);
        assert_eq!(streaks[&CardId::new(1)], 2);
    }

    #[test]
    fn test_failure_most_recent() {
        let events = vec![
            event(1, 1, 10, Grade::Good),
            event(1, 2, 20, Grade::Good),
            event(1, 3, 30, Grade::Forgot),
        ];
        let streaks = compute_streaks(&events);
        // The card is still present in the result, with a streak of zero.
        assert_eq!(streaks[&CardId::new(1)], 0);
    }

    #[test]
    fn test_tie_break_on_equal_timestamps() {
        // Same timestamp: the higher log id is the more recent event.
        let events = vec![
            event(1, 1, 10, Grade::Good),
            event(1, 2, 10, Grade::Forgot),
        ];
        let streaks = compute_streaks(&events);
        assert_eq!(streaks[&CardId::new(1)], 0);

        let events = vec![
            event(1, 1, 10, Grade::Forgot),
            event(1, 2, 10, Grade::Good),
        ];
        let streaks = compute_streaks(&events);
        assert_eq!(streaks[&CardId::new(1)], 1);
    }

    #[test]
    fn test_storage_order_is_irrelevant() {
        let mut events = vec![
            event(1, 3, 30, Grade::Good),
            event(1, 1, 10, Grade::Forgot),
            event(1, 2, 20, Grade::Good),
        ];
        let forward = compute_streaks(&events);
        events.reverse();
        let backward = compute_streaks(&events);
        assert_eq!(forward, backward);
        assert_eq!(forward[&CardId::new(1)], 2);
    }

    #[test]
    fn test_multiple_cards() {
        let events = vec![
            event(1, 1, 10, Grade::Good),
            event(2, 2, 20, Grade::Forgot),
            event(1, 3, 30, Grade::Good),
            event(2, 4, 40, Grade::Good),
            event(3, 5, 50, Grade::Forgot),
        ];
        let streaks = compute_streaks(&events);
        assert_eq!(streaks.len(), 3);
        assert_eq!(streaks[&CardId::new(1)], 2);
        assert_eq!(streaks[&CardId::new(2)], 1);
        assert_eq!(streaks[&CardId::new(3)], 0);
    }
}
