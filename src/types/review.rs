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

use crate::types::card_id::CardId;
use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// The id the review log assigns to an event. Monotonically increasing in
/// insertion order.
pub type ReviewId = i64;

/// One entry in the review log: the user graded their recall of a card at a
/// point in time. Immutable once recorded.
#[derive(Clone, Copy, Debug)]
pub struct ReviewEvent {
    pub review_id: ReviewId,
    pub card_id: CardId,
    pub reviewed_at: Timestamp,
    pub grade: Grade,
}
