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

use serde_json::Map;
use serde_json::Value;

use crate::error::Error;
use crate::error::Fallible;
use crate::streak::Streak;
use crate::types::card_id::CardId;

/// The key reserved for the streak count. Everything else in the document
/// belongs to other tools and must survive an update byte-for-byte.
pub const STREAK_KEY: &str = "streak";

/// A card's custom data: a flat JSON object serialized as text in the card
/// record. An empty string means the card has no custom data yet.
pub struct CustomData {
    card_id: CardId,
    document: Map<String, Value>,
}

impl CustomData {
    /// Parse the raw stored text. Absent, malformed, or non-object text
    /// degrades to an empty document, so one corrupt card never poisons the
    /// whole batch.
    pub fn parse(card_id: CardId, raw: &str) -> Self {
        if raw.is_empty() {
            return Self::empty(card_id);
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(document)) => Self { card_id, document },
            Ok(_) => {
                log::warn!("Card {card_id}: custom data is not an object, starting over.");
                Self::empty(card_id)
            }
            Err(e) => {
                log::warn!("Card {card_id}: cannot parse custom data ({e}), starting over.");
                Self::empty(card_id)
            }
        }
    }

    fn empty(card_id: CardId) -> Self {
        Self {
            card_id,
            document: Map::new(),
        }
    }

    /// Set the streak key, overwriting any previous value. Other keys keep
    /// their values and their position in the document.
    pub fn set_streak(&mut self, streak: Streak) {
        self.document
            .insert(STREAK_KEY.to_string(), Value::from(streak));
    }

    /// Serialize back to the storage representation.
    pub fn to_raw(&self) -> Fallible<String> {
        serde_json::to_string(&self.document)
            .map_err(|e| Error::malformed(self.card_id, format!("cannot serialize custom data: {e}")))
    }
}
