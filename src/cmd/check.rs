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

use crate::collection::Collection;
use crate::error::Fallible;

pub fn check_collection(collection: Option<String>) -> Fallible<()> {
    let collection = Collection::open(collection)?;
    let card_count = collection.db.card_count()?;
    let review_count = collection.db.review_count()?;
    println!("ok: {card_count} cards, {review_count} reviews.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_collection;

    #[test]
    fn test_non_existent_collection() {
        assert!(check_collection(Some("./derpherp.db".to_string())).is_err());
    }
}
