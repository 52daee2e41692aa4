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

use cardstreak::db::Database;
use cardstreak::error::Fallible;
use cardstreak::types::card_id::CardId;
use cardstreak::types::grade::Grade;
use cardstreak::types::timestamp::Timestamp;
use cardstreak::update::MissingPolicy;
use cardstreak::update::update_streaks;
use tempfile::tempdir;

fn at(seconds: i64) -> Timestamp {
    Timestamp::from_epoch_seconds(seconds).unwrap()
}

#[test]
fn test_full_pipeline_on_disk() -> Fallible<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collection.db");
    let path = path.to_str().unwrap();

    // The host populates the collection.
    {
        let db = Database::new(path)?;
        let c = CardId::new(1);
        let d = CardId::new(2);
        db.add_card(c, at(0))?;
        db.add_card(d, at(0))?;
        db.record_review(c, at(1), Grade::Forgot)?;
        db.record_review(c, at(2), Grade::Good)?;
        db.record_review(c, at(3), Grade::Good)?;
    }

    // A later invocation updates the streaks.
    {
        let mut db = Database::new(path)?;
        let updated = update_streaks(&mut db, MissingPolicy::ResetToZero)?;
        assert_eq!(updated, 2);
    }

    // The results are durable and visible to a fresh handle.
    let db = Database::new(path)?;
    assert_eq!(db.custom_data(CardId::new(1))?.unwrap(), r#"{"streak":2}"#);
    assert_eq!(db.custom_data(CardId::new(2))?.unwrap(), r#"{"streak":0}"#);
    Ok(())
}

#[test]
fn test_repeated_runs_are_stable() -> Fallible<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collection.db");
    let path = path.to_str().unwrap();

    let mut db = Database::new(path)?;
    let card_id = CardId::new(1);
    db.add_card(card_id, at(0))?;
    db.record_review(card_id, at(1), Grade::Good)?;
    db.record_review(card_id, at(1), Grade::Forgot)?;
    db.record_review(card_id, at(2), Grade::Easy)?;

    update_streaks(&mut db, MissingPolicy::ResetToZero)?;
    let once = db.custom_data(card_id)?.unwrap();
    update_streaks(&mut db, MissingPolicy::ResetToZero)?;
    assert_eq!(db.custom_data(card_id)?.unwrap(), once);

    // The Forgot at t=1 was logged after the Good at t=1, so only the Easy
    // at t=2 counts.
    assert_eq!(once, r#"{"streak":1}"#);
    Ok(())
}

#[test]
fn test_grading_after_an_update_and_rerunning() -> Fallible<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collection.db");
    let path = path.to_str().unwrap();

    let mut db = Database::new(path)?;
    let card_id = CardId::new(1);
    db.add_card(card_id, at(0))?;
    db.record_review(card_id, at(1), Grade::Good)?;
    update_streaks(&mut db, MissingPolicy::ResetToZero)?;
    assert_eq!(db.custom_data(card_id)?.unwrap(), r#"{"streak":1}"#);

    db.record_review(card_id, at(2), Grade::Forgot)?;
    update_streaks(&mut db, MissingPolicy::ResetToZero)?;
    assert_eq!(db.custom_data(card_id)?.unwrap(), r#"{"streak":0}"#);

    db.record_review(card_id, at(3), Grade::Hard)?;
    db.record_review(card_id, at(4), Grade::Good)?;
    update_streaks(&mut db, MissingPolicy::ResetToZero)?;
    assert_eq!(db.custom_data(card_id)?.unwrap(), r#"{"streak":2}"#);
    Ok(())
}
