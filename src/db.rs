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

use rusqlite::Connection;
use rusqlite::Transaction;
use rusqlite::config::DbConfig;

use crate::error::Error;
use crate::error::Fallible;
use crate::types::card_id::CardId;
use crate::types::grade::Grade;
use crate::types::review::ReviewEvent;
use crate::types::review::ReviewId;
use crate::types::timestamp::Timestamp;

/// A handle to an open collection database. Owns a single connection; the
/// caller is responsible for not running two updates against the same
/// collection at once.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)
            .map_err(|e| Error::unavailable(format!("cannot open collection: {e}")))?;
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)
            .map_err(|e| Error::unavailable(format!("cannot configure collection: {e}")))?;
        {
            let tx = conn
                .transaction()
                .map_err(|e| Error::unavailable(format!("cannot open collection: {e}")))?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))
                    .map_err(|e| Error::unavailable(format!("cannot create schema: {e}")))?;
                tx.commit()
                    .map_err(|e| Error::unavailable(format!("cannot create schema: {e}")))?;
            }
        }
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn in_memory() -> Fallible<Self> {
        let mut conn = Connection::open_in_memory()
            .map_err(|e| Error::unavailable(format!("cannot open collection: {e}")))?;
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)
            .map_err(|e| Error::unavailable(format!("cannot configure collection: {e}")))?;
        let tx = conn
            .transaction()
            .map_err(|e| Error::unavailable(format!("cannot open collection: {e}")))?;
        tx.execute_batch(include_str!("schema.sql"))
            .map_err(|e| Error::unavailable(format!("cannot create schema: {e}")))?;
        tx.commit()
            .map_err(|e| Error::unavailable(format!("cannot create schema: {e}")))?;
        Ok(Self { conn })
    }

    /// Register a new card. Card ids are assigned by the host application.
    pub fn add_card(&self, card_id: CardId, added_at: Timestamp) -> Fallible<()> {
        log::debug!("Adding new card: {card_id}");
        let sql = "insert into cards (card_id, added_at) values (?, ?);";
        self.conn
            .execute(sql, (card_id, added_at))
            .map_err(|e| Error::persistence(format!("cannot add card: {e}")))?;
        Ok(())
    }

    /// Append a review event to the log, returning the assigned log id.
    pub fn record_review(
        &self,
        card_id: CardId,
        reviewed_at: Timestamp,
        grade: Grade,
    ) -> Fallible<ReviewId> {
        let sql =
            "insert into reviews (card_id, reviewed_at, grade) values (?, ?, ?) returning review_id;";
        let review_id: ReviewId = self
            .conn
            .query_row(sql, (card_id, reviewed_at, grade), |row| row.get(0))
            .map_err(|e| Error::persistence(format!("cannot record review: {e}")))?;
        Ok(review_id)
    }

    /// Read the full review log.
    pub fn review_log(&self) -> Fallible<Vec<ReviewEvent>> {
        read_review_log(&self.conn)
            .map_err(|e| Error::unavailable(format!("cannot read review log: {e}")))
    }

    /// Return the ids of every card in the collection.
    pub fn card_ids(&self) -> Fallible<Vec<CardId>> {
        read_card_ids(&self.conn)
            .map_err(|e| Error::unavailable(format!("cannot read cards: {e}")))
    }

    /// Get a card's raw custom data text. Returns None if there is no card
    /// with the given id; an empty string means the card has no custom data.
    pub fn custom_data(&self, card_id: CardId) -> Fallible<Option<String>> {
        read_custom_data(&self.conn, card_id)
            .map_err(|e| Error::unavailable(format!("cannot read custom data: {e}")))
    }

    pub fn card_count(&self) -> Fallible<usize> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from cards;", [], |row| row.get(0))
            .map_err(|e| Error::unavailable(format!("cannot read cards: {e}")))?;
        Ok(count as usize)
    }

    pub fn review_count(&self) -> Fallible<usize> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from reviews;", [], |row| row.get(0))
            .map_err(|e| Error::unavailable(format!("cannot read review log: {e}")))?;
        Ok(count as usize)
    }

    /// Begin the batch transaction. Dropping the transaction without
    /// committing rolls every staged write back.
    pub fn transaction(&mut self) -> Fallible<Transaction<'_>> {
        self.conn
            .transaction()
            .map_err(|e| Error::persistence(format!("cannot begin transaction: {e}")))
    }
}

fn read_review_log(conn: &Connection) -> rusqlite::Result<Vec<ReviewEvent>> {
    let sql = "select review_id, card_id, reviewed_at, grade from reviews order by review_id;";
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut events = Vec::new();
    while let Some(row) = rows.next()? {
        events.push(ReviewEvent {
            review_id: row.get(0)?,
            card_id: row.get(1)?,
            reviewed_at: row.get(2)?,
            grade: row.get(3)?,
        });
    }
    Ok(events)
}

fn read_card_ids(conn: &Connection) -> rusqlite::Result<Vec<CardId>> {
    let mut stmt = conn.prepare("select card_id from cards order by card_id;")?;
    let mut rows = stmt.query([])?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next()? {
        ids.push(row.get(0)?);
    }
    Ok(ids)
}

fn read_custom_data(conn: &Connection, card_id: CardId) -> rusqlite::Result<Option<String>> {
    let sql = "select custom_data from cards where card_id = ?;";
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([card_id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

/// Read every card's id and raw custom data text within the batch
/// transaction.
pub(crate) fn card_custom_data(tx: &Transaction) -> Fallible<Vec<(CardId, String)>> {
    let inner = || -> rusqlite::Result<Vec<(CardId, String)>> {
        let sql = "select card_id, custom_data from cards order by card_id;";
        let mut stmt = tx.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next()? {
            cards.push((row.get(0)?, row.get(1)?));
        }
        Ok(cards)
    };
    inner().map_err(|e| Error::unavailable(format!("cannot read custom data: {e}")))
}

/// Stage one card's replacement custom data text on the batch transaction.
pub(crate) fn write_custom_data(tx: &Transaction, card_id: CardId, raw: &str) -> Fallible<()> {
    let sql = "update cards set custom_data = ? where card_id = ?;";
    tx.execute(sql, (raw, card_id))
        .map_err(|e| Error::persistence(format!("cannot write custom data: {e}")))?;
    Ok(())
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx
        .query_row(sql, ["cards"], |row| row.get(0))
        .map_err(|e| Error::unavailable(format!("cannot probe schema: {e}")))?;
    Ok(count > 0)
}
