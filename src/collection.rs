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

use std::env::current_dir;
use std::path::PathBuf;

use crate::db::Database;
use crate::error::Error;
use crate::error::Fallible;
use crate::error::fail;

/// The collection file name used when no path is given.
const DEFAULT_COLLECTION: &str = "collection.db";

/// An open collection. The host (or the bundled CLI) opens it and hands the
/// database handle to the update pipeline; nothing here reads ambient
/// global state.
pub struct Collection {
    pub path: PathBuf,
    pub db: Database,
}

impl Collection {
    pub fn open(path: Option<String>) -> Fallible<Self> {
        let path: PathBuf = match path {
            Some(path) => PathBuf::from(path),
            None => current_dir()?.join(DEFAULT_COLLECTION),
        };
        if !path.exists() {
            return fail("collection does not exist.");
        }
        let path = path.canonicalize()?;
        let path_str: &str = path
            .to_str()
            .ok_or_else(|| Error::unavailable("invalid collection path"))?;
        let db = Database::new(path_str)?;
        Ok(Self { path, db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_existent_collection() {
        let result = Collection::open(Some("./derpherp.db".to_string()));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: collection does not exist.");
    }

    #[test]
    fn test_open_existing_collection() -> Fallible<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.db");
        std::fs::File::create(&path).unwrap();
        let collection = Collection::open(Some(path.display().to_string()))?;
        assert_eq!(collection.db.card_count()?, 0);
        Ok(())
    }
}
