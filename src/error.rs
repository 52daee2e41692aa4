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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::card_id::CardId;

pub type Fallible<T> = Result<T, Error>;

/// The ways an update run can fail.
#[derive(Debug)]
pub enum Error {
    /// The collection store or the review log cannot be opened or read.
    /// Raised before any mutation is attempted.
    DataUnavailable { message: String },
    /// A single card's replacement custom data document could not be formed.
    MalformedRecord { card_id: CardId, message: String },
    /// The batch transaction could not begin or commit. The transaction is
    /// rolled back, leaving the collection in its prior state.
    Persistence { message: String },
}

impl Error {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Error::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn malformed(card_id: CardId, message: impl Into<String>) -> Self {
        Error::MalformedRecord {
            card_id,
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Error::Persistence {
            message: message.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DataUnavailable { message } => {
                write!(f, "error: {message}")
            }
            Error::MalformedRecord { card_id, message } => {
                write!(f, "error: card {card_id}: {message}")
            }
            Error::Persistence { message } => {
                write!(f, "error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::unavailable(err.to_string())
    }
}

/// Shorthand to construct a `DataUnavailable` failure.
pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(Error::unavailable(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::unavailable("collection does not exist.");
        assert_eq!(err.to_string(), "error: collection does not exist.");
        let err = Error::malformed(CardId::new(7), "cannot serialize document");
        assert_eq!(err.to_string(), "error: card 7: cannot serialize document");
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail("nope");
        assert!(result.is_err());
    }
}
