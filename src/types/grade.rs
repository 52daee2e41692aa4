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

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;

use crate::error::fail;

/// How the user graded their recall of a card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Grade {
    Forgot,
    Hard,
    Good,
    Easy,
}

impl Grade {
    /// Every grade above `Forgot` counts as a successful review.
    pub fn is_success(self) -> bool {
        !matches!(self, Grade::Forgot)
    }

    fn as_str(&self) -> &str {
        match self {
            Grade::Forgot => "forgot",
            Grade::Hard => "hard",
            Grade::Good => "good",
            Grade::Easy => "easy",
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = crate::error::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "forgot" => Ok(Grade::Forgot),
            "hard" => Ok(Grade::Hard),
            "good" => Ok(Grade::Good),
            "easy" => Ok(Grade::Easy),
            _ => fail(format!("Invalid grade: {}", value)),
        }
    }
}

impl ToSql for Grade {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Grade {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        Grade::try_from(string).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_classification() {
        assert!(!Grade::Forgot.is_success());
        assert!(Grade::Hard.is_success());
        assert!(Grade::Good.is_success());
        assert!(Grade::Easy.is_success());
    }

    #[test]
    fn test_invalid_grade() {
        assert!(Grade::try_from("meh".to_string()).is_err());
    }
}
