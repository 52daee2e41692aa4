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

//! Recompute, for every card in a spaced repetition collection, the length
//! of its current streak of consecutive successful reviews, and merge that
//! count into the card's custom data for downstream scheduling logic to
//! consume.

pub mod cli;
pub mod cmd;
pub mod collection;
pub mod custom_data;
pub mod db;
pub mod error;
pub mod streak;
pub mod types;
pub mod update;
