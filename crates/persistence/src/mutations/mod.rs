// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutations for the planner tables.
//!
//! Most mutations use Diesel DSL, with minimal backend-specific helpers
//! abstracted via the `PersistenceBackend` trait. Multi-statement writes
//! run inside a transaction.

pub mod calendar;
pub mod membership;
pub mod points;
pub mod tours;
