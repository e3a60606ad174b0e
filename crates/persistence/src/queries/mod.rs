// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries for the planner tables.
//!
//! All queries use Diesel DSL and work across both supported database
//! backends. Backend dispatch happens in the `Persistence` adapter.

pub mod calendar;
pub mod membership;
pub mod points;
pub mod tours;
