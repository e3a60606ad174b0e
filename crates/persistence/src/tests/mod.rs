// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence tests.
//!
//! All tests run against isolated in-memory `SQLite` databases. The same
//! code paths serve the `MySQL` backend through the `backend_fn!` pairs.
