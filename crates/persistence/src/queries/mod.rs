// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries.
//!
//! Every function here is generated by `backend_fn!` into `_sqlite` and
//! `_mysql` variants; dispatch happens exclusively in the `Persistence`
//! adapter.

pub mod calendar;
pub mod departments;
pub mod statuses;
pub mod users;
