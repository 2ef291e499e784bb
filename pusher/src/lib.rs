// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(missing_docs, clippy::needless_borrow)]

//! Pusher is the tail end of an API Gateway -> SQS -> Lambda pipeline: it
//! receives batches of queue records, logs every record, and acknowledges the
//! batch with a fixed HTTP-style response.

pub mod configs;
pub mod error;
pub mod prelude;
pub mod runtime;
pub mod sink;
pub mod test_util;
