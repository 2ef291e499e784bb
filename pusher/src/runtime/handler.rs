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

//! The record batch handler.

use crate::error::Result;
use crate::runtime::event::Event;
use crate::runtime::response::Response;
use crate::sink::RecordSink;
use lambda_runtime::Context;
use log::debug;

/// Acknowledges a batch of records.
///
/// Every record under the `Records` key is emitted to `sink`, one line per
/// record and in the order of the batch, before the acknowledgement is built.
/// The context is accepted for interface compatibility with the invoker and
/// is never read.
///
/// # Arguments
/// * `event` - The invocation event.
/// * `_ctx` - The invocation context.
/// * `sink` - The diagnostic channel for the records.
///
/// # Returns
/// The fixed [acknowledgement](Response::ack). If the event has no record
/// sequence, nothing is emitted and the records error is returned instead.
pub fn handle<S>(event: &Event, _ctx: &Context, sink: &mut S) -> Result<Response>
where
    S: RecordSink + ?Sized,
{
    let records = event.records()?;
    debug!("Acknowledging {} record(s).", records.len());

    for record in records.iter() {
        sink.emit(record)?;
    }

    Ok(Response::ack())
}
