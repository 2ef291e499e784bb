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

//! This module runs the handler on the local machine, standing in for the
//! runtime's payload decoding and response encoding.

use lambda_runtime::Context;
use log::debug;
use pusher::prelude::*;

/// LocalInvoker invokes the handler locally on raw JSON payloads.
#[derive(Debug)]
pub struct LocalInvoker<S: RecordSink> {
    /// The diagnostic channel for the records.
    sink: S,
}

impl<S: RecordSink> LocalInvoker<S> {
    /// Creates an invoker that emits records to `sink`.
    pub fn new(sink: S) -> Self {
        LocalInvoker { sink }
    }

    /// Invokes the handler once.
    ///
    /// # Arguments
    /// * `payload` - The raw JSON bytes of the event.
    ///
    /// # Returns
    /// The JSON encoded response.
    pub fn invoke(&mut self, payload: &[u8]) -> Result<Vec<u8>> {
        let event: Event = serde_json::from_slice(payload)?;
        let response = handle(&event, &Context::default(), &mut self.sink)?;
        debug!("[OK] Local invocation returned {}.", response.status_code);
        Ok(serde_json::to_vec(&response)?)
    }

    /// The sink records were emitted to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the invoker, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
