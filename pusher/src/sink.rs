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

//! This module provides the diagnostic channels a handler writes its records
//! to. Keeping the channel behind [`RecordSink`] leaves the response
//! construction free of side effects.

use crate::configs::*;
use crate::error::Result;
use log::info;
use serde_json::Value;
use std::io::{self, Write};

/// Renders a record as one human-readable line (compact JSON).
pub fn render(record: &Value) -> String {
    record.to_string()
}

/// A diagnostic channel that receives one line per record.
pub trait RecordSink {
    /// Emits a single record.
    fn emit(&mut self, record: &Value) -> Result<()>;
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn emit(&mut self, record: &Value) -> Result<()> {
        (**self).emit(record)
    }
}

/// Writes records through the `log` facade. This is what the deployed
/// function uses: the logger writes to stderr, which ends up in CloudWatch
/// Logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RecordSink for LogSink {
    fn emit(&mut self, record: &Value) -> Result<()> {
        info!(target: PUSHER_RECORD_LOG_TARGET.as_str(), "{}", render(record));
        Ok(())
    }
}

/// Writes one line per record to any writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl WriterSink<io::Stdout> {
    /// A sink printing to the standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink on top of `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for WriterSink<W> {
    fn emit(&mut self, record: &Value) -> Result<()> {
        writeln!(self.writer, "{}", render(record))?;
        Ok(())
    }
}

/// Keeps the rendered lines in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines emitted so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl RecordSink for MemorySink {
    fn emit(&mut self, record: &Value) -> Result<()> {
        self.lines.push(render(record));
        Ok(())
    }
}
