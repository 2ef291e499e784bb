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

//! This module provides various default configurations for Pusher.

mod pusher;
pub use self::pusher::PUSHER_CONF;
use lazy_static::lazy_static;

lazy_static! {
    /// The event key holding the record sequence.
    pub static ref PUSHER_RECORDS_KEY: String = PUSHER_CONF["event"]["records_key"].to_string();

    /// The status code of the acknowledgement.
    pub static ref PUSHER_ACK_STATUS_CODE: i64 = PUSHER_CONF["response"]["status_code"].parse::<i64>().unwrap();
    /// The content type of the acknowledgement.
    pub static ref PUSHER_ACK_CONTENT_TYPE: String = PUSHER_CONF["response"]["content_type"].to_string();
    /// The body of the acknowledgement.
    pub static ref PUSHER_ACK_BODY: String = PUSHER_CONF["response"]["body"].to_string();

    /// Default log filter, overridden by `RUST_LOG`.
    pub static ref PUSHER_LOG_LEVEL: String = PUSHER_CONF["log"]["level"].to_string();
    /// Log target of the per-record lines.
    pub static ref PUSHER_RECORD_LOG_TARGET: String = PUSHER_CONF["log"]["record_target"].to_string();
}
