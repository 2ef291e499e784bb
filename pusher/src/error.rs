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

//! Pusher error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// Result type for operations that could result in an [PusherError]
pub type Result<T> = result::Result<T, PusherError>;

/// Pusher error
#[derive(Debug)]
pub enum PusherError {
    /// Error returned when the event carries no record sequence: the records
    /// key is missing, null, or bound to a value that cannot be iterated.
    /// No response is produced for such an event.
    Records(String),
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error associated to I/O operations and associated traits.
    IoError(io::Error),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
}

impl From<io::Error> for PusherError {
    fn from(e: io::Error) -> Self {
        PusherError::IoError(e)
    }
}

impl From<serde_json::Error> for PusherError {
    fn from(e: serde_json::Error) -> Self {
        PusherError::SerdeJson(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for PusherError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        PusherError::LambdaError(e)
    }
}

impl Display for PusherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            PusherError::Records(ref desc) => write!(f, "Records error: {}", desc),
            PusherError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            PusherError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            PusherError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
        }
    }
}

impl error::Error for PusherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_error_display() {
        let e = PusherError::Records("the event has no \"Records\" key".to_owned());
        assert_eq!(
            "Records error: the event has no \"Records\" key",
            format!("{}", e)
        );
    }

    #[test]
    fn boxed_errors_become_lambda_errors() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "runtime went away".into();
        match PusherError::from(boxed) {
            PusherError::LambdaError(e) => assert_eq!("runtime went away", e.to_string()),
            e => panic!("unexpected error: {}", e),
        }
    }
}
