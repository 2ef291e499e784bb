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

//! The HTTP-style response returned to the invoker, in the shape of an API
//! Gateway proxy integration response.

use crate::configs::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The response of a cloud function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The HTTP status code.
    pub status_code: i64,
    /// The HTTP headers.
    pub headers:     HashMap<String, String>,
    /// The response body.
    pub body:        String,
}

impl Response {
    /// The acknowledgement of a record batch: status `200`, a plain-text
    /// content type and the body `ACK`.
    ///
    /// Every call builds a fresh value; the acknowledgement never depends on
    /// the event it answers.
    pub fn ack() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_owned(), PUSHER_ACK_CONTENT_TYPE.to_string());
        Response {
            status_code: *PUSHER_ACK_STATUS_CODE,
            headers,
            body: PUSHER_ACK_BODY.to_string(),
        }
    }

    /// Encodes the response as a JSON value for the invoker.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn ack_wire_shape() -> Result<()> {
        assert_eq!(
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "text/plain" },
                "body": "ACK"
            }),
            Response::ack().to_value()?
        );
        Ok(())
    }

    #[tokio::test]
    async fn ack_decodes_back() -> Result<()> {
        let text = r#"{"statusCode":200,"headers":{"Content-Type":"text/plain"},"body":"ACK"}"#;
        let response: Response = serde_json::from_str(text)?;
        assert_eq!(Response::ack(), response);
        Ok(())
    }
}
