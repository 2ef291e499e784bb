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

//! The `aws` module contains the AWS-specific parts of the `pusher-function`
//! library.

use lambda_runtime::LambdaEvent;
use log::debug;
use pusher::prelude::*;
use serde_json::Value;

/// The endpoint for function invocations from the Lambda runtime.
///
/// # Arguments
/// * `event` - The decoded payload of the invocation and its context.
///
/// # Returns
/// The acknowledgement as a JSON object. An event without a record sequence
/// is reported back to the runtime as a failed invocation.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Value> {
    debug!(
        "AWS Lambda function architecture: {}",
        std::env::consts::ARCH
    );

    let event_in = Event::try_from(event.payload)?;
    let response = handle(&event_in, &event.context, &mut LogSink)?;
    debug!("[OK] Batch acknowledged with status {}.", response.status_code);

    response.to_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn handler_handles() -> Result<()> {
        let event = LambdaEvent {
            payload: json!({ "Records": [{ "id": 1 }, { "id": 2 }] }),
            context: Context::default(),
        };

        assert_eq!(
            handler(event).await?,
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "text/plain" },
                "body": "ACK"
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn handler_fails_without_records() {
        let event = LambdaEvent {
            payload: json!({}),
            context: Context::default(),
        };

        assert!(matches!(
            handler(event).await,
            Err(PusherError::Records(_))
        ));
    }
}
