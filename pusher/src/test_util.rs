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

//! Common unit test utility methods

use chrono::Utc;
use fake::{Fake, Faker};
use serde_json::{json, Value};
use uuid::Uuid;

const REGION: &str = "us-east-2";
const QUEUE_ARN: &str = "arn:aws:sqs:us-east-2:123456789012:sqs-pusher-queue";
const STREAM_ARN: &str = "arn:aws:kinesis:us-east-2:123456789012:stream/lambda-stream";

/// Generate a random SQS message whose body is `body`.
///
/// API Gateway forwards each request body to the queue unchanged, so the body
/// is whatever the client posted.
pub fn sqs_message(body: &str) -> Value {
    let now = Utc::now().timestamp_millis();
    json!({
        "messageId": Uuid::new_v4().to_string(),
        "receiptHandle": base64::encode(Uuid::new_v4().as_bytes()),
        "body": body,
        "md5OfBody": Uuid::new_v4().to_simple().to_string(),
        "md5OfMessageAttributes": null,
        "attributes": {
            "ApproximateReceiveCount": "1",
            "SentTimestamp": now.to_string(),
            "SenderId": "AIDAIENQZJOLO23YVJ4VO",
            "ApproximateFirstReceiveTimestamp": (now + 2).to_string()
        },
        "messageAttributes": {},
        "eventSource": "aws:sqs",
        "eventSourceARN": QUEUE_ARN,
        "awsRegion": REGION
    })
}

/// Generate a random SQS event.
///
/// Lambda polls the queue and invokes the function synchronously with an
/// event that contains a batch of queue messages.
///
/// More details: <https://docs.aws.amazon.com/lambda/latest/dg/with-sqs.html>
///
/// # Arguments
///
/// * `num`: the number of records in the event.
///
/// # Return
///
/// A valid JSON [value](serde_json::Value) representing the SQS event.
pub fn random_sqs_event(num: usize) -> Value {
    let records = (0..num)
        .map(|_| sqs_message(&Faker.fake::<String>()))
        .collect::<Vec<_>>();
    json!({ "Records": records })
}

/// Generate a random Kinesis event.
///
/// # Arguments
///
/// * `num`: the number of records in the event.
///
/// # Return
///
/// A valid JSON [value](serde_json::Value) representing the Kinesis event.
/// The data of each record is a base64 encoded random string.
pub fn random_kinesis_event(num: usize) -> Value {
    let arrival = Utc::now().timestamp_millis() as f64 / 1000.0;
    let records = (0..num)
        .map(|i| {
            let sequence_number = format!("4959033827149025660855969253836157109592157598913658{:04}", i);
            json!({
                "kinesis": {
                    "kinesisSchemaVersion": "1.0",
                    "partitionKey": "1",
                    "sequenceNumber": sequence_number,
                    "data": base64::encode(Faker.fake::<String>()),
                    "approximateArrivalTimestamp": arrival
                },
                "eventSource": "aws:kinesis",
                "eventVersion": "1.0",
                "eventID": format!("shardId-000000000006:{}", sequence_number),
                "eventName": "aws:kinesis:record",
                "invokeIdentityArn": "arn:aws:iam::123456789012:role/lambda-role",
                "awsRegion": REGION,
                "eventSourceARN": STREAM_ARN
            })
        })
        .collect::<Vec<_>>();
    json!({ "Records": records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::runtime::Event;
    use aws_lambda_events::event::kinesis::KinesisEvent;
    use aws_lambda_events::event::sqs::SqsEvent;

    #[tokio::test]
    async fn random_sqs_data() -> Result<()> {
        for i in 0..5 {
            let event: SqsEvent = serde_json::from_value(random_sqs_event(i))?;
            assert_eq!(event.records.len(), i);
            assert_eq!(Event::try_from(event)?.records()?.len(), i);
        }
        Ok(())
    }

    #[tokio::test]
    async fn sqs_body_is_kept() -> Result<()> {
        let event: SqsEvent = serde_json::from_value(json!({
            "Records": [sqs_message("{\"order\":7}")]
        }))?;
        assert_eq!(Some("{\"order\":7}".to_owned()), event.records[0].body);
        Ok(())
    }

    #[tokio::test]
    async fn random_kinesis_data() -> Result<()> {
        for i in 1..5 {
            let event: KinesisEvent = serde_json::from_value(random_kinesis_event(i))?;
            assert_eq!(event.records.len(), i);
            assert_eq!(Event::try_from(event)?.records()?.len(), i);
        }
        Ok(())
    }
}
