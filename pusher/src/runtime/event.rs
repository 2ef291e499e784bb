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

//! The inbound invocation payload of a cloud function.

use crate::configs::*;
use crate::error::{PusherError, Result};
use aws_lambda_events::event::kinesis::KinesisEvent;
use aws_lambda_events::event::sqs::SqsEvent;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// An invocation event: a mapping from string keys to arbitrary JSON values.
///
/// The event is expected, but not required, to carry an ordered sequence of
/// records under the `Records` key. Both SQS and Kinesis event sources deliver
/// their batches in that envelope:
///
/// ```json
/// {
///     "Records": [
///         {
///             "messageId": "059f36b4-87a3-44ab-83d2-661975830a7d",
///             "receiptHandle": "AQEBwJnKyrHigUMZj6rYigCgxlaS3SLy0a...",
///             "body": "test",
///             "attributes": {
///                 "ApproximateReceiveCount": "1",
///                 "SentTimestamp": "1545082649183",
///                 "SenderId": "AIDAIENQZJOLO23YVJ4VO",
///                 "ApproximateFirstReceiveTimestamp": "1545082649185"
///             },
///             "messageAttributes": {},
///             "md5OfBody": "098f6bcd4621d373cade4e832627b4f6",
///             "eventSource": "aws:sqs",
///             "eventSourceARN": "arn:aws:sqs:us-east-2:123456789012:my-queue",
///             "awsRegion": "us-east-2"
///         }
///     ]
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

impl Event {
    /// Creates an empty event.
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Returns the value bound to `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Binds `value` to `key`, returning the previous value if there was one.
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.fields.insert(key.to_owned(), value)
    }

    /// The number of top-level keys in the event.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the event has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the record sequence of the event.
    ///
    /// The lookup itself never fails: a missing key and an explicit `null`
    /// both yield the absent marker. An array is borrowed as is, a string
    /// yields one record per character and an object one record per key, each
    /// as a JSON string. Iterating the absent marker, a number or a boolean is
    /// an error.
    pub fn records(&self) -> Result<Cow<'_, [Value]>> {
        let key = PUSHER_RECORDS_KEY.as_str();
        match self.get(key) {
            Some(Value::Array(records)) => Ok(Cow::Borrowed(records.as_slice())),
            Some(Value::String(text)) => Ok(Cow::Owned(
                text.chars().map(|c| Value::String(c.to_string())).collect(),
            )),
            Some(Value::Object(fields)) => Ok(Cow::Owned(
                fields.keys().map(|k| Value::String(k.clone())).collect(),
            )),
            None | Some(Value::Null) => Err(PusherError::Records(format!(
                "the event has no \"{}\" to iterate over",
                key
            ))),
            Some(other) => Err(PusherError::Records(format!(
                "\"{}\" is {}, which cannot be iterated",
                key,
                kind(other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<Map<String, Value>> for Event {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Event {
    type Error = PusherError;

    fn try_from(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl TryFrom<SqsEvent> for Event {
    type Error = PusherError;

    fn try_from(event: SqsEvent) -> Result<Self> {
        Event::try_from(serde_json::to_value(event)?)
    }
}

impl TryFrom<KinesisEvent> for Event {
    type Error = PusherError;

    fn try_from(event: KinesisEvent) -> Result<Self> {
        Event::try_from(serde_json::to_value(event)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_in_order() -> Result<()> {
        let event = Event::try_from(json!({ "Records": [{ "id": 1 }, { "id": 2 }] }))?;
        assert!(matches!(event.records()?, Cow::Borrowed(_)));
        assert_eq!(
            vec![json!({ "id": 1 }), json!({ "id": 2 })],
            event.records()?.to_vec()
        );
        Ok(())
    }

    #[test]
    fn missing_and_null_records() -> Result<()> {
        for value in [json!({}), json!({ "Records": null }), json!({ "records": [] })] {
            let event = Event::try_from(value)?;
            assert!(matches!(event.records(), Err(PusherError::Records(_))));
        }
        Ok(())
    }

    #[test]
    fn string_records_are_characters() -> Result<()> {
        let event = Event::try_from(json!({ "Records": "abc" }))?;
        assert_eq!(vec![json!("a"), json!("b"), json!("c")], event.records()?.to_vec());

        let event = Event::try_from(json!({ "Records": "" }))?;
        assert!(event.records()?.is_empty());
        Ok(())
    }

    #[test]
    fn object_records_are_keys_in_order() -> Result<()> {
        let event = Event::try_from(json!({ "Records": { "b": 2, "a": 1, "c": [3] } }))?;
        assert_eq!(vec![json!("b"), json!("a"), json!("c")], event.records()?.to_vec());
        Ok(())
    }

    #[test]
    fn scalar_records_cannot_be_iterated() -> Result<()> {
        for (value, desc) in [
            (json!(42), "\"Records\" is a number, which cannot be iterated"),
            (json!(1.5), "\"Records\" is a number, which cannot be iterated"),
            (json!(true), "\"Records\" is a boolean, which cannot be iterated"),
        ] {
            let event = Event::try_from(json!({ "Records": value }))?;
            match event.records() {
                Err(PusherError::Records(d)) => assert_eq!(desc, d),
                other => panic!("unexpected result: {:?}", other),
            }
        }
        Ok(())
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(matches!(
            Event::try_from(json!([1, 2, 3])),
            Err(PusherError::SerdeJson(_))
        ));
    }

    #[test]
    fn transparent_serde() -> Result<()> {
        let mut event = Event::new();
        assert!(event.is_empty());
        event.insert("Records", json!([]));
        event.insert("source", json!("api"));
        assert_eq!(2, event.len());
        assert_eq!(
            json!({ "Records": [], "source": "api" }),
            serde_json::to_value(&event)?
        );
        Ok(())
    }
}
