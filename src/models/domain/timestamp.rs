//! Serde adapters that keep chrono timestamps in the domain while storing them
//! as BSON dates, the representation the users and questions collections hold.
//!
//! Use with `#[serde(with = "timestamp")]`, or `timestamp::option` for optional
//! fields. Precision is truncated to milliseconds on the way out.

use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    to_bson_date(value).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let date = bson::DateTime::deserialize(deserializer)?;
    from_bson_date(date).ok_or_else(|| D::Error::custom("BSON date is out of range"))
}

pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.as_ref().map(to_bson_date).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<bson::DateTime>::deserialize(deserializer)? {
            Some(date) => from_bson_date(date)
                .map(Some)
                .ok_or_else(|| D::Error::custom("BSON date is out of range")),
            None => Ok(None),
        }
    }
}

fn to_bson_date(value: &DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_date(date: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis())
}
