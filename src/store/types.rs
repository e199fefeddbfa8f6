//! Coaster record types.
//!
//! Field names on the wire are PascalCase (`Name`, `InPark`, `ID`, ...).
//! Input keys are matched regardless of case.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored coaster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coaster {
    /// Ride name.
    pub name: String,
    /// Company that built the ride.
    pub manufacturer: String,
    /// Server-generated identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Park the ride is located in.
    pub in_park: String,
    /// Height in feet.
    pub height: i64,
}

/// Payload accepted when creating a coaster.
///
/// Keys are matched case-insensitively (`NAME`, `inpark`, `Height` all
/// work), `park` and `in_park` are accepted for the park, and when a field
/// appears more than once the last value wins. Missing fields and `null`
/// values fall back to empty values. Unknown keys, including a
/// client-sent `ID`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCoaster {
    /// Ride name.
    pub name: String,
    /// Company that built the ride.
    pub manufacturer: String,
    /// Park the ride is located in.
    pub in_park: String,
    /// Height in feet.
    pub height: i64,
}

/// Field a payload key resolves to.
enum Field {
    Name,
    Manufacturer,
    InPark,
    Height,
    Other,
}

impl Field {
    fn from_key(key: &str) -> Self {
        const KEYS: [(&str, Field); 6] = [
            ("name", Field::Name),
            ("manufacturer", Field::Manufacturer),
            ("inpark", Field::InPark),
            ("in_park", Field::InPark),
            ("park", Field::InPark),
            ("height", Field::Height),
        ];

        for (name, field) in KEYS {
            if key.eq_ignore_ascii_case(name) {
                return field;
            }
        }
        Field::Other
    }
}

struct NewCoasterVisitor;

impl<'de> Visitor<'de> for NewCoasterVisitor {
    type Value = NewCoaster;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a coaster object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut coaster = NewCoaster::default();

        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::Name => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        coaster.name = v;
                    }
                }
                Field::Manufacturer => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        coaster.manufacturer = v;
                    }
                }
                Field::InPark => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        coaster.in_park = v;
                    }
                }
                Field::Height => {
                    if let Some(v) = map.next_value::<Option<i64>>()? {
                        coaster.height = v;
                    }
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(coaster)
    }
}

impl<'de> Deserialize<'de> for NewCoaster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NewCoasterVisitor)
    }
}

impl NewCoaster {
    /// Attach a generated id, producing the record to store.
    pub fn with_id(self, id: impl Into<String>) -> Coaster {
        Coaster {
            name: self.name,
            manufacturer: self.manufacturer,
            id: id.into(),
            in_park: self.in_park,
            height: self.height,
        }
    }
}

impl From<Coaster> for NewCoaster {
    fn from(coaster: Coaster) -> Self {
        Self {
            name: coaster.name,
            manufacturer: coaster.manufacturer,
            in_park: coaster.in_park,
            height: coaster.height,
        }
    }
}
