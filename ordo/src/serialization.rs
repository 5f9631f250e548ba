use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::key::{CollectionKey, Key};
use crate::value::Value;

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Integer(i) => serializer.serialize_i64(*i),
            Key::String(s) => serializer.serialize_str(s),
            Key::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(d) => serializer.serialize_f64(d.into_inner()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(s) => s.serialize(serializer),
            Value::Map(m) => {
                // canonical order, so the output does not depend on hashing
                let mut entries = m.iter().collect::<Vec<_>>();
                entries.sort_by(|(a, _), (b, _)| {
                    a.canonical_cmp(b).unwrap_or_else(|| a.kind().cmp(&b.kind()))
                });
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
