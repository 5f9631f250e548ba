use serde::ser::{Serialize, SerializeMap, Serializer};

use super::collection_core::OrderedCollection;

// a collection serializes as a map whose entries appear in collection order
impl<K: Serialize, V: Serialize> Serialize for OrderedCollection<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use ahash::{HashMap, HashMapExt};

    use crate::key::Key;
    use crate::value::Value;

    use super::*;

    #[test]
    fn test_serialize_in_collection_order() {
        let c = OrderedCollection::from_pairs(vec![("b", 1), ("a", 2)]).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_serialize_values() {
        let mut m = HashMap::new();
        m.insert(Key::from("z"), Value::from(1.5));
        m.insert(Key::from("y"), Value::Null);
        let c = OrderedCollection::<Key, Value>::from_values(vec![
            Value::from("John"),
            Value::from(vec![Value::from(true)]),
            Value::from(m),
        ]);
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"0":"John","1":[true],"2":{"y":null,"z":1.5}}"#
        );
    }
}
