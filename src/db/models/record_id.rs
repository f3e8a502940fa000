//! Serde support for record ids
//!
//! Documents expose their id as a plain `"table:key"` string at the API
//! boundary, while SurrealDB hands back a native `Thing`. These helpers
//! accept both forms on input and always render the string form on output,
//! so no internal id representation leaks into responses.

use std::fmt;

use serde::{Deserialize, Deserializer, Serializer, de};
use surrealdb::sql::Thing;

fn thing_from_str(s: &str) -> Thing {
    match s.split_once(':') {
        Some((table, key)) => Thing::from((table.to_string(), key.to_string())),
        // No colon: treat the whole string as the key
        None => Thing::from((String::new(), s.to_string())),
    }
}

struct ThingVisitor;

impl<'de> de::Visitor<'de> for ThingVisitor {
    type Value = Thing;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record id or a string like 'table:key'")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(thing_from_str(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(thing_from_str(&v))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        // Native SurrealDB representation
        Thing::deserialize(de::value::MapAccessDeserializer::new(map))
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Thing::deserialize(deserializer)
    }
}

/// Serde adapter for `Option<Thing>` id fields
pub mod option {
    use super::*;

    struct OptionThingVisitor;

    impl<'de> de::Visitor<'de> for OptionThingVisitor {
        type Value = Option<Thing>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("null, a record id, or a string like 'table:key'")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ThingVisitor).map(Some)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Thing>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionThingVisitor)
    }

    pub fn serialize<S>(value: &Option<Thing>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(thing) => serializer.serialize_some(&thing.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use surrealdb::sql::Thing;

    #[derive(Serialize, Deserialize)]
    struct Doc {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "super::option"
        )]
        id: Option<Thing>,
    }

    #[test]
    fn id_renders_as_table_key_string() {
        let doc = Doc {
            id: Some(Thing::from(("product".to_string(), "abc".to_string()))),
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"id":"product:abc"}"#);
    }

    #[test]
    fn id_parses_from_string_form() {
        let doc: Doc = serde_json::from_str(r#"{"id":"product:abc"}"#).unwrap();
        let id = doc.id.unwrap();
        assert_eq!(id.tb, "product");
        assert_eq!(id.id.to_raw(), "abc");
    }

    #[test]
    fn missing_id_is_none_and_skipped() {
        let doc: Doc = serde_json::from_str("{}").unwrap();
        assert!(doc.id.is_none());
        assert_eq!(serde_json::to_string(&doc).unwrap(), "{}");
    }
}
