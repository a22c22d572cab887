use serde::{
    Deserialize, Serialize,
    de::{self, Deserializer, SeqAccess, Visitor},
    ser::{SerializeSeq, Serializer},
};

use crate::{component::Component, operation::Operation};

// Compact wire form, one record per component with order preserved:
// a skip is a positive integer, an insert is a string, and a delete is a
// negative integer. All counts are in Unicode code points; peers counting in
// UTF-16 code units must convert before encoding.
//
// neat idea from https://github.com/spebern/operational-transform-rs/blob/9faa17f0a2b282ac2e09dbb2d29fdaf2ae0bbb4a/operational-transform/src/serde.rs#L14
impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Component::Skip(count) => serializer.serialize_u64(*count as u64),
            Component::Insert(text) => serializer.serialize_str(text),
            Component::Delete(count) => {
                serializer.serialize_i64(-(i64::try_from(*count).unwrap_or(i64::MAX)))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Component, D::Error>
    where
        D: Deserializer<'de>,
    {
        use std::fmt;

        struct ComponentVisitor;

        impl Visitor<'_> for ComponentVisitor {
            type Value = Component;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integer or a string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Component::Skip(usize::try_from(value).unwrap_or(usize::MAX)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value < 0 {
                    Ok(Component::Delete(
                        usize::try_from(value.unsigned_abs()).unwrap_or(usize::MAX),
                    ))
                } else {
                    Ok(Component::Skip(usize::try_from(value).unwrap_or(usize::MAX)))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Component::Insert(value.to_owned()))
            }
        }

        deserializer.deserialize_any(ComponentVisitor)
    }
}

/// An operation is serialized as the plain sequence of its components.
impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.components().len()))?;
        for component in self.components() {
            seq.serialize_element(component)?;
        }
        seq.end()
    }
}

/// Deserialization performs no normalization: a remote operation is stored
/// exactly as received and rejected by [`Operation::validate`] at the next
/// API boundary if it violates canonical form.
impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Operation, D::Error>
    where
        D: Deserializer<'de>,
    {
        use std::fmt;

        struct OperationVisitor;

        impl<'de> Visitor<'de> for OperationVisitor {
            type Value = Operation;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence of operation components")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut components = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(component) = seq.next_element::<Component>()? {
                    components.push(component);
                }

                Ok(Operation::from_raw_components(components))
            }
        }

        deserializer.deserialize_seq(OperationVisitor)
    }
}
