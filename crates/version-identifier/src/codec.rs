//! Integrations with serialization frameworks.
//!
//! `serde` uses the textual form (`"1.2.0"`). The SCALE codec persists the raw segment sequence.

#[cfg(test)]
#[path = "codec_test.rs"]
mod test;

#[cfg(feature = "serde")]
mod serde_impl {
    #[cfg(not(feature = "std"))]
    use alloc::string::String;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::VersionIdentifier;

    impl Serialize for VersionIdentifier {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for VersionIdentifier {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(feature = "schemars")]
mod schemars_impl {
    use schemars::JsonSchema;
    use schemars::gen::SchemaGenerator;
    use schemars::schema::{InstanceType, Schema, SchemaObject, StringValidation};

    use crate::VersionIdentifier;

    impl JsonSchema for VersionIdentifier {
        fn schema_name() -> String {
            "VersionIdentifier".to_owned()
        }

        fn json_schema(_: &mut SchemaGenerator) -> Schema {
            SchemaObject {
                instance_type: Some(InstanceType::String.into()),
                string: Some(Box::new(StringValidation {
                    pattern: Some(r"^([0-9]+(\.[0-9]+)*)?$".to_owned()),
                    ..Default::default()
                })),
                ..Default::default()
            }
            .into()
        }
    }
}

#[cfg(feature = "parity-scale-codec")]
mod scale_impl {
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    use parity_scale_codec::{Decode, Encode, Input, Output};

    use crate::VersionIdentifier;

    // Encoded as the plain segment vector: a compact length followed by each segment.
    impl Encode for VersionIdentifier {
        fn size_hint(&self) -> usize {
            self.segments().size_hint()
        }

        fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
            self.segments().encode_to(dest)
        }
    }

    // Segment values are taken as is, without range checks.
    impl Decode for VersionIdentifier {
        fn decode<I: Input>(input: &mut I) -> Result<Self, parity_scale_codec::Error> {
            Ok(Self::new(Vec::<i32>::decode(input)?))
        }
    }
}
