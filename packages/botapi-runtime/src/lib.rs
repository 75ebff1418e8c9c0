//! Bot API Runtime
//!
//! Support code for types generated by `botapi-typegen`: upload values,
//! the attachment side-table and the encode helpers family traits delegate to.

pub mod error;
pub mod media;

pub use error::EncodingError;
pub use media::{Attachments, InputFile, NamedFile, SharedReader, ATTACH_SCHEME, DEFAULT_ATTACHMENT_NAME};

use serde::ser::{Error as _, Serializer};
use serde::Serialize;
use serde_json::value::RawValue;

/// Wire field holding the discriminator of tagged families
pub const TYPE_FIELD: &str = "type";

/// Encode a value as JSON bytes
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodingError> {
    Ok(serde_json::to_vec(value)?)
}

/// Forward already-encoded JSON to a serializer unchanged
pub fn serialize_encoded<S: Serializer>(
    encoded: Result<Vec<u8>, EncodingError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let bytes = encoded.map_err(S::Error::custom)?;
    let raw: Box<RawValue> = serde_json::from_slice(&bytes).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}

/// Serialize a media value outside of a request that can carry uploads.
///
/// Fails with `UnnormalizedMedia` if encoding needed to attach content.
pub fn serialize_detached<S, F>(encode: F, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    F: FnOnce(&mut Attachments) -> Result<Vec<u8>, EncodingError>,
{
    let mut attachments = Attachments::new();
    let encoded = encode(&mut attachments);
    if !attachments.is_empty() {
        return Err(S::Error::custom(EncodingError::UnnormalizedMedia));
    }
    serialize_encoded(encoded, serializer)
}

/// `skip_serializing_if` predicate for zero-valued primitives
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Discriminator of an encoded family member, if it carries one
pub fn discriminator(encoded: &[u8]) -> Result<Option<String>, EncodingError> {
    let value: serde_json::Value = serde_json::from_slice(encoded)?;
    Ok(value
        .get(TYPE_FIELD)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string))
}
