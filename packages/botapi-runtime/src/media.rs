//! Upload values and the attachment side-table
//!
//! An `InputFile` is either a reference the server already understands (a
//! file id or URL) or content to upload. Before a media object is encoded,
//! `InputFile::attach` moves uploadable content into an `Attachments` table
//! and leaves an `attach://<key>` reference in its place.

use std::fmt;
use std::io::{Cursor, Read};
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::EncodingError;

/// Name given to anonymous uploads
pub const DEFAULT_ATTACHMENT_NAME: &str = "file";

/// Scheme of references to uploaded parts
pub const ATTACH_SCHEME: &str = "attach://";

/// Readable upload content shared between normalized copies
pub type SharedReader = Arc<Mutex<dyn Read + Send>>;

// =============================================================================
// NamedFile
// =============================================================================

/// Upload content with a file name
#[derive(Clone)]
pub struct NamedFile {
    pub name: String,
    pub reader: SharedReader,
}

impl NamedFile {
    pub fn new(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Arc::new(Mutex::new(reader)),
        }
    }

    /// Anonymous content, named `file`
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self::new(DEFAULT_ATTACHMENT_NAME, reader)
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, Cursor::new(bytes))
    }

    fn from_shared(reader: &SharedReader) -> Self {
        Self {
            name: DEFAULT_ATTACHMENT_NAME.to_string(),
            reader: Arc::clone(reader),
        }
    }

    /// Drain the remaining content
    pub fn read_all(&self) -> std::io::Result<Vec<u8>> {
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "upload reader poisoned"))?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl fmt::Debug for NamedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFile").field("name", &self.name).finish_non_exhaustive()
    }
}

// =============================================================================
// InputFile
// =============================================================================

/// A file to send: a reference, or content to upload
#[derive(Clone)]
pub enum InputFile {
    /// File id, URL or `attach://` reference
    Reference(String),
    /// Content with its own name
    Named(NamedFile),
    /// Anonymous content
    Reader(SharedReader),
    /// Any other JSON value read from the wire
    Raw(serde_json::Value),
}

impl Default for InputFile {
    fn default() -> Self {
        Self::Reference(String::new())
    }
}

impl InputFile {
    pub fn reference(reference: impl Into<String>) -> Self {
        Self::Reference(reference.into())
    }

    pub fn named(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self::Named(NamedFile::new(name, reader))
    }

    pub fn reader(reader: impl Read + Send + 'static) -> Self {
        Self::Reader(Arc::new(Mutex::new(reader)))
    }

    /// Nothing to send
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Reference(reference) => reference.is_empty(),
            Self::Raw(value) => value.is_null(),
            Self::Named(_) | Self::Reader(_) => false,
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::Reference(_) => "reference",
            Self::Named(_) => "named",
            Self::Reader(_) => "reader",
            Self::Raw(_) => "raw",
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Normalized copy for encoding.
    ///
    /// References come back unchanged. Uploadable content is recorded in
    /// `attachments` under `media_name` (or, when that is empty, the content's
    /// own name) and replaced by `attach://<key>`. The receiver is untouched.
    pub fn attach(
        &self,
        media_name: &str,
        attachments: &mut Attachments,
    ) -> Result<InputFile, EncodingError> {
        let file = match self {
            Self::Reference(_) => return Ok(self.clone()),
            Self::Named(file) => file.clone(),
            Self::Reader(reader) => NamedFile::from_shared(reader),
            Self::Raw(_) => {
                return Err(EncodingError::UnsupportedMedia {
                    shape: self.shape(),
                })
            }
        };

        let key = if media_name.is_empty() {
            file.name.clone()
        } else {
            media_name.to_string()
        };
        tracing::debug!(key = %key, file = %file.name, "attaching upload");

        let reference = format!("{}{}", ATTACH_SCHEME, key);
        attachments.insert(key, file);
        Ok(Self::Reference(reference))
    }
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(reference) => f.debug_tuple("Reference").field(reference).finish(),
            Self::Named(file) => f.debug_tuple("Named").field(file).finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
            Self::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
        }
    }
}

impl From<&str> for InputFile {
    fn from(reference: &str) -> Self {
        Self::reference(reference)
    }
}

impl From<String> for InputFile {
    fn from(reference: String) -> Self {
        Self::Reference(reference)
    }
}

impl From<NamedFile> for InputFile {
    fn from(file: NamedFile) -> Self {
        Self::Named(file)
    }
}

/// Only references are encodable; uploads must go through `attach` first.
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Reference(reference) => serializer.serialize_str(reference),
            Self::Raw(serde_json::Value::Null) => serializer.serialize_none(),
            Self::Named(_) | Self::Reader(_) => Err(S::Error::custom(EncodingError::UnnormalizedMedia)),
            Self::Raw(_) => Err(S::Error::custom(EncodingError::UnsupportedMedia {
                shape: self.shape(),
            })),
        }
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(reference) => Self::Reference(reference),
            other => Self::Raw(other),
        })
    }
}

// =============================================================================
// Attachments
// =============================================================================

/// Side-table of uploads collected while encoding one request.
///
/// Keys are unique; inserting an existing key replaces its content and keeps
/// its position.
#[derive(Debug, Clone, Default)]
pub struct Attachments {
    entries: IndexMap<String, NamedFile>,
}

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, file: NamedFile) {
        self.entries.insert(key.into(), file);
    }

    pub fn get(&self, key: &str) -> Option<&NamedFile> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedFile)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Attachments {
    type Item = (String, NamedFile);
    type IntoIter = indexmap::map::IntoIter<String, NamedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
