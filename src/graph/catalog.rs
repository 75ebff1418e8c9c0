//! Classification Catalog
//!
//! The closed lists that decide what a zero-field type becomes and which
//! concrete types join the synthetic reply-markup family. These are static
//! data, not inferred from the schema: when the API grows a new abstract
//! type, generation fails until it is listed here.

use serde::{Deserialize, Serialize};

pub const INPUT_MEDIA: &str = "InputMedia";
pub const INLINE_QUERY_RESULT: &str = "InlineQueryResult";
pub const CALLBACK_GAME: &str = "CallbackGame";
pub const INPUT_FILE: &str = "InputFile";
pub const INPUT_MESSAGE_CONTENT: &str = "InputMessageContent";
pub const PASSPORT_ELEMENT_ERROR: &str = "PassportElementError";

/// The one type that is legitimately empty
pub const VOICE_CHAT_STARTED: &str = "VoiceChatStarted";

/// Synthetic family for the multi-shape `reply_markup` field
pub const REPLY_MARKUP: &str = "ReplyMarkup";

// TODO: derive from the reply_markup field alternatives once every method
// field is part of the description.
pub const REPLY_MARKUP_TYPES: [&str; 4] = [
    "InlineKeyboardMarkup",
    "ReplyKeyboardMarkup",
    "ReplyKeyboardRemove",
    "ForceReply",
];

/// Some inline query results are prefixed with this after the family name
pub const CACHED_INFIX: &str = "Cached";

/// Role a known family plays during classification and binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyRole {
    /// `InputMedia`: tagged, and encodes with an attachment side-table
    AttachableMedia,
    /// `InlineQueryResult`: tagged, `Cached` infix stripped from tags
    QueryResult,
    /// `InputMessageContent`: accessor only
    MessageContent,
    /// `PassportElementError`: accessor only
    ElementError,
    CallbackGame,
    InputFile,
    /// Synthetic, never declared by the schema
    ReplyMarkup,
}

impl FamilyRole {
    /// Roles of the zero-field families the schema may declare
    pub const SCHEMA_FAMILIES: [FamilyRole; 6] = [
        FamilyRole::AttachableMedia,
        FamilyRole::CallbackGame,
        FamilyRole::QueryResult,
        FamilyRole::InputFile,
        FamilyRole::MessageContent,
        FamilyRole::ElementError,
    ];

    pub fn of(name: &str) -> Option<Self> {
        match name {
            INPUT_MEDIA => Some(Self::AttachableMedia),
            INLINE_QUERY_RESULT => Some(Self::QueryResult),
            INPUT_MESSAGE_CONTENT => Some(Self::MessageContent),
            PASSPORT_ELEMENT_ERROR => Some(Self::ElementError),
            CALLBACK_GAME => Some(Self::CallbackGame),
            INPUT_FILE => Some(Self::InputFile),
            REPLY_MARKUP => Some(Self::ReplyMarkup),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AttachableMedia => INPUT_MEDIA,
            Self::QueryResult => INLINE_QUERY_RESULT,
            Self::MessageContent => INPUT_MESSAGE_CONTENT,
            Self::ElementError => PASSPORT_ELEMENT_ERROR,
            Self::CallbackGame => CALLBACK_GAME,
            Self::InputFile => INPUT_FILE,
            Self::ReplyMarkup => REPLY_MARKUP,
        }
    }

    /// Members of these families never expose their `type` field
    pub fn suppresses_type_field(&self) -> bool {
        matches!(self, Self::AttachableMedia | Self::QueryResult)
    }
}

/// Catalog of known zero-field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Zero-field types that become empty structs
    pub empty_structs: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            empty_structs: vec![VOICE_CHAT_STARTED.to_string()],
        }
    }
}

impl Catalog {
    /// Default catalog plus extra whitelisted empty structs
    pub fn with_empty_structs<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for name in extra {
            let name = name.into();
            if !catalog.empty_structs.contains(&name) {
                catalog.empty_structs.push(name);
            }
        }
        catalog
    }

    pub fn is_empty_struct(&self, name: &str) -> bool {
        self.empty_structs.iter().any(|s| s == name)
    }

    pub fn is_reply_markup_member(&self, name: &str) -> bool {
        REPLY_MARKUP_TYPES.contains(&name)
    }
}
