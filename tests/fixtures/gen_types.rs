// Code generated by botapi-typegen. DO NOT EDIT.
//
// Bot API 6.9, released 2023-09-22
// Changelog: https://core.telegram.org/bots/api-changelog#september-22-2023

use serde::{Deserialize, Serialize};

#[allow(unused_imports)]
use botapi_runtime::{Attachments, EncodingError};

/// Any of the keyboard markups accepted by the reply_markup field.
pub trait ReplyMarkup: std::fmt::Debug {
    fn reply_markup(&self) -> Result<Vec<u8>, EncodingError>;
}

impl Serialize for dyn ReplyMarkup {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        botapi_runtime::serialize_encoded(self.reply_markup(), serializer)
    }
}

/// This object represents a Telegram user or bot.
///
/// <https://core.telegram.org/bots/api#user>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user or bot.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub id: i64,
    /// True, if this user is a bot
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub is_bot: bool,
    /// User's or bot's first name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Optional. User's or bot's username
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
}

/// This object represents a chat.
///
/// <https://core.telegram.org/bots/api#chat>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chat {
    /// Unique identifier for this chat.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub id: i64,
    /// Type of chat, can be either “private”, “group”, “supergroup” or “channel”
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    /// Optional. Title, for supergroups, channels and group chats
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Optional. The most recent pinned message (by sending date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
}

/// This object represents a message.
///
/// <https://core.telegram.org/bots/api#message>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier inside this chat
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub message_id: i64,
    /// Optional. Sender of the message; empty for messages sent to channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Box<User>>,
    /// Date the message was sent in Unix time
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub date: i64,
    /// Conversation the message belongs to
    pub chat: Chat,
    /// Optional. For replies, the original message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    /// Optional. For text messages, the actual UTF-8 text of the message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Optional. For text messages, special entities like usernames, URLs, bot commands, etc. that appear in the text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    /// Optional. Message is a photo, available sizes of the photo
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<PhotoSize>,
    /// Optional. Service message: voice chat started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_chat_started: Option<Box<VoiceChatStarted>>,
    /// Optional. Inline keyboard attached to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<Box<InlineKeyboardMarkup>>,
}

/// This object represents one special entity in a text message.
///
/// <https://core.telegram.org/bots/api#messageentity>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageEntity {
    /// Type of the entity.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    /// Offset in UTF-16 code units to the start of the entity
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub offset: i64,
    /// Length of the entity in UTF-16 code units
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub length: i64,
    /// Optional. For “text_link” only, URL that will be opened after user taps on the text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// This object represents one size of a photo or a file / sticker thumbnail.
///
/// <https://core.telegram.org/bots/api#photosize>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Identifier for this file, which can be used to download or reuse the file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_id: String,
    /// Photo width
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub width: i64,
    /// Photo height
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub height: i64,
    /// Optional. File size in bytes.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub file_size: i64,
}

/// This object represents a service message about a voice chat started in the chat. Currently holds no information.
///
/// <https://core.telegram.org/bots/api#voicechatstarted>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceChatStarted {
}

/// This object represents one button of the reply keyboard.
///
/// <https://core.telegram.org/bots/api#keyboardbutton>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyboardButton {
    /// Text of the button.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Optional. If True, the user's phone number will be sent as a contact when the button is pressed.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub request_contact: bool,
}

/// This object represents a custom keyboard with reply options.
///
/// <https://core.telegram.org/bots/api#replykeyboardmarkup>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    /// Array of button rows, each represented by an Array of KeyboardButton objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyboard: Vec<Vec<KeyboardButton>>,
    /// Optional. Requests clients to resize the keyboard vertically for optimal fit.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub resize_keyboard: bool,
    /// Optional. Use this parameter if you want to show the keyboard to specific users only.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub selective: bool,
}

impl ReplyMarkup for ReplyKeyboardMarkup {
    fn reply_markup(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// Upon receiving a message with this object, Telegram clients will remove the current custom keyboard.
///
/// <https://core.telegram.org/bots/api#replykeyboardremove>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Requests clients to remove the custom keyboard
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub remove_keyboard: bool,
    /// Optional. Use this parameter if you want to remove the keyboard for specific users only.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub selective: bool,
}

impl ReplyMarkup for ReplyKeyboardRemove {
    fn reply_markup(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// This object represents an inline keyboard that appears right next to the message it belongs to.
///
/// <https://core.telegram.org/bots/api#inlinekeyboardmarkup>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    /// Array of button rows, each represented by an Array of InlineKeyboardButton objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl ReplyMarkup for InlineKeyboardMarkup {
    fn reply_markup(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// This object represents one button of an inline keyboard.
///
/// <https://core.telegram.org/bots/api#inlinekeyboardbutton>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Label text on the button
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Optional. HTTP or tg:// URL to be opened when the button is pressed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Optional. Data to be sent in a callback query to the bot when button is pressed, 1-64 bytes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub callback_data: String,
    /// Optional. Description of the game that will be launched when the user presses the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,
}

/// A placeholder, currently holds no information.
///
/// <https://core.telegram.org/bots/api#callbackgame>
pub type CallbackGame = serde_json::Value;

/// Upon receiving a message with this object, Telegram clients will display a reply interface to the user.
///
/// <https://core.telegram.org/bots/api#forcereply>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceReply {
    /// Shows reply interface to the user
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub force_reply: bool,
    /// Optional. The placeholder to be shown in the input field when the reply is active; 1-64 characters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub input_field_placeholder: String,
    /// Optional. Use this parameter if you want to force reply from specific users only.
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub selective: bool,
}

impl ReplyMarkup for ForceReply {
    fn reply_markup(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// This object represents the content of a media message to be sent.
///
/// <https://core.telegram.org/bots/api#inputmedia>
pub trait InputMedia: std::fmt::Debug {
    fn input_media_params(&self, media_name: &str, attachments: &mut Attachments) -> Result<Vec<u8>, EncodingError>;
}

impl Serialize for dyn InputMedia {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        botapi_runtime::serialize_detached(|attachments| self.input_media_params("", attachments), serializer)
    }
}

/// Represents a photo to be sent.
///
/// <https://core.telegram.org/bots/api#inputmediaphoto>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "photo")]
pub struct InputMediaPhoto {
    /// File to send. Pass a file_id to send a file that exists on the Telegram servers (recommended), pass an HTTP URL for Telegram to get a file from the Internet, or pass “attach://<file_attach_name>” to upload a new one using multipart/form-data under <file_attach_name> name.
    #[serde(default, skip_serializing_if = "botapi_runtime::InputFile::is_empty")]
    pub media: InputFile,
    /// Optional. Caption of the photo to be sent, 0-1024 characters after entities parsing
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
    /// Optional. List of special entities that appear in the caption
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    /// Optional. Pass True if the photo needs to be covered with a spoiler animation
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub has_spoiler: bool,
}

impl InputMedia for InputMediaPhoto {
    fn input_media_params(&self, media_name: &str, attachments: &mut Attachments) -> Result<Vec<u8>, EncodingError> {
        let media = self.media.attach(media_name, attachments)?;
        botapi_runtime::encode(&InputMediaPhoto { media, ..self.clone() })
    }
}

/// Represents a video to be sent.
///
/// <https://core.telegram.org/bots/api#inputmediavideo>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "video")]
pub struct InputMediaVideo {
    /// File to send.
    #[serde(default, skip_serializing_if = "botapi_runtime::InputFile::is_empty")]
    pub media: InputFile,
    /// Optional. Thumbnail of the file sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    /// Optional. Caption of the video to be sent, 0-1024 characters after entities parsing
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
    /// Optional. Video width
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub width: i64,
    /// Optional. Video duration in seconds
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub duration: i64,
    /// Optional. Pass True if the uploaded video is suitable for streaming
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub supports_streaming: bool,
}

impl InputMedia for InputMediaVideo {
    fn input_media_params(&self, media_name: &str, attachments: &mut Attachments) -> Result<Vec<u8>, EncodingError> {
        let media = self.media.attach(media_name, attachments)?;
        botapi_runtime::encode(&InputMediaVideo { media, ..self.clone() })
    }
}

/// Represents a general file to be sent.
///
/// <https://core.telegram.org/bots/api#inputmediadocument>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "document")]
pub struct InputMediaDocument {
    /// File to send.
    #[serde(default, skip_serializing_if = "botapi_runtime::InputFile::is_empty")]
    pub media: InputFile,
    /// Optional. Caption of the document to be sent, 0-1024 characters after entities parsing
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

impl InputMedia for InputMediaDocument {
    fn input_media_params(&self, media_name: &str, attachments: &mut Attachments) -> Result<Vec<u8>, EncodingError> {
        let media = self.media.attach(media_name, attachments)?;
        botapi_runtime::encode(&InputMediaDocument { media, ..self.clone() })
    }
}

/// This object represents the contents of a file to be uploaded.
///
/// <https://core.telegram.org/bots/api#inputfile>
pub use botapi_runtime::InputFile;

/// This object represents one result of an inline query.
///
/// <https://core.telegram.org/bots/api#inlinequeryresult>
pub trait InlineQueryResult: std::fmt::Debug {
    fn inline_query_result(&self) -> Result<Vec<u8>, EncodingError>;
}

impl Serialize for dyn InlineQueryResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        botapi_runtime::serialize_encoded(self.inline_query_result(), serializer)
    }
}

/// Represents a link to an article or web page.
///
/// <https://core.telegram.org/bots/api#inlinequeryresultarticle>
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename = "article")]
pub struct InlineQueryResultArticle {
    /// Unique identifier for this result, 1-64 Bytes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Title of the result
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Content of the message to be sent
    pub input_message_content: Box<dyn InputMessageContent>,
    /// Optional. Inline keyboard attached to the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<Box<InlineKeyboardMarkup>>,
    /// Optional. URL of the result
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl InlineQueryResult for InlineQueryResultArticle {
    fn inline_query_result(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// Represents a link to a photo.
///
/// <https://core.telegram.org/bots/api#inlinequeryresultphoto>
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename = "photo")]
pub struct InlineQueryResultPhoto {
    /// Unique identifier for this result, 1-64 bytes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// A valid URL of the photo. Photo must be in JPEG format. Photo size must not exceed 5MB
    #[serde(skip_serializing_if = "String::is_empty")]
    pub photo_url: String,
    /// URL of the thumbnail for the photo
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    /// Optional. Width of the photo
    #[serde(skip_serializing_if = "botapi_runtime::is_default")]
    pub photo_width: i64,
    /// Optional. Content of the message to be sent instead of the photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<Box<dyn InputMessageContent>>,
}

impl InlineQueryResult for InlineQueryResultPhoto {
    fn inline_query_result(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// Represents a link to a video animation (H.264/MPEG-4 AVC video without sound) stored on the Telegram servers.
///
/// <https://core.telegram.org/bots/api#inlinequeryresultcachedmpeg4gif>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "mpeg4_gif")]
pub struct InlineQueryResultCachedMpeg4Gif {
    /// Unique identifier for this result, 1-64 bytes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// A valid file identifier for the MPEG4 file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mpeg4_file_id: String,
    /// Optional. Caption of the MPEG-4 file to be sent, 0-1024 characters after entities parsing
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

impl InlineQueryResult for InlineQueryResultCachedMpeg4Gif {
    fn inline_query_result(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// This object represents the content of a message to be sent as a result of an inline query.
///
/// <https://core.telegram.org/bots/api#inputmessagecontent>
pub trait InputMessageContent: std::fmt::Debug {
    fn input_message_content(&self) -> Result<Vec<u8>, EncodingError>;
}

impl Serialize for dyn InputMessageContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        botapi_runtime::serialize_encoded(self.input_message_content(), serializer)
    }
}

/// Represents the content of a text message to be sent as the result of an inline query.
///
/// <https://core.telegram.org/bots/api#inputtextmessagecontent>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    /// Text of the message to be sent, 1-4096 characters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message_text: String,
    /// Optional. Mode for parsing entities in the message text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    /// Optional. List of special entities that appear in message text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
}

impl InputMessageContent for InputTextMessageContent {
    fn input_message_content(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// Represents the content of a location message to be sent as the result of an inline query.
///
/// <https://core.telegram.org/bots/api#inputlocationmessagecontent>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    /// Latitude of the location in degrees
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub latitude: f64,
    /// Longitude of the location in degrees
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub longitude: f64,
    /// Optional. Period in seconds for which the location can be updated
    #[serde(default, skip_serializing_if = "botapi_runtime::is_default")]
    pub live_period: i64,
}

impl InputMessageContent for InputLocationMessageContent {
    fn input_message_content(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// This object represents an error in the Telegram Passport element which was submitted that should be resolved by the user.
///
/// <https://core.telegram.org/bots/api#passportelementerror>
pub trait PassportElementError: std::fmt::Debug {
    fn passport_element_error(&self) -> Result<Vec<u8>, EncodingError>;
}

impl Serialize for dyn PassportElementError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        botapi_runtime::serialize_encoded(self.passport_element_error(), serializer)
    }
}

/// Represents an issue in one of the data fields that was provided by the user.
///
/// <https://core.telegram.org/bots/api#passportelementerrordatafield>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    /// Error source, must be data
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    /// The section of the user's Telegram Passport which has the error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    /// Name of the data field which has the error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field_name: String,
    /// Base64-encoded data hash
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_hash: String,
    /// Error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl PassportElementError for PassportElementErrorDataField {
    fn passport_element_error(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}

/// Represents an issue with a document scan.
///
/// <https://core.telegram.org/bots/api#passportelementerrorfile>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    /// Error source, must be file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    /// The section of the user's Telegram Passport which has the issue
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    /// Base64-encoded file hash
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_hash: String,
    /// Error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl PassportElementError for PassportElementErrorFile {
    fn passport_element_error(&self) -> Result<Vec<u8>, EncodingError> {
        botapi_runtime::encode(self)
    }
}
