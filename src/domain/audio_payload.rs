use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

pub const DEFAULT_AUDIO_MIME_TYPE: &str = "audio/webm";

/// Standard alphabet with optional padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Recorded audio ready to be uploaded for transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    bytes: Vec<u8>,
    mime_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioPayloadError {
    #[error("audio payload is empty")]
    Empty,
    #[error("invalid base64 audio: {0}")]
    InvalidBase64(String),
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Decodes a base64 string, optionally wrapped in a `data:` URL.
    /// Padding is optional and line breaks are ignored.
    ///
    /// An explicit `mime_type` wins over the one declared in the data URL.
    pub fn from_base64(encoded: &str, mime_type: Option<&str>) -> Result<Self, AudioPayloadError> {
        let (declared_mime, data) = split_data_url(encoded.trim());

        let compact: String = data
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = LENIENT_BASE64
            .decode(compact)
            .map_err(|e| AudioPayloadError::InvalidBase64(e.to_string()))?;

        if bytes.is_empty() {
            return Err(AudioPayloadError::Empty);
        }

        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or(declared_mime)
            .unwrap_or(DEFAULT_AUDIO_MIME_TYPE);

        Ok(Self::new(bytes, mime_type))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Upload file name whose extension matches the MIME type.
    pub fn file_name(&self) -> String {
        format!("audio.{}", extension_for(&self.mime_type))
    }
}

fn split_data_url(input: &str) -> (Option<&str>, &str) {
    match input.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
        Some((header, data)) => {
            let mime = header.split(';').next().filter(|m| !m.is_empty());
            (mime, data)
        }
        None => (None, input),
    }
}

fn extension_for(mime_type: &str) -> &'static str {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "audio/wav" | "audio/wave" | "audio/x-wav" => "wav",
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => "m4a",
        "audio/ogg" => "ogg",
        _ => "webm",
    }
}
