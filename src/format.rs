//! Output audio formats and their provider-specific identifiers.
//!
//! One table maps each offered format to the encoding name every consumer
//! needs: the GCP `AudioEncoding`, the Polly `OutputFormat`, the file
//! extension and the MIME type for serving the result.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of output formats offered to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Ogg,
}

struct FormatSpec {
    format: AudioFormat,
    name: &'static str,
    extension: &'static str,
    mime_type: &'static str,
    gcp_encoding: &'static str,
    polly_output_format: &'static str,
}

// Indexed by discriminant; Polly has no WAV container, raw PCM is the
// closest it offers.
const FORMATS: [FormatSpec; 3] = [
    FormatSpec {
        format: AudioFormat::Mp3,
        name: "mp3",
        extension: ".mp3",
        mime_type: "audio/mp3",
        gcp_encoding: "MP3",
        polly_output_format: "mp3",
    },
    FormatSpec {
        format: AudioFormat::Wav,
        name: "wav",
        extension: ".wav",
        mime_type: "audio/wav",
        gcp_encoding: "LINEAR16",
        polly_output_format: "pcm",
    },
    FormatSpec {
        format: AudioFormat::Ogg,
        name: "ogg",
        extension: ".ogg",
        mime_type: "audio/ogg",
        gcp_encoding: "OGG_OPUS",
        polly_output_format: "ogg_vorbis",
    },
];

impl AudioFormat {
    pub const ALL: [AudioFormat; 3] = [AudioFormat::Mp3, AudioFormat::Wav, AudioFormat::Ogg];

    fn spec(self) -> &'static FormatSpec {
        &FORMATS[self as usize]
    }

    /// Lowercase name, as shown in a format picker.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn extension(self) -> &'static str {
        self.spec().extension
    }

    pub fn mime_type(self) -> &'static str {
        self.spec().mime_type
    }

    /// GCP `AudioEncoding` identifier for a synthesis request.
    pub fn gcp_encoding(self) -> &'static str {
        self.spec().gcp_encoding
    }

    /// Polly `OutputFormat` identifier for a synthesis request.
    pub fn polly_output_format(self) -> &'static str {
        self.spec().polly_output_format
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown audio format: {0}")]
pub struct UnknownAudioFormat(pub String);

impl FromStr for AudioFormat {
    type Err = UnknownAudioFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMATS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(s))
            .map(|spec| spec.format)
            .ok_or_else(|| UnknownAudioFormat(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_sit_at_their_discriminant() {
        for (index, format) in AudioFormat::ALL.iter().enumerate() {
            assert_eq!(FORMATS[index].format, *format);
        }
    }

    #[test]
    fn provider_identifiers_match_the_vendor_apis() {
        assert_eq!(AudioFormat::Mp3.gcp_encoding(), "MP3");
        assert_eq!(AudioFormat::Wav.gcp_encoding(), "LINEAR16");
        assert_eq!(AudioFormat::Ogg.gcp_encoding(), "OGG_OPUS");
        assert_eq!(AudioFormat::Mp3.polly_output_format(), "mp3");
        assert_eq!(AudioFormat::Wav.polly_output_format(), "pcm");
        assert_eq!(AudioFormat::Ogg.polly_output_format(), "ogg_vorbis");
    }

    #[test]
    fn extensions_and_mime_types() {
        assert_eq!(AudioFormat::Mp3.extension(), ".mp3");
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::Ogg.mime_type(), "audio/ogg");
    }

    #[test]
    fn parses_picker_names_case_insensitively() {
        assert_eq!("mp3".parse::<AudioFormat>().unwrap(), AudioFormat::Mp3);
        assert_eq!("WAV".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert_eq!("Ogg".parse::<AudioFormat>().unwrap(), AudioFormat::Ogg);
        assert_eq!(
            "flac".parse::<AudioFormat>().unwrap_err(),
            UnknownAudioFormat("flac".to_owned())
        );
    }
}
