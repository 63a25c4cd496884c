//! Named text codecs.
//!
//! Encodings are resolved by name through a [`CodecRegistry`]. Lookup order:
//! codecs registered by the caller, then the built-in ASCII, ISO-8859-1 and
//! UTF-16 codecs, then every WHATWG label known to `encoding_rs` (`utf-8`,
//! `windows-1252`, `shift_jis`, `koi8-r`, ...). Names are matched
//! case-insensitively and `_` is treated as `-`.
//!
//! `ascii` and `iso-8859-1` are the real 7-bit and Latin-1 charsets here,
//! not the WHATWG aliases of windows-1252. WHATWG labels that only resolve
//! to a windows code page through such an alias (`iso-8859-9`,
//! `iso-8859-11`, `tis-620`, ...) are unknown.

use encoding_rs::{EncoderResult, Encoding, UTF_16BE, UTF_16LE};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Errors raised while resolving a codec or converting text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// No codec is known under this name
    #[error("Unknown encoding: {name}")]
    UnknownEncoding {
        /// Name as given by the caller
        name: String,
    },

    /// A character has no representation in the target codec
    #[error("Cannot encode {character:?} at position {position} with {encoding}")]
    Unencodable {
        /// Codec name
        encoding: String,
        /// Offending character
        character: char,
        /// Index of the character in the text, counted in chars
        position: usize,
    },

    /// Bytes are not valid in the source codec
    #[error("Invalid {encoding} byte sequence")]
    Undecodable {
        /// Codec name
        encoding: String,
    },
}

/// Bidirectional mapping between text and encoded bytes
pub trait Codec: Send + Sync + fmt::Debug {
    /// Canonical codec name
    fn name(&self) -> &str;

    /// Encode the whole text, failing on the first unrepresentable character
    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError>;

    /// Decode the whole byte slice, failing on malformed input
    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError>;
}

/// Codec backed by an `encoding_rs` encoding
#[derive(Debug, Clone, Copy)]
pub struct WhatwgCodec {
    encoding: &'static Encoding,
}

impl WhatwgCodec {
    /// Resolve a WHATWG label
    ///
    /// Encodings that `encoding_rs` cannot produce output for (UTF-16 and
    /// the replacement encoding) are rejected, as are ISO labels that WHATWG
    /// maps onto a windows code page (`iso-8859-9` to windows-1254).
    pub fn for_label(label: &str) -> Option<Self> {
        let encoding = Encoding::for_label(label.as_bytes())?;
        if encoding.output_encoding() != encoding {
            return None;
        }
        if encoding.name().starts_with("windows-") && !names_code_page(label) {
            return None;
        }
        Some(Self { encoding })
    }
}

/// Whether a label spells out a windows code page rather than an ISO or
/// legacy charset that WHATWG folds into one
fn names_code_page(label: &str) -> bool {
    const CODE_PAGE_PREFIXES: &[&str] = &["windows-", "cp125", "x-cp125", "dos-874"];
    let label = normalize(label);
    CODE_PAGE_PREFIXES.iter().any(|prefix| label.starts_with(prefix))
}

impl Codec for WhatwgCodec {
    fn name(&self) -> &str {
        self.encoding.name()
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let mut encoder = self.encoding.new_encoder();
        let mut out = Vec::with_capacity(text.len());
        let mut consumed = 0;

        loop {
            let (result, read) =
                encoder.encode_from_utf8_to_vec_without_replacement(&text[consumed..], &mut out, true);
            consumed += read;
            match result {
                EncoderResult::InputEmpty => return Ok(out),
                EncoderResult::OutputFull => out.reserve(text.len() - consumed + 16),
                EncoderResult::Unmappable(character) => {
                    return Err(EncodingError::Unencodable {
                        encoding: self.name().to_string(),
                        character,
                        position: text[..consumed].chars().count() - 1,
                    });
                }
            }
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| EncodingError::Undecodable {
                encoding: self.name().to_string(),
            })
    }
}

/// 7-bit US-ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiCodec;

impl AsciiCodec {
    const ALIASES: &'static [&'static str] = &[
        "ascii",
        "us-ascii",
        "646",
        "us",
        "iso646-us",
        "ansi-x3.4-1968",
        "iso-ir-6",
        "cp367",
        "ibm367",
        "csascii",
    ];
}

impl Codec for AsciiCodec {
    fn name(&self) -> &str {
        "ascii"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        text.chars()
            .enumerate()
            .map(|(position, character)| {
                if character.is_ascii() {
                    Ok(character as u8)
                } else {
                    Err(EncodingError::Unencodable {
                        encoding: self.name().to_string(),
                        character,
                        position,
                    })
                }
            })
            .collect()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        if !bytes.is_ascii() {
            return Err(EncodingError::Undecodable {
                encoding: self.name().to_string(),
            });
        }
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

/// ISO-8859-1 (Latin-1)
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1Codec;

impl Latin1Codec {
    const ALIASES: &'static [&'static str] = &[
        "iso-8859-1",
        "iso8859-1",
        "iso88591",
        "iso-8859-1:1987",
        "csisolatin1",
        "iso-ir-100",
        "latin-1",
        "latin1",
        "l1",
        "cp819",
        "ibm819",
        "8859",
    ];
}

impl Codec for Latin1Codec {
    fn name(&self) -> &str {
        "iso-8859-1"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        text.chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(u32::from(character)).map_err(|_| EncodingError::Unencodable {
                    encoding: self.name().to_string(),
                    character,
                    position,
                })
            })
            .collect()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

/// UTF-16 in either byte order
///
/// The explicit-order codecs write no BOM. Bare `utf-16` writes a
/// little-endian BOM and honors one of either order when decoding.
#[derive(Debug, Clone, Copy)]
pub struct Utf16Codec {
    big_endian: bool,
    bom: bool,
}

impl Utf16Codec {
    /// Little-endian UTF-16
    pub const LE: Self = Self {
        big_endian: false,
        bom: false,
    };

    /// Big-endian UTF-16
    pub const BE: Self = Self {
        big_endian: true,
        bom: false,
    };

    /// Little-endian UTF-16 prefixed with a byte order mark
    pub const WITH_BOM: Self = Self {
        big_endian: false,
        bom: true,
    };

    const BOM_LE: [u8; 2] = [0xFF, 0xFE];
    const BOM_BE: [u8; 2] = [0xFE, 0xFF];

    fn for_label(label: &str) -> Option<Self> {
        match label {
            "utf-16le" => Some(Self::LE),
            "utf-16be" => Some(Self::BE),
            "utf-16" => Some(Self::WITH_BOM),
            _ => None,
        }
    }
}

impl Codec for Utf16Codec {
    fn name(&self) -> &str {
        match (self.bom, self.big_endian) {
            (true, _) => "utf-16",
            (false, true) => "utf-16be",
            (false, false) => "utf-16le",
        }
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(text.len() * 2 + 2);
        if self.bom {
            out.extend_from_slice(&Self::BOM_LE);
        }
        for unit in text.encode_utf16() {
            let bytes = if self.big_endian {
                unit.to_be_bytes()
            } else {
                unit.to_le_bytes()
            };
            out.extend_from_slice(&bytes);
        }
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        let (encoding, bytes) = match bytes {
            [a, b, rest @ ..] if self.bom && [*a, *b] == Self::BOM_LE => (UTF_16LE, rest),
            [a, b, rest @ ..] if self.bom && [*a, *b] == Self::BOM_BE => (UTF_16BE, rest),
            _ if self.big_endian => (UTF_16BE, bytes),
            _ => (UTF_16LE, bytes),
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| EncodingError::Undecodable {
                encoding: self.name().to_string(),
            })
    }
}

/// Name-to-codec lookup table
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    custom: HashMap<String, Arc<dyn Codec>>,
}

impl CodecRegistry {
    /// Registry with only the built-in codecs
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec under an extra name, shadowing built-ins
    pub fn register(&mut self, name: &str, codec: Arc<dyn Codec>) {
        self.custom.insert(normalize(name), codec);
    }

    /// Resolve a codec by name
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Codec>, EncodingError> {
        let key = normalize(name);

        if let Some(codec) = self.custom.get(&key) {
            return Ok(Arc::clone(codec));
        }
        if AsciiCodec::ALIASES.contains(&key.as_str()) {
            return Ok(Arc::new(AsciiCodec));
        }
        if Latin1Codec::ALIASES.contains(&key.as_str()) {
            return Ok(Arc::new(Latin1Codec));
        }
        if let Some(codec) = Utf16Codec::for_label(&key) {
            return Ok(Arc::new(codec));
        }
        if let Some(codec) = WhatwgCodec::for_label(name).or_else(|| WhatwgCodec::for_label(&key)) {
            return Ok(Arc::new(codec));
        }

        Err(EncodingError::UnknownEncoding {
            name: name.to_string(),
        })
    }

    /// Whether a name resolves to any codec
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }
}

/// Resolve a codec by name using only the built-in codecs
pub fn lookup(name: &str) -> Result<Arc<dyn Codec>, EncodingError> {
    CodecRegistry::new().resolve(name)
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}
