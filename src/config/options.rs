//! Read, write and glob options.

use std::io;

use serde::{Deserialize, Serialize};

/// Text encodings understood by the reader and writer.
///
/// `latin1` keeps its byte-for-byte meaning (U+0000..=U+00FF) rather than the
/// WHATWG `windows-1252` mapping the same label gets in `encoding_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Strict UTF-8; invalid bytes are an error.
    Utf8,
    /// UTF-16 little endian, as `utf16le` / `ucs2`.
    Utf16Le,
    /// One byte per char, U+0000..=U+00FF.
    Latin1,
    /// 7-bit ASCII; anything above 0x7F is an error.
    Ascii,
    /// Any other WHATWG label, e.g. `windows-1250` or `shift_jis`.
    Label(&'static encoding_rs::Encoding),
}

impl Encoding {
    /// Parse an encoding name. Unknown names are reported as `InvalidInput`.
    pub fn from_name(name: &str) -> io::Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            "latin1" | "latin-1" | "binary" | "iso-8859-1" => Ok(Encoding::Latin1),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            other => encoding_rs::Encoding::for_label(other.as_bytes())
                .map(Encoding::Label)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("unknown encoding: {other}"),
                    )
                }),
        }
    }

    pub fn decode(self, bytes: Vec<u8>) -> io::Result<String> {
        let codec = match self {
            Encoding::Utf8 => encoding_rs::UTF_8,
            Encoding::Utf16Le => encoding_rs::UTF_16LE,
            Encoding::Label(codec) => codec,
            Encoding::Latin1 => return Ok(bytes.into_iter().map(char::from).collect()),
            Encoding::Ascii => {
                if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("non-ascii byte 0x{:02x} at offset {pos}", bytes[pos]),
                    ));
                }
                encoding_rs::UTF_8
            }
        };

        codec
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("input is not valid {}", codec.name()),
                )
            })
    }

    pub fn encode(self, content: &str) -> io::Result<Vec<u8>> {
        let limit = match self {
            Encoding::Utf8 => return Ok(content.as_bytes().to_vec()),
            Encoding::Utf16Le => {
                return Ok(content.encode_utf16().flat_map(u16::to_le_bytes).collect());
            }
            Encoding::Label(codec) => return encode_with(codec, content),
            Encoding::Latin1 => 0xFF,
            Encoding::Ascii => 0x7F,
        };

        content
            .chars()
            .map(|c| {
                let code = c as u32;
                if code <= limit {
                    Ok(code as u8)
                } else {
                    Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("character {c:?} cannot be encoded as {self:?}"),
                    ))
                }
            })
            .collect()
    }
}

fn encode_with(codec: &'static encoding_rs::Encoding, content: &str) -> io::Result<Vec<u8>> {
    // UTF-16BE and `replacement` report UTF-8 as their output encoding.
    if codec.output_encoding() != codec {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot write {} output", codec.name()),
        ));
    }

    let (bytes, _, had_errors) = codec.encode(content);
    if had_errors {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("content has characters that cannot be encoded as {}", codec.name()),
        ));
    }
    Ok(bytes.into_owned())
}

fn default_encoding() -> String {
    "utf8".to_string()
}

/// Options used when reading input files.
///
/// Deserializes from either a bare encoding name or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReadOptionsRepr")]
pub struct ReadOptions {
    pub encoding: String,
}

impl ReadOptions {
    pub fn decode(&self, bytes: Vec<u8>) -> io::Result<String> {
        Encoding::from_name(&self.encoding)?.decode(bytes)
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
        }
    }
}

impl From<&str> for ReadOptions {
    fn from(encoding: &str) -> Self {
        Self {
            encoding: encoding.to_string(),
        }
    }
}

impl From<String> for ReadOptions {
    fn from(encoding: String) -> Self {
        Self { encoding }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReadOptionsRepr {
    Encoding(String),
    Options {
        #[serde(default = "default_encoding")]
        encoding: String,
    },
}

impl From<ReadOptionsRepr> for ReadOptions {
    fn from(repr: ReadOptionsRepr) -> Self {
        match repr {
            ReadOptionsRepr::Encoding(encoding) | ReadOptionsRepr::Options { encoding } => {
                Self { encoding }
            }
        }
    }
}

/// Options used when writing output files.
///
/// Deserializes from either a bare encoding name or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WriteOptionsRepr")]
pub struct WriteOptions {
    pub encoding: String,
    /// Append to an existing file instead of truncating it.
    pub append: bool,
}

impl WriteOptions {
    pub fn encode(&self, content: &str) -> io::Result<Vec<u8>> {
        Encoding::from_name(&self.encoding)?.encode(content)
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            append: false,
        }
    }
}

impl From<&str> for WriteOptions {
    fn from(encoding: &str) -> Self {
        Self {
            encoding: encoding.to_string(),
            ..Self::default()
        }
    }
}

impl From<String> for WriteOptions {
    fn from(encoding: String) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WriteOptionsRepr {
    Encoding(String),
    Options {
        #[serde(default = "default_encoding")]
        encoding: String,
        #[serde(default)]
        append: bool,
    },
}

impl From<WriteOptionsRepr> for WriteOptions {
    fn from(repr: WriteOptionsRepr) -> Self {
        match repr {
            WriteOptionsRepr::Encoding(encoding) => Self::from(encoding),
            WriteOptionsRepr::Options { encoding, append } => Self { encoding, append },
        }
    }
}

/// Options controlling glob expansion of input patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobOptions {
    pub case_sensitive: bool,
    /// `*` and `?` never match `/`.
    pub require_literal_separator: bool,
    /// Wildcards never match a leading `.` in a file name.
    pub require_literal_leading_dot: bool,
    /// Keep only regular files.
    pub only_files: bool,
    /// Keep only directories. Wins over `only_files`.
    pub only_directories: bool,
    /// Drop paths already produced by an earlier pattern.
    pub unique: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
            only_files: true,
            only_directories: false,
            unique: true,
        }
    }
}

impl GlobOptions {
    pub fn match_options(&self) -> glob::MatchOptions {
        glob::MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: self.require_literal_separator,
            require_literal_leading_dot: self.require_literal_leading_dot,
        }
    }

    /// Whether an entry with the given kind survives the file/directory filter.
    pub fn accepts(&self, is_file: bool, is_dir: bool) -> bool {
        if self.only_directories {
            is_dir
        } else if self.only_files {
            is_file
        } else {
            true
        }
    }
}
