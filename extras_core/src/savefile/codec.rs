//! The section codec boundary and a stand-in framing for offline use.

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use super::ConvertError;

/// One marshalled document from a save file.
///
/// The engine writes a save as a sequence of independently marshalled game
/// objects. `label` preserves each object's class name so the reverse
/// conversion can restore the original order and types, and so a human
/// reading the YAML can tell the sections apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub body: serde_yaml::Value,
}

impl Section {
    /// Create a section.
    pub fn new(label: impl Into<String>, body: serde_yaml::Value) -> Self {
        Self {
            label: label.into(),
            body,
        }
    }
}

/// Reads and writes the engine's binary section format.
///
/// The marshal byte format belongs to the host runtime and is not
/// reimplemented here; embeddings with access to the engine supply a codec
/// wrapping its marshal support. The converter only ever talks to this
/// trait.
pub trait SectionCodec {
    /// Decode the next section, or `None` at a clean end of file.
    fn read_section(&mut self, input: &mut dyn Read) -> Result<Option<Section>, ConvertError>;

    /// Encode one section.
    fn write_section(&mut self, output: &mut dyn Write, section: &Section)
        -> Result<(), ConvertError>;
}

/// Length-prefixed JSON framing, a stand-in for the engine's marshal
/// support: each section is a 4-byte big-endian length followed by one JSON
/// object. This is what the offline CLI uses when no engine runtime is
/// around; it is not compatible with real engine saves.
#[derive(Debug, Default)]
pub struct FramedCodec;

impl SectionCodec for FramedCodec {
    fn read_section(&mut self, input: &mut dyn Read) -> Result<Option<Section>, ConvertError> {
        // Zero bytes before the header is a clean end of file; a header cut
        // short partway through is a corrupt tail and must fail the dump.
        let mut len_buf = [0u8; 4];
        let mut filled = 0;
        while filled < len_buf.len() {
            match input.read(&mut len_buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(ConvertError::MalformedSection(
                        "truncated section header".to_owned(),
                    ))
                }
                Ok(read) => filled += read,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => return Err(ConvertError::Io(err)),
            }
        }
        let len = u32::from_be_bytes(len_buf) as usize;
        let mut body = vec![0u8; len];
        input.read_exact(&mut body)?;
        let section = serde_json::from_slice(&body)
            .map_err(|err| ConvertError::MalformedSection(err.to_string()))?;
        Ok(Some(section))
    }

    fn write_section(
        &mut self,
        output: &mut dyn Write,
        section: &Section,
    ) -> Result<(), ConvertError> {
        let body = serde_json::to_vec(section)
            .map_err(|err| ConvertError::MalformedSection(err.to_string()))?;
        let len = u32::try_from(body.len())
            .map_err(|_| ConvertError::MalformedSection("section body too large".to_owned()))?;
        output.write_all(&len.to_be_bytes())?;
        output.write_all(&body)?;
        Ok(())
    }
}
