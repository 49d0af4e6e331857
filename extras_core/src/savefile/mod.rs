//! Offline save-file converter: marshalled sections to YAML and back.
//!
//! A save is an ordered sequence of marshalled game objects. The dump
//! direction reads sections until end of file and writes them out as one
//! YAML sequence document; the load direction parses that sequence and
//! writes every entry back through the codec in order. Labels and ordering
//! survive the round trip, which is what makes hand-editing a dumped save
//! safe.
//!
//! Unlike the frame-driven extras this tool has real failure surfaces
//! (missing files, malformed YAML, codec errors) and reports them through
//! [`ConvertError`] instead of degrading silently.

mod codec;

pub use codec::*;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Engine generations and their save-file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RgssVersion {
    Xp,
    Vx,
    VxAce,
}

impl RgssVersion {
    /// Decode the generation number used in engine documentation (1 to 3).
    pub fn from_number(number: u8) -> Option<RgssVersion> {
        match number {
            1 => Some(RgssVersion::Xp),
            2 => Some(RgssVersion::Vx),
            3 => Some(RgssVersion::VxAce),
            _ => None,
        }
    }

    /// Save-file extension for this generation.
    pub fn save_extension(&self) -> &'static str {
        match self {
            RgssVersion::Xp => ".rxdata",
            RgssVersion::Vx => ".rvdata",
            RgssVersion::VxAce => ".rvdata2",
        }
    }
}

/// Conventional name of the save file to convert.
pub fn default_save_name(version: RgssVersion) -> String {
    format!("Save{}", version.save_extension())
}

/// Conventional name of a save rebuilt from YAML, kept distinct so the
/// original is never clobbered.
pub fn default_output_name(version: RgssVersion) -> String {
    format!("Save_fromYaml{}", version.save_extension())
}

/// Failures surfaced by the save converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("save file not found: {path}")]
    SaveNotFound { path: String },

    #[error("yaml file not found: {path} (dump a save first)")]
    YamlNotFound { path: String },

    #[error("expected a yaml sequence of sections")]
    NotASequence,

    #[error("malformed section: {0}")]
    MalformedSection(String),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read marshalled sections until end of file and write them as one YAML
/// sequence document. Returns the number of sections converted.
pub fn dump_to_yaml(
    input: &mut dyn Read,
    output: &mut dyn Write,
    codec: &mut dyn SectionCodec,
) -> Result<usize, ConvertError> {
    let mut sections = Vec::new();
    while let Some(section) = codec.read_section(input)? {
        log::info!("loaded {}", section.label);
        sections.push(section);
    }
    serde_yaml::to_writer(output, &sections)?;
    Ok(sections.len())
}

/// Parse a YAML sequence of sections and write each back through the codec
/// in order. Returns the number of sections converted.
pub fn load_from_yaml(
    input: &mut dyn Read,
    output: &mut dyn Write,
    codec: &mut dyn SectionCodec,
) -> Result<usize, ConvertError> {
    let document: serde_yaml::Value = serde_yaml::from_reader(input)?;
    let serde_yaml::Value::Sequence(entries) = document else {
        return Err(ConvertError::NotASequence);
    };

    let mut count = 0;
    for entry in entries {
        let section: Section = serde_yaml::from_value(entry)
            .map_err(|err| ConvertError::MalformedSection(err.to_string()))?;
        log::info!("dumping {}", section.label);
        codec.write_section(output, &section)?;
        count += 1;
    }
    Ok(count)
}

/// File-path front end for the dump direction, used by the CLI.
///
/// The save is converted in full before the YAML file is touched, so a
/// corrupt save never clobbers the previous good dump.
pub fn dump_save_file(
    save_path: &Path,
    yaml_path: &Path,
    codec: &mut dyn SectionCodec,
) -> Result<usize, ConvertError> {
    let file = File::open(save_path).map_err(|err| not_found(err, save_path, true))?;
    let mut reader = BufReader::new(file);
    let mut yaml = Vec::new();
    let count = dump_to_yaml(&mut reader, &mut yaml, codec)?;
    std::fs::write(yaml_path, yaml)?;
    Ok(count)
}

/// File-path front end for the load direction, used by the CLI.
///
/// The YAML is converted in full before the save file is touched.
pub fn load_save_file(
    yaml_path: &Path,
    save_path: &Path,
    codec: &mut dyn SectionCodec,
) -> Result<usize, ConvertError> {
    let file = File::open(yaml_path).map_err(|err| not_found(err, yaml_path, false))?;
    let mut reader = BufReader::new(file);
    let mut output = Vec::new();
    let count = load_from_yaml(&mut reader, &mut output, codec)?;
    std::fs::write(save_path, output)?;
    Ok(count)
}

fn not_found(err: std::io::Error, path: &Path, save_side: bool) -> ConvertError {
    if err.kind() == std::io::ErrorKind::NotFound {
        let path = path.display().to_string();
        if save_side {
            ConvertError::SaveNotFound { path }
        } else {
            ConvertError::YamlNotFound { path }
        }
    } else {
        ConvertError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_sections() -> Vec<Section> {
        let mut system = serde_yaml::Mapping::new();
        system.insert(
            serde_yaml::Value::from("bgm_master_vol"),
            serde_yaml::Value::from(80),
        );
        vec![
            Section::new("Game_System", serde_yaml::Value::Mapping(system)),
            Section::new("Game_Switches", serde_yaml::Value::from(vec![true, false])),
            Section::new("Game_Map", serde_yaml::Value::from("map 12")),
        ]
    }

    fn encode(sections: &[Section]) -> Vec<u8> {
        let mut codec = FramedCodec;
        let mut buffer = Vec::new();
        for section in sections {
            codec.write_section(&mut buffer, section).unwrap();
        }
        buffer
    }

    #[test]
    fn test_dump_collects_every_section() {
        let sections = sample_sections();
        let mut input = Cursor::new(encode(&sections));
        let mut yaml = Vec::new();

        let count = dump_to_yaml(&mut input, &mut yaml, &mut FramedCodec).unwrap();
        assert_eq!(count, 3);

        let parsed: Vec<Section> = serde_yaml::from_slice(&yaml).unwrap();
        assert_eq!(parsed, sections);
    }

    #[test]
    fn test_load_preserves_order_and_labels() {
        let sections = sample_sections();
        let yaml = serde_yaml::to_string(&sections).unwrap();

        let mut output = Vec::new();
        let count =
            load_from_yaml(&mut Cursor::new(yaml), &mut output, &mut FramedCodec).unwrap();
        assert_eq!(count, 3);

        let mut cursor = Cursor::new(output);
        let mut codec = FramedCodec;
        let mut rebuilt = Vec::new();
        while let Some(section) = codec.read_section(&mut cursor).unwrap() {
            rebuilt.push(section);
        }
        assert_eq!(rebuilt, sections);
    }

    #[test]
    fn test_empty_save_dumps_an_empty_sequence() {
        let mut yaml = Vec::new();
        let count =
            dump_to_yaml(&mut Cursor::new(Vec::new()), &mut yaml, &mut FramedCodec).unwrap();
        assert_eq!(count, 0);

        let parsed: Vec<Section> = serde_yaml::from_slice(&yaml).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_load_rejects_non_sequence_documents() {
        let mut output = Vec::new();
        let err = load_from_yaml(
            &mut Cursor::new("just a scalar"),
            &mut output,
            &mut FramedCodec,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::NotASequence));
    }

    #[test]
    fn test_load_rejects_malformed_entries() {
        let mut output = Vec::new();
        let err = load_from_yaml(
            &mut Cursor::new("- not_a_section: true"),
            &mut output,
            &mut FramedCodec,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::MalformedSection(_)));
    }

    #[test]
    fn test_failed_dump_preserves_the_previous_yaml() {
        let dir = std::env::temp_dir();
        let save_path = dir.join(format!("dump_preserve_{}.rxdata", std::process::id()));
        let yaml_path = dir.join(format!("dump_preserve_{}.yml", std::process::id()));

        // A previous good dump.
        std::fs::write(&yaml_path, "- label: Game_System\n  body: 1\n").unwrap();

        // A save whose section body is garbage.
        let mut bad = Vec::new();
        bad.extend_from_slice(&4u32.to_be_bytes());
        bad.extend_from_slice(b"!!!!");
        std::fs::write(&save_path, bad).unwrap();

        let err = dump_save_file(&save_path, &yaml_path, &mut FramedCodec).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedSection(_)));

        let kept = std::fs::read_to_string(&yaml_path).unwrap();
        assert!(kept.contains("Game_System"));

        std::fs::remove_file(&save_path).ok();
        std::fs::remove_file(&yaml_path).ok();
    }

    #[test]
    fn test_failed_load_preserves_the_previous_save() {
        let dir = std::env::temp_dir();
        let yaml_path = dir.join(format!("load_preserve_{}.yml", std::process::id()));
        let save_path = dir.join(format!("load_preserve_{}.rxdata", std::process::id()));

        let previous = encode(&sample_sections());
        std::fs::write(&save_path, &previous).unwrap();
        std::fs::write(&yaml_path, "not a sequence").unwrap();

        let err = load_save_file(&yaml_path, &save_path, &mut FramedCodec).unwrap_err();
        assert!(matches!(err, ConvertError::NotASequence));
        assert_eq!(std::fs::read(&save_path).unwrap(), previous);

        std::fs::remove_file(&save_path).ok();
        std::fs::remove_file(&yaml_path).ok();
    }

    #[test]
    fn test_missing_save_file_is_reported() {
        let err = dump_save_file(
            Path::new("/definitely/not/here/Save.rxdata"),
            Path::new("/tmp/ignored.yml"),
            &mut FramedCodec,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::SaveNotFound { .. }));
    }

    #[test]
    fn test_version_numbers_and_extensions() {
        assert_eq!(RgssVersion::from_number(1), Some(RgssVersion::Xp));
        assert_eq!(RgssVersion::from_number(3), Some(RgssVersion::VxAce));
        assert_eq!(RgssVersion::from_number(4), None);

        assert_eq!(default_save_name(RgssVersion::Xp), "Save.rxdata");
        assert_eq!(default_output_name(RgssVersion::VxAce), "Save_fromYaml.rvdata2");
    }
}
