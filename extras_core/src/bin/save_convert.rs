//! Offline save-file converter.
//!
//! Dumps a save to a YAML document for inspection and hand-editing, or
//! rebuilds a save from an edited YAML. Rebuilt saves get a distinct name so
//! the original is never clobbered. The binary uses the offline framed
//! codec; embeddings with engine marshal support drive the library directly
//! with their own codec.

use clap::{Parser, ValueEnum};
use extras_core::savefile::{
    default_output_name, default_save_name, dump_save_file, load_save_file, FramedCodec,
    RgssVersion,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "save_convert")]
#[command(about = "Convert engine save files to YAML and back")]
struct Args {
    /// Conversion direction
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Engine generation, selects the save extension (1 = XP, 2 = VX, 3 = VX Ace)
    #[arg(short, long, default_value = "1")]
    rgss: u8,

    /// Directory holding the save and yaml files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Explicit save file path, overriding the conventional name
    #[arg(long)]
    save: Option<PathBuf>,

    /// Explicit yaml file path
    #[arg(long)]
    yaml: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Save file to YAML
    Dump,
    /// YAML back to a save file
    Load,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Some(version) = RgssVersion::from_number(args.rgss) else {
        eprintln!("unsupported rgss generation: {} (expected 1, 2 or 3)", args.rgss);
        return ExitCode::FAILURE;
    };

    let yaml = args.yaml.unwrap_or_else(|| args.dir.join("Save.yml"));
    let mut codec = FramedCodec;

    let result = match args.mode {
        Mode::Dump => {
            let save = args
                .save
                .unwrap_or_else(|| args.dir.join(default_save_name(version)));
            log::info!("converting {} to {}", save.display(), yaml.display());
            dump_save_file(&save, &yaml, &mut codec)
        }
        Mode::Load => {
            let save = args
                .save
                .unwrap_or_else(|| args.dir.join(default_output_name(version)));
            log::info!("converting {} to {}", yaml.display(), save.display());
            load_save_file(&yaml, &save, &mut codec)
        }
    };

    match result {
        Ok(count) => {
            log::info!("converted {} sections", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
