#![deny(unsafe_code)]
//! CLI binary for the colorful picker.
//!
//! Subcommands:
//! - `show`: build a picker, apply channel values and pointer events, print the color
//! - `render`: same, then write PNG snapshots of every surface and the swatch
//! - `config`: print the effective configuration as JSON

mod error;

use clap::{Args, Parser, Subcommand};
use colorful_core::{css_hsl, css_rgb, Channel, Picker, PickerConfig, PickerError, SurfaceKind};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "colorful", about = "HSB/RGB color picker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Picker configuration file (JSON). Missing fields take defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply inputs and print the resulting color.
    Show {
        #[command(flatten)]
        input: ColorInput,
    },
    /// Apply inputs and write PNG snapshots of the picker surfaces.
    Render {
        #[command(flatten)]
        input: ColorInput,

        /// Directory for hue.png, field.png, opacity.png and swatch.png.
        #[arg(short, long, default_value = "colorful-out")]
        out_dir: PathBuf,
    },
    /// Print the effective configuration.
    Config,
}

/// Channel writes and pointer events, applied in the order listed here.
#[derive(Args)]
struct ColorInput {
    /// Hue in degrees (wraps modulo 360).
    #[arg(long, allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Saturation in [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    saturation: Option<f64>,

    /// Brightness in [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    brightness: Option<f64>,

    /// Opacity in [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    opacity: Option<f64>,

    /// Red in [0, 255].
    #[arg(long, allow_negative_numbers = true)]
    red: Option<f64>,

    /// Green in [0, 255].
    #[arg(long, allow_negative_numbers = true)]
    green: Option<f64>,

    /// Blue in [0, 255].
    #[arg(long, allow_negative_numbers = true)]
    blue: Option<f64>,

    /// Pointer event as `surface:x,y` (surface is hue, field or opacity).
    /// May be repeated.
    #[arg(long = "pointer", value_name = "SURFACE:X,Y", allow_hyphen_values = true)]
    pointers: Vec<String>,
}

impl ColorInput {
    fn apply(&self, picker: &Picker) -> Result<(), CliError> {
        let writes = [
            (Channel::Hue, self.hue),
            (Channel::Saturation, self.saturation),
            (Channel::Brightness, self.brightness),
            (Channel::Opacity, self.opacity),
            (Channel::Red, self.red),
            (Channel::Green, self.green),
            (Channel::Blue, self.blue),
        ];
        for (channel, value) in writes {
            if let Some(value) = value {
                if !picker.set(channel, value)? {
                    return Err(CliError::Rejected { channel, value });
                }
            }
        }
        for spec in &self.pointers {
            let (kind, x, y) = parse_pointer(spec)?;
            if !picker.pointer(kind, x, y) {
                return Err(CliError::Pointer {
                    spec: spec.clone(),
                    reason: "the event was not applied".into(),
                });
            }
        }
        Ok(())
    }
}

/// Parses `surface:x,y`.
fn parse_pointer(spec: &str) -> Result<(SurfaceKind, f64, f64), CliError> {
    let invalid = |reason: String| CliError::Pointer {
        spec: spec.to_string(),
        reason,
    };
    let shape = || invalid("expected SURFACE:X,Y".into());
    let (surface, coords) = spec.split_once(':').ok_or_else(shape)?;
    let surface = surface.trim();
    let kind = SurfaceKind::from_name(surface).ok_or_else(|| {
        invalid(format!(
            "unknown surface '{surface}' (expected hue, field or opacity)"
        ))
    })?;
    let (x, y) = coords.split_once(',').ok_or_else(shape)?;
    let coord = |c: &str| {
        c.trim()
            .parse::<f64>()
            .map_err(|_| invalid(format!("'{}' is not a number", c.trim())))
    };
    Ok((kind, coord(x)?, coord(y)?))
}

fn load_config(path: Option<&Path>) -> Result<PickerConfig, CliError> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    PickerConfig::from_path(path).map_err(|e| match e {
        PickerError::InvalidConfig(message) => CliError::Config {
            path: path.to_path_buf(),
            message,
        },
        other => other.into(),
    })
}

fn color_json(picker: &Picker) -> serde_json::Value {
    let value = picker.model().value();
    serde_json::json!({
        "color": value,
        "rgb": css_rgb(&value),
        "hsl": css_hsl(&value),
    })
}

fn print_color(picker: &Picker) {
    let value = picker.model().value();
    println!("{}", value.hex());
    println!("{}", css_rgb(&value));
    println!("{}", css_hsl(&value));
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Show { input } => {
            let picker = Picker::new(config)?;
            input.apply(&picker)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&color_json(&picker))?);
            } else {
                print_color(&picker);
            }
        }
        Command::Render { input, out_dir } => {
            let picker = Picker::new(config)?;
            input.apply(&picker)?;
            let written = colorful_snapshot::snapshot::write_picker(&picker, &out_dir)?;

            if cli.json {
                let mut info = color_json(&picker);
                info["files"] = serde_json::json!(written
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>());
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_color(&picker);
                eprintln!("wrote {} files to {}", written.len(), out_dir.display());
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            eprintln!("{}", serde_json::to_string_pretty(&e.to_json()).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
