//! # Barra CLI
//!
//! Command-line interface for barcode encoding and rendering.
//!
//! ## Usage
//!
//! ```bash
//! # List supported symbologies
//! barra formats
//!
//! # Check input before encoding
//! barra validate ean13 5901234123457
//!
//! # Print the module sequence
//! barra encode code128 "Invoice-1042"
//!
//! # Render a PNG with the product preset
//! barra render ean13 5901234123457 --png ean.png --preset product
//!
//! # Render a label sheet from a JSON list of {"text", "symbology"} requests
//! barra batch requests.json --out-dir labels/
//!
//! # Complete a check digit, generate demo codes
//! barra check-digit upc 03600029145
//! barra random ean13 --count 5 --seed 42
//! ```
//!
//! Set `RUST_LOG=barra=debug` (or pass `-v`) for encoder and batch logs.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use barra::{
    BarraError, EncodeRequest, Symbology,
    batch::BatchGenerator,
    codec::{self, ChecksumPolicy, Encoder, checksum},
    random,
    render::{self, Color, RenderOptions},
};

/// Barra - Linear barcode utility
#[derive(Parser, Debug)]
#[command(name = "barra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported symbologies
    Formats,

    /// Check text against a symbology's length and character rules
    Validate { symbology: Symbology, text: String },

    /// Print the module sequence as 0/1
    Encode {
        symbology: Symbology,
        text: String,

        /// Treatment of EAN/UPC check digits
        #[arg(long, value_enum, default_value_t = PolicyArg::Trust)]
        checksum: PolicyArg,
    },

    /// Render a barcode to a PNG file
    Render {
        symbology: Symbology,
        text: String,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Treatment of EAN/UPC check digits
        #[arg(long, value_enum, default_value_t = PolicyArg::Trust)]
        checksum: PolicyArg,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render every request in a JSON file into a directory of PNGs
    Batch {
        /// JSON array of {"text": ..., "symbology": ...}
        requests: PathBuf,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Treatment of EAN/UPC check digits
        #[arg(long, value_enum, default_value_t = PolicyArg::Trust)]
        checksum: PolicyArg,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Append the check digit to a numeric payload
    CheckDigit { symbology: Symbology, payload: String },

    /// Generate random valid codes
    Random {
        symbology: Symbology,

        /// Number of codes
        #[arg(long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Leading digits (EAN-13 only)
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Trust,
    Recompute,
    Verify,
}

impl From<PolicyArg> for ChecksumPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Trust => ChecksumPolicy::Trust,
            PolicyArg::Recompute => ChecksumPolicy::Recompute,
            PolicyArg::Verify => ChecksumPolicy::Verify,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    Default,
    Product,
    Invoice,
    Compact,
}

/// Render option sources, applied in order: preset, options file, flags.
#[derive(Args, Debug)]
struct RenderArgs {
    /// Starting preset
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// JSON file with render options (missing fields keep the preset's values)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Module width in pixels
    #[arg(long)]
    module_width: Option<u32>,

    /// Bar height in pixels
    #[arg(long)]
    bar_height: Option<u32>,

    /// Quiet zone in pixels
    #[arg(long)]
    margin: Option<u32>,

    /// Caption size in pixels
    #[arg(long)]
    font_size: Option<u32>,

    /// Gap between bars and caption in pixels
    #[arg(long)]
    text_margin: Option<u32>,

    /// Omit the human-readable caption
    #[arg(long)]
    no_text: bool,

    /// Background color (#rrggbb)
    #[arg(long)]
    background: Option<Color>,

    /// Bar and text color (#rrggbb)
    #[arg(long)]
    foreground: Option<Color>,
}

impl RenderArgs {
    fn resolve(&self) -> Result<RenderOptions, BarraError> {
        let mut options = match self.preset {
            Preset::Default => RenderOptions::default(),
            Preset::Product => RenderOptions::product(),
            Preset::Invoice => RenderOptions::invoice(),
            Preset::Compact => RenderOptions::compact(),
        };

        if let Some(path) = &self.options {
            options = merge_options_file(options, path)?;
        }

        if let Some(v) = self.module_width {
            options.module_width = v;
        }
        if let Some(v) = self.bar_height {
            options.bar_height = v;
        }
        if let Some(v) = self.margin {
            options.margin = v;
        }
        if let Some(v) = self.font_size {
            options.font_size = v;
        }
        if let Some(v) = self.text_margin {
            options.text_margin = v;
        }
        if self.no_text {
            options.display_text = false;
        }
        if let Some(c) = self.background {
            options.background_color = c;
        }
        if let Some(c) = self.foreground {
            options.foreground_color = c;
        }

        options.validate()?;
        Ok(options)
    }
}

const OPTION_ALIASES: [(&str, &str); 2] = [
    ("background", "background_color"),
    ("line_color", "foreground_color"),
];

/// Overlay the fields present in a JSON file onto `base`.
fn merge_options_file(base: RenderOptions, path: &Path) -> Result<RenderOptions, BarraError> {
    let text = fs::read_to_string(path)?;
    let overlay: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| BarraError::Config(format!("{}: {}", path.display(), e)))?;
    let serde_json::Value::Object(fields) = overlay else {
        return Err(BarraError::Config(format!(
            "{}: expected a JSON object",
            path.display()
        )));
    };

    let mut merged = serde_json::to_value(base)
        .map_err(|e| BarraError::Config(e.to_string()))?;
    if let serde_json::Value::Object(map) = &mut merged {
        // An alias in the file replaces the base's canonical key
        for (alias, canonical) in OPTION_ALIASES {
            if fields.contains_key(alias) {
                map.remove(canonical);
            }
        }
        map.extend(fields);
    }
    serde_json::from_value(merged).map_err(|e| BarraError::Config(format!("{}: {}", path.display(), e)))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Commands) -> Result<(), BarraError> {
    match command {
        Commands::Formats => {
            println!("Supported symbologies:");
            for sym in Symbology::ALL {
                println!(
                    "  {:<8} {:<9} {} ({} characters)",
                    sym.name(),
                    sym.label(),
                    sym.description(),
                    sym.length_rule()
                );
            }
        }

        Commands::Validate { symbology, text } => {
            let violations = codec::violations(&text, symbology);
            if violations.is_empty() {
                println!("Valid {}", symbology);
            } else {
                for v in &violations {
                    println!("  {}", v);
                }
                return Err(BarraError::Encode(violations[0].clone()));
            }
        }

        Commands::Encode {
            symbology,
            text,
            checksum,
        } => {
            let encoder = Encoder::new().checksum_policy(checksum.into());
            let modules = encoder.encode(&EncodeRequest::new(text, symbology))?;
            println!("{}", modules);
        }

        Commands::Render {
            symbology,
            text,
            png,
            checksum,
            render: render_args,
        } => {
            let options = render_args.resolve()?;
            let encoder = Encoder::new().checksum_policy(checksum.into());
            let modules = encoder.encode(&EncodeRequest::new(text.as_str(), symbology))?;
            let image = render::render_label(&modules, &text, &options)?;
            image.save_png(&png)?;
            println!(
                "Saved {} ({}x{}) to {}",
                symbology,
                image.width(),
                image.height(),
                png.display()
            );
        }

        Commands::Batch {
            requests,
            out_dir,
            checksum,
            render: render_args,
        } => {
            let options = render_args.resolve()?;
            let text = fs::read_to_string(&requests)?;
            let requests: Vec<EncodeRequest> = serde_json::from_str(&text)
                .map_err(|e| BarraError::Config(format!("{}: {}", requests.display(), e)))?;
            fs::create_dir_all(&out_dir)?;

            let generator =
                BatchGenerator::new(options).encoder(Encoder::new().checksum_policy(checksum.into()));
            let results = generator.run(&requests);

            let mut failed = 0;
            for (i, (request, result)) in requests.iter().zip(results).enumerate() {
                match result {
                    Ok(image) => {
                        let path = out_dir.join(label_file_name(i, &request.text));
                        image.save_png(&path)?;
                        println!("Saved {}", path.display());
                    }
                    Err(e) => {
                        failed += 1;
                        eprintln!("#{} {:?}: {}", i + 1, request.text, e);
                    }
                }
            }
            println!("{} of {} labels rendered", requests.len() - failed, requests.len());
        }

        Commands::CheckDigit { symbology, payload } => {
            println!("{}", checksum::with_check_digit(&payload, symbology)?);
        }

        Commands::Random {
            symbology,
            count,
            seed,
            prefix,
        } => {
            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::rng()),
            };
            for _ in 0..count {
                let code = match (&prefix, symbology) {
                    (Some(prefix), Symbology::Ean13) => {
                        random::random_ean13_with_prefix(prefix, &mut *rng)?
                    }
                    (Some(_), other) => {
                        return Err(BarraError::Config(format!(
                            "--prefix is only supported for EAN-13, not {}",
                            other
                        )));
                    }
                    (None, sym) => random::random_code(sym, &mut *rng),
                };
                println!("{}", code);
            }
        }
    }

    Ok(())
}

/// `003-SKU_42.png` style file names.
fn label_file_name(index: usize, text: &str) -> String {
    let slug: String = text
        .chars()
        .take(40)
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{:03}-{}.png", index + 1, slug)
}
