use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ids_jsonld::{RdfFormat, Serializer, SerializerOptions, TypeCatalog};

/// Convert, normalize and decode information-model JSON-LD documents.
#[derive(Parser)]
#[command(name = "ids-jsonld", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Serializer options as a JSON file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Re-express a JSON-LD document in another RDF format.
    Convert {
        input: PathBuf,

        /// Output format: jsonld, turtle, ntriples.
        #[arg(short, long, value_name = "FORMAT", default_value = "turtle")]
        format: String,

        /// Output file path [default: stdout].
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Run the type-name normalizer over a document.
    Normalize {
        input: PathBuf,

        /// Check that the normalized document still parses.
        #[arg(long)]
        validate: bool,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decode a document as an instance of a catalog type and encode it again.
    Decode {
        input: PathBuf,

        /// Declared type name, e.g. `Message` or `Resource`.
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        type_name: String,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_options(path: Option<&Path>) -> anyhow::Result<SerializerOptions> {
    let Some(path) = path else {
        return Ok(SerializerOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    writer.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = load_options(cli.config.as_deref())?;

    match cli.command {
        Command::Convert {
            input,
            format,
            output,
        } => {
            let format: RdfFormat = format.parse()?;
            let serializer = Serializer::with_options(options);
            let text = read_input(&input)?;
            let converted = serializer
                .convert(&text, format)
                .with_context(|| format!("converting {}", input.display()))?;
            write_output(output.as_deref(), &converted)?;
            if !cli.quiet {
                eprintln!("Converted {} to {format}", input.display());
            }
        }
        Command::Normalize {
            input,
            validate,
            output,
        } => {
            let serializer = Serializer::with_options(SerializerOptions {
                normalize_type_names: true,
                validate_preprocessing: validate || options.validate_preprocessing,
                ..options
            });
            let text = read_input(&input)?;
            let normalized = serializer
                .preprocess(&text)
                .with_context(|| format!("normalizing {}", input.display()))?;
            write_output(output.as_deref(), &normalized)?;
        }
        Command::Decode {
            input,
            type_name,
            output,
        } => {
            let declared = TypeCatalog::infomodel()
                .by_name(&type_name)
                .ok_or_else(|| anyhow!("unknown type '{type_name}'"))?;
            let serializer = Serializer::with_options(options);
            let text = read_input(&input)?;
            let object = serializer
                .deserialize(&text, declared)
                .with_context(|| format!("decoding {} as {type_name}", input.display()))?;
            let encoded = serializer.serialize(object.as_ref())?;
            write_output(output.as_deref(), &encoded)?;
            if !cli.quiet {
                eprintln!(
                    "Decoded {} as {}",
                    object.id(),
                    object.descriptor().name
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
