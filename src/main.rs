use anyhow::{bail, Context, Result};
use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};
use tracing::{debug, Level};

use genko_tex::{
    config::{DocumentConfig, Preset},
    output::{DebugOutput, JsonLinesOutput, LaTeXOutput},
    scanner::{self, Output},
    utility::decode_text,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    LaTeX,
    Debug,
    Json,
}

impl Format {
    fn of(name: &str) -> Result<Self> {
        match name {
            "latex" => Ok(Self::LaTeX),
            "debug" => Ok(Self::Debug),
            "json" => Ok(Self::Json),
            name => bail!("Unknown format: {}", name),
        }
    }
}

struct Args {
    input_path: Option<String>,
    output_path: Option<String>,
    format: Format,
    preset: Preset,
    config_path: Option<String>,
    encoding: String,
    verbose: bool,
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optopt("o", "output", "output file (default: stdout)", "FILE");
    opts.optopt("f", "format", "latex, debug or json (default: latex)", "FORMAT");
    opts.optopt("p", "preset", "plain or tankobon (default: tankobon)", "PRESET");
    opts.optopt("c", "config", "JSON document config, overrides --preset", "FILE");
    opts.optopt("e", "encoding", "input encoding (default: utf-8)", "LABEL");
    opts.optflag("v", "verbose", "trace every scan step on stderr");
    opts.optflag("h", "help", "print this help");
    opts
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = options();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: genko-tex [options] [INPUT]"));
        return Ok(None);
    }

    let format = match matches.opt_str("f") {
        Some(name) => Format::of(&name)?,
        None => Format::LaTeX,
    };
    let preset = match matches.opt_str("p") {
        Some(name) => Preset::of(&name)?,
        None => Preset::Tankobon,
    };

    Ok(Some(Args {
        input_path: matches.free.first().cloned(),
        output_path: matches.opt_str("o"),
        format,
        preset,
        config_path: matches.opt_str("c"),
        encoding: matches.opt_str("e").unwrap_or_else(|| "utf-8".to_owned()),
        verbose: matches.opt_present("v"),
    }))
}

fn read_input(args: &Args) -> Result<String> {
    let bytes = match &args.input_path {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read: {}", path))?,
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            bytes
        }
    };

    decode_text(&bytes, &args.encoding)
}

fn main() -> Result<()> {
    let Some(args) = get_args()? else {
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::TRACE
        } else {
            Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let text = read_input(&args)?;

    let writer: Box<dyn Write> = match &args.output_path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create: {}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut out: Box<dyn Output> = match args.format {
        Format::LaTeX => {
            let config = match &args.config_path {
                Some(path) => DocumentConfig::load(&PathBuf::from(path))?,
                None => args.preset.config(),
            };
            debug!(?config, "latex output");
            Box::new(LaTeXOutput::new(writer, config))
        }
        Format::Debug => Box::new(DebugOutput::new(writer)),
        Format::Json => Box::new(JsonLinesOutput::new(writer)),
    };
    debug!(format = ?args.format, chars = text.chars().count(), "scanning");

    scanner::run(&text, out.as_mut()).context("Failed to scan")?;
    out.finish()?;

    Ok(())
}
