//! easel - render seeded sketches and poke at the toolkit from a shell.
//!
//! `render` draws one of the built-in sketches onto a recording surface and
//! writes the recorded surface calls as JSON. `sample` prints draws from a
//! seeded generator. `inspect` measures a path read as JSON.

mod config;
mod logger;
mod sketch;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use color::Color;
use config::SketchConfig;
use geometry::{Path, SegmentKind};
use logger::{level_from_verbosity, EaselLogger};
use random::{entropy_seed, PartOfSpeech, Random, TaggedWordList};
use serde::Serialize;
use sketch::SketchKind;
use std::io::{Read, Write};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// easel - seeded generative sketches
#[derive(Parser)]
#[command(name = "easel")]
#[command(about = "Render and inspect seeded generative sketches")]
struct Cli {
    /// More output per repetition (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Append log lines to this file as well as stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sketch and write its surface calls as JSON
    Render {
        /// JSON settings file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        /// Seed string (default: drawn from entropy and logged)
        #[arg(short, long)]
        seed: Option<String>,

        /// scatter, flow or grid
        #[arg(long)]
        sketch: Option<SketchKind>,

        #[arg(long)]
        count: Option<usize>,

        /// Background as any CSS color
        #[arg(long)]
        background: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Print values drawn from a seeded generator
    Sample {
        #[arg(short, long)]
        seed: Option<String>,

        /// Push a child context before drawing; repeat to nest
        #[arg(long = "context")]
        contexts: Vec<String>,

        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        #[arg(value_enum, default_value_t = SampleKind::Next)]
        kind: SampleKind,

        #[arg(long, default_value_t = 0.0)]
        min: f64,

        #[arg(long, default_value_t = 10.0)]
        max: f64,

        /// Word list with one `word<TAB>TAG` per line, for `word`
        #[arg(long)]
        words: Option<PathBuf>,

        /// noun, adjective, adverb or other
        #[arg(long)]
        part_of_speech: Option<PartOfSpeech>,
    },

    /// Measure a JSON path read from a file, or `-` for stdin
    Inspect { input: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleKind {
    Next,
    Int,
    Float,
    Angle,
    Bool,
    Color,
    Word,
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    run_id: Option<&'a str>,
    seed: &'a str,
    sketch: SketchKind,
    width: f64,
    height: f64,
    ops: Vec<canvas::DrawOp>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    EaselLogger::init(
        level_from_verbosity(cli.verbose, cli.quiet),
        cli.log_file.as_deref(),
    )?;

    match cli.command {
        Commands::Render {
            config,
            width,
            height,
            seed,
            sketch,
            count,
            background,
            out,
            pretty,
        } => {
            let mut settings = match config {
                Some(path) => SketchConfig::load(&path)?,
                None => SketchConfig::default(),
            };
            settings.width = width.unwrap_or(settings.width);
            settings.height = height.unwrap_or(settings.height);
            settings.seed = seed.or(settings.seed);
            settings.sketch = sketch.unwrap_or(settings.sketch);
            settings.count = count.unwrap_or(settings.count);
            settings.background = background.unwrap_or(settings.background);
            render(settings, out, pretty)
        }
        Commands::Sample {
            seed,
            contexts,
            count,
            kind,
            min,
            max,
            words,
            part_of_speech,
        } => {
            let words = match words {
                Some(path) => Some(TaggedWordList::parse(
                    &std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read word list {}", path.display()))?,
                )),
                None => None,
            };
            let mut random = Random::new("sample", seed.as_deref());
            for label in &contexts {
                random.push(label.as_str(), None);
            }
            log::info!(
                "Sampling {} x {:?} from context {:?} (seed {:?})",
                count,
                kind,
                random.label(),
                random.seed()
            );
            for _ in 0..count {
                println!(
                    "{}",
                    sample(&mut random, kind, min, max, words.as_ref(), part_of_speech)?
                );
            }
            Ok(())
        }
        Commands::Inspect { input } => inspect(&input),
    }
}

fn render(settings: SketchConfig, out: Option<PathBuf>, pretty: bool) -> Result<()> {
    settings.validate()?;
    let seed = match &settings.seed {
        Some(seed) => seed.clone(),
        None => {
            let seed = entropy_seed();
            log::info!("No seed given, using {:?}", seed);
            seed
        }
    };

    let ops = sketch::render(&settings, &seed)?;
    let output = RenderOutput {
        run_id: EaselLogger::current_run_id(),
        seed: &seed,
        sketch: settings.sketch,
        width: settings.width,
        height: settings.height,
        ops,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} ops to {}", output.ops.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

fn sample(
    random: &mut Random,
    kind: SampleKind,
    min: f64,
    max: f64,
    words: Option<&TaggedWordList>,
    part_of_speech: Option<PartOfSpeech>,
) -> Result<String> {
    Ok(match kind {
        SampleKind::Next => random.next().to_string(),
        SampleKind::Int => random.int(min as i64, max as i64).to_string(),
        SampleKind::Float => random.float(min, max).to_string(),
        SampleKind::Angle => random.angle().to_string(),
        SampleKind::Bool => random.bool(0.5).to_string(),
        SampleKind::Color => Color::random(random).to_hex(),
        SampleKind::Word => {
            let Some(words) = words else {
                bail!("`word` needs a word list, pass one with --words");
            };
            random
                .word(words, part_of_speech)
                .unwrap_or_default()
                .to_string()
        }
    })
}

fn inspect(input: &std::path::Path) -> Result<()> {
    let text = if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read path from stdin")?;
        text
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };
    let path: Path = serde_json::from_str(&text).context("Failed to parse path JSON")?;

    let mut segments = serde_json::Map::new();
    for kind in SegmentKind::iter() {
        let count = path.segments().iter().filter(|s| s.kind() == kind).count();
        if count > 0 {
            segments.insert(kind.to_string(), count.into());
        }
    }

    let report = serde_json::json!({
        "start": path.start(),
        "end": path.current_end(),
        "bounds": path.bounds(),
        "length": path.length(),
        "approximate_length": path.approximate_length(64),
        "segments": segments,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
