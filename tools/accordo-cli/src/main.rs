use std::fs;
use std::path::{Path, PathBuf};

use accordo_conll::{load_file, validate_file};
use accordo_morph::{Lexicon, LexiconSynthesizer};
use accordo_rules::{Checker, CheckerConfig, RuleMatch};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Agreement checker for dependency-parsed Italian")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lists structurally defective lines of a CoNLL-X file
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Checks every sentence of a CoNLL-X corpus and prints one JSON report per sentence
    Check {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        lexicon: PathBuf,

        /// JSON file selecting which rules run
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Compiles a JSON lexicon to an rkyv binary
    CompileLexicon {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct SentenceReport<'a> {
    sentence: usize,
    text: String,
    matches: &'a [RuleMatch],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file } => validate(&file),
        Command::Check { input, lexicon, config } => check(&input, &lexicon, config.as_deref()),
        Command::CompileLexicon { input, output } => compile_lexicon(&input, &output),
    }
}

fn validate(file: &Path) -> anyhow::Result<()> {
    let report = validate_file(file).with_context(|| format!("reading {:?}", file))?;
    let categories = [
        ("column count", &report.column_count),
        ("token number", &report.token_number),
        ("head", &report.head),
        ("reserved columns", &report.reserved_columns),
    ];
    for (category, lines) in categories {
        for line in lines {
            println!("{}:{}: {}", file.display(), line, category);
        }
    }

    let defective = report.defective_lines();
    if !defective.is_empty() {
        bail!("{} defective lines in {:?}", defective.len(), file);
    }
    println!("{:?} is valid", file);
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CheckerConfig> {
    let Some(path) = path else {
        return Ok(CheckerConfig::default());
    };
    let data = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    serde_json::from_str(&data).with_context(|| format!("parsing config {:?}", path))
}

fn check(input: &Path, lexicon: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let bytes = fs::read(lexicon).with_context(|| format!("reading {:?}", lexicon))?;
    let synth = LexiconSynthesizer::from_bytes(&bytes).with_context(|| format!("loading lexicon {:?}", lexicon))?;
    info!("lexicon {:?}: {} entries", lexicon, synth.len());

    let sentences = load_file(input).with_context(|| format!("loading corpus {:?}", input))?;
    let checker = Checker::from_config(&config, synth);

    for (index, sentence) in sentences.iter().enumerate() {
        let matches = checker
            .check(sentence)
            .with_context(|| format!("checking sentence {}", index + 1))?;
        let report = SentenceReport {
            sentence: index + 1,
            text: sentence.text(),
            matches: &matches,
        };
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn compile_lexicon(input: &Path, output: &Path) -> anyhow::Result<()> {
    info!("reading lexicon source {:?}", input);
    let data = fs::read_to_string(input).with_context(|| format!("reading {:?}", input))?;
    let lexicon: Lexicon = serde_json::from_str(&data)?;

    info!("compiling lexicon version {} with {} entries", lexicon.version, lexicon.entries.len());
    let bytes = lexicon.to_bytes()?;

    // Same validation the checker runs on load.
    if let Err(err) = rkyv::check_archived_root::<Lexicon>(&bytes) {
        bail!("compiled lexicon failed validation: {:?}", err);
    }

    fs::write(output, &bytes).with_context(|| format!("writing {:?}", output))?;
    println!("{:?} written ({} bytes)", output, bytes.len());
    Ok(())
}
