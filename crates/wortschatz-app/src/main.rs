use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wortschatz_codec::{compress, decompress};
use wortschatz_config::Config;
use wortschatz_core::{Word, validate};
use wortschatz_lookup::LookupTables;
use wortschatz_tagger::{TaggerClient, match_sentence, resolve_sentence};

#[derive(Parser)]
#[command(name = "wortschatz")]
#[command(about = "Compressed German vocabulary dataset tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a JSON word list into the dataset format
    Pack {
        /// Input JSON file (array of words)
        input: PathBuf,

        /// Output dataset file
        output: PathBuf,
    },

    /// Expand a dataset file back into JSON
    Unpack {
        /// Input dataset file
        input: PathBuf,

        /// Output JSON file
        output: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Validate every word in a JSON word list
    Check {
        /// Input JSON file (array of words)
        input: PathBuf,
    },

    /// Tag sentences and look up each of their words in the dataset
    Words {
        /// Sentences to analyze
        #[arg(required = true)]
        sentences: Vec<String>,

        /// Dataset file, overrides DATASET_PATH
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    match cli.command {
        Commands::Pack { input, output } => cmd_pack(input, output),
        Commands::Unpack {
            input,
            output,
            pretty,
        } => cmd_unpack(input, output, pretty),
        Commands::Check { input } => cmd_check(input),
        Commands::Words { sentences, dataset } => cmd_words(sentences, dataset, &config).await,
    }
}

fn cmd_pack(input: PathBuf, output: PathBuf) -> Result<()> {
    let words = read_words(&input)?;

    let packed = compress(&words);
    fs::write(&output, &packed).with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Packed {} words into {} ({} bytes)",
        words.len(),
        output.display(),
        packed.len()
    );
    Ok(())
}

fn cmd_unpack(input: PathBuf, output: PathBuf, pretty: bool) -> Result<()> {
    let words = read_dataset(&input)?;

    let json = if pretty {
        serde_json::to_string_pretty(&words)?
    } else {
        serde_json::to_string(&words)?
    };
    fs::write(&output, json).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Unpacked {} words into {}", words.len(), output.display());
    Ok(())
}

fn cmd_check(input: PathBuf) -> Result<()> {
    let words = read_words(&input)?;

    let mut failures = 0usize;
    for word in &words {
        if let Err(error) = validate(word) {
            failures += 1;
            eprintln!("{error}");
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} words failed validation", failures, words.len());
    }

    println!("All {} words are valid", words.len());
    Ok(())
}

async fn cmd_words(
    sentences: Vec<String>,
    dataset: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let path = dataset.unwrap_or_else(|| PathBuf::from(&config.dataset.path));
    let words = read_dataset(&path)?;
    tracing::debug!("loaded {} words from {}", words.len(), path.display());
    let tables = LookupTables::build(&words);

    let client = TaggerClient::new(config.tagger.api_url.clone(), config.tagger.batch_size);

    if let [sentence] = sentences.as_slice() {
        let matched = resolve_sentence(&client, sentence, &tables).await?;
        print_matches(&matched);
        return Ok(());
    }

    let tagged = client.tag_batch(&sentences).await?;
    for (sentence, tokens) in sentences.iter().zip(tagged) {
        println!("{sentence}");
        print_matches(&match_sentence(&tokens, &tables));
    }
    Ok(())
}

fn print_matches(matched: &[Option<&Word>]) {
    let found: Vec<&Word> = matched.iter().flatten().copied().collect();
    if found.is_empty() {
        println!("No dictionary entries matched");
        return;
    }

    for word in found {
        println!("{}: {}", word.lemma(), word.translations().join(", "));
    }
}

fn read_words(path: &Path) -> Result<Vec<Word>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_dataset(path: &Path) -> Result<Vec<Word>> {
    let packed =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decompress(&packed).with_context(|| format!("Failed to decode {}", path.display()))
}
