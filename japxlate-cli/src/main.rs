use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use japxlate::Transliterator;
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "japxlate",
    version,
    about = "Convert between hiragana, katakana and romaji"
)]
struct Cli {
    #[command(flatten)]
    rules: RuleArgs,

    #[command(subcommand)]
    command: Command,
}

/// Romanization rewrite rules, all on by default.
#[derive(Args, Debug)]
struct RuleArgs {
    /// Keep `ッ` instead of doubling the following consonant
    #[arg(long, global = true)]
    no_gemination: bool,
    /// Keep `ー` instead of doubling the preceding vowel
    #[arg(long, global = true)]
    no_long_vowel: bool,
    /// Do not read `-` between letters as `ー`
    #[arg(long, global = true)]
    no_hyphen_long_vowel: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert hiragana to katakana
    Katakana {
        /// Text to convert, read line by line from stdin if omitted
        text: Vec<String>,
    },
    /// Convert katakana to hiragana
    Hiragana {
        /// Text to convert, read line by line from stdin if omitted
        text: Vec<String>,
    },
    /// Convert kana to romaji
    Romaji {
        /// Text to convert, read line by line from stdin if omitted
        text: Vec<String>,
    },
    /// Convert romaji to hiragana
    Kana {
        /// Text to convert, read line by line from stdin if omitted
        text: Vec<String>,
    },
    /// Pick random syllables for handwriting practice
    Practice {
        /// Number of syllables
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn transliterator(rules: &RuleArgs) -> japxlate::Result<Transliterator> {
    Transliterator::builder()
        .gemination(!rules.no_gemination)
        .long_vowel(!rules.no_long_vowel)
        .hyphen_long_vowel(!rules.no_hyphen_long_vowel)
        .build()
}

/// Convert `text` joined by spaces, or every line of `input` if `text` is empty.
fn convert_each(
    text: &[String],
    input: impl BufRead,
    out: &mut impl Write,
    f: impl Fn(&str) -> String,
) -> anyhow::Result<()> {
    if !text.is_empty() {
        writeln!(out, "{}", f(&text.join(" ")))?;
        return Ok(());
    }
    for line in input.lines() {
        writeln!(out, "{}", f(&line?))?;
    }
    Ok(())
}

fn run(cli: Cli, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let t = transliterator(&cli.rules)?;
    debug!(command = ?cli.command, "running");

    match cli.command {
        Command::Katakana { text } => {
            convert_each(&text, input, out, |s| t.hiragana_to_katakana(s))
        }
        Command::Hiragana { text } => {
            convert_each(&text, input, out, |s| t.katakana_to_hiragana(s))
        }
        Command::Romaji { text } => convert_each(&text, input, out, |s| t.kana_to_romaji(s)),
        Command::Kana { text } => convert_each(&text, input, out, |s| t.romaji_to_hiragana(s)),
        Command::Practice { count, seed, json } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            for _ in 0..count {
                let p = t.random_practice_syllable_with(&mut rng);
                if json {
                    writeln!(out, "{}", serde_json::to_string(&p)?)?;
                } else {
                    writeln!(out, "{}\t{}\t{}", p.character, p.romaji, p.script)?;
                }
            }
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(cli, io::stdin().lock(), &mut io::stdout().lock())
}
