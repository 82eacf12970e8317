use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use clap::{Parser, Subcommand};
use ngram_dice::{
    similarity, similarity_batch, top_matches_with_config, DiceError, DiceMatch, MatchConfig,
};

#[derive(Parser)]
#[command(name = "ngram-dice")]
#[command(about = "Dice-coefficient string similarity over adaptive n-grams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Similarity of two strings
    Score { a: String, b: String },

    /// Score a query against every candidate, in input order
    Batch {
        query: String,

        #[command(flatten)]
        input: CandidateArgs,
    },

    /// Best matches for a query
    Top {
        query: String,

        #[command(flatten)]
        input: CandidateArgs,

        /// Maximum results (0 = all)
        #[arg(short = 'n', long, default_value = "0")]
        top_n: usize,

        /// Minimum score to keep
        #[arg(short, long, default_value = "0")]
        cutoff: f64,

        /// Candidate count at which scoring goes parallel (0 = never)
        #[arg(long, default_value = "1024")]
        parallel_threshold: usize,
    },
}

#[derive(clap::Args)]
struct CandidateArgs {
    /// Candidate strings
    candidates: Vec<String>,

    /// Read candidates from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    file: Option<String>,
}

impl CandidateArgs {
    fn load(self) -> anyhow::Result<Vec<String>> {
        let mut candidates = self.candidates;
        if let Some(path) = self.file {
            let reader: Box<dyn BufRead> = if path == "-" {
                Box::new(BufReader::new(io::stdin()))
            } else {
                let file = File::open(&path).with_context(|| format!("opening {path}"))?;
                Box::new(BufReader::new(file))
            };
            for line in reader.lines() {
                candidates.push(line.context("reading candidates")?);
            }
        }
        if candidates.is_empty() {
            return Err(DiceError::InvalidInput(
                "no candidates given (pass them as arguments or with --file)".to_string(),
            )
            .into());
        }
        Ok(candidates)
    }
}

fn print_matches(matches: &[DiceMatch], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(matches)?);
    } else {
        for m in matches {
            println!("{:.4}\t{}", m.score, m.item);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    ngram_dice::logging::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { a, b } => {
            let score = similarity(&a, &b);
            if cli.json {
                println!("{}", serde_json::json!({ "a": a, "b": b, "score": score }));
            } else {
                println!("{score:.4}");
            }
        }

        Commands::Batch { query, input } => {
            let candidates = input.load()?;
            print_matches(&similarity_batch(&query, &candidates), cli.json)?;
        }

        Commands::Top {
            query,
            input,
            top_n,
            cutoff,
            parallel_threshold,
        } => {
            let candidates = input.load()?;
            let cfg = MatchConfig {
                top_n,
                cutoff,
                parallel_threshold,
            };
            let matches = top_matches_with_config(&query, &candidates, &cfg)?;
            print_matches(&matches, cli.json)?;
        }
    }

    Ok(())
}
