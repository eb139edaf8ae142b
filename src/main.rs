use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};
use topk_trie::output::{self, QueryResult};
use topk_trie::{AutocompleteIndex, BruteForceIndex, CorpusLoader, IndexConfig};

#[derive(Parser)]
#[command(name = "topk-trie")]
#[command(about = "Prefix autocomplete returning the best-scored phrases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best completions for one or more prefixes
    Query {
        /// Prefixes to complete (the empty prefix when none are given)
        prefixes: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        /// Emit JSON lines instead of text
        #[arg(long)]
        json: bool,

        /// Show scores next to phrases
        #[arg(short, long)]
        scores: bool,

        /// Answer with the brute-force scan instead of the trie
        #[arg(long)]
        baseline: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Read prefixes from stdin, one per line, and complete each
    Shell {
        #[command(flatten)]
        source: SourceArgs,

        /// Show scores next to phrases
        #[arg(short, long)]
        scores: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Corpus file with one `phrase<TAB>score` per line
    #[arg(short, long)]
    corpus: PathBuf,

    /// Completions kept per prefix (overrides the config file)
    #[arg(short)]
    k: Option<usize>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hide the loading progress bar
    #[arg(long)]
    quiet: bool,
}

impl SourceArgs {
    fn config(&self) -> Result<IndexConfig> {
        let mut config = match &self.config {
            Some(path) => IndexConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => IndexConfig::default(),
        };
        if let Some(k) = self.k {
            config.k_limit = k;
        }
        config.validate()?;
        Ok(config)
    }

    fn build_index(&self) -> Result<AutocompleteIndex> {
        let config = self.config()?;
        let show_progress = !self.quiet && io::stderr().is_terminal();
        let index = CorpusLoader::new(&config)
            .with_progress(show_progress)
            .build(&self.corpus)
            .with_context(|| format!("Failed to load corpus {}", self.corpus.display()))?;
        info!("index ready: {} phrases, k = {}", index.len(), index.k());
        Ok(index)
    }

    fn build_baseline(&self) -> Result<BruteForceIndex> {
        let config = self.config()?;
        let entries = CorpusLoader::new(&config)
            .read(&self.corpus)
            .with_context(|| format!("Failed to load corpus {}", self.corpus.display()))?;
        let mut baseline = BruteForceIndex::new(config.k_limit)?;
        baseline.extend(entries.iter().map(|(phrase, score)| (phrase.as_str(), *score)));
        Ok(baseline)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            mut prefixes,
            source,
            json,
            scores,
            baseline,
            no_color,
        } => {
            if prefixes.is_empty() {
                prefixes.push(String::new());
            }

            let results: Vec<QueryResult> = if baseline {
                let baseline = source.build_baseline()?;
                prefixes
                    .iter()
                    .map(|p| QueryResult::new(p, baseline.query_scored(p)))
                    .collect()
            } else {
                let index = source.build_index()?;
                prefixes
                    .iter()
                    .map(|p| QueryResult::new(p, index.query_scored(p)))
                    .collect()
            };

            if json {
                output::print_json(&results)?;
            } else {
                output::print_results(&results, use_color(no_color), scores)?;
            }
        }

        Commands::Stats { source, json } => {
            let index = source.build_index()?;
            let stats = index.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                stats.print(&mut io::stdout().lock())?;
            }
        }

        Commands::Shell {
            source,
            scores,
            no_color,
        } => {
            let index = source.build_index()?;
            run_shell(&index, scores, use_color(no_color))?;
        }
    }

    Ok(())
}

/// Color only when writing to a terminal
fn use_color(no_color: bool) -> bool {
    !no_color && io::stdout().is_terminal()
}

/// Complete each stdin line until EOF
fn run_shell(index: &AutocompleteIndex, scores: bool, color: bool) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if interactive {
        eprintln!(
            "{} phrases loaded, k = {}. Type a prefix, Ctrl+D to quit.",
            index.len(),
            index.k()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            eprint!("> ");
            io::stderr().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read stdin")?;
        // Keep inner and trailing spaces: "tape " is a different prefix than "tape"
        let prefix = line.trim_end_matches('\r');

        let result = QueryResult::new(prefix, index.query_scored(prefix));
        output::write_completions(&mut stdout, &result, scores)?;
        stdout.flush()?;
    }

    Ok(())
}
