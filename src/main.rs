use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use topicmill::config::{parse_language_filter, Config};
use topicmill::corpus::{parse_documents, Corpus, CorpusBuilder, Document};
use topicmill::language::{classify, Language};
use topicmill::normalize::Lemmatizer;
use topicmill::output::terminal;
use topicmill::pipeline;
use topicmill::report;
use topicmill::tokenize::tokenize;

/// topicmill: multilingual corpus analysis.
///
/// Detects document languages, tokenizes and normalizes them into bags of
/// words, weights terms with TF-IDF, and groups documents by topic.
#[derive(Parser)]
#[command(name = "topicmill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the language of a text
    Classify {
        /// The text to classify
        text: String,
    },

    /// Split a text into tokens
    Tokenize {
        /// Language tag (e.g. en, de, zh); detected when absent
        #[arg(long)]
        lang: Option<String>,

        /// The text to tokenize
        text: String,
    },

    /// Build bags of words from a JSON or JSON Lines document file
    Bag {
        /// Document file
        #[arg(long)]
        input: PathBuf,

        /// Skip documents detected below this confidence (overrides TOPICMILL_MIN_CONFIDENCE)
        #[arg(long)]
        min_confidence: Option<f64>,

        /// Keep only this language, or * for any (overrides TOPICMILL_LANGUAGE)
        #[arg(long)]
        language: Option<String>,
    },

    /// Run the full analysis and write reports
    Analyze {
        /// Document file, or a bag file with --bags
        #[arg(long)]
        input: PathBuf,

        /// Treat the input as stored bags (`id<TAB>tok<TAB>tok...` per line)
        #[arg(long)]
        bags: bool,

        /// Number of clusters (overrides TOPICMILL_CLUSTERS)
        #[arg(long)]
        clusters: Option<usize>,

        /// Top terms per cluster (overrides TOPICMILL_TOP_TERMS)
        #[arg(long)]
        top_terms: Option<usize>,

        /// Seed for centroid initialization (overrides TOPICMILL_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Minimum cosine distance for reported edges (overrides TOPICMILL_EDGE_THRESHOLD)
        #[arg(long)]
        threshold: Option<f64>,

        /// Lemmatizer: none, snowball or dictionary (overrides TOPICMILL_LEMMATIZER)
        #[arg(long)]
        lemmatizer: Option<Lemmatizer>,

        /// JSON object of per-document scores to average per cluster
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Report directory (overrides TOPICMILL_OUTPUT_DIR)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the full analysis as JSON instead of the colored summary
        #[arg(long)]
        json: bool,

        /// Hide progress bars
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topicmill=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { text } => {
            let detection = classify(&text);
            terminal::display_detection(&text, &detection);
        }

        Commands::Tokenize { lang, text } => {
            let lang = match lang {
                Some(tag) => tag
                    .parse::<Language>()
                    .map_err(|e| anyhow::anyhow!(e))?,
                None => {
                    let detection = classify(&text);
                    info!(
                        language = %detection.language,
                        confidence = detection.confidence,
                        "Detected language"
                    );
                    detection.language
                }
            };
            for token in tokenize(lang, &text) {
                println!("{token}");
            }
        }

        Commands::Bag {
            input,
            min_confidence,
            language,
        } => {
            let mut config = Config::load()?;
            if let Some(threshold) = min_confidence {
                config.min_confidence = threshold;
            }
            if let Some(raw) = language {
                config.language = parse_language_filter(&raw);
            }
            config.require_valid_thresholds()?;

            let documents = read_documents(&input)?;
            let builder = CorpusBuilder::new()
                .min_confidence(config.min_confidence)
                .language(config.language);
            let (corpus, summary) = pipeline::build_corpus(&documents, builder, true);
            info!(kept = summary.kept, read = summary.total(), "Bags built");
            print!("{}", corpus.to_bag_lines());
        }

        Commands::Analyze {
            input,
            bags,
            clusters,
            top_terms,
            seed,
            threshold,
            lemmatizer,
            scores,
            output,
            json,
            quiet,
        } => {
            let mut config = Config::load()?;
            if let Some(k) = clusters {
                config.clusters = k;
            }
            if let Some(n) = top_terms {
                config.top_terms = n;
            }
            if let Some(s) = seed {
                config.seed = s;
            }
            if let Some(th) = threshold {
                config.edge_threshold = th;
            }
            if let Some(l) = lemmatizer {
                config.lemmatizer = l;
            }
            if let Some(dir) = output {
                config.output_dir = dir;
            }
            config.require_valid_thresholds()?;
            config.require_clusters()?;

            let corpus = if bags {
                read_bags(&input)?
            } else {
                let documents = read_documents(&input)?;
                if !quiet && !json {
                    println!("Building bags from {} documents...", documents.len());
                }
                let builder = CorpusBuilder::new()
                    .min_confidence(config.min_confidence)
                    .language(config.language);
                let (corpus, summary) = pipeline::build_corpus(&documents, builder, quiet);
                if !quiet && !json {
                    terminal::display_build_summary(&summary);
                }
                corpus
            };

            let scores = scores.as_deref().map(read_scores).transpose()?;

            let analysis = pipeline::analyze(&corpus, &config.analysis())?;

            if json {
                println!("{}", analysis.to_json()?);
            } else {
                terminal::display_clusters(&analysis.clusters, 5);
            }

            let run = report::run_id();
            let paths = report::write_reports(
                &config.output_dir,
                &run,
                &analysis,
                config.use_idf,
                config.edge_threshold,
                scores.as_ref(),
            )?;

            if !json {
                terminal::display_report_paths(&[
                    paths.weights.as_path(),
                    paths.edges.as_path(),
                    paths.clusters.as_path(),
                ]);
                println!(
                    "{}",
                    format!("Run {run}: {} documents analyzed.", analysis.context.documents.len())
                        .bold()
                );
            }
        }
    }

    Ok(())
}

fn read_documents(path: &Path) -> Result<Vec<Document>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document file: {}", path.display()))?;
    parse_documents(&text)
        .with_context(|| format!("Failed to parse documents in {}", path.display()))
}

fn read_bags(path: &Path) -> Result<Corpus> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bag file: {}", path.display()))?;
    Ok(Corpus::parse_bag_lines(&text))
}

fn read_scores(path: &Path) -> Result<HashMap<String, f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read score file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scores in {}", path.display()))
}
