use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use hyponym_detector::data::{AnnotatedDocument, Document, DocumentParser, InputFormat};
use hyponym_detector::{DetectorConfig, HearstMatch, Pipeline, HYPONYM_DETECTOR_COMPONENT};

#[derive(Parser, Debug)]
#[command(name = "hyponym_detector")]
#[command(about = "Extract Hearst-pattern hypernym/hyponym pairs from parsed documents")]
#[command(version)]
struct Args {
    /// Input files (Odinson JSON, JSONL or CoNLL-U; optionally gzipped)
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Input format (guessed from the file extension when omitted)
    #[arg(short, long)]
    format: Option<Format>,

    /// Enable the extended rule set
    #[arg(short, long)]
    extended: bool,

    /// Detector configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additional rules (YAML list of {label, query})
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Conllu,
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    #[serde(flatten)]
    relation: &'a HearstMatch,
    hypernym_text: String,
    hyponym_text: String,
}

#[derive(Serialize)]
struct DocumentOutput<'a> {
    id: &'a str,
    matches: Vec<MatchOutput<'a>>,
}

fn load_config(args: &Args) -> Result<DetectorConfig> {
    let mut config = match &args.config {
        Some(path) => DetectorConfig::from_yaml_file(path)?,
        None => DetectorConfig::default(),
    };
    if args.extended {
        config.extended = true;
    }
    if let Some(path) = &args.rules {
        config.rules.extend(DetectorConfig::rules_from_yaml_file(path)?);
    }
    Ok(config)
}

/// Read one input file. Structural problems are only reported here; the
/// affected sentences are flagged and skipped during annotation.
fn read_file(parser: &DocumentParser, path: &Path, format: InputFormat) -> Result<Vec<Document>> {
    let docs = parser.parse_file(path, format)?;
    for doc in &docs {
        if let Err(e) = parser.validate_document(doc) {
            warn!("{}: {:#}", path.display(), e);
        }
    }
    info!("Read {} documents from {}", docs.len(), path.display());
    Ok(docs)
}

fn read_documents(args: &Args) -> (Vec<Document>, usize) {
    let parser = DocumentParser::new();
    let parsed: Vec<Result<Vec<Document>>> = args
        .input
        .par_iter()
        .map(|path| {
            let format = match args.format {
                Some(Format::Json) => InputFormat::Json,
                Some(Format::Conllu) => InputFormat::Conllu,
                None => InputFormat::from_path(path),
            };
            read_file(&parser, path, format)
        })
        .collect();

    let mut documents = Vec::new();
    let mut failed = 0;
    for result in parsed {
        match result {
            Ok(docs) => documents.extend(docs),
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }
    (documents, failed)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(&args)?;
    let mut nlp = Pipeline::new();
    nlp.add_pipe(HYPONYM_DETECTOR_COMPONENT, serde_json::to_value(&config)?)?;

    let (documents, failed) = read_documents(&args);
    let mut annotated: Vec<AnnotatedDocument> = documents.par_iter().map(AnnotatedDocument::from_document).collect();
    nlp.run_batch(&mut annotated);

    let total: usize = annotated.iter().map(|doc| doc.hearst_patterns().len()).sum();
    info!("Found {} matches in {} documents", total, annotated.len());

    for doc in &annotated {
        let output = DocumentOutput {
            id: doc.id(),
            matches: doc
                .hearst_patterns()
                .iter()
                .map(|m| MatchOutput {
                    relation: m,
                    hypernym_text: doc.text(m.hypernym),
                    hyponym_text: doc.text(m.hyponym),
                })
                .collect(),
        };
        let line = if args.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        println!("{}", line);
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} input files could not be read", failed, args.input.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyponym_detector::data::Sentence;
    use hyponym_detector::HyponymDetector;

    fn including(edge_to_outside: bool) -> Sentence {
        let words = ["Coronaviruses", ",", "including", "SARS", "and", "MERS", ",", "are", "bad", "."];
        let tags = ["NNS", ",", "VBG", "NNP", "CC", "NNP", ",", "VBP", "JJ", "."];
        let mut edges: Vec<(u32, u32, String)> = [(7, 0, "nsubj"), (0, 1, "punct"), (0, 2, "prep"), (2, 3, "pobj"),
            (3, 4, "cc"), (3, 5, "conj"), (0, 6, "punct"), (7, 8, "acomp"), (7, 9, "punct")]
            .iter()
            .map(|(h, d, l)| (*h, *d, l.to_string()))
            .collect();
        if edge_to_outside {
            edges[0] = (7, 40, "nsubj".to_string());
        }
        Sentence::from_words(words).with_tokens("tag", tags).with_dependencies(edges, vec![7])
    }

    #[test]
    fn test_bad_sentence_does_not_drop_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("covid.json");
        let doc = Document::new("d", vec![including(true), including(false)]);
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        let parser = DocumentParser::new();
        assert!(parser.validate_document(&doc).is_err());
        let docs = read_file(&parser, &path, InputFormat::Json).unwrap();
        assert_eq!(docs.len(), 1);

        let annotated = AnnotatedDocument::from_document(&docs[0]);
        assert!(!annotated.sentences()[0].is_well_formed());
        let matches = HyponymDetector::with_extended(false).unwrap().detect(&annotated);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.hypernym == hyponym_detector::Span::new(10, 11)));
    }
}
