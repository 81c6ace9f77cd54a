//! CLI command handlers.

use std::path::PathBuf;

use anyhow::{bail, Result};
use jdskill::{
    Config, ExtractedText, FileStore, Normalizer, ProcessorRegistry, RecordKind, ReferenceData,
    SkillPipeline, Tokenizer,
};
use tokio::io::AsyncReadExt;
use tracing::info;

use super::output;
use super::types::{
    CategoryListing, FuzzyCandidate, InitResult, LookupResult, NormalizeResult,
};

/// Characters of document text shown by `extract --preview`.
pub const PREVIEW_CHARS: usize = 500;

/// Where the job-description text comes from.
#[derive(Debug, Clone)]
pub enum Input {
    /// Inline text
    Text(String),
    /// A .txt, .pdf or .docx file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl Input {
    pub fn from_args(file: Option<PathBuf>, text: Option<String>) -> Result<Self> {
        match (file, text) {
            (Some(_), Some(_)) => bail!("pass either a file or --text, not both"),
            (Some(path), None) => Ok(Input::File(path)),
            (None, Some(text)) => Ok(Input::Text(text)),
            (None, None) => Ok(Input::Stdin),
        }
    }

    /// Resolve the input to plain text.
    async fn read(self, config: &Config) -> Result<ExtractedText> {
        match self {
            Input::Text(text) => Ok(ExtractedText::new(text, "text")),
            Input::File(path) => {
                let registry = ProcessorRegistry::new(&config.ingest);
                let extracted = registry.extract_file(&path).await?;
                info!(
                    path = %path.display(),
                    format = %extracted.metadata.format,
                    words = extracted.metadata.word_count,
                    "Loaded document"
                );
                Ok(extracted)
            }
            Input::Stdin => {
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(ExtractedText::new(text, "text"))
            }
        }
    }
}

/// Run the extract command.
pub async fn run_extract(
    config: Config,
    input: Input,
    preview: bool,
    json_output: bool,
) -> Result<()> {
    let extracted = input.read(&config).await?;
    if preview {
        output::print_preview(&extracted, PREVIEW_CHARS);
    }
    let pipeline = SkillPipeline::from_config(config)?;
    let report = pipeline.analyze(&extracted.text);
    output::print_report(&report, json_output)
}

/// Run the normalize command.
pub async fn run_normalize(config: Config, input: Input, json_output: bool) -> Result<()> {
    let extracted = input.read(&config).await?;
    let normalized_text = Normalizer::new(&config.normalizer).normalize(&extracted.text);
    let result = NormalizeResult {
        token_count: normalized_text.split_whitespace().count(),
        normalized_text,
    };
    output::print_normalized(&result, json_output)
}

/// Run the init command.
pub fn run_init(config: Config, json_output: bool) -> Result<()> {
    let store = FileStore::from_config(&config)?;
    let report = ReferenceData::initialize(&store)?;
    let names = |records: &[RecordKind]| -> Vec<String> {
        records
            .iter()
            .map(|r| store.path(*r).display().to_string())
            .collect()
    };
    let result = InitResult {
        data_dir: store.dir().display().to_string(),
        created: names(&report.created),
        existing: names(&report.existing),
    };
    output::print_init(&result, json_output)
}

/// Run the categories command.
pub fn run_categories(config: Config, json_output: bool) -> Result<()> {
    let pipeline = SkillPipeline::from_config(config)?;
    let listing: Vec<CategoryListing> = pipeline
        .data()
        .categories()
        .iter()
        .map(|c| CategoryListing {
            category: c.name.clone(),
            skills: c.skills.clone(),
        })
        .collect();
    output::print_categories(&listing, json_output)
}

/// Run the lookup command.
pub fn run_lookup(config: Config, alias: String, json_output: bool) -> Result<()> {
    let pipeline = SkillPipeline::from_config(config)?;
    let result = lookup(&pipeline, &alias);
    output::print_lookup(&result, json_output)
}

fn lookup(pipeline: &SkillPipeline, alias: &str) -> LookupResult {
    let aliases = pipeline.data().aliases();
    // Dictionary keys keep their symbols ("ci/cd", "scikit-learn"), so try
    // the alias as typed before the tokenized form the matcher sees.
    let skill = aliases
        .get(&alias.trim().to_lowercase())
        .or_else(|| aliases.get(&Tokenizer::new().words(alias).join(" ").to_lowercase()))
        .map(str::to_string);

    let fuzzy = pipeline.matcher().best_match(alias).and_then(|(matched, score)| {
        Some(FuzzyCandidate {
            alias: matched.to_string(),
            skill: aliases.get(matched)?.to_string(),
            score,
            accepted: score >= pipeline.config().matcher.fuzzy_threshold,
        })
    });

    let resolved = skill
        .clone()
        .or_else(|| fuzzy.as_ref().filter(|f| f.accepted).map(|f| f.skill.clone()));
    let category = resolved
        .as_deref()
        .map(|s| pipeline.categorizer().category_of(s).to_string());

    let suggestions = if skill.is_none() {
        aliases
            .closest(alias, 5)
            .into_iter()
            .map(|(a, _)| a.to_string())
            .collect()
    } else {
        Vec::new()
    };

    LookupResult {
        alias: alias.to_string(),
        skill,
        category,
        fuzzy,
        suggestions,
    }
}
