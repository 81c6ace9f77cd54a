//! Output formatting for CLI commands.
//!
//! This module handles formatting output as either JSON or human-readable text.

use anyhow::Result;
use jdskill::{ExtractedText, SkillReport};
use serde::Serialize;

use super::types::{CategoryListing, InitResult, LookupResult, NormalizeResult};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print extracted and categorized skills.
pub fn print_report(report: &SkillReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }

    if report.is_empty() {
        println!("No skills were extracted. Try another job description.");
        return Ok(());
    }

    println!("Extracted Skills by Category");
    println!("{}", "=".repeat(60));
    for group in report.categories.iter() {
        println!("{} ({})", group.name, group.skills.len());
        println!("  {}", group.skills.join(", "));
    }

    println!("\nSkill Distribution");
    println!("{}", "-".repeat(60));
    let widest = report
        .distribution
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &report.distribution {
        println!(
            "{:<width$}  {:>3} {}",
            entry.category,
            entry.count,
            "#".repeat(entry.count),
            width = widest
        );
    }

    println!("\nAll skills ({}): {}", report.skills.len(), report.skills.join(", "));
    Ok(())
}

/// Show the start of the loaded document on stderr, leaving stdout for the report.
pub fn print_preview(extracted: &ExtractedText, max_chars: usize) {
    let meta = &extracted.metadata;
    eprintln!(
        "Preview ({}, {} words, {} chars)",
        meta.format, meta.word_count, meta.char_count
    );
    eprintln!("{}", "-".repeat(60));
    eprintln!("{}\n", extracted.preview(max_chars));
}

/// Print normalized text.
pub fn print_normalized(result: &NormalizeResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }
    println!("{}", result.normalized_text);
    Ok(())
}

/// Print reference data initialization result.
pub fn print_init(result: &InitResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }

    println!("Data directory: {}", result.data_dir);
    for path in &result.created {
        println!("  created  {}", path);
    }
    for path in &result.existing {
        println!("  exists   {}", path);
    }
    Ok(())
}

/// Print the category dictionary.
pub fn print_categories(listing: &[CategoryListing], json: bool) -> Result<()> {
    if json {
        return print_json(listing);
    }

    for entry in listing {
        println!("{} ({})", entry.category, entry.skills.len());
        if !entry.skills.is_empty() {
            println!("  {}", entry.skills.join(", "));
        }
    }
    println!("\nTotal: {} categories", listing.len());
    Ok(())
}

/// Print alias lookup result.
pub fn print_lookup(result: &LookupResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }

    match &result.skill {
        Some(skill) => println!("{} -> {}", result.alias, skill),
        None => println!("{}: not a known alias", result.alias),
    }
    if let Some(fuzzy) = &result.fuzzy {
        println!(
            "Best fuzzy match: {} -> {} (score {}, {})",
            fuzzy.alias,
            fuzzy.skill,
            fuzzy.score,
            if fuzzy.accepted { "accepted" } else { "below threshold" }
        );
    }
    if let Some(category) = &result.category {
        println!("Category: {}", category);
    }
    if !result.suggestions.is_empty() {
        println!("Did you mean: {}", result.suggestions.join(", "));
    }
    Ok(())
}
