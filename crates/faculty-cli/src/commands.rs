use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use faculty_cli::config::RulesFile;
use faculty_map::ConfidenceThresholds;
use faculty_cli::pipeline::{
    LinkOptions, link_folder, link_speakers, roster_from_file, schedule_from_file,
    sections_from_file,
};

use crate::cli::{LinkArgs, ScheduleArgs, SearchArgs, SectionsArgs, SpeakersArgs};
use crate::summary::{
    print_kinds, print_links, print_schedule, print_search, print_sections, print_speakers,
};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn run_sections(args: &SectionsArgs) -> Result<()> {
    let span = info_span!("sections", file = %args.file.display());
    let _guard = span.enter();
    let ingest = sections_from_file(&args.file)?;
    info!(
        sections = ingest.sections.populated_count(),
        "biography sections detected"
    );
    if args.json {
        print_json(&ingest)
    } else {
        print_sections(&ingest);
        Ok(())
    }
}

pub fn run_schedule(args: &ScheduleArgs, rules: Option<&Path>) -> Result<()> {
    let span = info_span!("schedule", file = %args.file.display());
    let _guard = span.enter();
    let rules = RulesFile::load(rules)?;
    let extractor = rules.schedule_extractor()?;
    let entries = schedule_from_file(&args.file, &extractor)?;
    info!(entries = entries.len(), "program extracted");
    if args.json {
        print_json(&entries)
    } else {
        print_schedule(&entries);
        Ok(())
    }
}

pub fn run_search(args: &SearchArgs, rules: Option<&Path>) -> Result<()> {
    let rules = RulesFile::load(rules)?;
    let roster = roster_from_file(&args.roster)?;
    let mut results = rules.search.search(&roster, &args.query);
    results.truncate(args.limit);
    info!(results = results.len(), "roster searched");
    if args.json {
        print_json(&results)
    } else {
        print_search(&results, &rules.confidence);
        Ok(())
    }
}

pub fn run_link(args: &LinkArgs, rules: Option<&Path>) -> Result<()> {
    let span = info_span!("link", dir = %args.dir.display());
    let _guard = span.enter();
    let rules = RulesFile::load(rules)?;
    let roster = roster_from_file(&args.roster)?;
    let thresholds = if args.strict {
        ConfidenceThresholds::strict()
    } else {
        rules.confidence
    };
    let options = LinkOptions {
        thresholds,
        suggestions: args.suggestions,
    };
    let rows = link_folder(&args.dir, &roster, &rules.resolver(), options)?;
    if args.json {
        print_json(&rows)
    } else {
        print_links(&rows);
        Ok(())
    }
}

pub fn run_speakers(args: &SpeakersArgs, rules: Option<&Path>) -> Result<()> {
    let span = info_span!("speakers", file = %args.file.display());
    let _guard = span.enter();
    let rules = RulesFile::load(rules)?;
    let extractor = rules.schedule_extractor()?;
    let entries = schedule_from_file(&args.file, &extractor)?;
    let roster = roster_from_file(&args.roster)?;
    let rows = link_speakers(&entries, &roster, &rules.resolver());
    let unresolved = rows
        .iter()
        .flat_map(|row| &row.links)
        .filter(|link| !link.is_resolved())
        .count();
    info!(sessions = rows.len(), unresolved, "speakers resolved");
    if args.json {
        print_json(&rows)
    } else {
        print_speakers(&rows, &rules.confidence);
        Ok(())
    }
}

pub fn run_kinds() -> Result<()> {
    print_kinds();
    Ok(())
}
