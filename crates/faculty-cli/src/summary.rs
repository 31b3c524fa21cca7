use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use faculty_cli::pipeline::{LinkRow, SpeakerRow};
use faculty_ingest::{BiographyIngest, group_by_day_and_venue};
use faculty_map::{ConfidenceLevel, ConfidenceThresholds};
use faculty_model::{Category, ResolvedMatch, ScheduleEntry, SessionKind};

pub fn print_sections(ingest: &BiographyIngest) {
    println!("CV: {}", ingest.source_file);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("Lines"), header_cell("Content")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in Category::ALL {
        match ingest.sections.get(category) {
            Some(block) => table.add_row(vec![
                category_cell(category),
                Cell::new(block.lines().count()),
                Cell::new(block),
            ]),
            None => table.add_row(vec![category_cell(category), dim_cell(0), dim_cell("-")]),
        };
    }
    println!("{table}");
}

pub fn print_schedule(entries: &[ScheduleEntry]) {
    if entries.is_empty() {
        println!("No program entries found.");
        return;
    }
    for (day, venues) in group_by_day_and_venue(entries) {
        for (venue, group) in venues {
            println!();
            println!("Day {day} - {venue}");
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("#"),
                header_cell("Time"),
                header_cell("Kind"),
                header_cell("Title"),
                header_cell("Speakers"),
                header_cell("Moderator"),
                header_cell("Chairperson"),
            ]);
            apply_table_style(&mut table);
            align_column(&mut table, 0, CellAlignment::Right);
            for entry in group {
                table.add_row(vec![
                    Cell::new(entry.ordinal),
                    text_cell(&entry.time_slot),
                    kind_cell(entry.kind),
                    title_cell(entry),
                    text_cell(&entry.speakers),
                    optional_cell(entry.moderator.as_deref()),
                    optional_cell(entry.chairperson.as_deref()),
                ]);
            }
            println!("{table}");
        }
    }
}

pub fn print_search(results: &[ResolvedMatch], thresholds: &ConfidenceThresholds) {
    if results.is_empty() {
        println!("No roster entries matched.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Institution"),
        header_cell("Score"),
        header_cell("Level"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (rank, result) in results.iter().enumerate() {
        let Some(person) = &result.person else {
            continue;
        };
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&person.id),
            Cell::new(&person.name),
            optional_cell(person.institution.as_deref()),
            score_cell(result.confidence),
            level_cell(thresholds.categorize(result.confidence)),
        ]);
    }
    println!("{table}");
}

pub fn print_links(rows: &[LinkRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Person"),
        header_cell("Score"),
        header_cell("Level"),
        header_cell("Closest names"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        let file = row
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let person = match (&row.person_id, &row.person_name) {
            (Some(id), Some(name)) => Cell::new(format!("{name} ({id})")),
            _ => Cell::new("unmatched").fg(Color::Yellow),
        };
        let hints = row
            .suggestions
            .iter()
            .map(|hint| format!("{} {:.0}", hint.person.name, hint.similarity))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(file),
            person,
            score_cell(row.confidence),
            level_cell(row.level),
            text_cell(&hints),
        ]);
    }
    println!("{table}");
    let unmatched = rows.iter().filter(|row| row.person_id.is_none()).count();
    println!("{} files, {unmatched} unmatched", rows.len());
    for level in [ConfidenceLevel::High, ConfidenceLevel::Medium, ConfidenceLevel::Low] {
        let count = rows.iter().filter(|row| row.level == Some(level)).count();
        if count > 0 {
            println!("  {:<6} {count:>4}  {}", level.as_str(), level.description());
        }
    }
}

pub fn print_speakers(rows: &[SpeakerRow], thresholds: &ConfidenceThresholds) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Day"),
        header_cell("Time"),
        header_cell("Title"),
        header_cell("Speaker"),
        header_cell("Person"),
        header_cell("Level"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        for link in &row.links {
            let resolution = &link.resolution;
            let person = match &resolution.person {
                Some(person) => Cell::new(&person.id),
                None => Cell::new("unlinked").fg(Color::Yellow),
            };
            table.add_row(vec![
                Cell::new(row.ordinal),
                Cell::new(format!("{} {}", row.day, row.venue)),
                text_cell(&row.time_slot),
                Cell::new(&row.title),
                Cell::new(&link.label),
                person,
                level_cell(thresholds.level_of(resolution)),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_kinds() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Speaker facing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for kind in SessionKind::ALL {
        let facing = if kind.is_speaker_facing() {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![kind_cell(kind), facing]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(category: Category) -> Cell {
    Cell::new(category.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: SessionKind) -> Cell {
    match kind {
        SessionKind::Header => Cell::new(kind.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        SessionKind::Break => dim_cell(kind.as_str()),
        _ => Cell::new(kind.as_str()),
    }
}

fn title_cell(entry: &ScheduleEntry) -> Cell {
    if entry.is_header() {
        Cell::new(&entry.title).add_attribute(Attribute::Bold)
    } else {
        Cell::new(&entry.title)
    }
}

fn score_cell(score: f64) -> Cell {
    Cell::new(format!("{score:.1}"))
}

fn level_cell(level: Option<ConfidenceLevel>) -> Cell {
    match level {
        Some(ConfidenceLevel::High) => Cell::new("high").fg(Color::Green),
        Some(ConfidenceLevel::Medium) => Cell::new("medium").fg(Color::Yellow),
        Some(ConfidenceLevel::Low) => Cell::new("low").fg(Color::Red),
        None => dim_cell("-"),
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    text_cell(value.unwrap_or_default())
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
