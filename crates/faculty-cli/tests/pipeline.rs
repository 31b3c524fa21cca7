//! Pipeline stages over files on disk.

use std::fs;
use std::path::Path;

use faculty_cli::config::RulesFile;
use faculty_cli::pipeline::{
    LinkOptions, link_folder, link_speakers, roster_from_file, schedule_from_file,
    sections_from_file,
};
use faculty_map::{ConfidenceLevel, ConfidenceThresholds};
use faculty_model::Category;
use tempfile::TempDir;

const ROSTER: &str = "Name,Institution,Designation\n\
Dr. Anil Kumar,AIIMS Delhi,Professor\n\
Dr. Sunita Reddy,NIMS,HOD\n";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn rules_file_changes_default_venue() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "rules.json",
        r#"{ "schedule": { "default_venue": "Main Hall" } }"#,
    );
    write(
        dir.path(),
        "program.txt",
        "Day-1\n9:00 am Opening  Dr. Anil Kumar\n",
    );

    let rules = RulesFile::load(Some(&dir.path().join("rules.json"))).expect("load rules");
    let extractor = rules.schedule_extractor().expect("compile rules");
    let entries =
        schedule_from_file(&dir.path().join("program.txt"), &extractor).expect("schedule");
    let opening = entries
        .iter()
        .find(|entry| entry.title == "Opening")
        .expect("opening entry");
    assert_eq!(opening.venue, "Main Hall");
    assert_eq!(opening.day, 1);
    assert_eq!(opening.time_slot, "9:00 am");
}

#[test]
fn missing_rules_file_names_the_path() {
    let dir = TempDir::new().expect("temp dir");
    let err = RulesFile::load(Some(&dir.path().join("absent.json"))).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("read rules file"));
    assert!(message.contains("absent.json"));
}

#[test]
fn sections_from_text_cv() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "kumar.txt",
        "EDUCATION:\nMD Orthopaedics\nAWARDS\nGold medal 2019\n",
    );
    let ingest = sections_from_file(&dir.path().join("kumar.txt")).expect("sections");
    assert_eq!(ingest.source_file, "kumar.txt");
    assert_eq!(
        ingest.sections.get(Category::Education),
        Some("EDUCATION:\nMD Orthopaedics")
    );
    assert_eq!(
        ingest.sections.get(Category::Awards),
        Some("AWARDS\nGold medal 2019")
    );
}

#[test]
fn pdf_cv_needs_an_extractor() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "kumar.pdf", "%PDF-1.7");
    let err = sections_from_file(&dir.path().join("kumar.pdf")).unwrap_err();
    assert!(format!("{err:#}").contains("ingest biography"));
}

#[test]
fn folder_links_files_and_suggests_for_the_rest() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "faculty.csv", ROSTER);
    let folder = dir.path().join("uploads");
    fs::create_dir(&folder).expect("uploads dir");
    write(&folder, "Dr_Anil_Kumar_64f0c2a9e4b0a1b2c3d4e5f6.pdf", "cv");
    write(&folder, "Mystery_Speaker.jpg", "photo");
    write(&folder, "notes.md", "ignored");

    let roster = roster_from_file(&dir.path().join("faculty.csv")).expect("roster");
    let rules = RulesFile::default();
    let rows = link_folder(&folder, &roster, &rules.resolver(), LinkOptions::default())
        .expect("link folder");

    let rendered: Vec<String> = rows
        .iter()
        .map(|row| {
            let file = row
                .path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            format!(
                "{file} -> {} {:?} hints={}",
                row.person_id.as_deref().unwrap_or("-"),
                row.level,
                row.suggestions.len()
            )
        })
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    Dr_Anil_Kumar_64f0c2a9e4b0a1b2c3d4e5f6.pdf -> dr-anil-kumar-1 Some(High) hints=0
    Mystery_Speaker.jpg -> - None hints=2
    ");
}

#[test]
fn suggestion_limit_is_respected() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "faculty.csv", ROSTER);
    write(dir.path(), "Unknown_Person.pdf", "cv");
    let roster = roster_from_file(&dir.path().join("faculty.csv")).expect("roster");
    let options = LinkOptions {
        suggestions: 1,
        ..LinkOptions::default()
    };
    let rows = link_folder(dir.path(), &roster, &RulesFile::default().resolver(), options)
        .expect("link folder");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].suggestions.len(), 1);
}

#[test]
fn program_speakers_resolve_against_roster() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "faculty.csv", ROSTER);
    write(
        dir.path(),
        "program.txt",
        "Day-2 Hall B\n10:00 am Knee Workshop  Dr. Anil Kumar & Dr. Sunita Reddy\n1:00 pm Lunch\n",
    );
    let rules = RulesFile::default();
    let extractor = rules.schedule_extractor().expect("compile rules");
    let entries =
        schedule_from_file(&dir.path().join("program.txt"), &extractor).expect("schedule");
    let roster = roster_from_file(&dir.path().join("faculty.csv")).expect("roster");

    let rows = link_speakers(&entries, &roster, &rules.resolver());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].day, 2);
    assert_eq!(rows[0].venue, "Hall B");
    let ids: Vec<Option<&str>> = rows[0]
        .links
        .iter()
        .map(|link| link.resolution.person_id())
        .collect();
    assert_eq!(ids, vec![Some("dr-anil-kumar-1"), Some("dr-sunita-reddy-2")]);
}

#[test]
fn strict_thresholds_grade_partial_file_matches_lower() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "faculty.csv", ROSTER);
    write(dir.path(), "Anil_Kumar_Verma.pdf", "cv");
    let roster = roster_from_file(&dir.path().join("faculty.csv")).expect("roster");
    let resolver = RulesFile::default().resolver();

    let lenient = link_folder(dir.path(), &roster, &resolver, LinkOptions::default())
        .expect("link folder");
    assert_eq!(lenient[0].person_id.as_deref(), Some("dr-anil-kumar-1"));
    assert_eq!(lenient[0].level, Some(ConfidenceLevel::Medium));

    let options = LinkOptions {
        thresholds: ConfidenceThresholds::strict(),
        ..LinkOptions::default()
    };
    let strict = link_folder(dir.path(), &roster, &resolver, options).expect("link folder");
    assert_eq!(strict[0].person_id.as_deref(), Some("dr-anil-kumar-1"));
    assert_eq!(strict[0].level, Some(ConfidenceLevel::Low));
}
