//! Discovery and roster loading against real directories.

use std::fs;
use std::path::Path;

use faculty_ingest::{
    CV_EXTENSIONS, IngestError, PHOTO_EXTENSIONS, link_documents, list_documents, load_roster,
};
use faculty_map::NameResolver;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"data").expect("write file");
}

#[test]
fn lists_matching_extensions_sorted() {
    let dir = TempDir::new().expect("temp dir");
    for name in ["b_rao.PDF", "a_kumar.docx", "notes.md", "c_singh.txt", "photo.JPG"] {
        touch(dir.path(), name);
    }
    fs::create_dir(dir.path().join("nested.pdf")).expect("nested dir");

    let cvs = list_documents(dir.path(), CV_EXTENSIONS).expect("list cvs");
    let names: Vec<_> = cvs
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .collect();
    assert_eq!(names, vec!["a_kumar.docx", "b_rao.PDF", "c_singh.txt"]);

    let photos = list_documents(dir.path(), PHOTO_EXTENSIONS).expect("list photos");
    assert_eq!(photos.len(), 1);
}

#[test]
fn file_path_is_not_a_directory() {
    let dir = TempDir::new().expect("temp dir");
    touch(dir.path(), "roster.csv");
    let err = list_documents(&dir.path().join("roster.csv"), CV_EXTENSIONS).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn roster_on_disk_links_cv_files() {
    let dir = TempDir::new().expect("temp dir");
    let roster_path = dir.path().join("faculty.csv");
    fs::write(
        &roster_path,
        "Name,Institution,Designation\nDr. Anil Kumar,AIIMS Delhi,Professor\nDr. Sunita Reddy,NIMS,HOD\n",
    )
    .expect("write roster");
    let roster = load_roster(&roster_path).expect("load roster");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].id, "dr-sunita-reddy-2");

    let cv_dir = dir.path().join("cvs");
    fs::create_dir(&cv_dir).expect("cv dir");
    touch(&cv_dir, "Dr__Anil_Kumar_64f0c2a9e4b0a1b2c3d4e5f6.pdf");
    touch(&cv_dir, "Mystery_Speaker.pdf");
    let files = list_documents(&cv_dir, CV_EXTENSIONS).expect("list cvs");
    let linked = link_documents(&files, &roster, &NameResolver::default());

    assert_eq!(linked.len(), 2);
    assert_eq!(linked[0].resolution.person_id(), Some("dr-anil-kumar-1"));
    assert_eq!(linked[0].resolution.confidence, 100.0);
    assert!(!linked[1].resolution.is_resolved());
}

#[test]
fn missing_roster_file_is_an_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_roster(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}
