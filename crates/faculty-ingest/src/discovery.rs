//! Document discovery and filename-based linking.

use std::path::{Path, PathBuf};

use faculty_map::NameResolver;
use faculty_model::{DocumentFormat, Person, ResolvedMatch};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Extensions of CV uploads.
pub const CV_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt"];
/// Extensions of profile photos.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// A file on disk and the roster person its name points to.
#[derive(Debug, Clone)]
pub struct LinkedDocument {
    pub path: PathBuf,
    /// `None` for files that are not documents (photos).
    pub format: Option<DocumentFormat>,
    pub resolution: ResolvedMatch,
}

impl LinkedDocument {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

/// Lists files in `dir` whose extension is one of `extensions`
/// (case-insensitive).
///
/// Returns files sorted by filename.
pub fn list_documents(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let wanted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)));
        if wanted {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), files = files.len(), "documents listed");
    Ok(files)
}

/// Resolves every file to a roster person by its file name. Unmatched files
/// are kept with an unresolved match.
pub fn link_documents(
    files: &[PathBuf],
    roster: &[Person],
    resolver: &NameResolver,
) -> Vec<LinkedDocument> {
    files
        .iter()
        .map(|path| {
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            LinkedDocument {
                path: path.clone(),
                format: DocumentFormat::from_filename(filename),
                resolution: resolver.resolve_filename(filename, roster),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linking_keeps_unmatched_files() {
        let roster = vec![
            Person::new("a-rao-1", "Dr. A Rao"),
            Person::new("b-kumar-2", "Dr. Bhanu Kumar"),
        ];
        let files = vec![
            PathBuf::from("cvs/Dr_Bhanu_Kumar_65a1f0c2e4b0a1b2c3d4e5f6.pdf"),
            PathBuf::from("cvs/unknown_person.docx"),
        ];
        let linked = link_documents(&files, &roster, &NameResolver::default());
        assert_eq!(linked.len(), 2);
        assert_eq!(linked[0].resolution.person_id(), Some("b-kumar-2"));
        assert_eq!(linked[0].format, Some(DocumentFormat::Pdf));
        assert_eq!(linked[0].file_name(), "Dr_Bhanu_Kumar_65a1f0c2e4b0a1b2c3d4e5f6.pdf");
        assert!(!linked[1].resolution.is_resolved());
        assert_eq!(linked[1].format, Some(DocumentFormat::Docx));
    }

    #[test]
    fn missing_directory_is_reported() {
        let err = list_documents(Path::new("/definitely/not/here"), CV_EXTENSIONS).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
