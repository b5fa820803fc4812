//! Client-side input validation.
//!
//! Validation is deliberately shallow: required fields, matching password
//! confirmation and file-name extensions. Anything deeper is the server's job.

use std::fmt;
use std::path::Path;

use crate::error::{PpiError, Result};

/// Accepted FASTA file name markers.
pub const FASTA_EXTENSIONS: &[&str] = &[".fasta", ".fa"];

/// Accepted pairs file name markers.
pub const PAIRS_EXTENSIONS: &[&str] = &[".txt", ".csv", ".tsv"];

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Empty or whitespace only.
    Required,
    /// Confirmation does not match its counterpart.
    Mismatch { other: String },
    /// File name does not carry one of the accepted extensions.
    Extension { expected: Vec<String> },
}

/// A validation failure attached to one named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: FieldErrorKind::Required,
        }
    }

    pub fn mismatch(field: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: FieldErrorKind::Mismatch {
                other: other.into(),
            },
        }
    }

    pub fn extension(field: impl Into<String>, expected: &[&str]) -> Self {
        Self {
            field: field.into(),
            kind: FieldErrorKind::Extension {
                expected: expected.iter().map(|e| e.to_string()).collect(),
            },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::Mismatch { other } => {
                write!(f, "{} does not match {}", self.field, other)
            }
            FieldErrorKind::Extension { expected } => write!(
                f,
                "{} must have one of the extensions {}",
                self.field,
                expected.join(", ")
            ),
        }
    }
}

/// Collects field errors and turns them into a single `PpiError::Validation`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects values that are empty after trimming.
    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::required(field));
        }
        self
    }

    /// Rejects a confirmation value that differs from the original.
    pub fn require_match(&mut self, field: &str, value: &str, other: &str, other_value: &str) -> &mut Self {
        if value != other_value {
            self.errors.push(FieldError::mismatch(field, other));
        }
        self
    }

    /// Rejects a missing path, or a file name that contains none of `extensions`.
    pub fn require_file(&mut self, field: &str, path: Option<&Path>, extensions: &[&str]) -> &mut Self {
        match path {
            None => self.errors.push(FieldError::required(field)),
            Some(path) if !has_extension(path, extensions) => {
                self.errors.push(FieldError::extension(field, extensions))
            }
            Some(_) => {}
        }
        self
    }

    pub fn finish(&mut self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(PpiError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

/// Case-insensitive check that the file name contains one of the markers.
///
/// Matches on "contains", not "ends with", so `pairs.csv.txt` and
/// `proteins.fa.gz`-style names are accepted the same way the upload form does.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    extensions.iter().any(|ext| name.contains(ext))
}
