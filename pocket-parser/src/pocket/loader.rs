//! Source directory scanning
//!
//! This module provides `CatalogLoader`, which lists the course and quiz directories,
//! reads every `.txt` file in name order and parses it into a [Catalog].
//!
//! # Example
//!
//! ```rust
//! use pocket_parser::pocket::loader::{CatalogLoader, SourceDirs};
//!
//! let dirs = SourceDirs::new("courses/Courses x 12", "courses/Corresponding Quizzes x 12");
//! let catalog = CatalogLoader::new(dirs).load()?;
//! ```
//!
//! Any I/O failure aborts the scan. There is no partial result.

use super::error::LoaderError;
use super::parsing::{parse_course, parse_quiz, SOURCE_EXTENSION};
use super::records::{Catalog, CourseRecord, QuizRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The two directories a catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirs {
    pub courses: PathBuf,
    pub quizzes: PathBuf,
}

impl SourceDirs {
    pub fn new(courses: impl Into<PathBuf>, quizzes: impl Into<PathBuf>) -> Self {
        Self {
            courses: courses.into(),
            quizzes: quizzes.into(),
        }
    }
}

/// Reads and parses the course and quiz directories.
pub struct CatalogLoader {
    dirs: SourceDirs,
}

impl CatalogLoader {
    pub fn new(dirs: SourceDirs) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &SourceDirs {
        &self.dirs
    }

    /// Scan both directories.
    pub fn load(&self) -> Result<Catalog, LoaderError> {
        let lessons = self.load_courses()?;
        let quizzes = self.load_quizzes()?;
        Ok(Catalog::new(lessons, quizzes))
    }

    pub fn load_courses(&self) -> Result<Vec<CourseRecord>, LoaderError> {
        info!("Checking courses in {}", self.dirs.courses.display());
        let courses = list_sources(&self.dirs.courses)?
            .into_iter()
            .map(|(name, path)| {
                let content = read_source(&path)?;
                let course = parse_course(&content, &name);
                debug!(file = %name, title = %course.title, difficulty = %course.difficulty, "parsed course");
                Ok(course)
            })
            .collect::<Result<Vec<_>, LoaderError>>()?;
        info!("Found {} courses", courses.len());
        Ok(courses)
    }

    pub fn load_quizzes(&self) -> Result<Vec<QuizRecord>, LoaderError> {
        info!("Checking quizzes in {}", self.dirs.quizzes.display());
        let quizzes = list_sources(&self.dirs.quizzes)?
            .into_iter()
            .map(|(name, path)| {
                let content = read_source(&path)?;
                let quiz = parse_quiz(&content, &name);
                debug!(file = %name, module = %quiz.module_id, questions = quiz.questions.len(), "parsed quiz");
                Ok(quiz)
            })
            .collect::<Result<Vec<_>, LoaderError>>()?;
        info!("Found {} quizzes", quizzes.len());
        Ok(quizzes)
    }
}

/// Source files of a directory, sorted by name.
pub fn list_sources(dir: &Path) -> Result<Vec<(String, PathBuf)>, LoaderError> {
    let list_err = |source| LoaderError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %entry.path().display(), "skipping file with a non UTF-8 name");
            continue;
        };
        if name.ends_with(SOURCE_EXTENSION) {
            sources.push((name, entry.path()));
        }
    }
    sources.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(sources)
}

fn read_source(path: &Path) -> Result<String, LoaderError> {
    fs::read_to_string(path).map_err(|source| LoaderError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
