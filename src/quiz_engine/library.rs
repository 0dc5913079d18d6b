//! Vocabulary libraries and the textbook shelf.
//!
//! A library is one textbook volume stored as JSON. The catalog maps library
//! ids (file stems such as `PEP_2022_grade7_up`) to parsed libraries, and
//! [`books_for_grade`] lists the volumes offered for each school grade.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{QuizError, QuizResult},
    models::VocabularyLibrary,
};

impl VocabularyLibrary {
    pub fn from_json_str(json: &str) -> QuizResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> QuizResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Library ids are accepted with or without a `.json` suffix.
fn normalize_id(id: &str) -> &str {
    id.strip_suffix(".json").unwrap_or(id)
}

#[derive(Debug, Clone, Default)]
pub struct LibraryCatalog {
    libraries: BTreeMap<String, VocabularyLibrary>,
}

impl LibraryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, library: VocabularyLibrary) {
        self.libraries.insert(normalize_id(id).to_string(), library);
    }

    pub fn load_json(&mut self, id: &str, json: &str) -> QuizResult<()> {
        let library = VocabularyLibrary::from_json_str(json)?;
        self.insert(id, library);
        Ok(())
    }

    /// Load every `*.json` file in `dir`, keyed by file stem.
    /// Returns how many libraries were added.
    ///
    /// All or nothing: if any file cannot be read or parsed, the catalog is
    /// left as it was.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> QuizResult<usize> {
        let dir = dir.as_ref();
        let mut parsed = Vec::new();
        for dir_entry in fs::read_dir(dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let library = VocabularyLibrary::from_path(&path)?;
            debug!("Parsed library {} ({} textbooks)", stem, library.textbooks.len());
            parsed.push((stem.to_string(), library));
        }

        let loaded = parsed.len();
        for (id, library) in parsed {
            self.insert(&id, library);
        }
        info!("Loaded {} libraries from {}", loaded, dir.display());
        Ok(loaded)
    }

    pub fn get(&self, id: &str) -> QuizResult<&VocabularyLibrary> {
        self.libraries
            .get(normalize_id(id))
            .ok_or_else(|| QuizError::LibraryNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.libraries.contains_key(normalize_id(id))
    }

    /// Library ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.libraries.keys().map(String::as_str)
    }

    pub fn units_of(&self, id: &str) -> QuizResult<Vec<String>> {
        Ok(self.get(id)?.units())
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Grade → textbook shelf
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Grade7,
    Grade8,
    Grade9,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Grade7 => write!(f, "grade7"),
            Grade::Grade8 => write!(f, "grade8"),
            Grade::Grade9 => write!(f, "grade9"),
        }
    }
}

impl FromStr for Grade {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grade7" => Ok(Grade::Grade7),
            "grade8" => Ok(Grade::Grade8),
            "grade9" => Ok(Grade::Grade9),
            other => Err(QuizError::UnknownGrade(other.to_string())),
        }
    }
}

/// One textbook volume on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    pub title: &'static str,
    /// Library id to load for this volume.
    pub value: &'static str,
    pub cover: &'static str,
}

const fn book(title: &'static str, value: &'static str, cover: &'static str) -> BookInfo {
    BookInfo { title, value, cover }
}

const GRADE7_BOOKS: &[BookInfo] = &[
    book("2022版 上册", "PEP_2022_grade7_up", "/covers/PEP_2022_grade7_up.png"),
    book("2022版 下册", "PEP_2022_grade7_down", "/covers/PEP_2022_grade7_down.png"),
    book("2011版 上册", "PEP_2011_grade7_up", "/covers/PEP_2011_grade7_up.png"),
    book("2011版 下册", "PEP_2011_grade7_down", "/covers/PEP_2011_grade7_down.png"),
];

const GRADE8_BOOKS: &[BookInfo] = &[
    book("2022版 上册", "PEP_2022_grade8_up", "/covers/PEP_2022_grade8_up.png"),
    book("2022版 下册", "PEP_2022_grade8_down", "/covers/PEP_2022_grade8_down.png"),
    book("2011版 上册", "PEP_2011_grade8_up", "/covers/PEP_2011_grade8_up.png"),
    book("2011版 下册", "PEP_2011_grade8_down", "/covers/PEP_2011_grade8_down.png"),
];

const GRADE9_BOOKS: &[BookInfo] = &[
    book("2022版 全一册", "PEP_2022_grade9", "/covers/PEP_2022_grade9.png"),
    book("2011版 全一册", "PEP_2011_grade9", "/covers/PEP_2011_grade9.png"),
];

pub fn books_for_grade(grade: Grade) -> &'static [BookInfo] {
    match grade {
        Grade::Grade7 => GRADE7_BOOKS,
        Grade::Grade8 => GRADE8_BOOKS,
        Grade::Grade9 => GRADE9_BOOKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "textbooks": [
            { "name": "Starter", "vocabulary": [
                { "word": "good", "meaning": "好的", "false_meanings": ["坏的"], "unit": "Starter Unit 1" },
                { "word": "Bob", "meaning": "鲍勃", "is_proper_noun": true, "unit": "Starter Unit 1" }
            ]},
            { "vocabulary": [
                { "word": "map", "meaning": "地图", "unit": "Unit 1" }
            ]},
            {}
        ]
    }"#;

    #[test]
    fn parses_nested_textbooks_and_ignores_unknown_fields() {
        let lib = VocabularyLibrary::from_json_str(SAMPLE).unwrap();
        assert_eq!(lib.textbooks.len(), 3);
        let words: Vec<&str> = lib.entries().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["good", "Bob", "map"]);
        assert_eq!(lib.units(), vec!["Starter Unit 1", "Unit 1"]);
    }

    #[test]
    fn missing_meaning_is_a_parse_error() {
        let json = r#"{ "textbooks": [ { "vocabulary": [ { "word": "cat" } ] } ] }"#;
        let err = VocabularyLibrary::from_json_str(json).unwrap_err();
        assert!(matches!(err, QuizError::Parse(_)));
    }

    #[test]
    fn catalog_lookup_accepts_file_names() {
        let mut catalog = LibraryCatalog::new();
        catalog.load_json("PEP_2022_grade7_up.json", SAMPLE).unwrap();
        assert!(catalog.contains("PEP_2022_grade7_up"));
        assert!(catalog.get("PEP_2022_grade7_up.json").is_ok());
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["PEP_2022_grade7_up"]);
    }

    #[test]
    fn unknown_library_is_not_found() {
        let catalog = LibraryCatalog::new();
        match catalog.get("PEP_1999_grade1") {
            Err(QuizError::LibraryNotFound(id)) => assert_eq!(id, "PEP_1999_grade1"),
            other => panic!("expected LibraryNotFound, got {other:?}"),
        }
        assert!(catalog.units_of("PEP_1999_grade1").is_err());
    }

    #[test]
    fn load_dir_picks_up_json_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("PEP_2011_grade9.json"), SAMPLE).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a library").unwrap();

        let mut catalog = LibraryCatalog::new();
        assert_eq!(catalog.load_dir(dir.path()).unwrap(), 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.units_of("PEP_2011_grade9").unwrap().len(), 2);
    }

    #[test]
    fn load_dir_with_a_bad_file_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("aa_bad.json"), "{ oops").unwrap();
        for i in 0..40 {
            fs::write(dir.path().join(format!("good{i}.json")), SAMPLE).unwrap();
        }

        let mut catalog = LibraryCatalog::new();
        catalog.load_json("PEP_2022_grade7_up", SAMPLE).unwrap();

        let err = catalog.load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, QuizError::Parse(_)), "got {err:?}");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["PEP_2022_grade7_up"]);
    }

    #[test]
    fn load_dir_on_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = LibraryCatalog::new();
        let err = catalog.load_dir(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, QuizError::Io(_)), "got {err:?}");
        assert!(catalog.is_empty());
    }

    #[test]
    fn every_grade_has_books_that_parse_back() {
        for grade in [Grade::Grade7, Grade::Grade8, Grade::Grade9] {
            let books = books_for_grade(grade);
            assert!(!books.is_empty());
            for b in books {
                assert!(b.value.contains(&grade.to_string()), "{} not in {grade}", b.value);
                assert!(b.cover.ends_with(&format!("{}.png", b.value)));
            }
            assert_eq!(grade.to_string().parse::<Grade>().unwrap(), grade);
        }
        assert!("grade10".parse::<Grade>().is_err());
    }
}
