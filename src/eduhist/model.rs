use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode of attendance. The serialized tags are part of the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyForm {
    FullTime,
    PartTime,
    Mixed,
    Distance,
}

impl StudyForm {
    pub const ALL: [StudyForm; 4] = [
        StudyForm::FullTime,
        StudyForm::PartTime,
        StudyForm::Mixed,
        StudyForm::Distance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyForm::FullTime => "full-time",
            StudyForm::PartTime => "part-time",
            StudyForm::Mixed => "mixed",
            StudyForm::Distance => "distance",
        }
    }
}

impl fmt::Display for StudyForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudyForm::ALL
            .into_iter()
            .find(|form| form.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown study form '{}' (expected one of: full-time, part-time, mixed, distance)",
                    s
                )
            })
    }
}

/// One attached file, stored as a self-contained record. Created once by the
/// encoder at attachment time and never modified afterwards, only removed
/// from its owning entry's document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationDocument {
    /// Original file name.
    pub name: String,
    /// MIME type; empty when it could not be determined.
    pub mime_type: String,
    /// base64 data URL holding the file's bytes. Opaque to the store.
    pub data_url: String,
}

/// One education history record as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Unique integer identity, assigned by the store at creation time.
    pub id: i64,
    pub institution: String,
    pub specialty: String,
    pub start_year: i32,
    /// `None` means the studies are ongoing.
    #[serde(default)]
    pub end_year: Option<i32>,
    pub study_form: StudyForm,
    /// Insertion order is display order. May be empty.
    #[serde(default)]
    pub documents: Vec<EducationDocument>,
}

/// A candidate entry as collected from user input, prior to validation.
/// `start_year` and `study_form` are optional here because the user may not
/// have chosen them yet; the validator rejects them when absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub institution: String,
    pub specialty: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub study_form: Option<StudyForm>,
    pub documents: Vec<EducationDocument>,
}

impl EntryDraft {
    /// Turn an existing entry back into a candidate, for the edit path.
    pub fn from_entry(entry: &EducationEntry) -> Self {
        Self {
            institution: entry.institution.clone(),
            specialty: entry.specialty.clone(),
            start_year: Some(entry.start_year),
            end_year: entry.end_year,
            study_form: Some(entry.study_form),
            documents: entry.documents.clone(),
        }
    }
}

/// A validated candidate: everything an [`EducationEntry`] has except the
/// identity, which only the store may assign.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub institution: String,
    pub specialty: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub study_form: StudyForm,
    pub documents: Vec<EducationDocument>,
}

impl NewEntry {
    pub fn into_entry(self, id: i64) -> EducationEntry {
        EducationEntry {
            id,
            institution: self.institution,
            specialty: self.specialty,
            start_year: self.start_year,
            end_year: self.end_year,
            study_form: self.study_form,
            documents: self.documents,
        }
    }
}

/// A partial field set for merging into an existing entry. Unset fields are
/// left untouched. `end_year` is doubly optional so that "clear the end
/// year" (`Some(None)`) and "leave it alone" (`None`) stay distinguishable.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub institution: Option<String>,
    pub specialty: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<Option<i32>>,
    pub study_form: Option<StudyForm>,
    pub documents: Option<Vec<EducationDocument>>,
}

impl EntryPatch {
    pub fn apply(self, entry: &mut EducationEntry) {
        if let Some(institution) = self.institution {
            entry.institution = institution;
        }
        if let Some(specialty) = self.specialty {
            entry.specialty = specialty;
        }
        if let Some(start_year) = self.start_year {
            entry.start_year = start_year;
        }
        if let Some(end_year) = self.end_year {
            entry.end_year = end_year;
        }
        if let Some(study_form) = self.study_form {
            entry.study_form = study_form;
        }
        if let Some(documents) = self.documents {
            entry.documents = documents;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.institution.is_none()
            && self.specialty.is_none()
            && self.start_year.is_none()
            && self.end_year.is_none()
            && self.study_form.is_none()
            && self.documents.is_none()
    }
}

impl From<NewEntry> for EntryPatch {
    fn from(new: NewEntry) -> Self {
        Self {
            institution: Some(new.institution),
            specialty: Some(new.specialty),
            start_year: Some(new.start_year),
            end_year: Some(new.end_year),
            study_form: Some(new.study_form),
            documents: Some(new.documents),
        }
    }
}
