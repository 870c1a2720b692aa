//! End-to-end submission flow through the API facade against the real fs
//! backend: validate, encode attachments, persist, re-read.

use eduhist::api::EduApi;
use eduhist::encoder;
use eduhist::error::EduError;
use eduhist::model::{EntryDraft, StudyForm};
use eduhist::store::fs::FsBackend;
use eduhist::validation::Field;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn open_api(dir: &TempDir) -> EduApi<FsBackend> {
    EduApi::open(FsBackend::new(dir.path().to_path_buf())).unwrap()
}

fn mit_draft() -> EntryDraft {
    EntryDraft {
        institution: "MIT".to_string(),
        specialty: "Physics".to_string(),
        start_year: Some(2015),
        end_year: Some(2019),
        study_form: Some(StudyForm::FullTime),
        documents: Vec::new(),
    }
}

#[test]
fn submit_then_remove_empties_the_store() {
    let dir = TempDir::new().unwrap();
    let mut api = open_api(&dir);

    let result = api.submit_entry(mit_draft(), &[]).unwrap();
    let id = result.affected_entries[0].id;

    let entries = api.list_entries().unwrap().listed_entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].institution, "MIT");
    assert_eq!(entries[0].specialty, "Physics");
    assert_eq!(entries[0].start_year, 2015);
    assert_eq!(entries[0].end_year, Some(2019));
    assert_eq!(entries[0].study_form, StudyForm::FullTime);
    assert!(entries[0].documents.is_empty());

    api.remove_entry(id).unwrap();
    assert!(api.list_entries().unwrap().listed_entries.is_empty());
}

#[test]
fn invalid_specialty_is_rejected_and_store_untouched() {
    let dir = TempDir::new().unwrap();
    let mut api = open_api(&dir);

    let mut draft = mit_draft();
    draft.specialty = "Physics!!".to_string();
    let err = api.submit_entry(draft, &[]).unwrap_err();

    match err {
        EduError::Validation(errors) => {
            assert!(errors.get(Field::Specialty).is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(api.entries().is_empty());
    // Nothing was persisted either.
    assert!(!dir.path().join("education.json").exists());
}

#[test]
fn attachments_roundtrip_through_the_persisted_entry() {
    let dir = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let bytes: Vec<u8> = (0..=255).collect();
    let path = files.path().join("diploma.pdf");
    fs::write(&path, &bytes).unwrap();

    {
        let mut api = open_api(&dir);
        api.submit_entry(mit_draft(), &[path]).unwrap();
    }

    // Reopen and decode what was persisted.
    let api = open_api(&dir);
    let documents = &api.entries()[0].documents;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "diploma.pdf");
    assert_eq!(documents[0].mime_type, "application/pdf");
    assert_eq!(encoder::decode_data_url(&documents[0].data_url).unwrap(), bytes);
}

#[test]
fn one_bad_attachment_aborts_the_submission() {
    let dir = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let good = files.path().join("good.txt");
    fs::write(&good, b"fine").unwrap();
    let missing: PathBuf = files.path().join("missing.txt");

    let mut api = open_api(&dir);
    let err = api.submit_entry(mit_draft(), &[good, missing]).unwrap_err();

    assert!(matches!(err, EduError::FileRead { .. }));
    assert!(api.entries().is_empty());
}

#[test]
fn document_removal_persists() {
    let dir = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let a = files.path().join("a.txt");
    fs::write(&a, b"a").unwrap();
    let b = files.path().join("b.txt");
    fs::write(&b, b"b").unwrap();

    let id = {
        let mut api = open_api(&dir);
        let result = api.submit_entry(mit_draft(), &[a, b]).unwrap();
        let id = result.affected_entries[0].id;
        api.remove_document(id, 0).unwrap();
        id
    };

    let api = open_api(&dir);
    let documents = &api.get_entry(id).unwrap().documents;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "b.txt");
}
