use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use eduhist::api::{CmdResult, EduApi, MessageLevel};
use eduhist::config::EduConfig;
use eduhist::error::{EduError, Result};
use eduhist::model::{EducationEntry, EntryDraft, EntryPatch, StudyForm};
use eduhist::store::fs::FsBackend;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => {}
        Err(EduError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{} {}: {}", "✗".red(), field.to_string().bold(), message);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add {
            institution,
            specialty,
            start_year,
            end_year,
            study_form,
            docs,
        }) => handle_add(
            &mut api,
            institution,
            specialty,
            start_year,
            end_year,
            study_form,
            docs,
        ),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Edit {
            id,
            institution,
            specialty,
            start_year,
            end_year,
            ongoing,
            study_form,
            docs,
        }) => {
            let patch = EntryPatch {
                institution,
                specialty,
                start_year,
                end_year: if ongoing {
                    Some(None)
                } else {
                    end_year.map(Some)
                },
                study_form,
                documents: None,
            };
            print_result(&api.update_entry(id, patch, &docs)?);
            Ok(())
        }
        Some(Commands::Remove { id, yes }) => handle_remove(&mut api, id, yes),
        Some(Commands::RemoveDoc { id, index }) => {
            print_result(&api.remove_document(id, index)?);
            Ok(())
        }
    }
}

fn init_api(cli: &Cli) -> Result<EduApi<FsBackend>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "eduhist", "eduhist")
            .ok_or_else(|| EduError::Store("could not determine a data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = EduConfig::load(&data_dir).unwrap_or_default();
    let backend = FsBackend::new(data_dir).with_file_name(config.storage_file());
    EduApi::open(backend)
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    api: &mut EduApi<FsBackend>,
    institution: Option<String>,
    specialty: Option<String>,
    start_year: Option<i32>,
    end_year: Option<i32>,
    study_form: Option<StudyForm>,
    docs: Vec<PathBuf>,
) -> Result<()> {
    let draft = EntryDraft {
        institution: institution.unwrap_or_default(),
        specialty: specialty.unwrap_or_default(),
        start_year,
        end_year,
        study_form,
        documents: Vec::new(),
    };
    print_result(&api.submit_entry(draft, &docs)?);
    Ok(())
}

fn handle_list(api: &EduApi<FsBackend>) -> Result<()> {
    let result = api.list_entries()?;
    if result.listed_entries.is_empty() {
        println!("{}", "No education entries yet.".dimmed());
        return Ok(());
    }
    for entry in &result.listed_entries {
        println!("{}", render_entry(entry));
    }
    Ok(())
}

fn handle_remove(api: &mut EduApi<FsBackend>, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let prompt = match api.get_entry(id) {
            Some(entry) => format!("Remove entry {} ({})?", id, entry.institution),
            None => format!("Remove entry {}?", id),
        };
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }
    print_result(&api.remove_entry(id)?);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(EduError::Io)?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(EduError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn render_entry(entry: &EducationEntry) -> String {
    let years = match entry.end_year {
        Some(end) => format!("{}-{}", entry.start_year, end),
        None => format!("{}-ongoing", entry.start_year),
    };
    let documents = match entry.documents.len() {
        0 => String::new(),
        1 => "  (1 document)".dimmed().to_string(),
        n => format!("  ({} documents)", n).dimmed().to_string(),
    };
    format!(
        "{}  {}, {}  {}  {}{}",
        entry.id.to_string().dimmed(),
        entry.institution.bold(),
        entry.specialty,
        years,
        entry.study_form,
        documents
    )
}

fn print_result(result: &CmdResult) {
    for message in &result.messages {
        match message.level {
            MessageLevel::Success => println!("{} {}", "✓".green(), message.content),
            MessageLevel::Warning => println!("{} {}", "!".yellow(), message.content),
            MessageLevel::Error => eprintln!("{} {}", "✗".red(), message.content),
            MessageLevel::Info => println!("{}", message.content),
        }
    }
}
