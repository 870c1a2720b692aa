use clap::{Parser, Subcommand};
use eduhist::model::StudyForm;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eduhist")]
#[command(about = "Manage your education history records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the persisted records (defaults to the platform
    /// data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an education entry
    #[command(alias = "a")]
    Add {
        /// Name of the institution
        #[arg(long)]
        institution: Option<String>,

        /// Specialty (letters, digits and spaces only)
        #[arg(long)]
        specialty: Option<String>,

        /// First year of attendance
        #[arg(long)]
        start_year: Option<i32>,

        /// Last year of attendance (omit for ongoing studies)
        #[arg(long)]
        end_year: Option<i32>,

        /// Mode of attendance: full-time, part-time, mixed or distance
        #[arg(long)]
        study_form: Option<StudyForm>,

        /// File to attach (repeatable)
        #[arg(long = "doc", value_name = "PATH")]
        docs: Vec<PathBuf>,
    },

    /// List entries
    #[command(alias = "ls")]
    List,

    /// Edit an entry; only the given fields change
    #[command(alias = "e")]
    Edit {
        /// Id of the entry
        id: i64,

        #[arg(long)]
        institution: Option<String>,

        #[arg(long)]
        specialty: Option<String>,

        #[arg(long)]
        start_year: Option<i32>,

        #[arg(long)]
        end_year: Option<i32>,

        /// Mark the studies as ongoing (clears the end year)
        #[arg(long, conflicts_with = "end_year")]
        ongoing: bool,

        #[arg(long)]
        study_form: Option<StudyForm>,

        /// File to attach, appended after existing documents (repeatable)
        #[arg(long = "doc", value_name = "PATH")]
        docs: Vec<PathBuf>,
    },

    /// Remove an entry (asks for confirmation)
    #[command(alias = "rm")]
    Remove {
        /// Id of the entry
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove an attached document from an entry
    #[command(name = "remove-doc")]
    RemoveDoc {
        /// Id of the entry
        id: i64,

        /// Zero-based position of the document
        index: usize,
    },
}
