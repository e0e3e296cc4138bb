use super::output::{print_json, print_ok};
use super::{FilterArgs, PageArgs};
use anyhow::{Context, Result};
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;
use tutoradmin_core::models::StudentUpdate;
use tutoradmin_interaction::ApiClient;

#[derive(Subcommand)]
pub enum StudentsAction {
    /// List students
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    Get { id: String },
    Ban {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    Unban { id: String },
    /// Update profile fields; only the given flags are sent
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    Delete { id: String },
    Stats { id: String },
    /// Export students as CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(client: &ApiClient, action: StudentsAction) -> Result<()> {
    let students = client.students();
    match action {
        StudentsAction::List { filter, page } => {
            let result = students
                .get_students(filter.to_filter().as_ref(), page.to_pagination().as_ref())
                .await?;
            print_json(&result)
        }
        StudentsAction::Get { id } => print_json(&students.get_student(&id).await?),
        StudentsAction::Ban { id, reason } => {
            students.ban_student(&id, reason.as_deref()).await?;
            print_ok()
        }
        StudentsAction::Unban { id } => {
            students.unban_student(&id).await?;
            print_ok()
        }
        StudentsAction::Update {
            id,
            name,
            email,
            phone,
        } => {
            let update = StudentUpdate {
                name,
                email,
                phone,
                ..StudentUpdate::default()
            };
            print_json(&students.update_student(&id, &update).await?)
        }
        StudentsAction::Delete { id } => {
            students.delete_student(&id).await?;
            print_ok()
        }
        StudentsAction::Stats { id } => print_json(&students.get_student_stats(&id).await?),
        StudentsAction::Export { filter, output } => {
            let bytes = students
                .export_students(filter.to_filter().as_ref())
                .await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("[CLI] Exported {} bytes to {}", bytes.len(), path.display());
                }
                None => std::io::stdout()
                    .write_all(&bytes)
                    .context("Failed to write export to stdout")?,
            }
            Ok(())
        }
    }
}
