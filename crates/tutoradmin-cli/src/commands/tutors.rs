use super::output::{print_json, print_ok};
use super::{FilterArgs, PageArgs};
use anyhow::Result;
use clap::Subcommand;
use tutoradmin_core::models::TutorUpdate;
use tutoradmin_interaction::ApiClient;

#[derive(Subcommand)]
pub enum TutorsAction {
    /// List tutors
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    Get { id: String },
    /// Approve a pending tutor
    Approve { id: String },
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
        bio: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    Delete { id: String },
    Stats { id: String },
}

pub async fn run(client: &ApiClient, action: TutorsAction) -> Result<()> {
    let tutors = client.tutors();
    match action {
        TutorsAction::List { filter, page } => {
            let result = tutors
                .get_tutors(filter.to_filter().as_ref(), page.to_pagination().as_ref())
                .await?;
            print_json(&result)
        }
        TutorsAction::Get { id } => print_json(&tutors.get_tutor(&id).await?),
        TutorsAction::Approve { id } => {
            tutors.approve_tutor(&id).await?;
            print_ok()
        }
        TutorsAction::Ban { id, reason } => {
            tutors.ban_tutor(&id, reason.as_deref()).await?;
            print_ok()
        }
        TutorsAction::Unban { id } => {
            tutors.unban_tutor(&id).await?;
            print_ok()
        }
        TutorsAction::Update {
            id,
            name,
            email,
            bio,
            phone,
        } => {
            let update = TutorUpdate {
                name,
                email,
                bio,
                phone,
                ..TutorUpdate::default()
            };
            print_json(&tutors.update_tutor(&id, &update).await?)
        }
        TutorsAction::Delete { id } => {
            tutors.delete_tutor(&id).await?;
            print_ok()
        }
        TutorsAction::Stats { id } => print_json(&tutors.get_tutor_stats(&id).await?),
    }
}
