use super::FilterArgs;
use super::output::{print_json, print_ok};
use anyhow::{Result, bail};
use clap::Subcommand;
use tutoradmin_interaction::ApiClient;

#[derive(Subcommand)]
pub enum PaymentsAction {
    /// List payout requests
    Requests {
        #[command(flatten)]
        filter: FilterArgs,
    },
    Get { id: String },
    Approve {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// List completed payouts
    History {
        #[command(flatten)]
        filter: FilterArgs,
    },
    Summary,
    /// Payout history of one tutor
    Tutor { tutor_id: String },
    /// Approve several requests at once
    BulkApprove { ids: Vec<String> },
}

pub async fn run(client: &ApiClient, action: PaymentsAction) -> Result<()> {
    let payments = client.payments();
    match action {
        PaymentsAction::Requests { filter } => {
            print_json(&payments.get_payment_requests(filter.to_filter().as_ref()).await?)
        }
        PaymentsAction::Get { id } => print_json(&payments.get_payment_request(&id).await?),
        PaymentsAction::Approve { id, notes } => {
            payments.approve_payment(&id, notes.as_deref()).await?;
            print_ok()
        }
        PaymentsAction::Reject { id, reason } => {
            payments.reject_payment(&id, &reason).await?;
            print_ok()
        }
        PaymentsAction::History { filter } => {
            print_json(&payments.get_payment_history(filter.to_filter().as_ref()).await?)
        }
        PaymentsAction::Summary => print_json(&payments.get_payment_summary().await?),
        PaymentsAction::Tutor { tutor_id } => {
            print_json(&payments.get_tutor_payments(&tutor_id).await?)
        }
        PaymentsAction::BulkApprove { ids } => {
            if ids.is_empty() {
                bail!("At least one payment id is required");
            }
            payments.process_bulk_payments(&ids).await?;
            print_ok()
        }
    }
}
