use super::output::{print_json, print_ok};
use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use tutoradmin_core::models::{EmailContent, EmailPayload, UserKind};
use tutoradmin_infrastructure::load_attachment;
use tutoradmin_interaction::ApiClient;

#[derive(Args)]
pub struct ContentArgs {
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
    #[arg(long)]
    cc: Vec<String>,
    /// File to attach; may be repeated
    #[arg(long = "attach")]
    attachments: Vec<PathBuf>,
}

impl ContentArgs {
    fn into_content(self) -> Result<EmailContent> {
        let mut content = EmailContent::new(self.subject, self.message);
        for cc in self.cc {
            content = content.with_cc(cc);
        }
        for path in &self.attachments {
            let attachment = load_attachment(path)
                .with_context(|| format!("Failed to attach {}", path.display()))?;
            content = content.with_attachment(attachment);
        }
        Ok(content)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountKind {
    Tutor,
    Student,
}

impl From<AccountKind> for UserKind {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Tutor => UserKind::Tutor,
            AccountKind::Student => UserKind::Student,
        }
    }
}

#[derive(Subcommand)]
pub enum MailAction {
    /// Send to a single address
    Send {
        #[arg(long)]
        to: String,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Send the same email to several addresses
    Bulk {
        #[arg(long = "to", required = true)]
        recipients: Vec<String>,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Message a tutor by id
    Tutor {
        id: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Message a student by id
    Student {
        id: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    PaymentNotification { payment_id: String },
    ApprovalNotification { tutor_id: String },
    BanNotification {
        user_id: String,
        #[arg(long, value_enum)]
        kind: AccountKind,
        #[arg(long)]
        reason: String,
    },
    Templates,
}

pub async fn run(client: &ApiClient, action: MailAction) -> Result<()> {
    let mail = client.mail();
    match action {
        MailAction::Send { to, content } => {
            let payload = EmailPayload::new(to, content.into_content()?);
            mail.send_email(&payload).await?;
        }
        MailAction::Bulk {
            recipients,
            content,
        } => {
            if recipients.is_empty() {
                bail!("At least one recipient is required");
            }
            mail.send_bulk_email(&recipients, &content.into_content()?)
                .await?;
        }
        MailAction::Tutor {
            id,
            subject,
            message,
        } => mail.send_to_tutor(&id, &subject, &message).await?,
        MailAction::Student {
            id,
            subject,
            message,
        } => mail.send_to_student(&id, &subject, &message).await?,
        MailAction::PaymentNotification { payment_id } => {
            mail.send_payment_notification(&payment_id).await?
        }
        MailAction::ApprovalNotification { tutor_id } => {
            mail.send_approval_notification(&tutor_id).await?
        }
        MailAction::BanNotification {
            user_id,
            kind,
            reason,
        } => {
            mail.send_ban_notification(&user_id, kind.into(), &reason)
                .await?
        }
        MailAction::Templates => return print_json(&mail.get_email_templates().await?),
    }
    print_ok()
}
