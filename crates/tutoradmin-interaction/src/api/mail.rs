use crate::client::{ApiClient, RequestOptions, segment};
use serde::Serialize;
use tutoradmin_core::error::Result;
use tutoradmin_core::models::{EmailContent, EmailPayload, EmailTemplate, UserKind};

#[derive(Serialize)]
struct BulkEmailBody<'a> {
    recipients: &'a [String],
    #[serde(flatten)]
    content: &'a EmailContent,
}

#[derive(Serialize)]
struct DirectMessageBody<'a> {
    subject: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BanNotificationBody<'a> {
    user_id: &'a str,
    #[serde(rename = "type")]
    kind: UserKind,
    reason: &'a str,
}

pub struct MailApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MailApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn send_email(&self, payload: &EmailPayload) -> Result<()> {
        self.client
            .post_empty("/mail/send", RequestOptions::new().json(payload)?)
            .await
    }

    /// Sends the same content to every address in `recipients`.
    pub async fn send_bulk_email(&self, recipients: &[String], content: &EmailContent) -> Result<()> {
        let body = BulkEmailBody {
            recipients,
            content,
        };
        self.client
            .post_empty("/mail/send-bulk", RequestOptions::new().json(&body)?)
            .await
    }

    pub async fn send_to_tutor(&self, tutor_id: &str, subject: &str, message: &str) -> Result<()> {
        self.client
            .post_empty(
                &format!("/mail/tutor/{}", segment(tutor_id)),
                RequestOptions::new().json(&DirectMessageBody { subject, message })?,
            )
            .await
    }

    pub async fn send_to_student(
        &self,
        student_id: &str,
        subject: &str,
        message: &str,
    ) -> Result<()> {
        self.client
            .post_empty(
                &format!("/mail/student/{}", segment(student_id)),
                RequestOptions::new().json(&DirectMessageBody { subject, message })?,
            )
            .await
    }

    pub async fn send_payment_notification(&self, payment_id: &str) -> Result<()> {
        self.client
            .post_empty(
                &format!("/mail/payment-notification/{}", segment(payment_id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn send_approval_notification(&self, tutor_id: &str) -> Result<()> {
        self.client
            .post_empty(
                &format!("/mail/tutor-approval/{}", segment(tutor_id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn send_ban_notification(
        &self,
        user_id: &str,
        kind: UserKind,
        reason: &str,
    ) -> Result<()> {
        let body = BanNotificationBody {
            user_id,
            kind,
            reason,
        };
        self.client
            .post_empty("/mail/ban-notification", RequestOptions::new().json(&body)?)
            .await
    }

    pub async fn get_email_templates(&self) -> Result<Vec<EmailTemplate>> {
        self.client
            .get("/mail/templates", RequestOptions::new())
            .await
    }
}
