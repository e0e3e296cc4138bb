//! Tutor payout requests and history.

use super::ReasonBody;
use crate::client::{ApiClient, RequestOptions, segment};
use serde::Serialize;
use tutoradmin_core::error::Result;
use tutoradmin_core::models::{
    PaymentHistory, PaymentHistoryPage, PaymentRequest, PaymentRequestPage, PaymentSummary,
    TableFilter,
};

#[derive(Serialize)]
struct ApproveBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkApproveBody<'a> {
    payment_ids: &'a [String],
}

pub struct PaymentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_payment_requests(
        &self,
        filter: Option<&TableFilter>,
    ) -> Result<PaymentRequestPage> {
        self.client
            .get("/payments/requests", RequestOptions::new().query(&filter)?)
            .await
    }

    pub async fn get_payment_request(&self, id: &str) -> Result<PaymentRequest> {
        self.client
            .get(
                &format!("/payments/requests/{}", segment(id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn approve_payment(&self, id: &str, notes: Option<&str>) -> Result<()> {
        self.client
            .post_empty(
                &format!("/payments/requests/{}/approve", segment(id)),
                RequestOptions::new().json(&ApproveBody { notes })?,
            )
            .await
    }

    /// Rejecting always needs a reason.
    pub async fn reject_payment(&self, id: &str, reason: &str) -> Result<()> {
        let body = ReasonBody {
            reason: Some(reason),
        };
        self.client
            .post_empty(
                &format!("/payments/requests/{}/reject", segment(id)),
                RequestOptions::new().json(&body)?,
            )
            .await
    }

    pub async fn get_payment_history(
        &self,
        filter: Option<&TableFilter>,
    ) -> Result<PaymentHistoryPage> {
        self.client
            .get("/payments/history", RequestOptions::new().query(&filter)?)
            .await
    }

    pub async fn get_payment_summary(&self) -> Result<PaymentSummary> {
        self.client
            .get("/payments/summary", RequestOptions::new())
            .await
    }

    pub async fn get_tutor_payments(&self, tutor_id: &str) -> Result<Vec<PaymentHistory>> {
        self.client
            .get(
                &format!("/payments/tutor/{}", segment(tutor_id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn process_bulk_payments(&self, payment_ids: &[String]) -> Result<()> {
        let body = BulkApproveBody { payment_ids };
        self.client
            .post_empty("/payments/bulk-approve", RequestOptions::new().json(&body)?)
            .await
    }
}
