use super::ReasonBody;
use crate::client::{ApiClient, RequestOptions, segment};
use tutoradmin_core::error::Result;
use tutoradmin_core::models::{Pagination, TableFilter, Tutor, TutorPage, TutorStats, TutorUpdate};

pub struct TutorsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TutorsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_tutors(
        &self,
        filter: Option<&TableFilter>,
        pagination: Option<&Pagination>,
    ) -> Result<TutorPage> {
        let options = RequestOptions::new().query(&filter)?.query(&pagination)?;
        self.client.get("/tutors", options).await
    }

    pub async fn get_tutor(&self, id: &str) -> Result<Tutor> {
        self.client
            .get(&format!("/tutors/{}", segment(id)), RequestOptions::new())
            .await
    }

    pub async fn approve_tutor(&self, id: &str) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/tutors/{}/approve", segment(id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn ban_tutor(&self, id: &str, reason: Option<&str>) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/tutors/{}/ban", segment(id)),
                RequestOptions::new().json(&ReasonBody { reason })?,
            )
            .await
    }

    pub async fn unban_tutor(&self, id: &str) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/tutors/{}/unban", segment(id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn update_tutor(&self, id: &str, update: &TutorUpdate) -> Result<Tutor> {
        self.client
            .put(
                &format!("/tutors/{}", segment(id)),
                RequestOptions::new().json(update)?,
            )
            .await
    }

    pub async fn delete_tutor(&self, id: &str) -> Result<()> {
        self.client
            .delete_empty(&format!("/tutors/{}", segment(id)), RequestOptions::new())
            .await
    }

    pub async fn get_tutor_stats(&self, id: &str) -> Result<TutorStats> {
        self.client
            .get(
                &format!("/tutors/{}/stats", segment(id)),
                RequestOptions::new(),
            )
            .await
    }
}
