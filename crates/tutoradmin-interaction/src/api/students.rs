use super::ReasonBody;
use crate::client::{ApiClient, RequestOptions, segment};
use tutoradmin_core::error::Result;
use tutoradmin_core::models::{
    Pagination, Student, StudentPage, StudentStats, StudentUpdate, TableFilter,
};

pub struct StudentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StudentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `/students`, with filter and paging merged into one query.
    pub async fn get_students(
        &self,
        filter: Option<&TableFilter>,
        pagination: Option<&Pagination>,
    ) -> Result<StudentPage> {
        let options = RequestOptions::new().query(&filter)?.query(&pagination)?;
        self.client.get("/students", options).await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student> {
        self.client
            .get(&format!("/students/{}", segment(id)), RequestOptions::new())
            .await
    }

    pub async fn ban_student(&self, id: &str, reason: Option<&str>) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/students/{}/ban", segment(id)),
                RequestOptions::new().json(&ReasonBody { reason })?,
            )
            .await
    }

    pub async fn unban_student(&self, id: &str) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/students/{}/unban", segment(id)),
                RequestOptions::new(),
            )
            .await
    }

    pub async fn update_student(&self, id: &str, update: &StudentUpdate) -> Result<Student> {
        self.client
            .put(
                &format!("/students/{}", segment(id)),
                RequestOptions::new().json(update)?,
            )
            .await
    }

    pub async fn delete_student(&self, id: &str) -> Result<()> {
        self.client
            .delete_empty(&format!("/students/{}", segment(id)), RequestOptions::new())
            .await
    }

    pub async fn get_student_stats(&self, id: &str) -> Result<StudentStats> {
        self.client
            .get(
                &format!("/students/{}/stats", segment(id)),
                RequestOptions::new(),
            )
            .await
    }

    /// GET `/students/export`; the body is returned as-is (CSV).
    pub async fn export_students(&self, filter: Option<&TableFilter>) -> Result<Vec<u8>> {
        self.client
            .get_bytes("/students/export", RequestOptions::new().query(&filter)?)
            .await
    }
}
