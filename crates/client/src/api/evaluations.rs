//! Evaluation endpoints.
//!
//! Unlike the other entities, these answer under a generic `data` key.

use async_trait::async_trait;
use serde::Deserialize;
use tienda_core::{Evaluation, EvaluationId, ProductId, UserId};

use super::ports::EvaluationsApi;
use super::RestClient;
use crate::error::ApiError;
use crate::forms::EvaluationForm;

#[derive(Debug, Deserialize)]
struct EvaluationListBody {
    #[serde(default)]
    data: Vec<Evaluation>,
}

#[derive(Debug, Deserialize)]
struct EvaluationBody {
    data: Evaluation,
}

#[async_trait]
impl EvaluationsApi for RestClient {
    async fn all(&self) -> Result<Vec<Evaluation>, ApiError> {
        let body: EvaluationListBody = self.get_json("evaluations/", &[]).await?;
        Ok(body.data)
    }

    async fn by_product(&self, product_id: ProductId) -> Result<Vec<Evaluation>, ApiError> {
        let body: EvaluationListBody = self
            .get_json(&format!("evaluations/product/{product_id}"), &[])
            .await?;
        Ok(body.data)
    }

    async fn by_user(&self, user_id: UserId) -> Result<Vec<Evaluation>, ApiError> {
        let body: EvaluationListBody = self
            .get_json(&format!("evaluations/user/{user_id}"), &[])
            .await?;
        Ok(body.data)
    }

    async fn create(&self, form: &EvaluationForm) -> Result<Evaluation, ApiError> {
        let body: EvaluationBody = self.post_json("evaluations/", form).await?;
        Ok(body.data)
    }

    async fn update(&self, id: EvaluationId, form: &EvaluationForm) -> Result<(), ApiError> {
        self.put_unit(&format!("evaluations/id/{id}"), form).await
    }

    async fn delete(&self, id: EvaluationId) -> Result<(), ApiError> {
        self.delete_unit(&format!("evaluations/id/{id}")).await
    }
}
