//! Evaluation (star rating) envelopes.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tienda_core::{Evaluation, EvaluationId, ProductId, UserId};

use super::{empty_on_not_found, Envelope};
use crate::api::EvaluationsApi;
use crate::forms::EvaluationForm;

/// Average rating formatted to one decimal place ("4.0"), or "0" when
/// there are no evaluations. Ties round away from zero, so a mean of
/// 4.25 displays as "4.3".
#[must_use]
pub fn calculate_average(evaluations: &[Evaluation]) -> String {
    if evaluations.is_empty() {
        return "0".to_owned();
    }
    let sum: i32 = evaluations.iter().map(|e| e.assessment).sum();
    let mean = Decimal::from(sum) / Decimal::from(evaluations.len());
    let mean = mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{mean:.1}")
}

/// Envelope layer over the evaluations port.
#[derive(Clone)]
pub struct EvaluationsAdapter {
    api: Arc<dyn EvaluationsApi>,
}

impl EvaluationsAdapter {
    #[must_use]
    pub fn new(api: Arc<dyn EvaluationsApi>) -> Self {
        Self { api }
    }

    /// Fetch every evaluation (admin listing).
    pub async fn all(&self) -> Envelope<Vec<Evaluation>> {
        match empty_on_not_found(self.api.all().await) {
            Ok(evaluations) => Envelope::data(evaluations),
            Err(err) => Envelope::failed(&err, "Error al cargar evaluaciones"),
        }
    }

    /// Fetch a product's evaluations.
    pub async fn by_product(&self, product_id: ProductId) -> Envelope<Vec<Evaluation>> {
        match empty_on_not_found(self.api.by_product(product_id).await) {
            Ok(evaluations) => Envelope::data(evaluations),
            Err(err) => Envelope::failed(&err, "Error al cargar evaluaciones del producto"),
        }
    }

    /// Fetch a user's evaluations.
    pub async fn by_user(&self, user_id: UserId) -> Envelope<Vec<Evaluation>> {
        match empty_on_not_found(self.api.by_user(user_id).await) {
            Ok(evaluations) => Envelope::data(evaluations),
            Err(err) => Envelope::failed(&err, "Error al cargar evaluaciones del usuario"),
        }
    }

    /// Create an evaluation.
    pub async fn create(&self, form: &EvaluationForm) -> Envelope<Evaluation> {
        match self.api.create(form).await {
            Ok(evaluation) => Envelope::created(evaluation, "Evaluación creada exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al crear evaluación"),
        }
    }

    /// Update an evaluation.
    pub async fn update(&self, id: EvaluationId, form: &EvaluationForm) -> Envelope<()> {
        match self.api.update(id, form).await {
            Ok(()) => Envelope::done("Evaluación actualizada exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al actualizar evaluación"),
        }
    }

    /// Delete an evaluation (author or admin, server enforced).
    pub async fn delete(&self, id: EvaluationId) -> Envelope<()> {
        match self.api.delete(id).await {
            Ok(()) => Envelope::done("Evaluación eliminada exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al eliminar evaluación"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn eval(assessment: i32) -> Evaluation {
        Evaluation {
            id: EvaluationId::new(1),
            product_id: ProductId::new(1),
            user_id: UserId::new(1),
            assessment,
            created_at: None,
            comment: None,
            user_name: None,
            user_lastname: None,
            product_type: None,
        }
    }

    #[test]
    fn test_average_one_decimal() {
        let evaluations = vec![eval(5), eval(4), eval(3)];
        assert_eq!(calculate_average(&evaluations), "4.0");
    }

    #[test]
    fn test_average_rounds() {
        let evaluations = vec![eval(5), eval(4)];
        assert_eq!(calculate_average(&evaluations), "4.5");
    }

    #[test]
    fn test_average_tie_rounds_away_from_zero() {
        let evaluations = vec![eval(5), eval(4), eval(4), eval(4)];
        assert_eq!(calculate_average(&evaluations), "4.3");
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(calculate_average(&[]), "0");
    }
}
