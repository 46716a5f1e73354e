//! Comments and evaluations left on products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CommentId, EvaluationId, ProductId, UserId};

/// A text comment on a product.
///
/// Invariant: `3 <= text length <= 500`. Deletable only by its author or
/// an admin (enforced server-side).
///
/// The list endpoints join author and product display fields onto each
/// row; those stay optional since single-record responses omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID (`id_comment` on the wire).
    #[serde(rename = "id_comment")]
    pub id: CommentId,
    /// Product the comment is attached to.
    #[serde(rename = "id_product")]
    pub product_id: ProductId,
    /// Author.
    #[serde(rename = "id_user")]
    pub user_id: UserId,
    /// Comment body (`comment` on the wire).
    #[serde(rename = "comment")]
    pub text: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Author first name, joined by the list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Author last name, joined by the list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_lastname: Option<String>,
    /// Product type, joined by the list endpoints (`product_tipe`).
    #[serde(
        rename = "product_tipe",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_type: Option<String>,
}

/// A 1-5 star rating on a product.
///
/// One conceptual rating per user per product; the backend enforces it,
/// the client does not. Deletable only by its author or an admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Evaluation ID (`id_product_evaluation` on the wire).
    #[serde(rename = "id_product_evaluation")]
    pub id: EvaluationId,
    /// Product the rating is attached to.
    #[serde(rename = "id_product")]
    pub product_id: ProductId,
    /// Rating author.
    #[serde(rename = "id_user")]
    pub user_id: UserId,
    /// Star rating in `[1, 5]`.
    pub assessment: i32,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Optional free-text note attached to the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Author first name, joined by the list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Author last name, joined by the list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_lastname: Option<String>,
    /// Product type, joined by the list endpoints (`product_tipe`).
    #[serde(
        rename = "product_tipe",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_type: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_wire_names() {
        let json = r#"{
            "id_comment": 8,
            "id_product": 2,
            "id_user": 5,
            "comment": "Muy buena calidad",
            "user_name": "Laura",
            "product_tipe": "camiseta"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.text, "Muy buena calidad");
        assert_eq!(comment.product_type.as_deref(), Some("camiseta"));
        assert!(comment.created_at.is_none());
    }

    #[test]
    fn test_evaluation_wire_names() {
        let json = r#"{
            "id_product_evaluation": 1,
            "id_product": 2,
            "id_user": 5,
            "assessment": 4
        }"#;

        let evaluation: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.id, EvaluationId::new(1));
        assert_eq!(evaluation.assessment, 4);
    }
}
