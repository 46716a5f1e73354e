//! Comment and evaluation commands.

use clap::Subcommand;
use tienda_client::adapters::evaluations::calculate_average;
use tienda_client::forms::{CommentForm, EvaluationForm};
use tienda_client::validate;
use tienda_client::App;
use tienda_core::{CommentId, EvaluationId, ProductId};

use super::{ensure_authenticated, ensure_valid, finish, CliError};

#[derive(Subcommand)]
pub enum ReviewsAction {
    /// Show a product's comments and average rating
    Show {
        /// Product ID
        product_id: i32,
    },
    /// Comment on a product
    Comment {
        /// Product ID
        product_id: i32,
        /// Comment text
        #[arg(short, long)]
        text: String,
    },
    /// Rate a product 1-5
    Rate {
        /// Product ID
        product_id: i32,
        /// Stars, 1 to 5
        #[arg(short, long)]
        stars: i32,
    },
    /// Show the authenticated user's own reviews
    Mine,
    /// Delete a comment (author or admin)
    DeleteComment {
        /// Comment ID
        id: i32,
    },
    /// Delete an evaluation (author or admin)
    DeleteEvaluation {
        /// Evaluation ID
        id: i32,
    },
}

pub async fn run(app: &App, action: ReviewsAction) -> Result<(), CliError> {
    match action {
        ReviewsAction::Show { product_id } => {
            let product_id = ProductId::new(product_id);

            if let Some(evaluations) = finish(app.evaluations().by_product(product_id).await)? {
                println!(
                    "Calificación: {} ({} evaluaciones)",
                    calculate_average(&evaluations),
                    evaluations.len()
                );
            }

            if let Some(comments) = finish(app.comments().by_product(product_id).await)? {
                if comments.is_empty() {
                    println!("Sin comentarios");
                }
                for comment in &comments {
                    let author = match (&comment.user_name, &comment.user_lastname) {
                        (Some(name), Some(lastname)) => format!("{name} {lastname}"),
                        (Some(name), None) => name.clone(),
                        _ => format!("usuario #{}", comment.user_id),
                    };
                    println!("[{:>4}] {}: {}", comment.id, author, comment.text);
                }
            }
        }
        ReviewsAction::Comment { product_id, text } => {
            ensure_authenticated(app)?;
            let form = CommentForm {
                text,
                product_id: Some(ProductId::new(product_id)),
                user_id: app.session().identity().map(|identity| identity.id),
            };
            ensure_valid(&validate::comment(&form))?;
            finish(app.comments().create(&form).await)?;
        }
        ReviewsAction::Rate { product_id, stars } => {
            ensure_authenticated(app)?;
            let form = EvaluationForm {
                assessment: stars,
                product_id: Some(ProductId::new(product_id)),
                user_id: app.session().identity().map(|identity| identity.id),
            };
            ensure_valid(&validate::evaluation(&form))?;
            finish(app.evaluations().create(&form).await)?;
        }
        ReviewsAction::Mine => {
            ensure_authenticated(app)?;
            let Some(identity) = app.session().identity() else {
                return Err(CliError::NotAuthenticated);
            };

            if let Some(comments) = finish(app.comments().by_user(identity.id).await)? {
                println!("Comentarios ({}):", comments.len());
                for comment in &comments {
                    println!("[{:>4}] producto #{}: {}", comment.id, comment.product_id, comment.text);
                }
            }
            if let Some(evaluations) = finish(app.evaluations().by_user(identity.id).await)? {
                println!("Evaluaciones ({}):", evaluations.len());
                for evaluation in &evaluations {
                    println!(
                        "[{:>4}] producto #{}: {} estrellas",
                        evaluation.id, evaluation.product_id, evaluation.assessment
                    );
                }
            }
        }
        ReviewsAction::DeleteComment { id } => {
            ensure_authenticated(app)?;
            finish(app.comments().delete(CommentId::new(id)).await)?;
        }
        ReviewsAction::DeleteEvaluation { id } => {
            ensure_authenticated(app)?;
            finish(app.evaluations().delete(EvaluationId::new(id)).await)?;
        }
    }
    Ok(())
}
