//! Authentication endpoints.

use async_trait::async_trait;
use serde::Deserialize;

use super::ports::{AuthApi, RegisterOutcome};
use super::RestClient;
use crate::error::ApiError;
use crate::forms::{LoginForm, RegisterForm};

#[derive(Debug, Deserialize)]
struct LoginBody {
    token: String,
}

#[derive(Debug, Deserialize)]
struct RegisterBody {
    status: Option<String>,
    mensaje: Option<String>,
}

#[async_trait]
impl AuthApi for RestClient {
    async fn register(&self, form: &RegisterForm) -> Result<RegisterOutcome, ApiError> {
        let body: RegisterBody = self.post_json("auth/register", form).await?;
        Ok(RegisterOutcome {
            success: body.status.as_deref() == Some("Success"),
            message: body.mensaje,
        })
    }

    async fn login(&self, form: &LoginForm) -> Result<String, ApiError> {
        let body: LoginBody = self.post_json("auth/login", form).await?;
        Ok(body.token)
    }
}
