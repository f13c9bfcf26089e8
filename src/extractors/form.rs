//! Form body extractors whose rejections are JSON errors instead of axum's plain-text body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

/// `application/x-www-form-urlencoded` body decoded into `T`.
#[derive(Clone, Debug)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(FormBody(value))
    }
}

/// Like [`FormBody`], but a request without a form content type (a bare PATCH, say)
/// yields `T::default()`. A form body that fails to decode is still rejected.
#[derive(Clone, Debug)]
pub struct OptionalFormBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for OptionalFormBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(OptionalFormBody(value)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(OptionalFormBody(T::default())),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
