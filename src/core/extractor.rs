use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::convert::Infallible;

use crate::core::error::AppError;
use crate::shared::language::{self, Language};

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Language the response should be localized to.
///
/// Never rejects: anything unparseable resolves to the default language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

impl<S> FromRequestParts<S> for RequestLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();

        let accept_language = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        Ok(Self(language::resolve(
            query.get("lang").map(String::as_str),
            accept_language,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    async fn extract(uri: &str, accept_language: Option<&str>) -> Language {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(value) = accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let RequestLanguage(lang) = RequestLanguage::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        lang
    }

    #[tokio::test]
    async fn test_query_parameter() {
        assert_eq!(extract("/api/threads?lang=ru", None).await, Language::Ru);
        assert_eq!(
            extract("/api/threads?category=help&lang=en", Some("ru")).await,
            Language::En
        );
    }

    #[tokio::test]
    async fn test_header_fallback() {
        assert_eq!(
            extract("/api/threads", Some("ru-RU,ru;q=0.9")).await,
            Language::Ru
        );
        assert_eq!(extract("/api/threads", Some("de-DE")).await, Language::En);
        assert_eq!(extract("/api/threads", None).await, Language::En);
    }

    #[tokio::test]
    async fn test_invalid_query_value() {
        assert_eq!(
            extract("/api/threads?lang=xx", Some("ru")).await,
            Language::En
        );
    }
}
