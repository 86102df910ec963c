use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrandPrizeError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for GrandPrizeError {
    fn from(value: reqwest::Error) -> Self {
        Self::Upstream(value.to_string())
    }
}

impl From<url::ParseError> for GrandPrizeError {
    fn from(value: url::ParseError) -> Self {
        Self::Configuration(format!("invalid endpoint: {value}"))
    }
}

impl error::ResponseError for GrandPrizeError {
    fn status_code(&self) -> StatusCode {
        match self {
            GrandPrizeError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GrandPrizeError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({ "error": self.to_string() }))
    }
}
