use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::web::Json;
use actix_web::{Error, HttpResponse};
use serde::Serialize;

/// Envelope shared by every endpoint: `{status, message, code, id?, item?, list?}`.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub(crate) fn set_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub(crate) fn set_item<I: Into<Option<T>>>(mut self, item: I) -> Self {
        self.item = item.into();
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn ok(self, message: &str) -> Json<JsonResponse<T>> {
        Json(JsonResponse {
            status: "OK".to_string(),
            message: message.to_string(),
            code: 200,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

/// Error envelopes carry no payload.
pub(crate) type JsonError = JsonResponse<()>;

impl JsonError {
    fn error(message: String, status: StatusCode) -> Error {
        let body = JsonError {
            status: "Error".to_string(),
            message: message.clone(),
            code: status.as_u16() as u32,
            id: None,
            item: None,
            list: None,
        };
        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }

    pub(crate) fn bad_request<M: ToString>(message: M) -> Error {
        Self::error(message.to_string(), StatusCode::BAD_REQUEST)
    }

    pub(crate) fn unauthorized<M: ToString>(message: M) -> Error {
        Self::error(message.to_string(), StatusCode::UNAUTHORIZED)
    }

    pub(crate) fn not_found<M: ToString>(message: M) -> Error {
        Self::error(message.to_string(), StatusCode::NOT_FOUND)
    }

    pub(crate) fn internal_server_error<M: ToString>(message: M) -> Error {
        Self::error(message.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}
