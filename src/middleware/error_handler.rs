use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    Error, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Middleware that logs failed requests
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let path = req.path().to_string();
            let result = service.call(req).await;

            match &result {
                Err(err) => log_error(
                    &path,
                    err.as_response_error().status_code(),
                    &err.to_string(),
                ),
                Ok(res) if res.status().is_server_error() => {
                    log_error(&path, res.status(), "server error response")
                }
                Ok(_) => {}
            }

            result
        })
    }
}

/// Client errors are logged at warn, server errors at error
pub fn log_error(path: &str, status: StatusCode, message: &str) {
    if status.is_server_error() {
        tracing::error!(path = %path, status = status.as_u16(), "Request error: {}", message);
    } else {
        tracing::warn!(path = %path, status = status.as_u16(), "Request error: {}", message);
    }
}

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message,
        }
    }))
}

/// Turns malformed request bodies into the standard 400 error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let status = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    let response = error_response(status, format!("Invalid request body: {}", err));
    InternalError::from_response(err, response).into()
}
