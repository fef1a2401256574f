//! Request-log middleware — appends one line per request to a log file.
//!
//! The file is meant to live on a bind mount so the log outlives the
//! container. Lines look like `2024-01-01T00:00:00+00:00 - GET /`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use chrono::Utc;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use parking_lot::Mutex;

/// Factory holding the shared append handle.
#[derive(Clone)]
pub struct RequestLog {
    sink: Arc<Mutex<File>>,
}

impl RequestLog {
    /// Open the log file in append mode, creating parent directories.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Arc::new(Mutex::new(file)),
        })
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLogMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware {
            service,
            sink: Arc::clone(&self.sink),
        }))
    }
}

pub struct RequestLogMiddleware<S> {
    service: S,
    sink: Arc<Mutex<File>>,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = format!("{} - {} {}\n", Utc::now().to_rfc3339(), req.method(), req.uri());
        {
            let mut sink = self.sink.lock();
            if let Err(e) = sink.write_all(line.as_bytes()) {
                log::warn!("[REQLOG] Failed to write request log line: {}", e);
            }
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}
