//! Scripted HTTP double for adapter tests.

use async_trait::async_trait;
use cloudboard_fetch::{ApiRequest, ApiResponse, FetchContext, FetchError, HttpApi, Method};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a scripted route answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A response with status and body.
    Respond(u16, String),
    /// A timeout.
    Timeout,
    /// A transport failure.
    Transport(String),
}

#[derive(Debug, Clone)]
struct Route {
    method: Method,
    url: String,
    body: Option<String>,
    reply: Reply,
}

impl Route {
    fn matches(&self, request: &ApiRequest, body: &str) -> bool {
        self.method == request.method
            && request.url.contains(&self.url)
            && self.body.as_ref().is_none_or(|fragment| body.contains(fragment.as_str()))
    }
}

/// An [`HttpApi`] answering from a script and recording every request.
///
/// Routes are tried in the order they were added; the first match wins.
/// Unmatched requests get a 404.
#[derive(Debug, Default)]
pub struct ScriptedHttp {
    routes: Vec<Route>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, method: Method, url: &str, body: Option<&str>, reply: Reply) -> Self {
        self.routes.push(Route {
            method,
            url: url.to_string(),
            body: body.map(str::to_string),
            reply,
        });
        self
    }

    /// GET `url` answers 200 with `json`.
    pub fn get(self, url: &str, json: Value) -> Self {
        self.reply(Method::Get, url, None, Reply::Respond(200, json.to_string()))
    }

    /// GET `url` answers `status` with a raw body.
    pub fn get_status(self, url: &str, status: u16, body: &str) -> Self {
        self.reply(Method::Get, url, None, Reply::Respond(status, body.to_string()))
    }

    /// POST to `url` whose body contains `fragment` answers 200 with `json`.
    pub fn post(self, url: &str, fragment: &str, json: Value) -> Self {
        self.reply(
            Method::Post,
            url,
            Some(fragment),
            Reply::Respond(200, json.to_string()),
        )
    }

    /// Returns every request seen so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Counts requests whose URL contains `fragment`.
    pub fn count(&self, fragment: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.contains(fragment))
            .count()
    }

    /// Wraps the double in a fetch context.
    pub fn into_context(self) -> (Arc<Self>, FetchContext) {
        let http = Arc::new(self);
        let ctx = FetchContext::builder()
            .http(http.clone())
            .build()
            .unwrap();
        (http, ctx)
    }
}

#[async_trait]
impl HttpApi for ScriptedHttp {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let body = request
            .body
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_default();
        let route = self
            .routes
            .iter()
            .find(|route| route.matches(&request, &body))
            .cloned();
        self.requests.lock().unwrap().push(request.clone());

        match route.map(|r| r.reply) {
            Some(Reply::Respond(status, body)) => Ok(ApiResponse::new(status, body)),
            Some(Reply::Timeout) => Err(FetchError::Timeout(Duration::from_secs(10))),
            Some(Reply::Transport(message)) => Err(FetchError::Transport(message)),
            None => Ok(ApiResponse::new(
                404,
                format!("no scripted route for {} {}", request.method, request.url),
            )),
        }
    }
}
