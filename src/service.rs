use reqwest::Client;

use self::{error::ServiceError, models::compile::CompileRequest};

pub mod error;
pub mod models;

/*
    # Flow of the compile exchange

    main() ───► stdin ───► CompileService::compile(...) ──┐
                                                          │
    stdout ◄─── response body ◄─── POST /compile ◄────────┘
*/

/// Compile endpoint of the hosted Closure Compiler
const COMPILE_ENDPOINT: &str = "http://closure-compiler.appspot.com/compile";

pub struct CompileService {
    // Remote compile endpoint, fixed outside of tests
    endpoint: String,

    // Http client, lives for the single exchange
    client: Client,
}

impl CompileService {
    pub fn new() -> CompileService {
        Self::with_endpoint(COMPILE_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> CompileService {
        CompileService {
            endpoint,
            client: Client::new(),
        }
    }

    /// Submits the source text to the compile endpoint and returns the
    /// response body without inspecting the status code
    ///
    /// The service reports its own errors as plain text in the body, so
    /// the body is everything the caller gets on both outcomes
    pub async fn compile(&self, js_code: String) -> Result<String, ServiceError> {
        let request = CompileRequest::new(js_code);

        trace!("Submitting compile request to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(&request)
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        info!("Compile service answered with status {}", response.status());
        response.text().await.map_err(ServiceError::Transport)
    }
}
