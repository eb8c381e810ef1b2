//! HTTP client for the remote expression evaluator.
//!
//! The evaluator exposes a single operation: `POST {base_url}/evaluate`
//! with body `{"expression": "<text>"}`. A 2xx response carries the
//! numeric result plus a postfix-notation trace; anything else carries
//! an optional `{"error": "<message>"}` body.

mod error;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;

pub use error::{EvalError, FALLBACK_SERVICE_ERROR};

/// Body of the outbound evaluation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub expression: String,
}

/// Successful evaluator response.
///
/// The backend echoes extra fields (such as the original expression);
/// those are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub result: ResultValue,
    pub postfix: Vec<String>,
    pub infix_from_postfix: String,
}

/// The evaluator returns a number for fully numeric expressions and a
/// string for symbolic ones (e.g. `a + b * c`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" so `3 + 4 * 2`
            // reads `Result: 11`, matching what the service means.
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Error body the evaluator sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: Option<String>,
}

/// Client for the evaluation service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EvaluatorClient {
    client: reqwest::Client,
    base_url: String,
    evaluate_url: String,
}

impl EvaluatorClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(
                config.defaults.connect_timeout_seconds.into(),
            ))
            .timeout(Duration::from_secs(config.defaults.timeout_seconds.into()))
            .build()?;

        let base_url = config.service.base_url.trim_end_matches('/').to_string();
        let evaluate_url = format!("{}/evaluate", base_url);

        Ok(Self {
            client,
            base_url,
            evaluate_url,
        })
    }

    /// The configured service location, as shown in connectivity errors.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one expression to the evaluator.
    ///
    /// The caller is responsible for trimming and rejecting empty input;
    /// this method assumes `expression` is worth a network call.
    pub async fn evaluate(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let request = EvaluateRequest {
            expression: expression.to_string(),
        };

        debug!(expression, url = %self.evaluate_url, "sending evaluation request");

        let response = self
            .client
            .post(&self.evaluate_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.classify_send_error(err))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Evaluation>()
                .await
                .map_err(|err| EvalError::Unknown {
                    detail: err.to_string(),
                });
        }

        // Non-2xx: surface the server's message when it sent one.
        let message = response
            .json::<ServiceErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| FALLBACK_SERVICE_ERROR.to_string());

        warn!(status = status.as_u16(), %message, "evaluator rejected expression");
        Err(EvalError::Service { message })
    }

    fn classify_send_error(&self, err: reqwest::Error) -> EvalError {
        if err.is_connect() {
            warn!(base_url = %self.base_url, "failed to reach evaluator");
            EvalError::Transport {
                base_url: self.base_url.clone(),
                source: err,
            }
        } else {
            EvalError::Unknown {
                detail: err.to_string(),
            }
        }
    }
}
