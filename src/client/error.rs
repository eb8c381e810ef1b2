use thiserror::Error;

/// Fallback message when the service rejects a request without saying why.
pub const FALLBACK_SERVICE_ERROR: &str = "An error occurred while calculating the expression";

/// Errors that can occur while evaluating an expression remotely.
///
/// Every variant is terminal for the invocation that produced it: the UI
/// renders the Display text and waits for the user to try again.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The evaluator responded but rejected the expression or failed
    /// internally. The message is server-supplied when present.
    #[error("{message}")]
    Service { message: String },

    /// The service could not be reached at all. Names the configured
    /// endpoint so the user can diagnose connectivity.
    #[error(
        "Failed to connect to the server. Please make sure the backend is running at {base_url}"
    )]
    Transport {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other failure during the call or response handling.
    #[error("An error occurred: {detail}")]
    Unknown { detail: String },
}
