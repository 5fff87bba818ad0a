/// Failure taxonomy for the suggestion pipeline. Every failure leaving
/// the process is one of these; nothing upstream-specific crosses the
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// Empty ingredient list after normalization; no upstream call is made.
    #[error("suggestion.invalid_input")]
    InvalidInput,
    /// Missing gateway credential. A deployment defect, not a caller error.
    #[error("suggestion.misconfigured")]
    Misconfigured,
    /// Upstream 429; the caller decides whether to wait.
    #[error("suggestion.rate_limited")]
    RateLimited,
    /// Upstream 402; billing/credits issue.
    #[error("suggestion.quota_exceeded")]
    QuotaExceeded,
    /// Any other non-success upstream status.
    #[error("suggestion.upstream_error: {0}")]
    UpstreamError(u16),
    /// Transport-level failure before a status was received.
    #[error("suggestion.upstream_unreachable")]
    UpstreamUnreachable,
    /// The client-side deadline elapsed.
    #[error("suggestion.timeout")]
    Timeout,
    /// The model returned text with no parseable JSON object.
    #[error("suggestion.malformed")]
    MalformedSuggestion,
}
