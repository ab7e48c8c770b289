/// Body of every 404 response, including the router fallback
pub const NOT_FOUND_BODY: &str = "Page Not Found";

/// Body of every 500 response; collaborator failures are never echoed to clients
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Content type used for transcripts when the formatter does not pick one
pub const DEFAULT_TRANSCRIPT_CONTENT_TYPE: &str = "text/plain; charset=UTF-8";

/// Extension assumed for attachment filenames without a dot
pub const DEFAULT_ATTACHMENT_EXTENSION: &str = "bin";

/// Machine-readable code for conflicting or invalid query input
pub const ERROR_CODE_MALFORMED_INPUT: &str = "MALFORMED_INPUT";
