//! Literal-substring redaction

use tork_common::privacy::patterns::DetectionMap;
use tork_domain::constants::{REDACTION_TOKEN_OPEN, REDACTION_TOKEN_SUFFIX};

/// `[<CATEGORY>_REDACTED]`, category name verbatim.
pub fn redaction_token(category: &str) -> String {
    format!("{}{}{}", REDACTION_TOKEN_OPEN, category, REDACTION_TOKEN_SUFFIX)
}

/// Replace every literal occurrence of every detected value.
///
/// Categories are applied in detection order, values in order of
/// appearance. Replacement is textual, not positional: a value that also
/// occurs somewhere it was not matched as PII (for example inside a longer
/// token) is replaced there too.
pub fn redact(content: &str, detected: &DetectionMap) -> String {
    let mut output = content.to_string();
    for (category, matches) in detected.iter() {
        let token = redaction_token(category);
        for value in matches {
            if output.contains(value.as_str()) {
                output = output.replace(value.as_str(), &token);
            }
        }
    }
    output
}
