use base64::{engine::general_purpose, Engine as _};
use regex::{Captures, Regex};
use sha2::{Digest, Sha256};

use crate::config::LoggerConfig;
use crate::LoggerError;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
const SSN_PATTERN: &str = r"\b\d{3}-\d{2}-\d{4}\b";
const PHONE_PATTERN: &str = r"(?:\+1[-.\s]?)?\(?\b[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b";

/// Kind of sensitive value a pattern detects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PiiKind {
    Email,
    Ssn,
    Phone,
}

impl PiiKind {
    fn label(self) -> &'static str {
        match self {
            PiiKind::Email => "EMAIL",
            PiiKind::Ssn => "SSN",
            PiiKind::Phone => "PHONE",
        }
    }

    fn mask(self) -> &'static str {
        match self {
            PiiKind::Email => "***@***",
            PiiKind::Ssn => "***-**-****",
            PiiKind::Phone => "(***) ***-****",
        }
    }
}

/// PII redactor for values echoed into log events.
///
/// Estimate requests carry free-text fields; anything that is not a known
/// catalog value goes through here before it reaches a log line.
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    enabled: bool,
    hash_for_correlation: bool,
    // SSN runs before phone so a 3-2-4 digit group is not half-eaten as a phone number.
    patterns: Vec<(PiiKind, Regex)>,
}

impl PiiRedactor {
    pub fn new(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let compile = |kind, pattern: &str| {
            Regex::new(pattern)
                .map(|re| (kind, re))
                .map_err(|e| LoggerError::Pattern(e.to_string()))
        };

        Ok(Self {
            enabled: config.redaction_enabled,
            hash_for_correlation: config.hash_for_correlation,
            patterns: vec![
                compile(PiiKind::Email, EMAIL_PATTERN)?,
                compile(PiiKind::Ssn, SSN_PATTERN)?,
                compile(PiiKind::Phone, PHONE_PATTERN)?,
            ],
        })
    }

    pub fn redact(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }

        self.patterns
            .iter()
            .fold(text.to_string(), |acc, (kind, pattern)| {
                pattern
                    .replace_all(&acc, |caps: &Captures| self.replacement(*kind, &caps[0]))
                    .into_owned()
            })
    }

    fn replacement(&self, kind: PiiKind, value: &str) -> String {
        if self.hash_for_correlation {
            format!("{}[{}]", kind.label(), hash_value(value))
        } else {
            kind.mask().to_string()
        }
    }
}

/// Coarse age bracket for log fields; exact ages are never logged.
pub fn age_bracket(age: i64) -> &'static str {
    match age {
        i64::MIN..=-1 => "invalid",
        0..=17 => "minor",
        18..=65 => "adult",
        66..=120 => "senior",
        _ => "invalid",
    }
}

fn hash_value(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    // First 8 bytes only; enough to correlate repeats within a log stream.
    let prefix: Vec<u8> = digest.iter().take(8).copied().collect();
    general_purpose::STANDARD_NO_PAD.encode(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masking_redactor() -> PiiRedactor {
        PiiRedactor::new(&LoggerConfig {
            hash_for_correlation: false,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_email_redaction() {
        let redacted = masking_redactor().redact("department jane.doe@example.com");
        assert_eq!(redacted, "department ***@***");
    }

    #[test]
    fn test_ssn_redaction_wins_over_phone() {
        let redacted = masking_redactor().redact("procedure 123-45-6789");
        assert_eq!(redacted, "procedure ***-**-****");
    }

    #[test]
    fn test_phone_redaction() {
        let redacted = masking_redactor().redact("call (555) 123-4567");
        assert!(redacted.contains("(***) ***-****"));
    }

    #[test]
    fn test_hashing_is_stable() {
        let redactor = PiiRedactor::new(&LoggerConfig::default()).unwrap();
        let first = redactor.redact("a@b.io");
        let second = redactor.redact("a@b.io");
        assert!(first.starts_with("EMAIL["));
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_values_untouched() {
        assert_eq!(masking_redactor().redact("major-surgery"), "major-surgery");
    }

    #[test]
    fn test_disabled_passthrough() {
        let redactor = PiiRedactor::new(&LoggerConfig {
            redaction_enabled: false,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(redactor.redact("a@b.io"), "a@b.io");
    }

    #[test]
    fn test_age_brackets() {
        assert_eq!(age_bracket(17), "minor");
        assert_eq!(age_bracket(18), "adult");
        assert_eq!(age_bracket(65), "adult");
        assert_eq!(age_bracket(66), "senior");
        assert_eq!(age_bracket(-3), "invalid");
        assert_eq!(age_bracket(121), "invalid");
    }
}
