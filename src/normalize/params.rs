//! Client-supplied identifiers and query parameters.
//!
//! Ids are opaque to this service. They are only trimmed and checked for
//! emptiness and control characters, then placed into the upstream URL as a
//! single percent-encoded path segment, so the same raw id always maps to
//! the same upstream resource.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rejected client input. The display text is returned to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Query parameter 'q' is required")]
    MissingKeyword,

    #[error("Resource id must not be empty")]
    EmptyId,

    #[error("Resource id contains control characters")]
    InvalidId,

    #[error("Query parameter 'semester' is required (format: YYYYS, e.g., 20241)")]
    MissingSemester,

    #[error("Invalid semester '{0}' (format: YYYYS, e.g., 20241)")]
    InvalidSemester(String),
}

/// Opaque upstream resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn parse(raw: &str) -> Result<Self, ParamError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParamError::EmptyId);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(ParamError::InvalidId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Search keyword taken from the `q` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    pub fn parse(raw: Option<&str>) -> Result<Self, ParamError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(ParamError::MissingKeyword);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Academic semester in `YYYYS` form: a four digit year followed by the
/// term (1 odd, 2 even, 3 short).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Semester {
    year: u16,
    term: u8,
}

impl Semester {
    pub fn parse(raw: Option<&str>) -> Result<Self, ParamError> {
        match raw.map(str::trim) {
            None | Some("") => Err(ParamError::MissingSemester),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for Semester {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParamError::InvalidSemester(s.to_string());
        if s.len() != 5 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: u16 = s[..4].parse().map_err(|_| invalid())?;
        let term = s.as_bytes()[4] - b'0';
        if year < 1000 || !(1..=3).contains(&term) {
            return Err(invalid());
        }
        Ok(Self { year, term })
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{}", self.year, self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_trimmed_but_otherwise_opaque() {
        let id = ResourceId::parse("  Mz/R+abc==  ").unwrap();
        assert_eq!(id.as_str(), "Mz/R+abc==");
        assert_eq!(ResourceId::parse("   "), Err(ParamError::EmptyId));
        assert_eq!(ResourceId::parse("a\u{0}b"), Err(ParamError::InvalidId));
    }

    #[test]
    fn keyword_is_required() {
        assert_eq!(Keyword::parse(None), Err(ParamError::MissingKeyword));
        assert_eq!(Keyword::parse(Some("  \t")), Err(ParamError::MissingKeyword));
        assert_eq!(Keyword::parse(Some(" gadjah mada ")).unwrap().as_str(), "gadjah mada");
    }

    #[test]
    fn semester_format() {
        let s = Semester::parse(Some("20241")).unwrap();
        assert_eq!(s, Semester { year: 2024, term: 1 });
        assert_eq!(s.to_string(), "20241");

        assert_eq!(Semester::parse(None), Err(ParamError::MissingSemester));
        assert_eq!(Semester::parse(Some("")), Err(ParamError::MissingSemester));
        for bad in ["2024", "202414", "20244", "20240", "2024a", "09991"] {
            assert_eq!(
                Semester::parse(Some(bad)),
                Err(ParamError::InvalidSemester(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn param_errors_read_as_client_messages() {
        assert_eq!(
            ParamError::MissingSemester.to_string(),
            "Query parameter 'semester' is required (format: YYYYS, e.g., 20241)"
        );
        assert_eq!(ParamError::MissingKeyword.to_string(), "Query parameter 'q' is required");
    }
}
