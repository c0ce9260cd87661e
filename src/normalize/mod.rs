//! Response normalization.
//!
//! # Data Flow
//! ```text
//! upstream payload (Option<Value>, heterogeneous shapes)
//!     → value.rs (presence checks, field picking)
//!     → listing.rs ({"data": [...]} for anything list-like)
//!     → bodies.rs (fixed-shape composite bodies)
//!     → http::response envelope
//! ```
//!
//! Client input goes the other way through params.rs before it reaches the
//! upstream client.

pub mod bodies;
pub mod listing;
pub mod params;
pub mod value;

pub use bodies::{
    LecturerPortfolio, LogoPayload, NationalCounts, ProgramDetail, UniversityStats,
    UniversityStatsSources,
};
pub use listing::{records, Listing};
pub use params::{Keyword, ParamError, ResourceId, Semester};
pub use value::{is_present, pick};

/// Message for a search that returned `count` records.
pub fn search_message(count: usize, plural: &str, keyword: &Keyword) -> String {
    if count == 0 {
        format!("No {} found matching '{}'", plural, keyword)
    } else {
        format!("Found {} {} matching '{}'", count, plural, keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_messages() {
        let kw = Keyword::parse(Some("indonesia")).unwrap();
        assert_eq!(search_message(3, "universities", &kw), "Found 3 universities matching 'indonesia'");
        assert_eq!(search_message(0, "students", &kw), "No students found matching 'indonesia'");
    }
}
