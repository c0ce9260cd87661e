//! Fixed-shape response bodies assembled from upstream payloads.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::normalize::listing::records;
use crate::normalize::value::{is_present, pick};

/// University statistics, one upstream call per field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityStats {
    pub students: Value,
    pub lecturers: Value,
    pub programs: Value,
    pub ratio: Value,
    pub graduation_rate: Value,
    pub cost_range: Value,
}

/// Raw upstream payloads feeding [`UniversityStats`].
#[derive(Debug, Default)]
pub struct UniversityStatsSources {
    pub students: Option<Value>,
    pub lecturers: Option<Value>,
    pub programs: Option<Value>,
    pub ratio: Option<Value>,
    pub graduation_rate: Option<Value>,
    pub cost_range: Option<Value>,
}

impl From<UniversityStatsSources> for UniversityStats {
    fn from(src: UniversityStatsSources) -> Self {
        Self {
            students: pick(src.students.as_ref(), "jumlah_mahasiswa"),
            lecturers: pick(src.lecturers.as_ref(), "jumlah_dosen"),
            programs: pick(src.programs.as_ref(), "jumlah_prodi"),
            ratio: pick(src.ratio.as_ref(), "rasio"),
            graduation_rate: pick(src.graduation_rate.as_ref(), "graduation_rate"),
            cost_range: pick(src.cost_range.as_ref(), "range_biaya_kuliah"),
        }
    }
}

/// Nationwide headline counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationalCounts {
    pub active_lecturers: Value,
    pub active_students: Value,
    pub programs: Value,
    pub universities: Value,
}

impl NationalCounts {
    pub fn from_upstream(
        active_lecturers: Option<Value>,
        active_students: Option<Value>,
        programs: Option<Value>,
        universities: Option<Value>,
    ) -> Self {
        Self {
            active_lecturers: pick(active_lecturers.as_ref(), "jumlah_dosen"),
            active_students: pick(active_students.as_ref(), "jumlah_mahasiswa"),
            programs: pick(programs.as_ref(), "jumlah"),
            universities: pick(universities.as_ref(), "jumlah"),
        }
    }
}

/// A lecturer's research, community service, publications and patents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LecturerPortfolio {
    pub research: Vec<Value>,
    pub community_service: Vec<Value>,
    pub publications: Vec<Value>,
    pub patents: Vec<Value>,
}

impl LecturerPortfolio {
    pub fn from_upstream(
        research: Option<Value>,
        community_service: Option<Value>,
        publications: Option<Value>,
        patents: Option<Value>,
    ) -> Self {
        Self {
            research: records(research),
            community_service: records(community_service),
            publications: records(publications),
            patents: records(patents),
        }
    }
}

/// Program detail merged with its description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramDetail {
    pub detail: Value,
    pub description: Value,
}

impl ProgramDetail {
    /// Returns `None` when neither half carries data.
    pub fn from_upstream(detail: Option<Value>, description: Option<Value>) -> Option<Self> {
        let detail = detail.filter(is_present);
        let description = description.filter(is_present);
        if detail.is_none() && description.is_none() {
            return None;
        }
        let empty = || Value::Object(Map::new());
        Some(Self {
            detail: detail.unwrap_or_else(empty),
            description: description.unwrap_or_else(empty),
        })
    }
}

/// University logo as delivered by the upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoPayload {
    pub logo_base64: Value,
    pub format: &'static str,
}

impl LogoPayload {
    pub fn from_upstream(logo: Option<Value>) -> Option<Self> {
        logo.filter(is_present).map(|logo_base64| Self {
            logo_base64,
            format: "base64",
        })
    }
}
