//! Upstream operation table.
//!
//! Each variant knows its path segment(s) under the PDDIKTI base URL and a
//! stable operation name used for logs and metrics.

use std::str::FromStr;

/// Keyword search scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Universities,
    Students,
    Lecturers,
    Programs,
}

impl SearchScope {
    pub fn segment(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Universities => "pt",
            SearchScope::Students => "mhs",
            SearchScope::Lecturers => "dosen",
            SearchScope::Programs => "prodi",
        }
    }

    /// Plural noun used in client-facing messages.
    pub fn plural(self) -> &'static str {
        match self {
            SearchScope::All => "results",
            SearchScope::Universities => "universities",
            SearchScope::Students => "students",
            SearchScope::Lecturers => "lecturers",
            SearchScope::Programs => "programs",
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            SearchScope::All => "search_all",
            SearchScope::Universities => "search_pt",
            SearchScope::Students => "search_mhs",
            SearchScope::Lecturers => "search_dosen",
            SearchScope::Programs => "search_prodi",
        }
    }
}

/// Per-university figures gathered for the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniversityFigure {
    StudentCount,
    LecturerCount,
    ProgramCount,
    Ratio,
    GraduationRate,
    CostRange,
}

impl UniversityFigure {
    pub fn segment(self) -> &'static str {
        match self {
            UniversityFigure::StudentCount => "jumlah-mahasiswa",
            UniversityFigure::LecturerCount => "jumlah-dosen",
            UniversityFigure::ProgramCount => "jumlah-prodi",
            UniversityFigure::Ratio => "rasio",
            UniversityFigure::GraduationRate => "graduation-rate",
            UniversityFigure::CostRange => "cost-range",
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            UniversityFigure::StudentCount => "pt_student_count",
            UniversityFigure::LecturerCount => "pt_lecturer_count",
            UniversityFigure::ProgramCount => "pt_program_count",
            UniversityFigure::Ratio => "pt_ratio",
            UniversityFigure::GraduationRate => "pt_graduation_rate",
            UniversityFigure::CostRange => "pt_cost_range",
        }
    }
}

/// Sections of a lecturer's portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioKind {
    Research,
    CommunityService,
    Publications,
    Patents,
}

impl PortfolioKind {
    pub fn segment(self) -> &'static str {
        match self {
            PortfolioKind::Research => "penelitian",
            PortfolioKind::CommunityService => "pengabdian",
            PortfolioKind::Publications => "karya",
            PortfolioKind::Patents => "paten",
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            PortfolioKind::Research => "dosen_research",
            PortfolioKind::CommunityService => "dosen_community_service",
            PortfolioKind::Publications => "dosen_publications",
            PortfolioKind::Patents => "dosen_patents",
        }
    }
}

/// Nationwide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NationalCount {
    ActiveLecturers,
    ActiveStudents,
    Programs,
    Universities,
}

impl NationalCount {
    pub fn segments(self) -> [&'static str; 2] {
        match self {
            NationalCount::ActiveLecturers => ["dosen", "count-active"],
            NationalCount::ActiveStudents => ["mahasiswa", "count-active"],
            NationalCount::Programs => ["prodi", "count"],
            NationalCount::Universities => ["pt", "count"],
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            NationalCount::ActiveLecturers => "count_active_lecturers",
            NationalCount::ActiveStudents => "count_active_students",
            NationalCount::Programs => "count_programs",
            NationalCount::Universities => "count_universities",
        }
    }
}

/// One chart series: the key it is returned under and its upstream segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizationSeries {
    pub key: &'static str,
    pub segment: &'static str,
}

const fn series(key: &'static str, segment: &'static str) -> VisualizationSeries {
    VisualizationSeries { key, segment }
}

const UNIVERSITY_SERIES: [VisualizationSeries; 4] = [
    series("by_form", "pt-bentuk"),
    series("by_accreditation", "pt-akreditasi"),
    series("by_province", "pt-provinsi"),
    series("by_supervisor_group", "pt-kelompok-pembina"),
];

const STUDENT_SERIES: [VisualizationSeries; 4] = [
    series("by_field", "mahasiswa-bidang"),
    series("by_gender", "mahasiswa-jenis-kelamin"),
    series("by_level", "mahasiswa-jenjang"),
    series("by_status", "mahasiswa-status"),
];

const LECTURER_SERIES: [VisualizationSeries; 4] = [
    series("by_activity", "dosen-keaktifan"),
    series("by_field", "dosen-bidang"),
    series("by_gender", "dosen-jenis-kelamin"),
    series("by_level", "dosen-jenjang"),
];

const PROGRAM_SERIES: [VisualizationSeries; 4] = [
    series("by_level", "prodi-jenjang"),
    series("by_accreditation", "prodi-akreditasi"),
    series("by_field", "prodi-bidang-ilmu"),
    series("by_supervisor_group", "prodi-kelompok-pembina"),
];

/// Visualization data categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationCategory {
    #[default]
    Universities,
    Students,
    Lecturers,
    Programs,
}

impl VisualizationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualizationCategory::Universities => "universities",
            VisualizationCategory::Students => "students",
            VisualizationCategory::Lecturers => "lecturers",
            VisualizationCategory::Programs => "programs",
        }
    }

    pub fn series(self) -> &'static [VisualizationSeries; 4] {
        match self {
            VisualizationCategory::Universities => &UNIVERSITY_SERIES,
            VisualizationCategory::Students => &STUDENT_SERIES,
            VisualizationCategory::Lecturers => &LECTURER_SERIES,
            VisualizationCategory::Programs => &PROGRAM_SERIES,
        }
    }
}

/// Unrecognized visualization category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category. Valid options: universities, students, lecturers, programs")]
pub struct InvalidCategory;

impl FromStr for VisualizationCategory {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "universities" => Ok(VisualizationCategory::Universities),
            "students" => Ok(VisualizationCategory::Students),
            "lecturers" => Ok(VisualizationCategory::Lecturers),
            "programs" => Ok(VisualizationCategory::Programs),
            _ => Err(InvalidCategory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_is_exact() {
        assert_eq!("students".parse(), Ok(VisualizationCategory::Students));
        assert_eq!("Students".parse::<VisualizationCategory>(), Err(InvalidCategory));
        assert_eq!(VisualizationCategory::default().as_str(), "universities");
    }

    #[test]
    fn series_keys_are_unique_per_category() {
        for category in [
            VisualizationCategory::Universities,
            VisualizationCategory::Students,
            VisualizationCategory::Lecturers,
            VisualizationCategory::Programs,
        ] {
            let mut keys: Vec<_> = category.series().iter().map(|s| s.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), 4, "{}", category.as_str());
        }
    }
}
