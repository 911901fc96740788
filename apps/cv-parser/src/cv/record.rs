//! Candidate Record view — a read-only, lenient look at the recovered map.
//!
//! Nothing here alters what gets written: the output file is always the
//! recovered map verbatim. The view exists for logging and for callers that
//! want typed access to the identity fields.

use serde::Serialize;
use serde_json::{Map, Value};

/// The seven extraction sections and the field names the prompt asks for.
const SECTION_FIELDS: &[(&str, &[&str])] = &[
    ("basic_information", &["full_name", "email", "phone"]),
    (
        "experience_summary",
        &["experience_level", "total_experience_duration"],
    ),
    (
        "technical_profile",
        &["primary_domains", "core_skills", "secondary_skills", "skill_levels"],
    ),
    ("technology_classification", &["technology_classification"]),
    (
        "project_experience_analysis",
        &[
            "strongest_technologies",
            "main_project_types",
            "responsibility_level",
        ],
    ),
    ("education", &["highest_degree", "current_field_of_study"]),
    (
        "additional_information",
        &["projects_list", "positions_sought", "internships"],
    ),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionCoverage {
    pub section: String,
    pub present: Vec<String>,
    pub absent: Vec<String>,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub sections: Vec<SectionCoverage>,
    pub missing_sections: Vec<String>,
}

/// Typed identity fields plus a flattened index of everything the model returned.
#[derive(Debug, Clone, Default)]
pub struct CandidateRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_level: Option<String>,
    pub highest_degree: Option<String>,
    pub core_skills: Vec<String>,
    fields: Map<String, Value>,
}

impl CandidateRecord {
    /// Builds the view. Fields nested one level under a section key
    /// (e.g. `"basic_information": {"full_name": ...}`) are found too;
    /// a top-level key always wins over a nested one.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let fields = flatten_one_level(map);
        Self {
            full_name: scalar_text(fields.get("full_name")),
            email: scalar_text(fields.get("email")),
            phone: scalar_text(fields.get("phone")),
            experience_level: scalar_text(fields.get("experience_level")),
            highest_degree: scalar_text(fields.get("highest_degree")),
            core_skills: string_list(fields.get("core_skills")),
            fields,
        }
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(is_meaningful)
    }

    pub fn section_coverage(&self) -> CoverageReport {
        let mut sections = Vec::new();
        let mut missing_sections = Vec::new();

        for (section, keys) in SECTION_FIELDS {
            let (present, absent): (Vec<&str>, Vec<&str>) =
                keys.iter().copied().partition(|key| self.has_field(key));

            let status = if absent.is_empty() {
                SectionStatus::Complete
            } else if present.is_empty() {
                missing_sections.push(section.to_string());
                SectionStatus::Missing
            } else {
                SectionStatus::Partial
            };

            sections.push(SectionCoverage {
                section: section.to_string(),
                present: present.into_iter().map(String::from).collect(),
                absent: absent.into_iter().map(String::from).collect(),
                status,
            });
        }

        CoverageReport {
            sections,
            missing_sections,
        }
    }
}

fn flatten_one_level(map: &Map<String, Value>) -> Map<String, Value> {
    let mut fields = map.clone();
    for value in map.values() {
        if let Value::Object(nested) = value {
            for (key, inner) in nested {
                if !fields.contains_key(key) {
                    fields.insert(key.clone(), inner.clone());
                }
            }
        }
    }
    fields
}

fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| scalar_text(Some(item)))
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}
