//! Structured résumé record shared by every structurer backend.
//!
//! Field names serialize in camelCase so the JSON matches the form payload the
//! résumé builder expects.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` as the type's default, so model output like
/// `"endDate": null` still deserializes.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linked_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl WorkEntry {
    /// Appends a line to the description, separated by a single space.
    pub fn push_description(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub graduation_date: String,
}

/// Comma-joined skill lists, split into technical and soft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    #[serde(deserialize_with = "null_as_default")]
    pub technical: String,
    #[serde(deserialize_with = "null_as_default")]
    pub soft: String,
}

impl Skills {
    pub fn push_technical(&mut self, line: &str) {
        push_joined(&mut self.technical, line);
    }

    pub fn push_soft(&mut self, line: &str) {
        push_joined(&mut self.soft, line);
    }
}

fn push_joined(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push_str(", ");
    }
    target.push_str(line);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub work_experience: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
}

impl Default for ResumeRecord {
    /// The blank form: empty strings and one placeholder entry per list.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            professional_summary: String::new(),
            work_experience: vec![WorkEntry::default()],
            education: vec![EducationEntry::default()],
            skills: Skills::default(),
        }
    }
}

impl ResumeRecord {
    /// Builds a record, substituting a single blank entry for any empty list.
    pub fn assemble(
        personal_info: PersonalInfo,
        professional_summary: String,
        work_experience: Vec<WorkEntry>,
        education: Vec<EducationEntry>,
        skills: Skills,
    ) -> Self {
        Self {
            personal_info,
            professional_summary,
            work_experience: or_placeholder(work_experience),
            education: or_placeholder(education),
            skills,
        }
    }
}

fn or_placeholder<T: Default>(entries: Vec<T>) -> Vec<T> {
    if entries.is_empty() {
        vec![T::default()]
    } else {
        entries
    }
}
