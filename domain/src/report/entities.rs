//! Report entities

use crate::context::prompt_context::{ContextKey, PromptContext};
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the five fixed report sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[serde(rename = "job_desc")]
    JobDescription,
    MissionsTasks,
    TechRecommendations,
    AiEnhancements,
    TransitionPlan,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 5] = [
        Section::JobDescription,
        Section::MissionsTasks,
        Section::TechRecommendations,
        Section::AiEnhancements,
        Section::TransitionPlan,
    ];

    pub fn key(&self) -> &'static str {
        self.context_key().as_str()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::JobDescription => "Job Description",
            Section::MissionsTasks => "Missions, Deliverables & Tasks",
            Section::TechRecommendations => "Technology Recommendations",
            Section::AiEnhancements => "AI Augmentation Opportunities",
            Section::TransitionPlan => "Transition to AI-Augmented Role",
        }
    }

    /// Keys of the sections for which `present` is false, in display order
    fn missing_from(present: impl Fn(Section) -> bool) -> Vec<&'static str> {
        Section::ALL
            .iter()
            .filter(|section| !present(**section))
            .map(Section::key)
            .collect()
    }

    pub fn context_key(&self) -> ContextKey {
        match self {
            Section::JobDescription => ContextKey::JobDescription,
            Section::MissionsTasks => ContextKey::MissionsTasks,
            Section::TechRecommendations => ContextKey::TechRecommendations,
            Section::AiEnhancements => ContextKey::AiEnhancements,
            Section::TransitionPlan => ContextKey::TransitionPlan,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Final output of a job analysis run (Entity)
///
/// Immutable once built; always holds all five sections. Deserialized
/// reports go through the same completeness check as [`Report::from_context`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReport")]
pub struct Report {
    job_title: String,
    sections: BTreeMap<Section, String>,
    generated_at: DateTime<Utc>,
}

/// Wire shape of a report before validation
#[derive(Deserialize)]
struct RawReport {
    job_title: String,
    sections: BTreeMap<Section, String>,
    generated_at: DateTime<Utc>,
}

impl TryFrom<RawReport> for Report {
    type Error = DomainError;

    fn try_from(raw: RawReport) -> Result<Self, Self::Error> {
        let missing = Section::missing_from(|section| raw.sections.contains_key(&section));
        if !missing.is_empty() {
            return Err(DomainError::IncompleteReport { missing });
        }

        Ok(Self {
            job_title: raw.job_title,
            sections: raw.sections,
            generated_at: raw.generated_at,
        })
    }
}

impl Report {
    /// Build a report from a finished prompt context.
    ///
    /// Fails with [`DomainError::IncompleteReport`] if any section is absent.
    pub fn from_context(context: &PromptContext) -> Result<Self, DomainError> {
        let missing = Section::missing_from(|section| context.contains(section.context_key()));

        if !missing.is_empty() {
            return Err(DomainError::IncompleteReport { missing });
        }

        let sections = Section::ALL
            .iter()
            .filter_map(|section| {
                context
                    .get(section.context_key())
                    .map(|text| (*section, text.to_string()))
            })
            .collect();

        Ok(Self {
            job_title: context.job_title().to_string(),
            sections,
            generated_at: Utc::now(),
        })
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn section(&self, section: Section) -> &str {
        self.sections
            .get(&section)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Sections in display order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL
            .iter()
            .map(move |section| (*section, self.section(*section)))
    }

    /// Section key → text, e.g. `"job_desc"` → description
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.sections
            .iter()
            .map(|(section, text)| (section.key(), text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::job_title::JobTitle;

    fn full_context() -> PromptContext {
        let mut ctx = PromptContext::new(&JobTitle::try_new("Accountant").unwrap());
        for section in Section::ALL {
            ctx.insert(section.context_key(), format!("text for {}", section.key()))
                .unwrap();
        }
        ctx
    }

    #[test]
    fn test_report_from_full_context() {
        let report = Report::from_context(&full_context()).unwrap();
        assert_eq!(report.job_title(), "Accountant");
        assert_eq!(report.section(Section::MissionsTasks), "text for missions_tasks");

        let keys: Vec<_> = report.to_map().into_keys().collect();
        assert_eq!(keys.len(), 5);
        for expected in [
            "job_desc",
            "missions_tasks",
            "tech_recommendations",
            "ai_enhancements",
            "transition_plan",
        ] {
            assert!(keys.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_partial_context_is_rejected() {
        let mut ctx = PromptContext::new(&JobTitle::try_new("Accountant").unwrap());
        ctx.insert(ContextKey::JobDescription, "desc").unwrap();

        let err = Report::from_context(&ctx).unwrap_err();
        assert_eq!(
            err,
            DomainError::IncompleteReport {
                missing: vec![
                    "missions_tasks",
                    "tech_recommendations",
                    "ai_enhancements",
                    "transition_plan"
                ]
            }
        );
    }

    #[test]
    fn test_sections_iterate_in_display_order() {
        let report = Report::from_context(&full_context()).unwrap();
        let order: Vec<_> = report.sections().map(|(s, _)| s).collect();
        assert_eq!(order, Section::ALL.to_vec());
    }

    #[test]
    fn test_report_serializes_section_keys() {
        let report = Report::from_context(&full_context()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"]["job_desc"], "text for job_desc");
        assert_eq!(json["job_title"], "Accountant");
    }

    #[test]
    fn test_deserialize_full_report() {
        let report = Report::from_context(&full_context()).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_deserialize_rejects_partial_report() {
        let json = r#"{
            "job_title": "Accountant",
            "sections": { "job_desc": "D" },
            "generated_at": "2024-01-01T00:00:00Z"
        }"#;

        let err = serde_json::from_str::<Report>(json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missions_tasks"), "{message}");
        assert!(message.contains("transition_plan"), "{message}");
    }
}
