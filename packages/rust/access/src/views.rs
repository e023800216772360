//! Read-only derived views over an assembled document.
//!
//! All views are pure functions over `&PortfolioDocument`; nothing here
//! mutates or re-sorts the underlying data.

use std::collections::HashSet;

use linkfolio_shared::{Certification, Education, PortfolioDocument, Position, Skill};

/// Default number of skills returned by [`top_skills`].
pub const DEFAULT_TOP_SKILLS: usize = 20;

// ---------------------------------------------------------------------------
// Top skills
// ---------------------------------------------------------------------------

/// The first `limit` skills of the already-sorted sequence.
///
/// `None` or `Some(0)` falls back to [`DEFAULT_TOP_SKILLS`]. The result is
/// always a prefix of `document.skills`; no re-sorting happens here.
pub fn top_skills(document: &PortfolioDocument, limit: Option<usize>) -> &[Skill] {
    let limit = match limit {
        Some(n) if n > 0 => n,
        _ => DEFAULT_TOP_SKILLS,
    };
    &document.skills[..document.skills.len().min(limit)]
}

// ---------------------------------------------------------------------------
// Skill categories
// ---------------------------------------------------------------------------

/// The five fixed skill groupings, in display and match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    CloudInfrastructure,
    DevOpsAutomation,
    SecurityIncidentResponse,
    ProjectManagement,
    Other,
}

impl SkillCategory {
    /// All categories in evaluation order; the first keyword match wins.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::CloudInfrastructure,
        SkillCategory::DevOpsAutomation,
        SkillCategory::SecurityIncidentResponse,
        SkillCategory::ProjectManagement,
        SkillCategory::Other,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::CloudInfrastructure => "Cloud & Infrastructure",
            SkillCategory::DevOpsAutomation => "DevOps & Automation",
            SkillCategory::SecurityIncidentResponse => "Security & Incident Response",
            SkillCategory::ProjectManagement => "Project Management",
            SkillCategory::Other => "Other",
        }
    }

    /// Keyword table matched case-insensitively against skill names.
    /// "Other" has no keywords; it is the catch-all.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::CloudInfrastructure => &[
                "AWS",
                "Azure",
                "IBM",
                "Cloud",
                "VSI",
                "EC2",
                "VPC",
                "Kubernetes",
                "Docker",
                "MultiCloud",
            ],
            SkillCategory::DevOpsAutomation => &[
                "Ansible",
                "Automation",
                "CI/CD",
                "Jenkins",
                "GitHub",
                "GitLab",
                "DevOps",
                "Terraform",
                "Kubernetes",
            ],
            SkillCategory::SecurityIncidentResponse => &[
                "Security",
                "Incident Response",
                "EDR",
                "SIEM",
                "Firewall",
                "Compliance",
                "Forensics",
                "Malware",
                "Threat",
            ],
            SkillCategory::ProjectManagement => &[
                "Agile",
                "Scrum",
                "Project Management",
                "Leadership",
                "ServiceNow",
                "Jira",
                "Zenhub",
                "ITIL",
            ],
            SkillCategory::Other => &[],
        }
    }
}

/// Classify a skill name into exactly one category.
///
/// Case-insensitive substring match against each category's keyword table,
/// evaluated in [`SkillCategory::ALL`] order; no match lands in `Other`.
pub fn classify_skill(name: &str) -> SkillCategory {
    let upper = name.to_uppercase();
    for category in SkillCategory::ALL {
        if category
            .keywords()
            .iter()
            .any(|keyword| upper.contains(&keyword.to_uppercase()))
        {
            return category;
        }
    }
    SkillCategory::Other
}

/// Group every skill into its category, preserving skill order within each
/// group. All five categories are present in the result, possibly empty,
/// in [`SkillCategory::ALL`] order.
pub fn skills_by_category(
    document: &PortfolioDocument,
) -> Vec<(SkillCategory, Vec<Skill>)> {
    let mut groups: Vec<(SkillCategory, Vec<Skill>)> = SkillCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for skill in &document.skills {
        let category = classify_skill(&skill.name);
        groups[category as usize].1.push(skill.clone());
    }

    groups
}

// ---------------------------------------------------------------------------
// Deduplicated views
// ---------------------------------------------------------------------------

/// Positions deduplicated by (title, company), first occurrence kept,
/// source order preserved.
pub fn featured_positions(document: &PortfolioDocument) -> Vec<&Position> {
    let mut seen = HashSet::new();
    document
        .positions
        .iter()
        .filter(|position| seen.insert((position.title.as_str(), position.company.as_str())))
        .collect()
}

/// Education entries deduplicated by school, first occurrence kept.
pub fn unique_education(document: &PortfolioDocument) -> Vec<&Education> {
    let mut seen = HashSet::new();
    document
        .education
        .iter()
        .filter(|entry| seen.insert(entry.school.as_str()))
        .collect()
}

/// Certifications deduplicated by name, first occurrence kept.
pub fn unique_certifications(document: &PortfolioDocument) -> Vec<&Certification> {
    let mut seen = HashSet::new();
    document
        .certifications
        .iter()
        .filter(|cert| seen.insert(cert.name.as_str()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
