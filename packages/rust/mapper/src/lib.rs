//! Record mapper: raw export rows to typed domain records.
//!
//! Each category has one pure mapping function over [`RawRow`] sequences.
//! Mapping is total: a missing or empty cell takes the documented default,
//! and nothing here performs I/O or can fail. An empty cell and a missing
//! column are treated identically.

use linkfolio_shared::{
    Certification, Education, Position, Profile, ProjectEntry, RawRow, Recommendation, Skill,
};

// ---------------------------------------------------------------------------
// Field lookup helpers
// ---------------------------------------------------------------------------

/// Look up a column, falling back to `default` when absent or empty.
fn field_or(row: &RawRow, column: &str, default: &str) -> String {
    match row.get(column) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

/// Look up a column, falling back to the empty string.
fn field(row: &RawRow, column: &str) -> String {
    field_or(row, column, "")
}

/// Look up an optional column: absent or empty becomes `None`.
fn optional_field(row: &RawRow, column: &str) -> Option<String> {
    row.get(column)
        .filter(|value| !value.is_empty())
        .cloned()
}

/// Parse a non-negative count; missing, empty, or non-numeric input is 0.
fn count_field(row: &RawRow, column: &str) -> u32 {
    row.get(column)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Per-category mappers
// ---------------------------------------------------------------------------

/// Map the profile category. Only the first row is meaningful; an absent
/// row still yields the default identity.
pub fn map_profile(rows: &[RawRow]) -> Profile {
    let empty = RawRow::new();
    let row = rows.first().unwrap_or(&empty);
    Profile {
        first_name: field_or(row, "First Name", "Mark"),
        last_name: field_or(row, "Last Name", "Howell"),
        headline: field(row, "Headline"),
        summary: field(row, "Summary"),
        industry: field(row, "Industry"),
        location: field(row, "Geo Location"),
    }
}

/// Map position rows, preserving source order. An empty `Ended On` column
/// marks an ongoing role and maps to `"Present"`.
pub fn map_positions(rows: &[RawRow]) -> Vec<Position> {
    rows.iter()
        .map(|row| Position {
            title: field(row, "Title"),
            company: field(row, "Company Name"),
            start_date: field(row, "Started On"),
            end_date: field_or(row, "Ended On", "Present"),
            duration: field(row, "Duration"),
            description: field(row, "Description"),
        })
        .collect()
}

/// Map skill rows, preserving source order. Sorting by endorsements happens
/// at assembly time, not here.
pub fn map_skills(rows: &[RawRow]) -> Vec<Skill> {
    rows.iter()
        .map(|row| Skill {
            name: field(row, "Name"),
            endorsements: count_field(row, "Endorsement Count"),
        })
        .collect()
}

/// Map education rows, preserving source order.
pub fn map_education(rows: &[RawRow]) -> Vec<Education> {
    rows.iter()
        .map(|row| Education {
            school: field(row, "School Name"),
            field_of_study: field(row, "Field of Study"),
            start_date: field(row, "Started On"),
            end_date: field(row, "Ended On"),
        })
        .collect()
}

/// Map certification rows, preserving source order.
pub fn map_certifications(rows: &[RawRow]) -> Vec<Certification> {
    rows.iter()
        .map(|row| Certification {
            name: field(row, "Name"),
            issuer: field(row, "Issuer"),
            date: field(row, "Issued On"),
            credential_id: optional_field(row, "Credential ID"),
        })
        .collect()
}

/// Map recommendation rows, preserving source order.
pub fn map_recommendations(rows: &[RawRow]) -> Vec<Recommendation> {
    rows.iter()
        .map(|row| Recommendation {
            author: field(row, "First Name"),
            author_title: field(row, "Title"),
            author_company: field(row, "Company"),
            text: field(row, "Recommendation Text"),
            date: field(row, "Created Date"),
            relationship: field(row, "Relationship"),
        })
        .collect()
}

/// Map project rows, preserving source order.
pub fn map_projects(rows: &[RawRow]) -> Vec<ProjectEntry> {
    rows.iter()
        .map(|row| ProjectEntry {
            title: field(row, "Title"),
            description: field(row, "Description"),
            start_date: field(row, "Started On"),
            end_date: field(row, "Ended On"),
            url: optional_field(row, "URL"),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn profile_from_first_row() {
        let rows = vec![
            row(&[
                ("First Name", "Mark"),
                ("Last Name", "Howell"),
                ("Headline", "Cloud Operations Professional"),
                ("Summary", "20 years in ops."),
                ("Industry", "Information Technology"),
                ("Geo Location", "Austin, Texas"),
            ]),
            row(&[("First Name", "Ignored")]),
        ];

        let profile = map_profile(&rows);
        assert_eq!(profile.first_name, "Mark");
        assert_eq!(profile.headline, "Cloud Operations Professional");
        assert_eq!(profile.location, "Austin, Texas");
    }

    #[test]
    fn profile_defaults_when_row_absent() {
        let profile = map_profile(&[]);
        assert_eq!(profile.first_name, "Mark");
        assert_eq!(profile.last_name, "Howell");
        assert_eq!(profile.headline, "");
        assert_eq!(profile.summary, "");
    }

    #[test]
    fn profile_empty_cells_take_defaults() {
        let rows = vec![row(&[("First Name", ""), ("Headline", "")])];
        let profile = map_profile(&rows);
        assert_eq!(profile.first_name, "Mark");
        assert_eq!(profile.headline, "");
    }

    #[test]
    fn position_missing_end_date_is_present() {
        let rows = vec![
            row(&[
                ("Title", "Site Reliability Engineer"),
                ("Company Name", "Example Corp"),
                ("Started On", "Jan 2020"),
            ]),
            row(&[
                ("Title", "Systems Administrator"),
                ("Company Name", "Oldco"),
                ("Started On", "Mar 2012"),
                ("Ended On", "Dec 2019"),
            ]),
        ];

        let positions = map_positions(&rows);
        assert_eq!(positions[0].end_date, "Present");
        assert_eq!(positions[1].end_date, "Dec 2019");
    }

    #[test]
    fn position_empty_end_date_is_present() {
        let rows = vec![row(&[("Title", "SRE"), ("Ended On", "")])];
        assert_eq!(map_positions(&rows)[0].end_date, "Present");
    }

    #[test]
    fn positions_preserve_row_order() {
        let rows = vec![
            row(&[("Title", "Second Role")]),
            row(&[("Title", "First Role")]),
        ];
        let positions = map_positions(&rows);
        assert_eq!(positions[0].title, "Second Role");
        assert_eq!(positions[1].title, "First Role");
    }

    #[test]
    fn skill_endorsements_parse() {
        let rows = vec![
            row(&[("Name", "AWS"), ("Endorsement Count", "20")]),
            row(&[("Name", "Ansible"), ("Endorsement Count", "")]),
            row(&[("Name", "Docker"), ("Endorsement Count", "lots")]),
            row(&[("Name", "Jira")]),
            row(&[("Name", "Linux"), ("Endorsement Count", "-3")]),
        ];

        let skills = map_skills(&rows);
        assert_eq!(skills[0].endorsements, 20);
        assert_eq!(skills[1].endorsements, 0);
        assert_eq!(skills[2].endorsements, 0);
        assert_eq!(skills[3].endorsements, 0);
        assert_eq!(skills[4].endorsements, 0);
    }

    #[test]
    fn certification_credential_id_optional() {
        let rows = vec![
            row(&[
                ("Name", "CISSP"),
                ("Issuer", "ISC2"),
                ("Issued On", "Mar 2021"),
                ("Credential ID", "123-456"),
            ]),
            row(&[("Name", "ITIL Foundation"), ("Issuer", "Axelos")]),
            row(&[("Name", "CKA"), ("Credential ID", "")]),
        ];

        let certs = map_certifications(&rows);
        assert_eq!(certs[0].credential_id.as_deref(), Some("123-456"));
        assert_eq!(certs[1].credential_id, None);
        assert_eq!(certs[2].credential_id, None);
    }

    #[test]
    fn project_url_optional() {
        let rows = vec![
            row(&[("Title", "Portfolio Site"), ("URL", "https://example.com")]),
            row(&[("Title", "Internal Tool")]),
        ];

        let projects = map_projects(&rows);
        assert_eq!(projects[0].url.as_deref(), Some("https://example.com"));
        assert_eq!(projects[1].url, None);
    }

    #[test]
    fn recommendation_columns() {
        let rows = vec![row(&[
            ("First Name", "Jane"),
            ("Title", "Engineering Manager"),
            ("Company", "Example Corp"),
            ("Recommendation Text", "Mark kept everything running."),
            ("Created Date", "Jun 2022"),
            ("Relationship", "Managed Mark directly"),
        ])];

        let recs = map_recommendations(&rows);
        assert_eq!(recs[0].author, "Jane");
        assert_eq!(recs[0].author_company, "Example Corp");
        assert_eq!(recs[0].relationship, "Managed Mark directly");
    }

    #[test]
    fn education_columns_default_empty() {
        let rows = vec![row(&[("School Name", "State University")])];
        let education = map_education(&rows);
        assert_eq!(education[0].school, "State University");
        assert_eq!(education[0].field_of_study, "");
        assert_eq!(education[0].end_date, "");
    }

    #[test]
    fn mapping_is_deterministic() {
        let rows = vec![
            row(&[("Name", "AWS"), ("Endorsement Count", "20")]),
            row(&[("Name", "Go"), ("Endorsement Count", "9")]),
        ];
        assert_eq!(map_skills(&rows), map_skills(&rows));
    }
}
