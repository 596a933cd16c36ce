use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};
use std::ops::Deref;

/// Number of cards the projects grid shows at most.
pub const DISPLAY_LIMIT: usize = 6;

/// One element of the `GET /users/{account}/repos` response. Fields the grid
/// does not use are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub homepage: Option<String>,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
    pub fork: bool,
}

impl RepositoryRecord {
    /// Card title: the raw name with hyphens turned into spaces.
    pub fn display_title(&self) -> String {
        self.name.replace('-', " ")
    }

    pub fn updated_year(&self) -> i32 {
        self.updated_at.year()
    }
}

// GitHub sends `""` for fields that were set once and later cleared.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Non-fork repositories in upstream order, capped at [`DISPLAY_LIMIT`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayList(Vec<RepositoryRecord>);

impl DisplayList {
    pub fn derive(records: Vec<RepositoryRecord>) -> Self {
        Self(
            records
                .into_iter()
                .filter(|r| !r.fork)
                .take(DISPLAY_LIMIT)
                .collect(),
        )
    }
}

impl Deref for DisplayList {
    type Target = [RepositoryRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_forks_are_dropped() {
        let list = DisplayList::derive(vec![
            make_record(1, "a-b", false),
            make_record(2, "c", true),
        ]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).map(|r| r.id), Some(1));
        assert_eq!(list.get(0).map(|r| r.display_title()), Some("a b".to_string()));
    }

    #[test]
    fn test_truncates_to_first_six_in_upstream_order() {
        let records: Vec<_> = (1..=9).map(|i| make_record(i, "repo", false)).collect();
        let list = DisplayList::derive(records);

        let ids: Vec<u64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_forks_interleaved_with_sources() {
        let records: Vec<_> = (1..=14)
            .map(|i| make_record(i, "repo", i % 2 == 0))
            .collect();
        let list = DisplayList::derive(records);

        let ids: Vec<u64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 7, 9, 11]);
        assert!(list.iter().all(|r| !r.fork));
    }

    #[test]
    fn test_length_is_min_of_limit_and_sources() {
        for total in 0..10u64 {
            for forks_every in 1..4u64 {
                let records: Vec<_> = (0..total)
                    .map(|i| make_record(i, "r", i % forks_every == 1))
                    .collect();
                let sources = records.iter().filter(|r| !r.fork).count();
                let list = DisplayList::derive(records);
                assert_eq!(list.len(), sources.min(DISPLAY_LIMIT));
            }
        }
    }

    #[test]
    fn test_only_forks_yields_empty() {
        let list = DisplayList::derive(vec![
            make_record(1, "x", true),
            make_record(2, "y", true),
        ]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_deserialize_github_payload() {
        let body = r#"[{
            "id": 42,
            "name": "laravel-kpi-system",
            "full_name": "someone/laravel-kpi-system",
            "description": null,
            "language": "PHP",
            "homepage": "",
            "html_url": "https://github.com/someone/laravel-kpi-system",
            "updated_at": "2025-11-03T08:15:00Z",
            "fork": false,
            "stargazers_count": 3
        }]"#;
        let records: Vec<RepositoryRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, 42);
        assert_eq!(r.description, None);
        assert_eq!(r.language.as_deref(), Some("PHP"));
        assert_eq!(r.homepage, None);
        assert_eq!(r.updated_year(), 2025);
        assert_eq!(r.display_title(), "laravel kpi system");
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let body = r#"[{
            "id": 7,
            "name": "blank",
            "description": "",
            "language": "  ",
            "homepage": "",
            "html_url": "https://github.com/someone/blank",
            "updated_at": "2024-03-01T00:00:00Z",
            "fork": false
        }]"#;
        let records: Vec<RepositoryRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records[0].description, None);
        assert_eq!(records[0].language, None);
        assert_eq!(records[0].homepage, None);
    }

    #[test]
    fn test_missing_html_url_is_rejected() {
        let body = r#"[{"id": 1, "name": "a", "updated_at": "2024-01-01T00:00:00Z", "fork": false}]"#;
        assert!(serde_json::from_str::<Vec<RepositoryRecord>>(body).is_err());
    }
}
