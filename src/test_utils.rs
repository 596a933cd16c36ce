#![cfg(test)]

use crate::github::types::RepositoryRecord;
use chrono::{TimeZone, Utc};

pub fn make_record(id: u64, name: &str, fork: bool) -> RepositoryRecord {
    RepositoryRecord {
        id,
        name: name.to_string(),
        description: Some(format!("repo {id}")),
        language: Some("Rust".to_string()),
        homepage: None,
        html_url: format!("https://github.com/someone/{name}-{id}"),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        fork,
    }
}

pub fn with_homepage(mut record: RepositoryRecord, url: &str) -> RepositoryRecord {
    record.homepage = Some(url.to_string());
    record
}

pub fn record_json(id: u64, name: &str, fork: bool) -> String {
    format!(
        r#"{{"id":{id},"name":"{name}","description":null,"language":null,"homepage":null,"html_url":"https://github.com/someone/{name}","updated_at":"2023-02-08T10:00:00Z","fork":{fork}}}"#
    )
}

pub fn payload(records: &[String]) -> String {
    format!("[{}]", records.join(","))
}
