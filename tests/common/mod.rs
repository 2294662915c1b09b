// tests/common/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temp workspace holding JSONL lead exports for CLI runs.
pub struct LeadFixture {
    dir: TempDir,
}

impl LeadFixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("temp dir") }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_jsonl(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

/// A spread of leads around 2024-03-15, with boundary instants spelled out.
pub fn march_leads() -> Vec<&'static str> {
    vec![
        r#"{"id":"1","title":"Quote request","source":"WEB","created_at":"2024-03-15T00:00:00Z"}"#,
        r#"{"id":"2","title":"Pricing call","source":"CALL","created_at":"2024-03-15T13:00:00Z"}"#,
        r#"{"id":"3","title":"Late form","source":"WEBFORM","created_at":"2024-03-15T23:59:59.999Z"}"#,
        r#"{"id":"4","title":"Next day","source":"WEB","created_at":"2024-03-16T00:00:00Z"}"#,
        r#"{"id":"5","title":"Previous day","source":"EMAIL","created_at":"2024-03-14T23:59:59.999Z"}"#,
        r#"{"id":"6","title":"No date","source":"OTHER"}"#,
    ]
}
