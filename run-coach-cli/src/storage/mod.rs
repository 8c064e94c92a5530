// File-backed document sink with data-bus notifications

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DATA_BUS_DIR: &str = "data_bus/channels/data_alerts";

/// Destination for output documents handed off by the CLI
pub trait DocumentSink {
    /// Persist a document on a channel and return where it landed
    fn publish(&self, channel: &str, document: &Value) -> Result<PathBuf>;
}

/// Writes `<root>/<channel>/<name>.json` and announces it on the data bus
pub struct FileSink {
    root: PathBuf,
    sender: String,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>, sender: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            sender: sender.into(),
        }
    }

    fn document_name(channel: &str) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!(
            "{}_{}_{}",
            channel,
            Utc::now().format("%Y%m%dT%H%M%S"),
            &suffix[..8]
        )
    }

    fn publish_alert(&self, channel: &str, summary_file: &Path) -> Result<PathBuf> {
        let id = format!("{}_update_{}", channel, Uuid::new_v4().simple());
        let relative = summary_file
            .strip_prefix(&self.root)
            .unwrap_or(summary_file)
            .to_string_lossy()
            .into_owned();

        let alert = json!({
            "id": id,
            "type": format!("{}_updated", channel),
            "timestamp": Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            "sender": self.sender,
            "data": {
                "summary_file": relative,
                "message": format!("New {} document published", channel),
            }
        });

        let alert_file = self.root.join(DATA_BUS_DIR).join(format!("{}.json", id));
        write_durable(&alert_file, &alert)?;

        Ok(alert_file)
    }
}

impl DocumentSink for FileSink {
    fn publish(&self, channel: &str, document: &Value) -> Result<PathBuf> {
        let file = self
            .root
            .join(channel)
            .join(format!("{}.json", Self::document_name(channel)));

        write_durable(&file, document)?;
        let alert = self.publish_alert(channel, &file)?;

        tracing::info!(
            "Published {} document to {} (alert {})",
            channel,
            file.display(),
            alert.display()
        );

        Ok(file)
    }
}

/// Write through a temp file so readers never observe a partial document
fn write_durable(path: &Path, document: &Value) -> Result<()> {
    let dir = path.parent().context("Document path has no parent directory")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let tmp = path.with_extension("json.tmp");
    let contents = serde_json::to_vec_pretty(document).context("Failed to serialize document")?;

    let mut file = File::create(&tmp)
        .with_context(|| format!("Failed to create {}", tmp.display()))?;
    file.write_all(&contents)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    file.sync_all().context("Failed to flush document to disk")?;

    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move document into {}", path.display()))?;

    Ok(())
}
