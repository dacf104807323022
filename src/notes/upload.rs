//! Audio upload placeholder. Files are checked, never processed.

use std::path::Path;

pub const ACCEPTED_AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "m4a"];

pub const UPLOAD_NOTICE: &str =
    "Audio upload feature coming soon! For now, please use the transcript tab.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadCheck {
    Accepted { file_name: String },
    Unsupported { extension: Option<String> },
    Missing,
}

impl UploadCheck {
    /// Message shown to the user for this check.
    pub fn notice(&self) -> String {
        match self {
            UploadCheck::Accepted { file_name } => {
                format!("Received {}. {}", file_name, UPLOAD_NOTICE)
            }
            UploadCheck::Unsupported { extension } => format!(
                "Unsupported file type{}. Accepted types: {}",
                extension
                    .as_deref()
                    .map(|ext| format!(" '.{}'", ext))
                    .unwrap_or_default(),
                ACCEPTED_AUDIO_EXTENSIONS.join(", ")
            ),
            UploadCheck::Missing => "File not found".to_string(),
        }
    }
}

pub fn check_upload(path: &Path) -> UploadCheck {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let accepted = extension
        .as_deref()
        .is_some_and(|ext| ACCEPTED_AUDIO_EXTENSIONS.contains(&ext));
    if !accepted {
        return UploadCheck::Unsupported { extension };
    }

    if !path.is_file() {
        return UploadCheck::Missing;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    tracing::debug!(file = %file_name, "Audio upload accepted but not processed");
    UploadCheck::Accepted { file_name }
}
