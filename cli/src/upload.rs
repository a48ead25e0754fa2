use crate::error::CliError;
use std::path::Path;

/// A file read from disk, ready to be sent as a multipart part.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, CliError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CliError::ReadImage {
                path: path.to_path_buf(),
                source,
            })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        log::debug!("Read {} ({} bytes)", name, bytes.len());
        Ok(Self::new(name, mime_for(path), bytes))
    }
}

// No validation: unknown extensions are still sent, just untyped.
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for(Path::new("leaf.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("dir/leaf.png")), "image/png");
        assert_eq!(mime_for(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("no_extension")), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = Upload::from_path(Path::new("/definitely/not/here.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ReadImage { .. }));
        assert!(err.to_string().contains("here.jpg"));
    }
}
