use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use tracing::{info, warn};

/// Binary assets embedded into or served alongside the page.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    /// Base64 of the profile photo, if the file exists.
    pub profile_image_b64: Option<String>,
    pub resume: Option<ResumeDocument>,
    /// Where the photo was expected, for the "not found" notice.
    pub profile_image_hint: String,
}

#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub data: Bytes,
}

impl StaticAssets {
    /// Missing files are tolerated; unreadable ones are errors.
    pub fn load(profile_image: &Path, resume_pdf: &Path) -> Result<Self> {
        let profile_image_b64 = safe_b64_image(profile_image)?;
        match &profile_image_b64 {
            Some(_) => info!("Loaded profile image from {}", profile_image.display()),
            None => warn!("Profile photo not found at {}", profile_image.display()),
        }

        let resume = load_resume(resume_pdf)?;
        if resume.is_none() {
            warn!(
                "Resume not found at {}; download disabled",
                resume_pdf.display()
            );
        }

        Ok(Self {
            profile_image_b64,
            resume,
            profile_image_hint: profile_image.display().to_string(),
        })
    }
}

pub fn img_to_base64(path: &Path) -> Result<String> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(STANDARD.encode(data))
}

pub fn safe_b64_image(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    img_to_base64(path).map(Some)
}

fn load_resume(path: &Path) -> Result<Option<ResumeDocument>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());
    Ok(Some(ResumeDocument {
        file_name,
        data: Bytes::from(data),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_img_to_base64_encodes_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();
        assert_eq!(img_to_base64(file.path()).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_safe_b64_image_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("profile.jpeg");
        assert!(safe_b64_image(&missing).unwrap().is_none());
    }

    #[test]
    fn test_load_reads_both_assets() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("profile.jpeg");
        let pdf = dir.path().join("cv.pdf");
        std::fs::write(&image, [0xFFu8, 0xD8, 0xFF]).unwrap();
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();

        let assets = StaticAssets::load(&image, &pdf).unwrap();
        assert_eq!(assets.profile_image_b64.as_deref(), Some("/9j/"));
        let resume = assets.resume.unwrap();
        assert_eq!(resume.file_name, "cv.pdf");
        assert_eq!(&resume.data[..], b"%PDF-1.4");
    }

    #[test]
    fn test_load_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let assets = StaticAssets::load(
            &dir.path().join("nope.jpeg"),
            &dir.path().join("nope.pdf"),
        )
        .unwrap();
        assert!(assets.profile_image_b64.is_none());
        assert!(assets.resume.is_none());
        assert!(assets.profile_image_hint.ends_with("nope.jpeg"));
    }
}
