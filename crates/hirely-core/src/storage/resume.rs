//! Resume validation and storage keys.

use super::model::ResumeUpload;
use crate::config::ResumePolicy;
use crate::error::{HirelyError, Result};

/// Returns the text after the last `.` of `file_name`.
///
/// `None` when the name has no dot. A trailing dot yields `Some("")`.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, extension)| extension)
}

/// Storage key for a user's resume: `{user_id}/resume.{ext}`.
///
/// The extension is kept verbatim. Names without a usable extension are
/// rejected.
pub fn resume_storage_key(user_id: &str, file_name: &str) -> Result<String> {
    match file_extension(file_name) {
        Some(extension) if !extension.is_empty() => {
            Ok(format!("{}/resume.{}", user_id, extension))
        }
        _ => Err(HirelyError::validation(format!(
            "Resume file '{}' has no extension",
            file_name
        ))),
    }
}

fn kinds_label(policy: &ResumePolicy) -> String {
    let kinds: Vec<String> = policy
        .allowed_extensions
        .iter()
        .map(|extension| extension.to_ascii_uppercase())
        .collect();

    match kinds.as_slice() {
        [] => "supported".to_string(),
        [only] => only.clone(),
        [head @ .., last] => format!("{}, or {}", head.join(", "), last),
    }
}

/// Checks size and kind before anything touches the network.
pub fn validate_resume(upload: &ResumeUpload, policy: &ResumePolicy) -> Result<()> {
    if upload.size() > policy.max_bytes {
        return Err(HirelyError::validation(format!(
            "File size must be less than {}",
            policy.max_size_label()
        )));
    }

    let allowed = file_extension(&upload.file_name)
        .is_some_and(|extension| policy.allows_extension(extension));
    if !allowed {
        return Err(HirelyError::validation(format!(
            "Resume must be a {} file",
            kinds_label(policy)
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: usize = 1024 * 1024;

    #[test]
    fn test_key_uses_last_dot_segment() {
        assert_eq!(
            resume_storage_key("user-1", "cv.final.pdf").unwrap(),
            "user-1/resume.pdf"
        );
        assert_eq!(
            resume_storage_key("user-1", "CV.DOCX").unwrap(),
            "user-1/resume.DOCX"
        );
    }

    #[test]
    fn test_key_without_extension_is_rejected() {
        assert!(resume_storage_key("user-1", "resume").unwrap_err().is_validation());
        assert!(resume_storage_key("user-1", "resume.").unwrap_err().is_validation());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.b.c"), Some("c"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), Some(""));
    }

    #[test]
    fn test_size_limit() {
        let policy = ResumePolicy::default();

        let at_limit = ResumeUpload::new("cv.pdf", vec![0; 5 * MIB]);
        assert!(validate_resume(&at_limit, &policy).is_ok());

        let over = ResumeUpload::new("cv.pdf", vec![0; 5 * MIB + 1]);
        let err = validate_resume(&over, &policy).unwrap_err();
        assert_eq!(err.user_message(), Some("File size must be less than 5MB"));
    }

    #[test]
    fn test_kind_check() {
        let policy = ResumePolicy::default();

        let text = ResumeUpload::new("cv.txt", vec![1, 2, 3]);
        let err = validate_resume(&text, &policy).unwrap_err();
        assert_eq!(
            err.user_message(),
            Some("Resume must be a PDF, DOC, or DOCX file")
        );

        let upper = ResumeUpload::new("cv.PDF", vec![1, 2, 3]);
        assert!(validate_resume(&upper, &policy).is_ok());

        let bare = ResumeUpload::new("cv", vec![1, 2, 3]);
        assert!(validate_resume(&bare, &policy).is_err());
    }
}
