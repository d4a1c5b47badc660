use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadReportDto {
    /// The image to upload (PNG or JPEG)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Raw location string, expected to be a JSON object with latitude/longitude
    #[schema(example = r#"{"latitude":1.0,"longitude":2.0}"#)]
    pub location: String,
    /// Short report title
    #[schema(example = "Pothole A")]
    pub name: String,
    /// Reporting user
    #[schema(example = "alice")]
    pub username: String,
    /// Hazard category, free text (form field `type`)
    #[schema(example = "pothole")]
    pub r#type: String,
    /// Free-text description of the hazard
    #[schema(example = "deep crack")]
    pub description: String,
    /// Optional mobile push token (form field `pushToken`), accepted but not persisted
    pub push_token: Option<String>,
}

/// Text fields of the upload form, validated for presence before any
/// side effect runs.
#[derive(Debug, Validate)]
pub struct ReportFields {
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "type is required"))]
    pub hazard_type: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

/// Response DTO for a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadReportResponseDto {
    /// Identifier of the persisted report row
    pub report_id: Uuid,
    /// Original filename as uploaded
    pub filename: String,
    /// Validated MIME type
    pub content_type: String,
    /// Server-computed SHA-256 hex digest of the received bytes
    pub file_hash: String,
    /// Location string echoed verbatim
    pub location: String,
    /// Report name echoed back
    pub name: String,
}

/// MIME types accepted for report images
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// Check if a MIME type is allowed
pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

/// Check that the filename's extension agrees with the declared MIME type.
/// Only called for allowed MIME types.
pub fn extension_matches(filename: &str, content_type: &str) -> bool {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match (content_type, extension.as_deref()) {
        ("image/png", Some("png")) => true,
        ("image/jpeg", Some("jpg") | Some("jpeg")) => true,
        _ => false,
    }
}

/// Canonical object-key extension for an allowed MIME type
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_mime_types() {
        assert!(is_mime_type_allowed("image/png"));
        assert!(is_mime_type_allowed("image/jpeg"));
        assert!(!is_mime_type_allowed("image/gif"));
        assert!(!is_mime_type_allowed("application/pdf"));
        assert!(!is_mime_type_allowed("text/plain"));
        assert!(!is_mime_type_allowed("image/PNG")); // exact match only
    }

    #[test]
    fn test_extension_matches_png() {
        assert!(extension_matches("cat.png", "image/png"));
        assert!(extension_matches("CAT.PNG", "image/png"));
        assert!(!extension_matches("cat.jpg", "image/png"));
        assert!(!extension_matches("report.txt", "image/png"));
        assert!(!extension_matches("noextension", "image/png"));
    }

    #[test]
    fn test_extension_matches_jpeg() {
        assert!(extension_matches("photo.jpg", "image/jpeg"));
        assert!(extension_matches("photo.jpeg", "image/jpeg"));
        assert!(!extension_matches("photo.png", "image/jpeg"));
        assert!(!extension_matches("photo", "image/jpeg"));
    }

    #[test]
    fn test_extension_for() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/gif"), None);
    }

    #[test]
    fn test_report_fields_presence() {
        let fields = ReportFields {
            location: r#"{"latitude":1.0,"longitude":2.0}"#.to_string(),
            name: "Pothole A".to_string(),
            username: "alice".to_string(),
            hazard_type: "pothole".to_string(),
            description: "deep crack".to_string(),
        };
        assert!(fields.validate().is_ok());

        let empty_name = ReportFields {
            name: String::new(),
            ..fields
        };
        assert!(empty_name.validate().is_err());
    }
}
