/// Shared data structures for the application state
///
/// These structs mirror the projects.json document and flow from the
/// catalog loader into the card views.

use serde::{Deserialize, Serialize};

/// A contiguous numeric range of screenshot filenames:
/// `folder/prefix{i}.ext` for `i` in `start..=end`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub folder: String,
    pub prefix: String,
    pub start: u32,
    pub end: u32,
    pub ext: String,
}

/// A single portfolio project. Every field except `title` may be omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    /// Free-form status text, e.g. "Completed"
    #[serde(default)]
    pub status: String,
    /// "done" renders the completed badge, anything else is work in progress
    #[serde(default)]
    pub status_badge: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Demo recording link
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub image_sets: Vec<ImageSet>,
    #[serde(default)]
    pub extra_images: Vec<String>,
}

impl Project {
    pub fn is_done(&self) -> bool {
        self.status_badge == "done"
    }

    /// The note, unless it is missing or blank
    pub fn visible_note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Top-level shape of projects.json
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectsDocument {
    /// Parse from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"{
            "projects": [{
                "id": "qris",
                "title": "QR Information System",
                "status": "Completed",
                "statusBadge": "done",
                "tags": ["Python"],
                "imageSets": [
                    { "folder": "images/projects", "prefix": "qr", "start": 1, "end": 3, "ext": "png" }
                ],
                "extraImages": ["images/projects/qr11.png"],
                "video": "https://example.com/demo"
            }]
        }"#;

        let doc = ProjectsDocument::from_json(json).unwrap();
        assert_eq!(doc.projects.len(), 1);

        let project = &doc.projects[0];
        assert_eq!(project.id.as_deref(), Some("qris"));
        assert!(project.is_done());
        assert_eq!(project.image_sets[0].prefix, "qr");
        assert_eq!(project.extra_images, vec!["images/projects/qr11.png"]);
        assert!(project.highlights.is_empty());
        assert_eq!(project.note, None);
    }

    #[test]
    fn test_missing_projects_key_is_empty() {
        let doc = ProjectsDocument::from_json("{}").unwrap();
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_wip_badge() {
        let project = Project {
            title: "Automation Scripts".to_string(),
            status_badge: "wip".to_string(),
            ..Project::default()
        };
        assert!(!project.is_done());
    }

    #[test]
    fn test_title_is_required() {
        assert!(ProjectsDocument::from_json(r#"{ "projects": [{}] }"#).is_err());
        assert!(ProjectsDocument::from_json(r#"{ "projects": [{ "id": "x" }] }"#).is_err());

        let doc = ProjectsDocument::from_json(r#"{ "projects": [{ "title": "Only" }] }"#).unwrap();
        assert_eq!(doc.projects[0].title, "Only");
        assert!(doc.projects[0].tags.is_empty());
    }

    #[test]
    fn test_blank_note_is_hidden() {
        let mut project = Project {
            title: "Demo".to_string(),
            note: Some(String::new()),
            ..Project::default()
        };
        assert_eq!(project.visible_note(), None);

        project.note = Some("   ".to_string());
        assert_eq!(project.visible_note(), None);

        project.note = Some("Internal use only".to_string());
        assert_eq!(project.visible_note(), Some("Internal use only"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ProjectsDocument::from_json("{ \"projects\": [").is_err());
    }
}
