/// Project catalog
///
/// Loads projects.json from the active data source and answers the
/// tag and search queries behind the gallery view.

use log::info;

use super::data::{Project, ProjectsDocument};
use crate::config::DataSource;
use crate::error::Result;

/// Sample data compiled into the binary for runs without a projects.json
const EMBEDDED_PROJECTS: &str = include_str!("../../assets/projects.json");

/// Label of the tag chip that disables tag filtering
pub const ALL_TAGS: &str = "All";

/// Load the project list from a data source.
///
/// File sources are read from disk every time, so a reload always sees
/// the current document.
pub async fn load_projects(source: DataSource) -> Result<Vec<Project>> {
    let json = match &source {
        DataSource::Embedded => EMBEDDED_PROJECTS.to_string(),
        DataSource::File(path) => tokio::fs::read_to_string(path).await?,
    };

    let document = ProjectsDocument::from_json(&json)?;
    info!("📁 Loaded {} projects from {}", document.projects.len(), source.describe());

    Ok(document.projects)
}

/// The active tag and search text
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub tag: String,
    pub query: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            tag: ALL_TAGS.to_string(),
            query: String::new(),
        }
    }
}

impl Filter {
    /// Does a project pass both the tag and the text filter?
    pub fn matches(&self, project: &Project) -> bool {
        let tag_matches = self.tag == ALL_TAGS || project.tags.iter().any(|t| *t == self.tag);
        if !tag_matches {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty() || search_blob(project).contains(&query)
    }
}

/// Lowercased text searched by the query box
fn search_blob(project: &Project) -> String {
    [
        project.title.as_str(),
        project.summary.as_str(),
        project.tags.join(" ").as_str(),
        project.highlights.join(" ").as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// The loaded project list
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// "All" followed by every distinct tag, sorted case-insensitively
    pub fn unique_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.projects.iter().flat_map(|p| p.tags.iter()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

        let mut out = Vec::with_capacity(tags.len() + 1);
        out.push(ALL_TAGS.to_string());
        out.extend(tags);
        out
    }

    /// Projects passing the filter, in catalog order, each with its
    /// position in the catalog
    pub fn filtered<'a>(
        &'a self,
        filter: &'a Filter,
    ) -> impl Iterator<Item = (usize, &'a Project)> + 'a {
        self.projects
            .iter()
            .enumerate()
            .filter(move |(_, p)| filter.matches(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, tags: &[&str], highlights: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            summary: format!("{} summary", title),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            ..Project::default()
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            project("QR Information System", &["Python", "Internal Tool"], &["Branded QR cards"]),
            project("Inventory", &["inventory", "Internal Tool"], &["Requisition workflows"]),
            project("Automation Scripts", &["Python", "automation"], &[]),
        ])
    }

    fn titles<'a>(iter: impl Iterator<Item = &'a Project>) -> Vec<&'a str> {
        iter.map(|p| p.title.as_str()).collect()
    }

    fn filtered_titles<'a>(catalog: &'a Catalog, filter: &'a Filter) -> Vec<&'a str> {
        titles(catalog.filtered(filter).map(|(_, p)| p))
    }

    #[test]
    fn test_unique_tags_sorted_with_all_first() {
        assert_eq!(
            sample().unique_tags(),
            vec!["All", "automation", "Internal Tool", "inventory", "Python"]
        );
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let catalog = sample();
        let filter = Filter::default();
        assert_eq!(catalog.filtered(&filter).count(), 3);
    }

    #[test]
    fn test_tag_filter() {
        let catalog = sample();
        let filter = Filter {
            tag: "Python".to_string(),
            query: String::new(),
        };
        assert_eq!(
            filtered_titles(&catalog, &filter),
            vec!["QR Information System", "Automation Scripts"]
        );
    }

    #[test]
    fn test_query_searches_highlights_case_insensitively() {
        let catalog = sample();
        let filter = Filter {
            tag: ALL_TAGS.to_string(),
            query: "  REQUISITION ".to_string(),
        };
        assert_eq!(filtered_titles(&catalog, &filter), vec!["Inventory"]);
    }

    #[test]
    fn test_filtered_keeps_catalog_positions() {
        let catalog = Catalog::new(vec![
            project("Same", &["Python"], &[]),
            project("Other", &["Rust"], &[]),
            project("Same", &["Python"], &[]),
        ]);
        let filter = Filter {
            tag: "Python".to_string(),
            query: String::new(),
        };

        let positions: Vec<usize> = catalog.filtered(&filter).map(|(i, _)| i).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_tag_and_query_combine() {
        let catalog = sample();
        let filter = Filter {
            tag: "Internal Tool".to_string(),
            query: "automation".to_string(),
        };
        assert_eq!(catalog.filtered(&filter).count(), 0);
    }

    #[tokio::test]
    async fn test_load_embedded_projects() {
        let projects = load_projects(DataSource::Embedded).await.unwrap();
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| !p.title.is_empty()));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, r#"{ "projects": [{ "title": "One" }, { "title": "Two" }] }"#).unwrap();

        let projects = load_projects(DataSource::File(path)).await.unwrap();
        assert_eq!(titles(projects.iter()), vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_projects(DataSource::File(dir.path().join("projects.json"))).await;
        assert!(result.is_err());
    }
}
