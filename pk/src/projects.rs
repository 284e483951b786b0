//! Project gallery catalog
//!
//! A fixed list of projects plus the category filter shown above the
//! gallery. Filtering is exact and case-sensitive; `All` returns everything.

use serde::Serialize;
use tracing::debug;

/// Filter value that matches every project
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the gallery filter, in display order
pub const CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "AI Tools", "GUIs", "Business Systems", "Prompt Kits"];

/// External links for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiverr: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notion: Option<&'static str>,
}

/// A gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub links: ProjectLinks,
    pub tech_stack: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "AI Lead Generation Assistant",
        description: "Automated system for real estate agents to qualify and follow up with leads.",
        tags: &["AI", "Automation", "Business"],
        category: "Prompt Kits",
        links: ProjectLinks {
            github: Some("https://github.com/isaac-akinladejo/lead-gen-ai"),
            fiverr: Some("https://fiverr.com/isaac_akinladejo/create-ai-lead-generation-systems"),
            notion: Some("https://notion.so/isaac-akinladejo/lead-gen-case-study"),
        },
        tech_stack: &["Python", "OpenAI", "Twilio"],
    },
    Project {
        id: 2,
        title: "WhatsDoc Automator",
        description: "Python application that converts WhatsApp voice notes and chats into professional documents.",
        tags: &["Voice Note Transcription", "Document Templates", "Automation Panel"],
        category: "Transcription",
        links: ProjectLinks {
            github: Some("https://github.com/IsaacGridGainsDev/WhatsDoc"),
            fiverr: Some("https://www.fiverr.com/sellers/god_is_a_ble"),
            notion: None,
        },
        tech_stack: &["CustomTkinter", "Python", "OpenAI"],
    },
    Project {
        id: 3,
        title: "Auto Fonts Installer",
        description: "Interactive Python application that automates installing fonts from ZIP files or folders.",
        tags: &["GUI", "Dashboard", "Automation"],
        category: "AI Tools",
        links: ProjectLinks {
            github: Some("https://github.com/IsaacGridGainsDev/Font_Auto_Installer"),
            fiverr: None,
            notion: Some("https://www.notion.so/7b9b6948f785419a9d47036cdff2fcec?pvs=66&qid&origin"),
        },
        tech_stack: &["CustomTkinter", "Python", "GUI"],
    },
    Project {
        id: 4,
        title: "Automated Twitter Data Miner",
        description: "Python application for mining, analyzing, and visualizing Twitter data using both historical scraping and real-time streaming capabilities.",
        tags: &["Data Mining", "Automation", "Business"],
        category: "Business Systems",
        links: ProjectLinks {
            github: Some("https://github.com/IsaacGridGainsDev/Tweet-Harvester-GUI"),
            fiverr: None,
            notion: None,
        },
        tech_stack: &["Python", "FastAPI", "PostgreSQL"],
    },
];

/// Projects in `category`, in catalog order
///
/// An unknown category yields an empty list.
pub fn filter_by_category(category: &str) -> Vec<&'static Project> {
    debug!(%category, "filter_by_category: called");
    if category == ALL_CATEGORIES {
        debug!("filter_by_category: matched All");
        return PROJECTS.iter().collect();
    }
    PROJECTS.iter().filter(|p| p.category == category).collect()
}

/// Look up a project by id
pub fn find(id: u32) -> Option<&'static Project> {
    debug!(%id, "find: called");
    PROJECTS.iter().find(|p| p.id == id)
}

/// Whether `category` is one of the filter buttons
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_all() {
        assert_eq!(ids(&filter_by_category("All")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_single_category() {
        assert_eq!(ids(&filter_by_category("Prompt Kits")), vec![1]);
        assert_eq!(ids(&filter_by_category("Business Systems")), vec![4]);
        assert_eq!(ids(&filter_by_category("AI Tools")), vec![3]);
    }

    #[test]
    fn test_filter_empty_category() {
        assert!(filter_by_category("GUIs").is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        assert!(filter_by_category("prompt kits").is_empty());
        assert!(filter_by_category("all").is_empty());
    }

    #[test]
    fn test_category_outside_filter_list() {
        // Not offered as a filter button, but still filterable
        assert!(!is_known_category("Transcription"));
        assert_eq!(ids(&filter_by_category("Transcription")), vec![2]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(2).map(|p| p.title), Some("WhatsDoc Automator"));
        assert!(find(99).is_none());
    }

    #[test]
    fn test_project_ids_unique() {
        let mut all = ids(&filter_by_category(ALL_CATEGORIES));
        all.dedup();
        assert_eq!(all.len(), PROJECTS.len());
    }
}
