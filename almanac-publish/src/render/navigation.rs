//! Navigation tree
//!
//!     Every rendered page carries the same navigation tree, marked up for the
//!     page's own position: the current page is `active`, its ancestors are
//!     `active_child`. The flattened form doubles as the embedded search
//!     index.

use almanac_parser::almanac::ast::{Documentation, TopicNode};
use serde::Serialize;

/// One navigation entry, mirroring the topic hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Navigation {
    pub title: String,
    pub url: String,
    pub active: bool,
    pub active_child: bool,
    pub children: Vec<Navigation>,
}

impl Navigation {
    /// Build the navigation tree for a page at `current_path`.
    ///
    /// Paths are absolute (`/`, `/guide/setup`, `/glossary`), matching the
    /// URLs the HTML sink writes.
    pub fn build(documentation: &Documentation, current_path: &str) -> Navigation {
        let mut nav = Navigation {
            title: documentation.root_topic.title().to_string(),
            url: "/".to_string(),
            ..Navigation::default()
        };

        if current_path == "/" {
            nav.active = true;
        } else {
            nav.active_child = true;
        }

        build_branch(
            "/",
            current_path,
            &documentation.root_topic.children,
            &mut nav.children,
        );

        if !documentation.glossary.is_empty() {
            let mut glossary = Navigation {
                title: "Glossary".to_string(),
                url: "/glossary".to_string(),
                ..Navigation::default()
            };

            if current_path == "/glossary" {
                glossary.active = true;
            }

            nav.children.push(glossary);
        }

        nav
    }

    /// Flatten the tree into a childless list, depth first.
    pub fn flatten(&self) -> Vec<Navigation> {
        let mut list = Vec::new();
        self.flatten_into(&mut list);
        list
    }

    fn flatten_into(&self, list: &mut Vec<Navigation>) {
        list.push(Navigation {
            title: self.title.clone(),
            url: self.url.clone(),
            active: self.active,
            active_child: self.active_child,
            children: Vec::new(),
        });

        for child in &self.children {
            child.flatten_into(list);
        }
    }
}

/// Join a parent URL and a handle segment.
pub(crate) fn join_url(parent: &str, handle: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), handle)
}

fn build_branch(
    parent_url: &str,
    current_path: &str,
    topics: &[TopicNode],
    out: &mut Vec<Navigation>,
) {
    for topic in topics {
        let url = join_url(parent_url, topic.handle());

        let mut branch = Navigation {
            title: topic.title().to_string(),
            url: url.clone(),
            ..Navigation::default()
        };

        if current_path == url {
            branch.active = true;
        } else if current_path.starts_with(&url) {
            branch.active_child = true;
        }

        build_branch(&url, current_path, &topic.children, &mut branch.children);

        out.push(branch);
    }
}
