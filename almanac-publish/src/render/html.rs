//! HTML publishing (Documentation → static page tree)
//!
//!     Writes one page per topic: the root topic at `index.html`, every
//!     descendant at `<ancestor-handles>/<handle>/index.html`, and a glossary
//!     page when there are terms. Record bodies are markdown and go through
//!     comrak; titles and attributes are escaped. A baseline stylesheet is
//!     embedded in the binary and written next to the pages.

use crate::error::PublishError;
use crate::render::navigation::{join_url, Navigation};
use almanac_parser::almanac::ast::{Documentation, Item, TopicNode};
use almanac_parser::almanac::documenting::{Sink, SourceError};
use comrak::ComrakOptions;
use std::fs;
use std::path::{Path, PathBuf};

const BASELINE_CSS: &str = include_str!("../../css/almanac.css");

/// Renders assembled documentation into a static HTML tree.
pub struct HtmlRenderer {
    output: PathBuf,
    site_title: Option<String>,
}

impl HtmlRenderer {
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            site_title: None,
        }
    }

    /// Override the site title used in page `<title>`s. Defaults to the root
    /// topic's title.
    pub fn with_site_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.site_title = if title.is_empty() { None } else { Some(title) };
        self
    }

    /// Write the whole page tree.
    pub fn render_documentation(
        &self,
        documentation: &Documentation,
    ) -> Result<(), PublishError> {
        let site_title = self
            .site_title
            .clone()
            .unwrap_or_else(|| documentation.root_topic.title().to_string());

        self.write_page(
            documentation,
            &site_title,
            "/",
            documentation.root_topic.title(),
            &topic_content(&documentation.root_topic, "/"),
        )?;

        for topic in &documentation.root_topic.children {
            self.render_topic(documentation, &site_title, "/", topic)?;
        }

        if !documentation.glossary.is_empty() {
            self.write_page(
                documentation,
                &site_title,
                "/glossary",
                "Glossary",
                &glossary_content(&documentation.glossary),
            )?;
        }

        let css_path = self.output.join("almanac.css");
        fs::write(&css_path, BASELINE_CSS).map_err(|err| PublishError::io(&css_path, err))
    }

    fn render_topic(
        &self,
        documentation: &Documentation,
        site_title: &str,
        parent_url: &str,
        topic: &TopicNode,
    ) -> Result<(), PublishError> {
        let url = join_url(parent_url, topic.handle());

        self.write_page(
            documentation,
            site_title,
            &url,
            topic.title(),
            &topic_content(topic, &url),
        )?;

        for child in &topic.children {
            self.render_topic(documentation, site_title, &url, child)?;
        }

        Ok(())
    }

    fn write_page(
        &self,
        documentation: &Documentation,
        site_title: &str,
        url: &str,
        page_title: &str,
        content: &str,
    ) -> Result<(), PublishError> {
        let nav = Navigation::build(documentation, url);

        let search_index = serde_json::to_string(&nav.flatten())
            .map_err(|err| PublishError::Render(err.to_string()))?;

        let window_title = if page_title == site_title || page_title.is_empty() {
            site_title.to_string()
        } else {
            format!("{} — {}", page_title, site_title)
        };

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="/almanac.css">
</head>
<body>
  <nav class="almanac-nav">
{nav}  </nav>
  <main class="almanac-main">
{content}  </main>
  <script>const ALMANAC_SEARCH_INDEX = {search_index};</script>
</body>
</html>
"#,
            title = escape_html(&window_title),
            nav = nav_html(&nav),
            content = content,
            search_index = search_index,
        );

        let dir = if url == "/" {
            self.output.clone()
        } else {
            self.output.join(url.trim_start_matches('/'))
        };

        fs::create_dir_all(&dir).map_err(|err| PublishError::io(&dir, err))?;

        let page_path = dir.join("index.html");
        fs::write(&page_path, html).map_err(|err| PublishError::io(&page_path, err))
    }
}

impl Sink for HtmlRenderer {
    fn render(&self, documentation: &Documentation) -> Result<(), SourceError> {
        self.render_documentation(documentation).map_err(Into::into)
    }
}

/// Markdown options shared by every body conversion.
fn markdown_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options
}

/// Page body for one topic: heading, markdown body, child links.
fn topic_content(topic: &TopicNode, url: &str) -> String {
    let mut content = format!("    <h1>{}</h1>\n", escape_html(topic.title()));

    if !topic.item.body.is_empty() {
        content.push_str("    <div class=\"almanac-body\">\n");
        content.push_str(&comrak::markdown_to_html(
            &topic.item.body,
            &markdown_options(),
        ));
        content.push_str("    </div>\n");
    }

    if !topic.children.is_empty() {
        content.push_str("    <ul class=\"almanac-children\">\n");
        for child in &topic.children {
            content.push_str(&format!(
                "      <li><a href=\"{}\">{}</a></li>\n",
                escape_html(&join_url(url, child.handle())),
                escape_html(child.title()),
            ));
        }
        content.push_str("    </ul>\n");
    }

    content
}

/// Page body for the glossary: one definition entry per term.
fn glossary_content(glossary: &[Item]) -> String {
    let mut content = String::from("    <h1>Glossary</h1>\n    <dl class=\"almanac-glossary\">\n");

    for term in glossary {
        content.push_str(&format!(
            "      <dt id=\"{}\">{}</dt>\n",
            escape_html(&term.handle),
            escape_html(&term.title),
        ));
        content.push_str("      <dd>");
        content.push_str(&comrak::markdown_to_html(&term.body, &markdown_options()));
        content.push_str("</dd>\n");
    }

    content.push_str("    </dl>\n");
    content
}

/// Navigation tree as nested lists.
fn nav_html(nav: &Navigation) -> String {
    let mut html = String::from("    <ul>\n");
    nav_entry(nav, &mut html, 3);
    html.push_str("    </ul>\n");
    html
}

fn nav_entry(entry: &Navigation, html: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    let class = if entry.active {
        " class=\"active\""
    } else if entry.active_child {
        " class=\"active-child\""
    } else {
        ""
    };

    html.push_str(&format!(
        "{}<li{}><a href=\"{}\">{}</a>",
        indent,
        class,
        escape_html(&entry.url),
        escape_html(&entry.title),
    ));

    if !entry.children.is_empty() {
        html.push('\n');
        html.push_str(&format!("{}  <ul>\n", indent));
        for child in &entry.children {
            nav_entry(child, html, depth + 2);
        }
        html.push_str(&format!("{}  </ul>\n", indent));
        html.push_str(&indent);
    }

    html.push_str("</li>\n");
}

/// Minimal escaping for text and attribute positions.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
