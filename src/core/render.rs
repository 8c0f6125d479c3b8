//! Renderer module
//!
//! Renders output items to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, OutputItem};
use crate::core::util::value_text;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for output items
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render items to a string
    pub fn render(&self, items: &[OutputItem]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(items),
            OutputFormat::Json => self.render_json(items),
            OutputFormat::Markdown => self.render_markdown(items),
            OutputFormat::Raw => self.render_raw(items),
        }
    }

    /// Render to a writer, followed by a newline
    pub fn render_to<W: Write>(&self, items: &[OutputItem], mut writer: W) -> std::io::Result<()> {
        let output = self.render(items);
        writeln!(writer, "{}", output)
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, items: &[OutputItem]) -> String {
        items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, items: &[OutputItem]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, items: &[OutputItem]) -> String {
        let mut output = String::new();

        for item in items {
            let key = item.key.as_deref().unwrap_or_default();
            match item.kind {
                Kind::Version => {
                    output.push_str("## Version\n\n");
                    output.push_str(&format!("`{}`\n", value_text(item.content.as_ref())));
                }
                Kind::Item => {
                    output.push_str(&format!("### `{}`\n\n", key));
                    if let Some(path) = &item.path {
                        output.push_str(&format!("- path: `{}`\n", path));
                    }
                    output.push_str(&format!(
                        "- success: {}\n",
                        item.success.unwrap_or_default()
                    ));
                    if let Some(content) = &item.content {
                        let body = serde_json::to_string_pretty(content)
                            .unwrap_or_else(|_| "null".to_string());
                        output.push_str("\n```json\n");
                        output.push_str(&body);
                        output.push_str("\n```\n");
                    }
                }
                Kind::Store => {
                    let status = if item.stored.unwrap_or_default() {
                        "stored"
                    } else {
                        "write failed"
                    };
                    output.push_str(&format!(
                        "- `{}` → `{}`: {}\n",
                        key,
                        item.path.as_deref().unwrap_or_default(),
                        status
                    ));
                }
                Kind::Presence => {
                    let status = if item.present.unwrap_or_default() {
                        "present"
                    } else {
                        "absent"
                    };
                    output.push_str(&format!("- `{}`: {}\n", key, status));
                }
                Kind::Path => {
                    output.push_str(&format!(
                        "- `{}`: `{}`\n",
                        key,
                        item.path.as_deref().unwrap_or_default()
                    ));
                }
            }
        }

        output
    }

    /// Render as raw output: the principal value of each item, one per line
    fn render_raw(&self, items: &[OutputItem]) -> String {
        items
            .iter()
            .map(|item| match item.kind {
                Kind::Version | Kind::Item => value_text(item.content.as_ref()),
                Kind::Store => item.stored.unwrap_or_default().to_string(),
                Kind::Presence => item.present.unwrap_or_default().to_string(),
                Kind::Path => item.path.clone().unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::result::CacheResult;
    use serde_json::json;

    fn renderer(format: OutputFormat) -> Renderer {
        Renderer::with_config(RenderConfig::with_pretty(format, false))
    }

    fn sample_items() -> Vec<OutputItem> {
        vec![
            OutputItem::version(Some(json!("6009"))),
            OutputItem::item("ua", "/c/ua.6009.json", CacheResult::hit(json!({"a": 1}))),
        ]
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = renderer(OutputFormat::Jsonl);
        let output = renderer.render(&sample_items());

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains(r#""kind":"version""#));
        assert!(output.contains("/c/ua.6009.json"));
    }

    #[test]
    fn test_render_json() {
        let renderer = renderer(OutputFormat::Json);
        let output = renderer.render(&sample_items());

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("MARKDOWN".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "yaml".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_jsonl_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Jsonl, true);
        let output = Renderer::with_config(config).render(&sample_items());

        assert!(output.contains("\n\n"));
        assert!(output.contains("  \"kind\""));
    }

    #[test]
    fn test_render_markdown() {
        let items = vec![
            OutputItem::version(None),
            OutputItem::item("ua", "/c/ua.null.json", CacheResult::miss()),
            OutputItem::store("k", "/c/k.json", false),
            OutputItem::presence("k", true),
            OutputItem::path("k", "/c/k.json"),
        ];
        let output = renderer(OutputFormat::Markdown).render(&items);

        assert!(output.contains("## Version\n\n`null`"));
        assert!(output.contains("### `ua`"));
        assert!(output.contains("- success: false"));
        assert!(output.contains("write failed"));
        assert!(output.contains("- `k`: present"));
        assert!(output.contains("- `k`: `/c/k.json`"));
    }

    #[test]
    fn test_render_raw() {
        let items = vec![
            OutputItem::version(Some(json!("6009"))),
            OutputItem::item("n", "/c/n.json", CacheResult::hit(json!(7))),
            OutputItem::presence("n", false),
        ];
        let output = renderer(OutputFormat::Raw).render(&items);

        assert_eq!(output, "6009\n7\nfalse");
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = renderer(OutputFormat::Raw);
        let mut buffer = Vec::new();
        renderer
            .render_to(&[OutputItem::path("k", "/c/k.json")], &mut buffer)
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "/c/k.json\n");
    }
}
