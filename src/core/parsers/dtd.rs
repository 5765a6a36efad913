use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::{Entity, EntityParser};

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([^\s"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#).unwrap()
});

static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// `.dtd` parser for `<!ENTITY key "value">` declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DtdParser;

impl EntityParser for DtdParser {
    fn parse(&self, content: &str) -> Result<Vec<Entity>> {
        let content = COMMENT_REGEX.replace_all(content, "");
        let entities = ENTITY_REGEX
            .captures_iter(&content)
            .map(|caps| {
                let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
                Entity::new(&caps[1], value)
            })
            .collect();
        Ok(entities)
    }
}
