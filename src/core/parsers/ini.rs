use anyhow::Result;

use super::{Entity, EntityParser};

/// `.ini` parser. Section headers are skipped and do not prefix keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IniParser;

impl EntityParser for IniParser {
    fn parse(&self, content: &str) -> Result<Vec<Entity>> {
        let entities = content
            .lines()
            .map(str::trim)
            .filter(|line| {
                !(line.is_empty()
                    || line.starts_with(';')
                    || line.starts_with('#')
                    || line.starts_with('['))
            })
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| Entity::new(key.trim(), value.trim()))
            .filter(|entity| !entity.key.is_empty())
            .collect();
        Ok(entities)
    }
}
