use anyhow::Result;
use fluent_syntax::{ast, parser, serializer};
use tracing::debug;

use super::{Entity, EntityParser};

/// Identifier used when serializing a lone pattern back to source.
const PLACEHOLDER_ID: &str = "entry";

/// Fluent (`.ftl`) parser.
///
/// Messages are keyed by their id and terms by `-id`. The raw value is the
/// source form of the entry's value; attributes are not part of it, and a
/// message without a value yields an empty string. Comments and junk are
/// skipped, so a file with syntax errors still yields its valid entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FluentParser;

impl EntityParser for FluentParser {
    fn parse(&self, content: &str) -> Result<Vec<Entity>> {
        let resource = match parser::parse(content) {
            Ok(res) => res,
            Err((res, errors)) => {
                debug!("Ignoring {} Fluent syntax error(s)", errors.len());
                res
            }
        };

        let entities = resource
            .body
            .iter()
            .filter_map(|entry| match entry {
                ast::Entry::Message(msg) => Some(Entity::new(
                    msg.id.name,
                    msg.value.as_ref().map(pattern_source).unwrap_or_default(),
                )),
                ast::Entry::Term(term) => Some(Entity::new(
                    format!("-{}", term.id.name),
                    pattern_source(&term.value),
                )),
                _ => None,
            })
            .collect();

        Ok(entities)
    }
}

/// Serialize a pattern the way it appears to the right of `=`.
fn pattern_source(pattern: &ast::Pattern<&str>) -> String {
    let resource = ast::Resource {
        body: vec![ast::Entry::Message(ast::Message {
            id: ast::Identifier {
                name: PLACEHOLDER_ID,
            },
            value: Some(pattern.clone()),
            attributes: Vec::new(),
            comment: None,
        })],
    };
    let serialized = serializer::serialize(&resource);

    serialized
        .strip_prefix(PLACEHOLDER_ID)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .unwrap_or(&serialized)
        .trim()
        .to_string()
}
