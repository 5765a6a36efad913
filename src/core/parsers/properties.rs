use anyhow::Result;

use super::{Entity, EntityParser};

/// Java-style `.properties` parser.
///
/// Supports `key=value`, `key: value` and `key value` separators, `#` and
/// `!` comments, and lines continued with a trailing backslash. Values are
/// kept raw: escapes like `\n` or `\u00e9` are not decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertiesParser;

impl EntityParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        let mut lines = content.lines();

        while let Some(line) = lines.next() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_key_value(&logical);
            if !key.is_empty() {
                entities.push(Entity::new(key, value));
            }
        }

        Ok(entities)
    }
}

/// A line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix('=')
                    .or_else(|| rest.strip_prefix(':'))
                    .unwrap_or(rest);
                return (&line[..i], rest.trim_start());
            }
            _ => {}
        }
    }
    (line, "")
}
