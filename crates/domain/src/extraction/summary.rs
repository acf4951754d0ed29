use std::sync::OnceLock;

use regex::Regex;

/// Stop collecting description lines once this many characters are gathered.
const DESCRIPTION_TARGET_CHARS: usize = 100;
/// Hard cap on the heading-derived description.
const DESCRIPTION_MAX_CHARS: usize = 200;

const FRONTMATTER_DELIMITER: &str = "---";

/// Which strategy produced a [`Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrigin {
    Frontmatter,
    Heading,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub description: String,
    pub origin: SummaryOrigin,
}

impl Summary {
    fn empty() -> Self {
        Self { title: String::new(), description: String::new(), origin: SummaryOrigin::None }
    }
}

/// Title and description of a document, frontmatter first, then the first `# ` heading.
///
/// A recognized frontmatter block always wins, even when it carries neither key.
pub fn extract_summary(content: &str) -> Summary {
    if let Some(block) = frontmatter_block(content) {
        return Summary {
            title: frontmatter_value(&block, "title").unwrap_or_default(),
            description: frontmatter_value(&block, "description").unwrap_or_default(),
            origin: SummaryOrigin::Frontmatter,
        };
    }
    from_heading(content).unwrap_or_else(Summary::empty)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == FRONTMATTER_DELIMITER
}

/// Lines between the opening `---` on the first line and the next `---` line.
fn frontmatter_block(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    if !lines.next().is_some_and(is_delimiter) {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if is_delimiter(line) {
            return Some(block);
        }
        block.push(line);
    }
    None
}

fn key_value_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*([A-Za-z_][\w-]*)\s*:\s*(?:"([^"]*)"|'([^']*)')"#).expect("static frontmatter regex")
    })
}

/// Quoted value of `key`; the first occurrence wins. Unquoted values are ignored.
fn frontmatter_value(block: &[&str], key: &str) -> Option<String> {
    let re = key_value_regex();
    block.iter().find_map(|line| {
        let caps = re.captures(line)?;
        if caps.get(1)?.as_str() != key {
            return None;
        }
        caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str().to_string())
    })
}

fn from_heading(content: &str) -> Option<Summary> {
    let mut lines = content.lines();
    let title = lines.by_ref().find_map(|line| line.strip_prefix("# "))?.trim().to_string();

    let mut description = String::new();
    let mut collected = 0usize;
    for line in lines {
        let text = line.trim();
        if text.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if !description.is_empty() {
            description.push(' ');
            collected += 1;
        }
        description.push_str(text);
        collected += text.chars().count();
        if collected >= DESCRIPTION_TARGET_CHARS {
            break;
        }
    }

    Some(Summary {
        title,
        description: truncate_chars(description, DESCRIPTION_MAX_CHARS),
        origin: SummaryOrigin::Heading,
    })
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
