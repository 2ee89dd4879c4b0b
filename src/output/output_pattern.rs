use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Destination template for output tables.
///
/// A `{shard}` placeholder is replaced by the 1-based shard index;
/// `{shard:0N}` zero-pads it to at least `N` digits, so
/// `train_{shard:02}.csv` renders to `train_01.csv`, `train_02.csv`, ...
/// Literal braces are written `{{` and `}}`. A template without a
/// placeholder names one fixed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputPattern {
    pub template: String,
}

/// A parsed `OutputPattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardTemplate {
    prefix: String,
    /// Pad width of the placeholder; `None` when the template is a fixed path.
    pad: Option<usize>,
    suffix: String,
}

impl OutputPattern {
    pub fn new(template: impl Into<String>) -> Self {
        OutputPattern { template: template.into() }
    }

    /// Template for `dir` joined with `relative`, with any braces in `dir`
    /// escaped so only placeholders in `relative` are interpreted.
    pub fn in_dir(dir: &Path, relative: &str) -> Self {
        let dir = escape(&dir.to_string_lossy());
        let template = if dir.is_empty() {
            relative.to_owned()
        } else {
            Path::new(&dir).join(relative).to_string_lossy().into_owned()
        };
        OutputPattern { template }
    }

    pub fn parse(&self) -> Result<ShardTemplate, ConfigError> {
        let bad = |reason: &str| ConfigError::BadOutputPattern {
            pattern: self.template.clone(),
            reason: reason.to_owned(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut pad: Option<usize> = None;
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    '{'
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    '}'
                }
                '}' => return Err(bad("unmatched }; write }} for a literal brace")),
                '{' => {
                    let mut inner = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => inner.push(ch),
                            None => return Err(bad("unterminated {shard placeholder")),
                        }
                    }
                    let spec = inner
                        .strip_prefix("shard")
                        .ok_or_else(|| bad("unknown placeholder; only {shard} is supported"))?;
                    if pad.is_some() {
                        return Err(bad("only one {shard} placeholder is allowed"));
                    }
                    pad = Some(match spec {
                        "" => 0,
                        s if s.starts_with(":0") && s.len() > 2 => s[2..]
                            .parse::<usize>()
                            .map_err(|_| bad("pad width must be written as {shard:0N}"))?,
                        _ => return Err(bad("pad width must be written as {shard:0N}")),
                    });
                    continue;
                }
                other => other,
            };
            if pad.is_some() {
                suffix.push(literal);
            } else {
                prefix.push(literal);
            }
        }

        Ok(ShardTemplate { prefix, pad, suffix })
    }
}

/// Doubles every brace in `text` so it reads as literal in a template.
pub fn escape(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

impl ShardTemplate {
    pub fn has_placeholder(&self) -> bool {
        self.pad.is_some()
    }

    /// Path of the table with 1-based index `shard`.
    pub fn render(&self, shard: usize) -> PathBuf {
        match self.pad {
            Some(width) => PathBuf::from(format!("{}{:0width$}{}", self.prefix, shard, self.suffix)),
            None => PathBuf::from(&self.prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded_placeholder() {
        let t = OutputPattern::new("out/train_{shard:02}.csv").parse().unwrap();
        assert!(t.has_placeholder());
        assert_eq!(t.render(1), PathBuf::from("out/train_01.csv"));
        assert_eq!(t.render(10), PathBuf::from("out/train_10.csv"));
        assert_eq!(t.render(123), PathBuf::from("out/train_123.csv"));
    }

    #[test]
    fn plain_placeholder_and_fixed_path() {
        let t = OutputPattern::new("part-{shard}.csv").parse().unwrap();
        assert_eq!(t.render(7), PathBuf::from("part-7.csv"));

        let fixed = OutputPattern::new("lfw_grayscale_64.csv").parse().unwrap();
        assert!(!fixed.has_placeholder());
        assert_eq!(fixed.render(3), PathBuf::from("lfw_grayscale_64.csv"));
    }

    #[test]
    fn malformed_templates_are_rejected() {
        for template in ["a_{shard", "a_{shard:2}.csv", "a_{idx}.csv", "{shard}_{shard}.csv", "a_{shard:0x}"] {
            assert!(
                matches!(OutputPattern::new(template).parse(), Err(ConfigError::BadOutputPattern { .. })),
                "{template} should be rejected"
            );
        }
    }

    #[test]
    fn escaped_braces_are_literal() {
        let t = OutputPattern::new("runs/{{a}}/t_{shard:02}_{{b}}.csv").parse().unwrap();
        assert_eq!(t.render(4), PathBuf::from("runs/{a}/t_04_{b}.csv"));
        assert!(matches!(OutputPattern::new("runs/}/t.csv").parse(), Err(ConfigError::BadOutputPattern { .. })));
    }

    #[test]
    fn directory_braces_do_not_become_placeholders() {
        let pattern = OutputPattern::in_dir(Path::new("data/{shard}"), "t_{shard:02}.csv");
        assert_eq!(pattern.template, "data/{{shard}}/t_{shard:02}.csv");
        let t = pattern.parse().unwrap();
        assert_eq!(t.render(2), PathBuf::from("data/{shard}/t_02.csv"));

        let fixed = OutputPattern::in_dir(Path::new("odd}dir"), "all.csv").parse().unwrap();
        assert!(!fixed.has_placeholder());
        assert_eq!(fixed.render(1), PathBuf::from("odd}dir/all.csv"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&OutputPattern::new("t_{shard:03}.csv")).unwrap();
        assert_eq!(json, r#""t_{shard:03}.csv""#);
    }
}
