//! Display and dump formatting for `Value`.
//!
//! `Display` is the canonical string rendering used by string coercion; it is
//! compact and unquoted. `dump` is the human-readable debug rendering with
//! indentation and optional depth/item limits.

use crate::core::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),

            Value::Null => write!(f, "null"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if *n == f64::INFINITY {
                    write!(f, "+Infinity")
                } else if *n == f64::NEG_INFINITY {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "{n}")
                }
            }

            Value::String(s) => write!(f, "{s}"),

            Value::Array(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }

            Value::Object(map) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }

            Value::Date(d) => {
                write!(f, "{}", d.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
            }

            Value::Regexp(re) => write!(f, "{}", re.as_str()),

            Value::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Dump formatting options
#[derive(Debug, Clone, Copy)]
pub struct PrettyConfig {
    /// Indentation string (e.g. "  " or "\t")
    pub indent: &'static str,
    /// Maximum depth before collapsing to `...`
    pub max_depth: Option<usize>,
    /// Maximum array/object items to show per level
    pub max_items: Option<usize>,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self::pretty()
    }
}

impl PrettyConfig {
    /// Standard dump configuration: two-space indent, unbounded
    pub const fn pretty() -> Self {
        Self {
            indent: "  ",
            max_depth: None,
            max_items: None,
        }
    }

    /// Bounded configuration for very large values
    pub const fn limited() -> Self {
        Self {
            indent: "  ",
            max_depth: Some(10),
            max_items: Some(100),
        }
    }
}

impl Value {
    /// Render this value as an indented, human-readable string.
    ///
    /// Depth is unbounded by default and the tree is owned, so the rendering
    /// always terminates. Strings are quoted here, unlike `Display`.
    pub fn dump(&self) -> String {
        self.dump_with(&PrettyConfig::pretty())
    }

    /// Render with custom configuration
    pub fn dump_with(&self, config: &PrettyConfig) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.dump_recursive(&mut out, config, 0);
        out
    }

    fn dump_recursive(
        &self,
        out: &mut String,
        config: &PrettyConfig,
        depth: usize,
    ) -> fmt::Result {
        use std::fmt::Write;

        if let Some(max) = config.max_depth {
            if depth >= max {
                return write!(out, "...");
            }
        }

        match self {
            Value::String(s) => write!(out, "\"{s}\""),
            Value::Date(_) => write!(out, "\"{self}\""),
            Value::Regexp(_) => write!(out, "/{self}/"),
            Value::Error(_) => write!(out, "[{self}]"),

            Value::Array(items) => {
                if items.is_empty() {
                    return write!(out, "[]");
                }
                let shown = config.max_items.unwrap_or(items.len()).min(items.len());
                writeln!(out, "[")?;
                for (idx, item) in items.iter().take(shown).enumerate() {
                    indent_to(out, config, depth + 1);
                    item.dump_recursive(out, config, depth + 1)?;
                    if idx + 1 < items.len() {
                        write!(out, ",")?;
                    }
                    writeln!(out)?;
                }
                if shown < items.len() {
                    indent_to(out, config, depth + 1);
                    writeln!(out, "... ({} more)", items.len() - shown)?;
                }
                indent_to(out, config, depth);
                write!(out, "]")
            }

            Value::Object(map) => {
                if map.is_empty() {
                    return write!(out, "{{}}");
                }
                let shown = config.max_items.unwrap_or(map.len()).min(map.len());
                writeln!(out, "{{")?;
                for (idx, (key, value)) in map.iter().take(shown).enumerate() {
                    indent_to(out, config, depth + 1);
                    write!(out, "{key}: ")?;
                    value.dump_recursive(out, config, depth + 1)?;
                    if idx + 1 < map.len() {
                        write!(out, ",")?;
                    }
                    writeln!(out)?;
                }
                if shown < map.len() {
                    indent_to(out, config, depth + 1);
                    writeln!(out, "... ({} more)", map.len() - shown)?;
                }
                indent_to(out, config, depth);
                write!(out, "}}")
            }

            // Scalars render as in Display.
            _ => write!(out, "{self}"),
        }
    }
}

fn indent_to(out: &mut String, config: &PrettyConfig, depth: usize) {
    for _ in 0..depth {
        out.push_str(config.indent);
    }
}
