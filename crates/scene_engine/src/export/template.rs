//! Slot templates
//!
//! A template is literal text with `{{name}}` placeholders. Parsing splits it
//! into literal and slot segments once; rendering substitutes values from an
//! ordered [`SlotValues`] map and fails on any slot without a value, so a
//! half-filled document is never produced.

use std::collections::BTreeMap;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Template parse and render errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{{` without a matching `}}`
    #[error("template '{template}': unterminated placeholder at byte {offset}")]
    Unterminated {
        /// Template name
        template: &'static str,
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// Placeholder name is empty or not an identifier
    #[error("template '{template}': invalid slot name '{name}' at byte {offset}")]
    InvalidSlot {
        /// Template name
        template: &'static str,
        /// Offending name
        name: String,
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// No value supplied for a slot
    #[error("template '{template}': no value for slot '{slot}'")]
    MissingSlot {
        /// Template name
        template: &'static str,
        /// Slot name
        slot: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// Parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    segments: Vec<Segment>,
}

impl Template {
    /// Split `source` into literal and slot segments
    pub fn parse(name: &'static str, source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or(TemplateError::Unterminated {
                template: name,
                offset: consumed + start,
            })?;

            let slot = after_open[..end].trim();
            let is_ident = !slot.is_empty() && slot.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !is_ident {
                return Err(TemplateError::InvalidSlot {
                    template: name,
                    name: slot.to_string(),
                    offset: consumed + start,
                });
            }
            segments.push(Segment::Slot(slot.to_string()));

            let advance = start + OPEN.len() + end + CLOSE.len();
            consumed += advance;
            rest = &rest[advance..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    /// Template name used in errors
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Slot names in order of appearance, duplicates included
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every slot
    pub fn render(&self, values: &SlotValues) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => {
                    let value = values.get(slot).ok_or_else(|| TemplateError::MissingSlot {
                        template: self.name,
                        slot: slot.clone(),
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Ordered slot values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues(BTreeMap<String, String>);

impl SlotValues {
    /// Empty value map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a slot value
    pub fn with(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(slot.into(), value.into());
        self
    }

    /// Value for a slot
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_slots() {
        let template = Template::parse("t", "name = {{ name }}, again {{name}}; {x}").unwrap();
        let out = template.render(&SlotValues::new().with("name", "\"demo\"")).unwrap();
        assert_eq!(out, "name = \"demo\", again \"demo\"; {x}");
        assert_eq!(template.slots().collect::<Vec<_>>(), ["name", "name"]);
    }

    #[test]
    fn test_missing_slot_fails() {
        let template = Template::parse("t", "a {{b}} c").unwrap();
        let err = template.render(&SlotValues::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingSlot {
                template: "t",
                slot: "b".to_string()
            }
        );
    }

    #[test]
    fn test_unterminated_and_invalid() {
        assert!(matches!(
            Template::parse("t", "ok {{oops"),
            Err(TemplateError::Unterminated { offset: 3, .. })
        ));
        assert!(matches!(
            Template::parse("t", "{{ two words }}"),
            Err(TemplateError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn test_single_braces_are_literal() {
        let source = "fn main() {\n    run();\n}\n";
        let template = Template::parse("t", source).unwrap();
        assert_eq!(template.render(&SlotValues::new()).unwrap(), source);
    }
}
