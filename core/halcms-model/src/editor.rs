use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::content_type::PropertyDefinition;

/// A format problem reported by a property editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyViolation {
    pub message: String,
}

impl PropertyViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Owns the storage format and validation of a single property.
///
/// Editors are looked up by alias in an [`EditorRegistry`]. The required
/// check is run by the caller before `validate`, so implementations only need
/// to look at non-empty values.
pub trait PropertyEditor: Send + Sync {
    /// The alias property definitions use to refer to this editor.
    fn alias(&self) -> &str;

    /// Whether every property using this editor is mandatory, regardless of
    /// its definition.
    fn is_required(&self) -> bool {
        false
    }

    /// Checks a non-empty value. Every returned violation becomes one error.
    fn validate(&self, value: &Value, definition: &PropertyDefinition) -> Vec<PropertyViolation> {
        let _ = (value, definition);
        Vec::new()
    }
}

/// Read-only set of property editors, built once and shared.
#[derive(Clone, Default)]
pub struct EditorRegistry {
    editors: HashMap<String, Arc<dyn PropertyEditor>>,
}

impl EditorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in editors.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_editor(TextboxEditor::default())
            .with_editor(TextboxEditor::multiline())
            .with_editor(IntegerEditor)
            .with_editor(BooleanEditor)
    }

    /// Adds an editor, replacing any editor with the same alias.
    #[must_use]
    pub fn with_editor(mut self, editor: impl PropertyEditor + 'static) -> Self {
        self.register(Arc::new(editor));
        self
    }

    pub fn register(&mut self, editor: Arc<dyn PropertyEditor>) {
        self.editors.insert(editor.alias().to_string(), editor);
    }

    pub fn get(&self, alias: &str) -> Option<&Arc<dyn PropertyEditor>> {
        self.editors.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.editors.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl std::fmt::Debug for EditorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut aliases: Vec<&str> = self.editors.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        f.debug_struct("EditorRegistry")
            .field("editors", &aliases)
            .finish()
    }
}

// ── Built-in editors ─────────────────────────────────────────────

/// Plain text. Accepts strings only, optionally capped in length.
#[derive(Debug, Clone)]
pub struct TextboxEditor {
    alias: &'static str,
    max_length: Option<usize>,
}

impl TextboxEditor {
    pub const ALIAS: &'static str = "textbox";
    pub const MULTILINE_ALIAS: &'static str = "textarea";

    /// Single-line text capped at 512 characters.
    pub fn single_line() -> Self {
        Self {
            alias: Self::ALIAS,
            max_length: Some(512),
        }
    }

    /// Unbounded multi-line text.
    pub fn multiline() -> Self {
        Self {
            alias: Self::MULTILINE_ALIAS,
            max_length: None,
        }
    }
}

impl Default for TextboxEditor {
    fn default() -> Self {
        Self::single_line()
    }
}

impl PropertyEditor for TextboxEditor {
    fn alias(&self) -> &str {
        self.alias
    }

    fn validate(&self, value: &Value, _definition: &PropertyDefinition) -> Vec<PropertyViolation> {
        let Some(text) = value.as_str() else {
            return vec![PropertyViolation::new("value must be a string")];
        };
        match self.max_length {
            Some(max) if text.chars().count() > max => vec![PropertyViolation::new(format!(
                "value must be at most {max} characters"
            ))],
            _ => Vec::new(),
        }
    }
}

/// Whole numbers, given as JSON integers or numeric strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerEditor;

impl IntegerEditor {
    pub const ALIAS: &'static str = "integer";
}

impl PropertyEditor for IntegerEditor {
    fn alias(&self) -> &str {
        Self::ALIAS
    }

    fn validate(&self, value: &Value, _definition: &PropertyDefinition) -> Vec<PropertyViolation> {
        let ok = match value {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        };
        if ok {
            Vec::new()
        } else {
            vec![PropertyViolation::new("value must be an integer")]
        }
    }
}

/// True/false, given as a JSON bool, `0`/`1`, or `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanEditor;

impl BooleanEditor {
    pub const ALIAS: &'static str = "boolean";
}

impl PropertyEditor for BooleanEditor {
    fn alias(&self) -> &str {
        Self::ALIAS
    }

    fn validate(&self, value: &Value, _definition: &PropertyDefinition) -> Vec<PropertyViolation> {
        let ok = match value {
            Value::Bool(_) => true,
            Value::Number(n) => matches!(n.as_i64(), Some(0) | Some(1)),
            Value::String(s) => matches!(s.trim(), "true" | "false" | "0" | "1"),
            _ => false,
        };
        if ok {
            Vec::new()
        } else {
            vec![PropertyViolation::new("value must be true or false")]
        }
    }
}
