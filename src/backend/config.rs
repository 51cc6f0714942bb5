//! Emission configuration for generated Java classes.

/// Indentation unit for generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tabs,
    Spaces(usize),
}

impl IndentStyle {
    /// The text of one indentation level.
    pub fn unit(self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(width) => " ".repeat(width),
        }
    }
}

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Indentation unit for every nesting level
    pub indent: IndentStyle,
    /// Name of the public method generated for the entry function
    pub entry_method: String,
    /// Declared type of inferred member fields and constructor parameters
    pub member_type: String,
    /// Class name override; `None` derives it from the program id
    pub class_name: Option<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Tabs,
            entry_method: "start".to_string(),
            member_type: "Object".to_string(),
            class_name: None,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation style
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the entry method name
    pub fn with_entry_method(mut self, name: impl Into<String>) -> Self {
        self.entry_method = name.into();
        self
    }

    /// Set the member field type
    pub fn with_member_type(mut self, ty: impl Into<String>) -> Self {
        self.member_type = ty.into();
        self
    }

    /// Override the generated class name
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }
}
