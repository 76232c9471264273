use std::collections::BTreeMap;

/// Edits requested for a single transform call.
///
/// Built once by the request decoder and only read by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    /// Target width as sent by the caller
    pub width: Option<String>,

    /// Target height as sent by the caller
    pub height: Option<String>,

    /// Element id -> replacement text
    pub text_replacements: BTreeMap<String, String>,

    /// Element id -> replacement fill color
    pub color_replacements: BTreeMap<String, String>,
}

impl EditRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = non_empty(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = non_empty(height.into());
        self
    }

    pub fn with_text(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.text_replacements.insert(id.into(), text.into());
        self
    }

    pub fn with_color(mut self, id: impl Into<String>, color: impl Into<String>) -> Self {
        self.color_replacements.insert(id.into(), color.into());
        self
    }

    /// True when either dimension was requested
    pub fn has_dimensions(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_dimensions()
            && self.text_replacements.is_empty()
            && self.color_replacements.is_empty()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dimension_is_absent() {
        let request = EditRequest::new().with_width("").with_height("200");
        assert_eq!(request.width, None);
        assert_eq!(request.height.as_deref(), Some("200"));
        assert!(request.has_dimensions());
    }

    #[test]
    fn test_is_empty() {
        assert!(EditRequest::new().is_empty());
        assert!(!EditRequest::new().with_color("bg", "#fff").is_empty());
    }
}
