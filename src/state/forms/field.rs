//! Form field descriptors

/// One choice in a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value stored in form data and sent to the backend
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a field is edited and rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Password { strength_meter: bool },
    Select(Vec<SelectOption>),
    /// `YYYY-MM-DD`
    Date,
    Number,
}

/// Static description of a single form field. Values live in the
/// controller's form data, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub help: Option<&'static str>,
    pub max_length: Option<usize>,
    pub read_only: bool,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: None,
            help: None,
            max_length: None,
            read_only: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn password(name: &'static str, label: &'static str, strength_meter: bool) -> Self {
        Self::new(name, label, FieldKind::Password { strength_meter })
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date).with_placeholder("YYYY-MM-DD")
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Textarea)
    }

    pub fn is_password(&self) -> bool {
        matches!(self.kind, FieldKind::Password { .. })
    }

    pub fn shows_strength_meter(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Password {
                strength_meter: true
            }
        )
    }

    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Label of the option whose value is `value`, or the raw value
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }

    /// Whether a typed character may be appended to this field
    pub fn accepts_char(&self, c: char, current_len: usize) -> bool {
        if self.read_only {
            return false;
        }
        if self.max_length.is_some_and(|max| current_len >= max) {
            return false;
        }
        match self.kind {
            FieldKind::Select(_) => false,
            FieldKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            _ => true,
        }
    }
}

/// Visual state of a validated input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisualState {
    Neutral,
    Valid,
    Invalid,
}

impl FieldVisualState {
    pub fn of(touched: bool, error: Option<&str>, value: &str) -> Self {
        match (touched, error) {
            (true, Some(_)) => Self::Invalid,
            (true, None) if !value.is_empty() => Self::Valid,
            _ => Self::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_state_untouched_is_neutral_even_with_error() {
        assert_eq!(
            FieldVisualState::of(false, Some("Name is required"), ""),
            FieldVisualState::Neutral
        );
    }

    #[test]
    fn test_visual_state_touched_with_error_is_invalid() {
        assert_eq!(
            FieldVisualState::of(true, Some("bad"), "x"),
            FieldVisualState::Invalid
        );
    }

    #[test]
    fn test_visual_state_touched_empty_without_error_is_neutral() {
        assert_eq!(FieldVisualState::of(true, None, ""), FieldVisualState::Neutral);
    }

    #[test]
    fn test_visual_state_touched_filled_is_valid() {
        assert_eq!(FieldVisualState::of(true, None, "ok"), FieldVisualState::Valid);
    }

    #[test]
    fn test_select_option_label_lookup() {
        let field = FieldSpec::select(
            "priority",
            "Priority",
            vec![SelectOption::new("high", "High"), SelectOption::new("low", "Low")],
        );
        assert_eq!(field.option_label("high"), "High");
        assert_eq!(field.option_label("unknown"), "unknown");
    }

    #[test]
    fn test_accepts_char_respects_kind_and_limits() {
        let number = FieldSpec::number("years", "Years");
        assert!(number.accepts_char('4', 0));
        assert!(!number.accepts_char('x', 0));

        let limited = FieldSpec::text("title", "Title").with_max_length(3);
        assert!(limited.accepts_char('a', 2));
        assert!(!limited.accepts_char('a', 3));

        let locked = FieldSpec::text("id", "ID").read_only();
        assert!(!locked.accepts_char('a', 0));

        let select = FieldSpec::select("s", "S", vec![]);
        assert!(!select.accepts_char('a', 0));
    }

    #[test]
    fn test_password_flags() {
        let pw = FieldSpec::password("password", "Password", true);
        assert!(pw.is_password());
        assert!(pw.shows_strength_meter());
        let confirm = FieldSpec::password("confirm_password", "Confirm", false);
        assert!(!confirm.shows_strength_meter());
        assert!(!FieldSpec::textarea("d", "D").is_password());
    }
}
