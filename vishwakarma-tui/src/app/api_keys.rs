use thiserror::Error;

use super::state::TextInput;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("Please enter at least one API key")]
    NoKeys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyField {
    Instagram,
    YouTube,
    Flipkart,
    Custom,
}

impl ApiKeyField {
    pub const ALL: [ApiKeyField; 4] = [
        ApiKeyField::Instagram,
        ApiKeyField::YouTube,
        ApiKeyField::Flipkart,
        ApiKeyField::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApiKeyField::Instagram => "Instagram",
            ApiKeyField::YouTube => "YouTube",
            ApiKeyField::Flipkart => "Flipkart",
            ApiKeyField::Custom => "Custom key",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ApiKeyField::Instagram => ApiKeyField::YouTube,
            ApiKeyField::YouTube => ApiKeyField::Flipkart,
            ApiKeyField::Flipkart => ApiKeyField::Custom,
            ApiKeyField::Custom => ApiKeyField::Instagram,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ApiKeyField::Instagram => ApiKeyField::Custom,
            ApiKeyField::YouTube => ApiKeyField::Instagram,
            ApiKeyField::Flipkart => ApiKeyField::YouTube,
            ApiKeyField::Custom => ApiKeyField::Flipkart,
        }
    }
}

/// The API key prompt. Values live only as long as the form is open.
#[derive(Debug, Clone)]
pub struct ApiKeyForm {
    pub instagram: TextInput,
    pub youtube: TextInput,
    pub flipkart: TextInput,
    pub custom_input: TextInput,
    custom_keys: Vec<String>,
    pub focused: ApiKeyField,
}

impl Default for ApiKeyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiKeyForm {
    pub fn new() -> Self {
        Self {
            instagram: TextInput::new(),
            youtube: TextInput::new(),
            flipkart: TextInput::new(),
            custom_input: TextInput::new(),
            custom_keys: Vec::new(),
            focused: ApiKeyField::Instagram,
        }
    }

    pub fn custom_keys(&self) -> &[String] {
        &self.custom_keys
    }

    pub fn input(&self, field: ApiKeyField) -> &TextInput {
        match field {
            ApiKeyField::Instagram => &self.instagram,
            ApiKeyField::YouTube => &self.youtube,
            ApiKeyField::Flipkart => &self.flipkart,
            ApiKeyField::Custom => &self.custom_input,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            ApiKeyField::Instagram => &mut self.instagram,
            ApiKeyField::YouTube => &mut self.youtube,
            ApiKeyField::Flipkart => &mut self.flipkart,
            ApiKeyField::Custom => &mut self.custom_input,
        }
    }

    /// Move the custom input into the key list. Blank input is ignored.
    pub fn add_custom_key(&mut self) -> bool {
        let key = self.custom_input.value.trim();
        if key.is_empty() {
            return false;
        }
        self.custom_keys.push(key.to_string());
        self.custom_input.clear();
        true
    }

    pub fn provided_count(&self) -> usize {
        [&self.instagram, &self.youtube, &self.flipkart]
            .iter()
            .filter(|input| !input.value.trim().is_empty())
            .count()
            + self.custom_keys.len()
    }
}

/// Session acknowledgment guarding the statistics segment.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyGate {
    acknowledged: bool,
    pub form: Option<ApiKeyForm>,
}

impl ApiKeyGate {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn is_prompting(&self) -> bool {
        self.form.is_some()
    }

    /// Open the form unless the session is already acknowledged.
    pub fn prompt(&mut self) {
        if !self.acknowledged && self.form.is_none() {
            self.form = Some(ApiKeyForm::new());
        }
    }

    pub fn dismiss(&mut self) {
        self.form = None;
    }

    /// Accept the form. Keys are dropped with the form; they are never sent.
    pub fn save(&mut self) -> Result<(), ApiKeyError> {
        let provided = self.form.as_ref().map(ApiKeyForm::provided_count).unwrap_or(0);
        if provided == 0 {
            return Err(ApiKeyError::NoKeys);
        }
        self.acknowledged = true;
        self.form = None;
        Ok(())
    }
}

/// Display form of a key: `****yz` for short keys, `abc***xyz` otherwise.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 6 {
        let hidden = len.saturating_sub(2);
        let mut masked = "*".repeat(hidden);
        masked.extend(&chars[hidden..]);
        return masked;
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[len - 3..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_short_and_long_keys() {
        assert_eq!(mask_key(""), "");
        assert_eq!(mask_key("a"), "a");
        assert_eq!(mask_key("abcdef"), "****ef");
        assert_eq!(mask_key("abcdefg"), "abc***efg");
        assert_eq!(mask_key("sk-live-123456"), "sk-***456");
    }

    #[test]
    fn masking_counts_characters_not_bytes() {
        assert_eq!(mask_key("ключ"), "**юч");
    }

    #[test]
    fn save_requires_a_key() {
        let mut gate = ApiKeyGate::default();
        gate.prompt();
        gate.form.as_mut().unwrap().youtube = TextInput::from_str("   ");

        assert_eq!(gate.save(), Err(ApiKeyError::NoKeys));
        assert!(gate.is_prompting());
        assert!(!gate.is_acknowledged());
    }

    #[test]
    fn one_named_key_is_enough() {
        let mut gate = ApiKeyGate::default();
        gate.prompt();
        gate.form.as_mut().unwrap().flipkart = TextInput::from_str("fk_123");

        gate.save().unwrap();
        assert!(gate.is_acknowledged());
        assert!(!gate.is_prompting());

        gate.prompt();
        assert!(!gate.is_prompting());
    }

    #[test]
    fn custom_key_alone_is_enough() {
        let mut gate = ApiKeyGate::default();
        gate.prompt();
        let form = gate.form.as_mut().unwrap();
        form.custom_input = TextInput::from_str("   ");
        assert!(!form.add_custom_key());
        form.custom_input = TextInput::from_str(" shopify-key ");
        assert!(form.add_custom_key());
        assert_eq!(form.custom_keys(), ["shopify-key".to_string()]);
        assert!(form.custom_input.value.is_empty());

        assert!(gate.save().is_ok());
    }

    #[test]
    fn dismiss_keeps_gate_closed() {
        let mut gate = ApiKeyGate::default();
        gate.prompt();
        gate.dismiss();
        assert!(!gate.is_prompting());
        assert!(!gate.is_acknowledged());
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut field = ApiKeyField::Instagram;
        for _ in 0..ApiKeyField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, ApiKeyField::Instagram);
        assert_eq!(field.previous(), ApiKeyField::Custom);
    }
}
