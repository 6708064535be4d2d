use crate::catalog::Language;

/// Which catalog source produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Fixed,
    Dynamic,
    Promo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub language: Language,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind, language: Language) -> Self {
        Self {
            text: text.into(),
            kind,
            language,
        }
    }

    pub fn is_promo(&self) -> bool {
        self.kind == MessageKind::Promo
    }
}
