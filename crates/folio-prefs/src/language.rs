//! UI language selection hook.
//!
//! Loading global settings activates the stored UI language. The codec
//! does not own any localization state; it hands the code to a
//! [`LanguageSelector`] supplied by the caller.

/// Receives the stored UI language code during load.
pub trait LanguageSelector {
    /// Activate `code`. Return `false` if the language is not available,
    /// in which case the settings keep their previous language.
    fn select_language(&mut self, code: &str) -> bool;
}

/// Closures work as selectors.
impl<F: FnMut(&str) -> bool> LanguageSelector for F {
    fn select_language(&mut self, code: &str) -> bool {
        self(code)
    }
}

/// Selector that accepts every code and has no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyLanguage;

impl LanguageSelector for AcceptAnyLanguage {
    fn select_language(&mut self, _code: &str) -> bool {
        true
    }
}

/// Selector that accepts codes from a fixed list.
#[derive(Debug, Clone)]
pub struct SupportedLanguages {
    codes: Vec<String>,
    active: Option<String>,
}

impl SupportedLanguages {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// The last accepted code.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

impl LanguageSelector for SupportedLanguages {
    fn select_language(&mut self, code: &str) -> bool {
        if self.codes.iter().any(|c| c == code) {
            self.active = Some(code.to_string());
            true
        } else {
            tracing::debug!(code, "unsupported UI language");
            false
        }
    }
}
