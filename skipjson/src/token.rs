// SPDX-License-Identifier: Apache-2.0

//! Tokens produced by the [`Lexer`](crate::Lexer) and consumed by the parsers.

use alloc::string::{String, ToString};

/// The classification of a [`Token`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A quoted run of characters, `"..."` or `'...'`.
    String,
    /// Digits with at most one `.`.
    Number,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
}

impl Kind {
    /// Upper-snake name used when a token is shown in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::ObjectStart => "OBJECT_START",
            Kind::ObjectEnd => "OBJECT_END",
            Kind::ArrayStart => "ARRAY_START",
            Kind::ArrayEnd => "ARRAY_END",
            Kind::Comma => "COMMA",
            Kind::Colon => "COLON",
            Kind::String => "STRING",
            Kind::Number => "NUMBER",
            Kind::Boolean => "BOOLEAN",
            Kind::Null => "NULL",
        }
    }

    /// Returns true for the six single-character structural kinds.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Kind::ObjectStart
                | Kind::ObjectEnd
                | Kind::ArrayStart
                | Kind::ArrayEnd
                | Kind::Comma
                | Kind::Colon
        )
    }
}

/// A single lexical unit with an optional text payload.
///
/// Strings, numbers and booleans carry their text. Structural tokens and
/// `null` carry nothing; a null token is recognised by its kind alone.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    kind: Kind,
    payload: Option<String>,
}

impl Token {
    /// Creates a payload-less structural token.
    ///
    /// # Panics
    ///
    /// In debug builds, if `kind` is not structural (see
    /// [`Kind::is_structural`]). Use [`Token::null`] for a null token.
    pub fn structural(kind: Kind) -> Self {
        debug_assert!(kind.is_structural());
        Self {
            kind,
            payload: None,
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: Kind::String,
            payload: Some(text.into()),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: Kind::Number,
            payload: Some(text.into()),
        }
    }

    /// Creates a boolean token whose payload is the canonical `"true"`/`"false"`.
    pub fn boolean(value: bool) -> Self {
        Self {
            kind: Kind::Boolean,
            payload: Some(value.to_string()),
        }
    }

    pub fn null() -> Self {
        Self {
            kind: Kind::Null,
            payload: None,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.payload {
            Some(text) => write!(f, "(\"{}\", \"{}\")", self.kind.name(), text),
            None => write!(f, "(\"{}\", null)", self.kind.name()),
        }
    }
}
