// src/tokens/pool.rs
use bevy::prelude::*;
use std::collections::HashSet;
use std::fmt;

/// Ein einzelner anzuzeigender Begriff (Turtle-Befehl).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Rohliste inkl. Duplikaten, wird erst durch build_pool bereinigt
pub const TURTLE_COMMANDS: [&str; 84] = [
    "Command", "FORWARD", "BACK", "RIGHT", "LEFT", "PENUP", "PENDOWN",
    "SETPOS", "SETHEADING", "HOME", "CLEARSCREEN", "CLEAN", "HIDETURTLE",
    "SHOWTURTLE", "PENCOLOR", "BACKGROUND", "WRAP", "FENCE", "WINDOW",
    "SUM", "DIFFERENCE", "PRODUCT", "QUOTIENT", "REMAINDER", "SQRT",
    "RANDOM", "SIN", "COS", "TAN", "ARCTAN", "TO", "END", "REPEAT", "IF",
    "IFELSE", "STOP", "OUTPUT", "MAKE", "WAIT", "GO", "LABEL", "OP",
    "BACKGROUND", "BACK", "CLEARSCREEN", "FORWARD", "HIDETURTLE", "LEFT",
    "PENCOLOR", "PENDOWN", "PENUP", "RIGHT", "SETHEADING", "SHOWTURTLE",
    "SETPOS", "HOME", "CLEAN", "WRAP", "FENCE", "WINDOW", "BG", "BK",
    "CS", "FD", "HT", "LT", "PC", "PD", "PU", "RT", "SETH", "ST", "FD",
    "BK", "RT", "LT", "PU", "PD", "SETH", "CS", "HT", "ST", "PC", "BG",
];

/// Entfernt Duplikate (exakter, case-sensitiver Vergleich) und behält
/// die Reihenfolge des ersten Auftretens bei.
pub fn build_pool<I, S>(raw: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|entry| {
            let entry = entry.as_ref();
            seen.insert(entry.to_owned()).then(|| Token::new(entry))
        })
        .collect()
}

/// Deduplizierte Menge aller Begriffe. Wird einmal beim Start aufgebaut.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TokenPool {
    tokens: Vec<Token>,
}

impl TokenPool {
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: build_pool(raw),
        }
    }

    pub fn turtle_commands() -> Self {
        Self::from_raw(TURTLE_COMMANDS)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenPool {
    fn default() -> Self {
        Self::turtle_commands()
    }
}
