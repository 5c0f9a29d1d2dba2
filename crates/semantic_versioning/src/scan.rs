pub(crate) const DOT: &str = ".";
pub(crate) const PRE_RELEASE: &str = "-";
pub(crate) const BUILD_METADATA: &str = "+";

const DIGIT: u8 = 0b01;
const IDENTIFIER: u8 = 0b10;

// byte -> class bits, anything outside of ASCII has no class
static CLASSES: [u8; 256] = build_classes();

const fn build_classes() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let c = i as u8;
        if c.is_ascii_digit() {
            table[i] = DIGIT | IDENTIFIER;
        } else if c.is_ascii_alphabetic() || c == b'-' {
            table[i] = IDENTIFIER;
        }
        i += 1;
    }
    table
}

/// The two character classes a version string is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `0-9`
    Digits,
    /// `0-9`, `A-Z`, `a-z` and `-`
    Identifier,
}

impl CharClass {
    fn bits(self) -> u8 {
        match self {
            Self::Digits => DIGIT,
            Self::Identifier => IDENTIFIER,
        }
    }

    fn contains_byte(self, b: u8) -> bool {
        CLASSES[b as usize] & self.bits() != 0
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.contains_byte(c as u8)
    }

    /// non-empty and made only of this class
    pub fn matches(self, s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| self.contains_byte(b))
    }
}

// --- Scanner -------------------------------------------------------

/// A cursor over a version string.
///
/// Every scan either consumes a run of ASCII characters or nothing at all, so the
/// cursor always sits on a char boundary and its byte position equals the number
/// of characters consumed so far.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// move the cursor back to an earlier position returned by [Scanner::position]
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    /// Consume the longest run of characters in `class`.
    /// An empty slice means nothing matched and the cursor did not move.
    pub fn scan(&mut self, class: CharClass) -> &'a str {
        let start = self.pos;
        let len = self.input.as_bytes()[start..]
            .iter()
            .take_while(|b| class.contains_byte(**b))
            .count();
        self.pos += len;
        &self.input[start..self.pos]
    }

    pub fn scan_digits(&mut self) -> &'a str {
        self.scan(CharClass::Digits)
    }

    pub fn scan_identifier(&mut self) -> &'a str {
        self.scan(CharClass::Identifier)
    }

    /// consume `literal` if the input continues with it exactly
    pub fn scan_literal(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal) {
            self.pos += literal.len();
            return true;
        }
        false
    }
}

// ---/Scanner -------------------------------------------------------
