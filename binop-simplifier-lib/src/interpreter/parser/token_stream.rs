use crate::interpreter::token::Token;

/// A read cursor over a borrowed token sequence.
///
/// The sequence itself is never modified, so callers keep their tokens and can see
/// exactly how many of them each parse step consumed.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> TokenStream<'a> {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    /// Consumes the token under the cursor.
    pub fn next_token(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Index of the next token to be consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
