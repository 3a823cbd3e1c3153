//! Tokenizer for a single layer of a shape code.
//!
//! A layer such as `R(ff0)--C(r)` is split into typed tokens before any
//! shorthand expansion happens. Colour tokens can sit anywhere in the text,
//! so `RCSW(f00)(0f0)(00f)(fff)` tokenizes the same way as the interleaved
//! form apart from ordering.

/// One token of a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An empty-quadrant marker, `-`.
    Empty,

    /// Any other character outside parentheses. Shape codes are not resolved
    /// here, so unknown characters survive until validation.
    Code(char),

    /// The contents of a `(...)` group.
    Color(String),
}

/// A tokenized layer, together with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLayer {
    text: String,
    tokens: Vec<Token>,
}

impl RawLayer {
    /// Split a layer into tokens.
    ///
    /// A `(` without a matching `)` is kept as a literal code character.
    pub fn tokenize(text: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            let after = &rest[c.len_utf8()..];
            match c {
                '-' => {
                    tokens.push(Token::Empty);
                    rest = after;
                }
                '(' => match after.find(')') {
                    Some(end) => {
                        tokens.push(Token::Color(after[..end].to_string()));
                        rest = &after[end + 1..];
                    }
                    None => {
                        tokens.push(Token::Code(c));
                        rest = after;
                    }
                },
                _ => {
                    tokens.push(Token::Code(c));
                    rest = after;
                }
            }
        }

        Self {
            text: text.to_string(),
            tokens,
        }
    }

    /// The layer text as written (after any shorthand expansion).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Repeat the layer `times` times, text and tokens alike.
    pub fn repeat(&self, times: usize) -> Self {
        Self {
            text: self.text.repeat(times),
            tokens: self
                .tokens
                .iter()
                .cloned()
                .cycle()
                .take(self.tokens.len() * times)
                .collect(),
        }
    }

    /// The shape codes only: colours dropped, then each `--` pair collapsed
    /// into a single `-`.
    pub fn skeleton(&self) -> String {
        let codes: String = self
            .tokens
            .iter()
            .filter_map(|token| match token {
                Token::Empty => Some('-'),
                Token::Code(c) => Some(*c),
                Token::Color(_) => None,
            })
            .collect();
        codes.replace("--", "-")
    }

    /// Number of `-` markers outside parentheses.
    pub fn marker_count(&self) -> usize {
        self.tokens.iter().filter(|t| **t == Token::Empty).count()
    }

    /// Number of non-overlapping `--` pairs, scanning left to right.
    pub fn empty_pairs(&self) -> usize {
        let mut pairs = 0;
        let mut run = 0;
        for token in &self.tokens {
            if *token == Token::Empty {
                run += 1;
            } else {
                pairs += run / 2;
                run = 0;
            }
        }
        pairs + run / 2
    }

    /// Colour tokens in the order they appear.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Color(color) => Some(color.as_str()),
            _ => None,
        })
    }
}
