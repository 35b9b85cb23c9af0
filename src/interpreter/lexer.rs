use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Reserved words are never matched by the scanner directly. Every word comes
/// out as an [`Token::Identifier`] and is turned into a [`Token::Keyword`] by
/// [`reclassify`] afterwards, so `Program1` or `readiness` stay identifiers.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Unsigned integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Identifier tokens; variable or program names such as `x` or `sum`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A reserved word, together with its spelling in the source.
    Keyword(Reserved),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `<-`
    #[token("<-")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `>`
    #[token(">")]
    Greater,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// A reclassified identifier: which keyword it is and how it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reserved {
    /// The keyword the word was matched to.
    pub keyword: Keyword,
    /// The word exactly as it appeared in the source.
    pub text:    String,
}

impl Reserved {
    /// Builds a reserved-word token payload.
    pub fn new(keyword: Keyword, text: impl Into<String>) -> Self {
        Self { keyword,
               text: text.into() }
    }
}

/// The reserved words of the language. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Program,
    Has,
    Decls,
    Int,
    Body,
    End,
    Read,
    Write,
    Writeln,
    While,
    Do,
    EndWhile,
    If,
    Then,
    Else,
    EndIf,
}

impl Keyword {
    /// Looks up a word in the reserved word table, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use meeny::interpreter::lexer::Keyword;
    ///
    /// assert_eq!(Keyword::lookup("EndWhile"), Some(Keyword::EndWhile));
    /// assert_eq!(Keyword::lookup("readiness"), None);
    /// ```
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        let keyword = match word.to_ascii_lowercase().as_str() {
            "program" => Self::Program,
            "has" => Self::Has,
            "decls" => Self::Decls,
            "int" => Self::Int,
            "body" => Self::Body,
            "end" => Self::End,
            "read" => Self::Read,
            "write" => Self::Write,
            "writeln" => Self::Writeln,
            "while" => Self::While,
            "do" => Self::Do,
            "endwhile" => Self::EndWhile,
            "if" => Self::If,
            "then" => Self::Then,
            "else" => Self::Else,
            "endif" => Self::EndIf,
            _ => return None,
        };
        Some(keyword)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Program => "PROGRAM",
            Self::Has => "HAS",
            Self::Decls => "DECLS",
            Self::Int => "INT",
            Self::Body => "BODY",
            Self::End => "END",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Writeln => "WRITELN",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::EndWhile => "ENDWHILE",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::EndIf => "ENDIF",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default, Clone)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Turns an identifier whose text is a reserved word into the matching
/// keyword token. The original spelling is kept. Every other token is
/// returned unchanged.
///
/// # Example
/// ```
/// use meeny::interpreter::lexer::{Keyword, Reserved, Token, reclassify};
///
/// let token = reclassify(Token::Identifier("WriteLn".to_string()));
/// assert_eq!(token, Token::Keyword(Reserved::new(Keyword::Writeln, "WriteLn")));
/// ```
#[must_use]
pub fn reclassify(token: Token) -> Token {
    match token {
        Token::Identifier(text) => match Keyword::lookup(&text) {
            Some(keyword) => Token::Keyword(Reserved { keyword, text }),
            None => Token::Identifier(text),
        },
        other => other,
    }
}

/// A lazy stream of `(token, line)` pairs over a source string.
///
/// The stream is finite and can be restarted by cloning it before consuming,
/// or by calling [`lex`] again on the same source.
#[derive(Clone)]
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, Token>,
}

/// Starts lexing `source` from its first character.
#[must_use]
pub fn lex(source: &str) -> Tokens<'_> {
    Tokens { lexer: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
}

impl Iterator for Tokens<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let line = self.lexer.extras.line;

        Some(match token {
                 Ok(token) => Ok((reclassify(token), line)),
                 Err(()) => {
                     let slice = self.lexer.slice();
                     if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                         Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                         line })
                     } else {
                         Err(LexError::UnexpectedCharacter { character: slice.chars()
                                                                             .next()
                                                                             .unwrap_or('\0'),
                                                             line })
                     }
                 },
             })
    }
}

/// Lexes the whole source, stopping at the first unrecognized character.
///
/// # Errors
/// Returns a [`LexError`] if any part of the source matches no token rule.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let tokens = lex(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn keyword_prefix_stays_identifier() {
        assert_eq!(kinds("readiness"), vec![Token::Identifier("readiness".into())]);
        assert_eq!(kinds("Program1"), vec![Token::Identifier("Program1".into())]);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(kinds("program PROGRAM PrOgRaM"),
                   vec![Token::Keyword(Reserved::new(Keyword::Program, "program")),
                        Token::Keyword(Reserved::new(Keyword::Program, "PROGRAM")),
                        Token::Keyword(Reserved::new(Keyword::Program, "PrOgRaM")),]);
    }

    #[test]
    fn assign_wins_over_minus() {
        assert_eq!(kinds("a<-b - 1"),
                   vec![Token::Identifier("a".into()),
                        Token::Assign,
                        Token::Identifier("b".into()),
                        Token::Minus,
                        Token::Number(1),]);
    }

    #[test]
    fn comments_and_lines() {
        let tokens = tokenize("# header\nx # trailing\n\n  y").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("x".into()), 2), (Token::Identifier("y".into()), 4)]);
    }

    #[test]
    fn operators() {
        assert_eq!(kinds(", ( ) + * / % = > <>"),
                   vec![Token::Comma,
                        Token::LParen,
                        Token::RParen,
                        Token::Plus,
                        Token::Star,
                        Token::Slash,
                        Token::Percent,
                        Token::Equals,
                        Token::Greater,
                        Token::NotEqual,]);
    }

    #[test]
    fn unknown_character_is_an_error() {
        assert_eq!(tokenize("a\nb ; c"),
                   Err(LexError::UnexpectedCharacter { character: ';',
                                                       line:      2, }));
        assert!(matches!(tokenize("x < y"),
                         Err(LexError::UnexpectedCharacter { character: '<', .. })));
    }

    #[test]
    fn oversized_literal_is_an_error() {
        assert!(matches!(tokenize("99999999999999999999"),
                         Err(LexError::LiteralTooLarge { .. })));
    }

    #[test]
    fn stream_restarts_from_clone() {
        let stream = lex("a b c");
        let first: Vec<_> = stream.clone().collect();
        let second: Vec<_> = stream.collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }
}
