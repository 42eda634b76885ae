use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Builds a token from the matched text, or `None` when the match is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Ordered: multi-character operators must come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
    ];
}

/// Regex-driven scanner producing tokens on demand.
///
/// Characters no pattern accepts come out as `Illegal` tokens rather than
/// errors; the parser treats them as opaque.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of `len` bytes starting at the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes one lexeme. Returns `None` for skipped input such as whitespace.
    fn scan(&mut self) -> Option<Token> {
        for pattern in PATTERNS.iter() {
            let matched = match pattern.regex.find(self.remainder()) {
                Some(found) => found.as_str().to_string(),
                None => continue,
            };

            let token = (pattern.handler)(self, &matched);
            self.advance_n(matched.len());
            return token;
        }

        // Not empty: the caller checked `at_eof` first.
        let ch = self.remainder().chars().next().unwrap_or('\0');
        let len = ch.len_utf8();
        let token = MK_TOKEN!(TokenKind::Illegal, ch.to_string(), self.span_of(len));
        tracing::trace!(pos = self.pos, illegal = %ch, "unrecognised character");
        self.advance_n(len);
        Some(token)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            if let Some(token) = self.scan() {
                return token;
            }
        }

        MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0))
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Int, matched.to_string(), lexer.span_of(matched.len())))
}

fn skip_handler(_lexer: &mut Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = match RESERVED_LOOKUP.get(matched) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    Some(MK_TOKEN!(kind, matched.to_string(), lexer.span_of(matched.len())))
}

/// A pre-built sequence of tokens served one at a time.
///
/// Once the tokens run out, or an `EOF` token has been handed out, every
/// further call yields `EOF` again.
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        let eof_span = tokens
            .last()
            .map(|token| Span {
                start: token.span.end.clone(),
                end: token.span.end.clone(),
            })
            .unwrap_or_else(Span::null);

        TokenStream {
            tokens: tokens.into(),
            eof: MK_TOKEN!(TokenKind::EOF, String::new(), eof_span),
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) if token.kind == TokenKind::EOF => {
                self.tokens.clear();
                self.eof = token.clone();
                token
            }
            Some(token) => token,
            None => self.eof.clone(),
        }
    }
}

/// Scans `source` to completion. The result ends with exactly one `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
