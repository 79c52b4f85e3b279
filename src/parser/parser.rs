//! Parser state and the program driver.
//!
//! This module contains the `Parser` struct, which owns the cursor over the
//! token stream for one parse, and the `parse` entry points. The cursor
//! supports conditional consumption (`match_token`, `expect`) and a LIFO
//! stack of checkpoints (`mark`, `restore`, `discard`) used by the
//! lookahead predicates to peek past ambiguous prefixes.
//!
//! Errors never abort the parse. They are reported to a `DiagnosticSink`
//! and the affected subtree degrades, so a parse always returns a tree.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::ast::{Item, Program},
    errors::errors::{DiagnosticSink, Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    tree::node::Node,
    Position, Span,
};

use super::{
    items::{parse_entry, parse_function, parse_import},
    predicates::{is_decl, is_entry, is_func},
    stmt::{end_of_statement, parse_declaration},
};

/// Cursor and reporting context for a single parse.
///
/// Each parse owns its own `Parser`; nothing is shared between parses.
pub struct Parser<'s> {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Saved positions for speculative lookahead
    checkpoints: Vec<usize>,
    /// The name of the source file being parsed
    file: Rc<String>,
    sink: &'s mut dyn DiagnosticSink,
}

impl<'s> Parser<'s> {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with
    /// one, so the cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>, sink: &'s mut dyn DiagnosticSink) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let span = tokens.last().map(|t| t.span.clone()).unwrap_or_else(Span::null);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span,
            });
        }

        Parser {
            tokens,
            pos: 0,
            checkpoints: vec![],
            file,
            sink,
        }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the token just behind the cursor, i.e. the one most recently
    /// consumed. At the start of the stream this is the first token.
    pub fn peek_previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the final `EOF`.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the expected kind.
    ///
    /// On a mismatch an `UnexpectedToken` error is reported and the
    /// offending token is skipped anyway (unless it is `EOF`), so the
    /// caller always makes progress. Returns the token only when it matched.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.current_token_kind() == expected_kind {
            return Some(self.advance().clone());
        }

        let token = self.peek().value.clone();
        self.report(ErrorImpl::UnexpectedToken {
            expected: expected_kind,
            token,
        });
        self.advance();
        None
    }

    /// Pushes the current position onto the checkpoint stack.
    pub fn mark(&mut self) {
        trace!(pos = self.pos, depth = self.checkpoints.len(), "mark");
        self.checkpoints.push(self.pos);
    }

    /// Pops the newest checkpoint and moves the cursor back to it.
    pub fn restore(&mut self) {
        match self.checkpoints.pop() {
            Some(pos) => {
                trace!(from = self.pos, to = pos, "restore");
                self.pos = pos;
            }
            None => debug_assert!(false, "restore without a matching mark"),
        }
    }

    /// Pops the newest checkpoint and keeps the current position.
    pub fn discard(&mut self) {
        let popped = self.checkpoints.pop();
        debug_assert!(popped.is_some(), "discard without a matching mark");
    }

    /// Runs `check` speculatively and rewinds the cursor afterwards,
    /// whatever the check returns.
    pub fn lookahead<F>(&mut self, check: F) -> bool
    where
        F: FnOnce(&mut Parser<'s>) -> bool,
    {
        self.mark();
        let result = check(self);
        self.restore();
        result
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// Reports a diagnostic at the current token.
    pub fn report(&mut self, error: ErrorImpl) {
        let position = self.get_position();
        self.report_at(error, position);
    }

    pub fn report_at(&mut self, error: ErrorImpl, position: Position) {
        self.sink.report(Error::new(error, position));
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.position_of(self.peek())
    }

    /// Start of `token`, falling back to the parser's file name for
    /// synthetic tokens.
    pub fn position_of(&self, token: &Token) -> Position {
        let start = &token.span.start;
        if *start.1 == "<null>" {
            Position(start.0, Rc::clone(&self.file))
        } else {
            start.clone()
        }
    }
}

/// Parses top-level items until `EOF`.
///
/// At each step the first matching production wins, tried in this order:
/// function (`type name`), declaration (`type : name`), entry block,
/// import. Anything else is reported and skipped one token at a time.
pub fn parse_program(parser: &mut Parser) -> Program {
    let mut items = vec![];

    while !parser.match_token(TokenKind::EOF) {
        if is_func(parser) {
            debug!("found function on top-level");
            items.push(Item::Function(parse_function(parser)));
        } else if is_decl(parser) {
            debug!("found variable declaration on top-level");
            items.push(Item::Declaration(parse_declaration(parser)));
            end_of_statement(parser);
        } else if is_entry(parser) {
            debug!("found entry block");
            items.push(Item::Entry(parse_entry(parser)));
        } else if parser.current_token_kind() == TokenKind::Import {
            items.push(Item::Import(parse_import(parser)));
            end_of_statement(parser);
        } else {
            let token = parser.peek().value.clone();
            parser.report(ErrorImpl::UnexpectedTopLevel { token });
            parser.advance();
        }
    }

    let program = Program { items };

    debug!("dumping parse tree");
    for item in program.iter() {
        debug!("\n{}", Node::from(item).dump());
    }

    program
}

/// Parses a token stream, reporting diagnostics into `sink`.
pub fn parse_with_sink(tokens: Vec<Token>, file: Rc<String>, sink: &mut dyn DiagnosticSink) -> Program {
    let mut parser = Parser::new(tokens, file, sink);
    parse_program(&mut parser)
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. Returns the program together
/// with every diagnostic reported along the way; the tree is only
/// trustworthy when the diagnostics are empty.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Program, Vec<Error>) {
    let mut diagnostics: Vec<Error> = Vec::new();
    let program = parse_with_sink(tokens, file, &mut diagnostics);
    (program, diagnostics)
}
