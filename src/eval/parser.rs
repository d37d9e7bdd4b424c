// 構文解析器 - トークン列をメソッド定義のASTに変換

use super::lexer::{Spanned, Token};
use super::EvalError;

/// メソッド本体の文
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Puts(String),
}

/// `def ... end` ひとつ分
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDef {
    pub name: String,
    pub body: Vec<Stmt>,
}

pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .map_or(&Token::Eof, |spanned| &spanned.token)
    }

    fn unexpected(&self, expected: &'static str) -> EvalError {
        match self.tokens.get(self.pos) {
            Some(Spanned {
                token: Token::Eof, ..
            })
            | None => EvalError::UnexpectedEof { expected },
            Some(spanned) => EvalError::UnexpectedToken {
                found: spanned.token.to_string(),
                expected,
                line: spanned.line,
                col: spanned.col,
            },
        }
    }

    fn skip_newlines(&mut self) {
        while *self.peek() == Token::Newline {
            self.pos += 1;
        }
    }

    /// 文の終端 (改行または入力終端) を要求する
    fn expect_terminator(&mut self, expected: &'static str) -> Result<(), EvalError> {
        match self.peek() {
            Token::Newline => {
                self.pos += 1;
                Ok(())
            }
            Token::Eof => Ok(()),
            _ => Err(self.unexpected(expected)),
        }
    }

    /// フラグメント全体を解析する
    pub fn parse_program(&mut self) -> Result<Vec<MethodDef>, EvalError> {
        let mut defs = Vec::new();
        self.skip_newlines();
        while *self.peek() != Token::Eof {
            defs.push(self.parse_def()?);
            self.skip_newlines();
        }

        if defs.is_empty() {
            return Err(EvalError::EmptyFragment);
        }
        Ok(defs)
    }

    fn parse_def(&mut self) -> Result<MethodDef, EvalError> {
        if *self.peek() != Token::Def {
            return Err(self.unexpected("def"));
        }
        self.pos += 1;

        let name = match self.peek() {
            Token::Ident(name) => name.clone(),
            _ => return Err(self.unexpected("method name")),
        };
        self.pos += 1;
        self.expect_terminator("newline after method name")?;

        let mut body = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek() {
                Token::End => {
                    self.pos += 1;
                    self.expect_terminator("newline after end")?;
                    return Ok(MethodDef { name, body });
                }
                Token::Puts => body.push(self.parse_puts()?),
                _ => return Err(self.unexpected("statement or end")),
            }
        }
    }

    fn parse_puts(&mut self) -> Result<Stmt, EvalError> {
        self.pos += 1;
        let text = match self.peek() {
            Token::Str(text) => text.clone(),
            _ => return Err(self.unexpected("string literal")),
        };
        self.pos += 1;
        self.expect_terminator("newline after statement")?;
        Ok(Stmt::Puts(text))
    }
}
