//! メソッド定義フラグメント用の字句解析器
//!
//! 対応する構文は `def <name>` / `puts "<text>"` / `end` のみ。
//! - 改行と `;` は文の区切りとして意味を持つ
//! - `#` から行末まではコメント
//! - 文字列は `\n` `\t` `\"` `\\` のエスケープに対応

use super::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Def,
    End,
    Puts,

    Ident(String),
    Str(String),

    Newline,
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Def => write!(f, "def"),
            Token::End => write!(f, "end"),
            Token::Puts => write!(f, "puts"),
            Token::Ident(name) => write!(f, "{name}"),
            Token::Str(text) => write!(f, "{text:?}"),
            Token::Newline => write!(f, "newline"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// 位置情報付きトークン (1始まりの行・桁)
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            col: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// 入力全体をトークン列に変換する
    ///
    /// 連続する改行は1つにまとめる。末尾は必ず `Eof`。
    pub fn tokenize(mut self) -> Result<Vec<Spanned>, EvalError> {
        let mut tokens: Vec<Spanned> = Vec::new();

        loop {
            let (line, col) = (self.line, self.col);
            let Some(&ch) = self.chars.peek() else {
                tokens.push(Spanned {
                    token: Token::Eof,
                    line,
                    col,
                });
                return Ok(tokens);
            };

            let token = match ch {
                ' ' | '\t' | '\r' => {
                    self.bump();
                    continue;
                }
                '#' => {
                    while matches!(self.chars.peek(), Some(&c) if c != '\n') {
                        self.bump();
                    }
                    continue;
                }
                '\n' | ';' => {
                    self.bump();
                    if matches!(tokens.last(), Some(Spanned { token: Token::Newline, .. }) | None) {
                        continue;
                    }
                    Token::Newline
                }
                '"' => {
                    self.bump();
                    Token::Str(self.string(line, col)?)
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.word(),
                other => return Err(EvalError::UnexpectedChar { ch: other, line, col }),
            };

            tokens.push(Spanned { token, line, col });
        }
    }

    fn word(&mut self) -> Token {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }

        match word.as_str() {
            "def" => Token::Def,
            "end" => Token::End,
            "puts" => Token::Puts,
            _ => Token::Ident(word),
        }
    }

    fn string(&mut self, line: usize, col: usize) -> Result<String, EvalError> {
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(text),
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    // 未知のエスケープはそのまま残す
                    Some(other) => {
                        text.push('\\');
                        text.push(other);
                    }
                    None => return Err(EvalError::UnterminatedString { line, col }),
                },
                Some(c) => text.push(c),
                None => return Err(EvalError::UnterminatedString { line, col }),
            }
        }
    }
}

/// 便利関数：ソース文字列を字句解析する
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, EvalError> {
    Lexer::new(source).tokenize()
}
