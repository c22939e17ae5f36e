//! Listing parser implementation.

use super::ListingError;
use crate::core::config::EmitConfig;
use crate::core::symbol::{SymbolId, SymbolTable};
use crate::decl::{DeclKind, DeclarationSet, Region};
use crate::emit::Stream;

/// Parse a listing into a translation-phase record set.
///
/// Names are interned into `symbols`; every record is finished with its
/// listed complexity under `config` once its block ends.
pub fn parse_listing(
    text: &str,
    symbols: &SymbolTable<'_>,
    config: &EmitConfig,
) -> Result<DeclarationSet, ListingError> {
    let mut parser = Parser {
        symbols,
        config,
        set: DeclarationSet::new(),
        current: None,
    };

    for (idx, line) in text.lines().enumerate() {
        parser.parse_line(idx + 1, line)?;
    }
    parser.finish_current();

    log::debug!("listing parsed: {} records", parser.set.len());
    Ok(parser.set)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Text(Vec<u8>),
}

struct Parser<'s, 'arena> {
    symbols: &'s SymbolTable<'arena>,
    config: &'s EmitConfig,
    set: DeclarationSet,
    /// Record being filled and its listed complexity.
    current: Option<(SymbolId, u32)>,
}

impl<'s, 'arena> Parser<'s, 'arena> {
    fn parse_line(&mut self, line_no: usize, line: &str) -> Result<(), ListingError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            return Ok(());
        }

        let tokens = tokenize(trimmed).map_err(|e| ListingError::new(line_no, e))?;
        let keyword = match tokens.first() {
            Some(Token::Word(word)) => *word,
            _ => return Err(ListingError::new(line_no, "expected a keyword")),
        };

        match DeclKind::from_keyword(keyword) {
            Some(kind) => self.parse_header(line_no, kind, &tokens[1..]),
            None => self.parse_item(line_no, keyword, &tokens[1..]),
        }
    }

    fn parse_header(
        &mut self,
        line_no: usize,
        kind: DeclKind,
        args: &[Token<'_>],
    ) -> Result<(), ListingError> {
        self.finish_current();

        let mut args = args.iter();
        let name = match args.next() {
            Some(Token::Word(name)) => *name,
            _ => {
                return Err(ListingError::new(
                    line_no,
                    format!("expected a name after '{}'", kind.keyword()),
                ))
            }
        };

        let mut exported = false;
        let mut complexity = 0;
        let mut nesting = 0;
        let mut stream = None;

        while let Some(arg) = args.next() {
            match arg {
                Token::Word("export") => exported = true,
                Token::Word("complexity") => complexity = read_number(line_no, "complexity", args.next())?,
                Token::Word("nesting") => nesting = read_number(line_no, "nesting", args.next())?,
                Token::Word("stream") => {
                    stream = Some(match args.next() {
                        Some(Token::Word("header")) => Stream::Header,
                        Some(Token::Word("impl")) => Stream::Implementation,
                        _ => {
                            return Err(ListingError::new(
                                line_no,
                                "expected 'header' or 'impl' after 'stream'",
                            ))
                        }
                    })
                }
                Token::Word(other) => {
                    return Err(ListingError::new(line_no, format!("unknown option '{}'", other)))
                }
                Token::Text(_) => {
                    return Err(ListingError::new(line_no, "unexpected text in record header"))
                }
            }
        }

        let origin = self.symbols.intern(name);
        if self.set.contains(origin) {
            return Err(ListingError::new(line_no, format!("duplicate record '{}'", name)));
        }

        let record = self.set.declare_nested(origin, kind, exported, nesting);
        if let Some(stream) = stream {
            record.set_stream(stream);
        }
        self.current = Some((origin, complexity));
        Ok(())
    }

    fn parse_item(&mut self, line_no: usize, keyword: &str, args: &[Token<'_>]) -> Result<(), ListingError> {
        let origin = match self.current {
            Some((origin, _)) => origin,
            None => {
                return Err(ListingError::new(
                    line_no,
                    format!("'{}' appears before any record", keyword),
                ))
            }
        };

        match keyword {
            "sig" | "sig-ref" | "body" | "body-ref" => {
                let target = match args {
                    [Token::Word(target)] => self.symbols.intern(target),
                    _ => {
                        return Err(ListingError::new(
                            line_no,
                            format!("'{}' takes exactly one symbol name", keyword),
                        ))
                    }
                };
                let region = if keyword.starts_with("sig") { Region::Header } else { Region::Body };
                let direct = !keyword.ends_with("-ref");

                if let Some(record) = self.set.get_mut(origin) {
                    record.set_region(region);
                    record.observe(target, direct);
                }
            }
            "decl" | "def" | "init" => {
                let text = match args {
                    [Token::Text(text)] => text,
                    _ => {
                        return Err(ListingError::new(
                            line_no,
                            format!("'{}' takes exactly one quoted string", keyword),
                        ))
                    }
                };

                if let Some(record) = self.set.get_mut(origin) {
                    match keyword {
                        "decl" => record.write_decl(text),
                        "def" => record.write_def(text),
                        _ => record.write_init(text),
                    }
                }
            }
            other => {
                return Err(ListingError::new(line_no, format!("unknown keyword '{}'", other)));
            }
        }
        Ok(())
    }

    fn finish_current(&mut self) {
        if let Some((origin, complexity)) = self.current.take() {
            if let Some(record) = self.set.get_mut(origin) {
                record.finish(complexity, self.config);
            }
        }
    }
}

fn read_number(line_no: usize, option: &str, token: Option<&Token<'_>>) -> Result<u32, ListingError> {
    match token {
        Some(Token::Word(word)) => word.parse().map_err(|_| {
            ListingError::new(line_no, format!("invalid {} value '{}'", option, word))
        }),
        _ => Err(ListingError::new(line_no, format!("expected a number after '{}'", option))),
    }
}

/// Split a line into bare words and quoted strings.
fn tokenize(line: &str) -> Result<Vec<Token<'_>>, String> {
    let mut tokens = Vec::new();
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];
        if ch.is_ascii_whitespace() {
            pos += 1;
        } else if ch == b'"' {
            let (text, next) = read_string(line, pos + 1)?;
            tokens.push(Token::Text(text));
            pos = next;
        } else {
            let start = pos;
            while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'"' {
                pos += 1;
            }
            tokens.push(Token::Word(&line[start..pos]));
        }
    }

    Ok(tokens)
}

/// Read a quoted string starting after the opening quote. Returns the
/// unescaped bytes and the position after the closing quote.
fn read_string(line: &str, start: usize) -> Result<(Vec<u8>, usize), String> {
    let bytes = line.as_bytes();
    let mut out = Vec::new();
    let mut pos = start;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' => return Ok((out, pos + 1)),
            b'\\' => {
                let escaped = match bytes.get(pos + 1) {
                    Some(b'n') => b'\n',
                    Some(b't') => b'\t',
                    Some(b'"') => b'"',
                    Some(b'\\') => b'\\',
                    Some(&other) => return Err(format!("unknown escape '\\{}'", other as char)),
                    None => return Err("unterminated escape".to_string()),
                };
                out.push(escaped);
                pos += 2;
            }
            other => {
                out.push(other);
                pos += 1;
            }
        }
    }

    Err("unterminated string".to_string())
}
