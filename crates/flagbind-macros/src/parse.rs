use std::{fmt, mem};

#[cfg(not(test))]
use proc_macro::{Delimiter, TokenStream, TokenTree};
#[cfg(test)]
use proc_macro2::{Delimiter, TokenStream, TokenTree};

use crate::ast;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub(crate) struct Error {
    msg: String,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.msg, f)
    }
}

macro_rules! format_err {
    ($($tt:tt)*) => {
        Error { msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

pub(crate) fn target(ts: TokenStream) -> Result<ast::Target> {
    let p = &mut Parser::new(ts);
    let mut parsable = false;
    while let Some(attr) = attr(p)? {
        match attr {
            Attr::Parsable => parsable = true,
            Attr::Marker(_) => bail!("markers belong on fields"),
            Attr::Other => (),
        }
    }
    vis(p);
    if p.at_keyword("enum") || p.at_keyword("union") {
        bail!("only structs can be reflected")
    }
    p.expect_keyword("struct")?;
    let name = p.expect_ident()?;
    if p.at_punct('<') || p.at_keyword("where") {
        bail!("generic structs are not supported: `{name}`")
    }

    let mut fields = Vec::new();
    if p.at_delim(Delimiter::Parenthesis) {
        bail!("tuple structs are not supported: `{name}`")
    }
    if !p.eat_punct(';') {
        p.enter_delim(Delimiter::Brace)?;
        while !p.end() {
            fields.push(field(p)?);
        }
        p.exit_delim()?;
    }
    Ok(ast::Target { name, parsable, fields })
}

fn field(p: &mut Parser) -> Result<ast::Field> {
    let mut markers = Vec::new();
    while let Some(attr) = attr(p)? {
        match attr {
            Attr::Marker(marker) => markers.push(marker),
            Attr::Parsable => bail!("`parsable` belongs on the struct"),
            Attr::Other => (),
        }
    }
    vis(p);
    let name = p.expect_ident()?;
    p.expect_punct(':')?;
    skip_ty(p);
    if !p.end() {
        p.expect_punct(',')?;
    }
    Ok(ast::Field { name, markers })
}

enum Attr {
    Parsable,
    Marker(ast::Marker),
    Other,
}

fn attr(p: &mut Parser) -> Result<Option<Attr>> {
    if !p.eat_punct('#') {
        return Ok(None);
    }
    p.enter_delim(Delimiter::Bracket)?;
    let res = if p.eat_keyword("parsable") {
        Attr::Parsable
    } else if p.eat_keyword("flag") {
        Attr::Marker(flag(p)?)
    } else if p.eat_keyword("option") {
        Attr::Marker(option(p)?)
    } else {
        p.skip_rest();
        Attr::Other
    };
    p.exit_delim()?;
    Ok(Some(res))
}

fn flag(p: &mut Parser) -> Result<ast::Marker> {
    p.enter_delim(Delimiter::Parenthesis)?;
    let name = marker_name(p, "flag")?;
    p.exit_delim()?;
    Ok(ast::Marker::Flag { name })
}

fn option(p: &mut Parser) -> Result<ast::Marker> {
    p.enter_delim(Delimiter::Parenthesis)?;
    let name = marker_name(p, "option")?;
    let kind = if p.eat_punct(',') {
        p.expect_keyword("ty")?;
        p.expect_punct('=')?;
        Some(kind(p)?)
    } else {
        None
    };
    p.exit_delim()?;
    Ok(ast::Marker::Option { name, kind })
}

fn marker_name(p: &mut Parser, marker: &str) -> Result<String> {
    let name = p.expect_string()?;
    if name.is_empty() {
        bail!("{marker} name can't be empty")
    }
    Ok(name)
}

fn kind(p: &mut Parser) -> Result<ast::Kind> {
    let name = p.expect_ident()?;
    let res = match name.as_str() {
        "bool" => ast::Kind::Bool,
        "integer" => ast::Kind::Integer,
        "float" => ast::Kind::Float,
        "text" => ast::Kind::Text,
        _ => bail!("expected one of `bool`, `integer`, `float`, `text`, got `{name}`"),
    };
    Ok(res)
}

fn vis(p: &mut Parser) {
    if p.eat_keyword("pub") && p.at_delim(Delimiter::Parenthesis) {
        p.ts.pop();
    }
}

/// Skips a field type, up to the `,` ending the field.
fn skip_ty(p: &mut Parser) {
    let mut depth = 0usize;
    let mut arrow = false;
    while let Some(tt) = p.ts.last() {
        match tt {
            TokenTree::Punct(punct) => match punct.as_char() {
                ',' if depth == 0 => break,
                '<' => depth += 1,
                '>' if !arrow => depth = depth.saturating_sub(1),
                _ => (),
            },
            _ => (),
        }
        arrow = matches!(tt, TokenTree::Punct(punct) if punct.as_char() == '-');
        p.ts.pop();
    }
}

struct Parser {
    stack: Vec<Vec<TokenTree>>,
    ts: Vec<TokenTree>,
}

impl Parser {
    fn new(ts: TokenStream) -> Self {
        let mut ts = ts.into_iter().collect::<Vec<_>>();
        ts.reverse();
        Self { stack: Vec::new(), ts }
    }

    fn at_delim(&self, delimiter: Delimiter) -> bool {
        matches!(self.ts.last(), Some(TokenTree::Group(g)) if g.delimiter() == delimiter)
    }
    fn enter_delim(&mut self, delimiter: Delimiter) -> Result<()> {
        match self.ts.pop() {
            Some(TokenTree::Group(g)) if g.delimiter() == delimiter => {
                let mut ts = g.stream().into_iter().collect::<Vec<_>>();
                ts.reverse();
                let ts = mem::replace(&mut self.ts, ts);
                self.stack.push(ts);
            }
            _ => bail!("expected `{}`", open(delimiter)),
        }
        Ok(())
    }
    fn exit_delim(&mut self) -> Result<()> {
        if let Some(tt) = self.ts.last() {
            bail!("unexpected `{tt}`")
        }
        if let Some(ts) = self.stack.pop() {
            self.ts = ts;
        }
        Ok(())
    }
    fn skip_rest(&mut self) {
        self.ts.clear();
    }
    fn end(&self) -> bool {
        self.ts.last().is_none()
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<()> {
        if !self.eat_keyword(kw) {
            bail!("expected `{kw}`")
        }
        Ok(())
    }
    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.at_keyword(kw) {
            self.ts.pop();
            true
        } else {
            false
        }
    }
    fn at_keyword(&self, kw: &str) -> bool {
        match self.ts.last() {
            Some(TokenTree::Ident(ident)) => ident.to_string() == kw,
            _ => false,
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        match self.ts.pop() {
            Some(TokenTree::Ident(ident)) => Ok(ident.to_string()),
            Some(tt) => bail!("expected a name, got: `{tt}`"),
            None => bail!("expected a name"),
        }
    }

    fn expect_punct(&mut self, punct: char) -> Result<()> {
        if !self.eat_punct(punct) {
            bail!("expected `{punct}`")
        }
        Ok(())
    }
    fn eat_punct(&mut self, punct: char) -> bool {
        if self.at_punct(punct) {
            self.ts.pop();
            true
        } else {
            false
        }
    }
    fn at_punct(&self, punct: char) -> bool {
        matches!(self.ts.last(), Some(TokenTree::Punct(p)) if p.as_char() == punct)
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.ts.pop() {
            Some(TokenTree::Literal(lit)) => match str_lit_value(&lit.to_string()) {
                Some(res) => Ok(res),
                None => bail!("expected a string, got `{lit}`"),
            },
            _ => bail!("expected a string"),
        }
    }
}

fn open(delimiter: Delimiter) -> &'static str {
    match delimiter {
        Delimiter::Parenthesis => "(",
        Delimiter::Brace => "{",
        Delimiter::Bracket => "[",
        Delimiter::None => "group",
    }
}

/// "Parser" a string literal into the corresponding value.
///
/// Really needs support in the proc_macro library:
/// <https://internals.rust-lang.org/t/getting-value-out-of-proc-macro-literal/14140>
///
/// Returns `None` for anything but a plain or raw string literal.
fn str_lit_value(lit: &str) -> Option<String> {
    if let Some(raw) = lit.strip_prefix('r') {
        let hashes = raw.len() - raw.trim_start_matches('#').len();
        let raw = raw.get(hashes..raw.len().checked_sub(hashes)?)?;
        return raw.strip_prefix('"')?.strip_suffix('"').map(str::to_string);
    }
    let lit = lit.strip_prefix('"')?.strip_suffix('"')?;

    let mut res = String::with_capacity(lit.len());
    let mut chars = lit.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        let c = match chars.next()? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            c @ ('\\' | '\'' | '"') => c,
            'x' => {
                let hex = chars.by_ref().take(2).collect::<String>();
                char::from(u8::from_str_radix(&hex, 16).ok()?)
            }
            'u' => {
                let hex = chars
                    .by_ref()
                    .skip(1)
                    .take_while(|&it| it != '}')
                    .filter(|&it| it != '_')
                    .collect::<String>();
                char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
            }
            '\n' => {
                while chars.next_if(|it| it.is_whitespace()).is_some() {}
                continue;
            }
            _ => return None,
        };
        res.push(c);
    }
    Some(res)
}
