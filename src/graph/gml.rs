//! GML topology parser.
//!
//! Parses graph files in GML format (`graph [ node [ id 0 ] edge [ source 0
//! target 1 ] ]`) into the in-memory [`Graph`]. The embedding algorithm only
//! needs the structure, so node ids, optional labels, and edge endpoints are
//! read while all other attributes (bandwidth, latency, regions, ...) are
//! skipped.

use std::collections::HashMap;
use std::path::Path;

use log::warn;

use super::Graph;

/// Errors that can occur during GML parsing
#[derive(Debug, thiserror::Error)]
pub enum GmlParseError {
    #[error("Failed to read GML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Node missing required 'id' attribute")]
    MissingNodeId,

    #[error("Edge missing required '{0}' attribute")]
    MissingEdgeEndpoint(&'static str),

    #[error("Duplicate node id {0}")]
    DuplicateNodeId(u64),

    #[error("Edge references unknown node id {0}")]
    UnknownEndpoint(u64),
}

/// Token types for GML parsing
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Identifier(String),
    Value(String),
    LeftBracket,
    RightBracket,
    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Identifier(id) => format!("identifier '{}'", id),
            Token::Value(value) => format!("value '{}'", value),
            Token::LeftBracket => "'['".to_string(),
            Token::RightBracket => "']'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// Simple lexer for GML format
struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.current() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                // Single-line comment
                while let Some(ch) = self.current() {
                    self.advance();
                    if ch == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn read_string(&mut self) -> Result<String, GmlParseError> {
        let mut result = String::new();
        self.advance(); // Skip opening quote
        while let Some(ch) = self.current() {
            self.advance();
            match ch {
                '"' => return Ok(result),
                '\\' => {
                    if let Some(escaped) = self.current() {
                        self.advance();
                        match escaped {
                            'n' => result.push('\n'),
                            't' => result.push('\t'),
                            'r' => result.push('\r'),
                            other => result.push(other),
                        }
                    }
                }
                other => result.push(other),
            }
        }
        Err(GmlParseError::UnterminatedString)
    }

    fn read_bare_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current() {
            if ch.is_alphanumeric() || matches!(ch, '_' | '.' | '-' | '+') {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn next_token(&mut self) -> Result<Token, GmlParseError> {
        self.skip_whitespace_and_comments();
        match self.current() {
            None => Ok(Token::Eof),
            Some('[') => {
                self.advance();
                Ok(Token::LeftBracket)
            }
            Some(']') => {
                self.advance();
                Ok(Token::RightBracket)
            }
            Some('"') => Ok(Token::Value(self.read_string()?)),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                Ok(Token::Identifier(self.read_bare_word()))
            }
            Some(ch) if ch.is_numeric() || ch == '-' || ch == '+' => {
                Ok(Token::Value(self.read_bare_word()))
            }
            Some(found) => Err(GmlParseError::UnexpectedCharacter {
                found,
                offset: self.position,
            }),
        }
    }
}

/// Recursive-descent parser over the token stream
struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    fn new(input: &str) -> Result<Self, GmlParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    fn advance(&mut self) -> Result<(), GmlParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect_identifier(&mut self, expected: &str) -> Result<(), GmlParseError> {
        let found = matches!(&self.current, Token::Identifier(id) if id == expected);
        if found {
            self.advance()
        } else {
            Err(GmlParseError::UnexpectedToken {
                expected: format!("identifier '{}'", expected),
                found: self.current.describe(),
            })
        }
    }

    fn expect_left_bracket(&mut self) -> Result<(), GmlParseError> {
        if self.current == Token::LeftBracket {
            self.advance()
        } else {
            Err(GmlParseError::UnexpectedToken {
                expected: "'['".to_string(),
                found: self.current.describe(),
            })
        }
    }

    fn parse_value(&mut self) -> Result<String, GmlParseError> {
        let value = match &self.current {
            Token::Identifier(value) | Token::Value(value) => value.clone(),
            other => {
                return Err(GmlParseError::UnexpectedToken {
                    expected: "a value".to_string(),
                    found: other.describe(),
                })
            }
        };
        self.advance()?;
        Ok(value)
    }

    /// Skip a `[ ... ]` block, including nested blocks.
    fn skip_block(&mut self) -> Result<(), GmlParseError> {
        self.expect_left_bracket()?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.current {
                Token::LeftBracket => depth += 1,
                Token::RightBracket => depth -= 1,
                Token::Eof => {
                    return Err(GmlParseError::UnexpectedToken {
                        expected: "']'".to_string(),
                        found: "end of input".to_string(),
                    })
                }
                _ => {}
            }
            self.advance()?;
        }
        Ok(())
    }

    fn parse_u64(&mut self, field: &'static str) -> Result<u64, GmlParseError> {
        let value = self.parse_value()?;
        value
            .parse::<u64>()
            .map_err(|_| GmlParseError::InvalidValue { field, value })
    }

    /// Parse a `node [ ... ]` body (after the `node` keyword) into its id.
    fn parse_node(&mut self) -> Result<u64, GmlParseError> {
        self.expect_left_bracket()?;
        let mut id = None;
        loop {
            match self.current.clone() {
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                Token::Identifier(key) => {
                    self.advance()?;
                    if key == "id" {
                        id = Some(self.parse_u64("node id")?);
                    } else if self.current == Token::LeftBracket {
                        self.skip_block()?;
                    } else {
                        let _ = self.parse_value()?;
                    }
                }
                other => {
                    return Err(GmlParseError::UnexpectedToken {
                        expected: "attribute name in node".to_string(),
                        found: other.describe(),
                    })
                }
            }
        }
        id.ok_or(GmlParseError::MissingNodeId)
    }

    /// Parse an `edge [ ... ]` body (after the `edge` keyword) into its
    /// endpoints.
    fn parse_edge(&mut self) -> Result<(u64, u64), GmlParseError> {
        self.expect_left_bracket()?;
        let mut source = None;
        let mut target = None;
        loop {
            match self.current.clone() {
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                Token::Identifier(key) => {
                    self.advance()?;
                    match key.as_str() {
                        "source" => source = Some(self.parse_u64("edge source")?),
                        "target" => target = Some(self.parse_u64("edge target")?),
                        _ => {
                            if self.current == Token::LeftBracket {
                                self.skip_block()?;
                            } else {
                                let _ = self.parse_value()?;
                            }
                        }
                    }
                }
                other => {
                    return Err(GmlParseError::UnexpectedToken {
                        expected: "attribute name in edge".to_string(),
                        found: other.describe(),
                    })
                }
            }
        }
        let source = source.ok_or(GmlParseError::MissingEdgeEndpoint("source"))?;
        let target = target.ok_or(GmlParseError::MissingEdgeEndpoint("target"))?;
        Ok((source, target))
    }

    fn parse_graph(&mut self) -> Result<(Vec<u64>, Vec<(u64, u64)>), GmlParseError> {
        self.expect_identifier("graph")?;
        self.expect_left_bracket()?;

        let mut node_ids = Vec::new();
        let mut edges = Vec::new();

        loop {
            match self.current.clone() {
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                Token::Identifier(key) => match key.as_str() {
                    "node" => {
                        self.advance()?;
                        node_ids.push(self.parse_node()?);
                    }
                    "edge" => {
                        self.advance()?;
                        edges.push(self.parse_edge()?);
                    }
                    _ => {
                        // Graph-level attribute (directed, label, ...); the
                        // embedding treats every graph as undirected.
                        self.advance()?;
                        if self.current == Token::LeftBracket {
                            self.skip_block()?;
                        } else {
                            let value = self.parse_value()?;
                            warn!("Ignoring graph attribute '{}' = '{}'", key, value);
                        }
                    }
                },
                other => {
                    return Err(GmlParseError::UnexpectedToken {
                        expected: "'node', 'edge' or an attribute name".to_string(),
                        found: other.describe(),
                    })
                }
            }
        }

        Ok((node_ids, edges))
    }
}

/// Parse a GML document into a [`Graph`].
///
/// Node ids may be sparse; they are mapped to dense indices `0..N` in file
/// order, which keeps the index assignment stable across runs.
pub fn parse_gml_str(input: &str) -> Result<Graph, GmlParseError> {
    let mut parser = Parser::new(input)?;
    let (node_ids, raw_edges) = parser.parse_graph()?;

    let mut index_by_id: HashMap<u64, usize> = HashMap::with_capacity(node_ids.len());
    for (index, id) in node_ids.iter().enumerate() {
        if index_by_id.insert(*id, index).is_some() {
            return Err(GmlParseError::DuplicateNodeId(*id));
        }
    }

    let mut edges = Vec::with_capacity(raw_edges.len());
    for (source, target) in raw_edges {
        let src = *index_by_id
            .get(&source)
            .ok_or(GmlParseError::UnknownEndpoint(source))?;
        let dst = *index_by_id
            .get(&target)
            .ok_or(GmlParseError::UnknownEndpoint(target))?;
        edges.push((src, dst));
    }

    // Endpoints are already validated against the id map
    Ok(Graph::from_edges(node_ids.len(), &edges).expect("validated endpoints"))
}

/// Read and parse a GML file from disk.
pub fn parse_gml_file<P: AsRef<Path>>(path: P) -> Result<Graph, GmlParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_gml_str(&content)
}
