use log::trace;

use crate::error::{FlatFileError, Result};
use crate::field::Field;

///
/// Explicit cursor over the lines of a flat-file block.
///
/// Recursive calls of the tokenizer share one cursor by `&mut` so each level
/// consumes exactly the lines that belong to it.
///
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        LineCursor { lines, pos: 0 }
    }

    /// Current line, skipping lines that hold only whitespace.
    pub fn peek(&mut self) -> Option<&'a str> {
        while let Some(line) = self.lines.get(self.pos) {
            if !line.trim().is_empty() {
                return Some(*line);
            }
            self.pos += 1;
        }
        None
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// 1-based number of the current line.
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }
}

///
/// Number of leading spaces on a line.
///
pub fn indent_of(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

///
/// Tokenize a block of flat-file lines into a tree of fields.
///
/// A line at the current level's indent opens a new field. A deeper line whose
/// indent equals the open field's value column continues that field's value;
/// any other deeper line starts a nested block of children.
///
/// # Arguments
/// - lines: the annotation lines, in file order
///
/// # Returns
/// The top-level fields of the block.
///
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Field>> {
    let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    let mut cursor = LineCursor::new(&lines);
    read_fields(&mut cursor, 0)
}

///
/// Read every field at `indent` from the cursor, stopping at the first line
/// that is indented less than `indent` or at the end of input.
///
pub fn read_fields(cursor: &mut LineCursor<'_>, indent: usize) -> Result<Vec<Field>> {
    let mut fields: Vec<Field> = Vec::new();
    let mut value_column: Option<usize> = None;

    while let Some(line) = cursor.peek() {
        let line_indent = indent_of(line);

        if line_indent < indent {
            break;
        }

        if line_indent == indent {
            let (field, column) = open_field(line, line_indent, cursor.line_number())?;
            trace!("field {} at indent {}, value column {}", field.name, indent, column);

            fields.push(field);
            value_column = Some(column);
            cursor.advance();
            continue;
        }

        let Some(current) = fields.last_mut() else {
            return Err(FlatFileError::OrphanLine {
                line: cursor.line_number(),
                content: line.to_string(),
            });
        };

        if Some(line_indent) == value_column {
            current.value.push(line[line_indent..].to_string());
            cursor.advance();
        } else {
            let children = read_fields(cursor, line_indent)?;
            current.children.extend(children);
        }
    }

    Ok(fields)
}

fn open_field(line: &str, indent: usize, line_number: usize) -> Result<(Field, usize)> {
    let delim = match line[indent..].find(' ') {
        Some(offset) => indent + offset,
        None => {
            return Err(FlatFileError::MalformedFieldLine {
                line: line_number,
                content: line.to_string(),
            });
        }
    };

    let column = delim + indent_of(&line[delim..]);

    let field = Field {
        name: line[indent..delim].to_string(),
        value: vec![line[column..].to_string()],
        children: Vec::new(),
    };

    Ok((field, column))
}
