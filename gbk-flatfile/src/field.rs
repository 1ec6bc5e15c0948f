#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// One flat-file entry: a name, its value lines and any nested fields.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    pub name: String,
    pub value: Vec<String>,
    pub children: Vec<Field>,
}

impl Field {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Field {
            name: name.into(),
            value: vec![value.into()],
            children: Vec::new(),
        }
    }

    ///
    /// Value lines joined with a single space.
    ///
    pub fn joined_value(&self) -> String {
        self.value.join(" ")
    }

    /// First value line, or an empty string for a field without one.
    pub fn first_value(&self) -> &str {
        self.value.first().map(String::as_str).unwrap_or("")
    }

    ///
    /// First child with the given name.
    ///
    pub fn child(&self, name: &str) -> Option<&Field> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

///
/// Flatten a field tree back into text lines.
///
/// Each field is written at its level's indent with the value column placed one
/// space past the name; continuation lines are written at that value column and
/// children one column deeper than their parent, which can never collide with the
/// parent's value column. Tokenizing the output reproduces `fields`.
///
/// # Arguments
/// - fields: the top-level fields to render
///
pub fn render_fields(fields: &[Field]) -> Vec<String> {
    let mut lines = Vec::new();
    render_level(fields, 0, &mut lines);
    lines
}

fn render_level(fields: &[Field], indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);

    for field in fields {
        let value_column = indent + field.name.len() + 1;
        let mut values = field.value.iter();

        let first = values.next().map(String::as_str).unwrap_or("");
        lines.push(format!("{}{} {}", pad, field.name, first));

        let continuation_pad = " ".repeat(value_column);
        for value in values {
            lines.push(format!("{}{}", continuation_pad, value));
        }

        if !field.children.is_empty() {
            render_level(&field.children, indent + 1, lines);
        }
    }
}
