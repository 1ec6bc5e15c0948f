use std::collections::BTreeMap;

use gbk_flatfile::Field;
use gbk_location::parse_location;
use log::warn;

use crate::consts::TRANSLATION_QUALIFIER;
use crate::errors::{GenbankError, Result};
use crate::models::Feature;

///
/// Build a [Feature] from one child of the FEATURES field.
///
/// Value lines before the first `/` line form the location, concatenated without
/// separators; the rest are qualifier lines.
///
pub fn build_feature(field: &Field) -> Result<Feature> {
    let split = field
        .value
        .iter()
        .position(|line| line.starts_with('/'))
        .unwrap_or(field.value.len());

    let location_text: String = field.value[..split].iter().map(|l| l.trim()).collect();
    let location = parse_location(&location_text).map_err(|source| GenbankError::Location {
        key: field.name.clone(),
        source,
    })?;

    Ok(Feature {
        key: field.name.clone(),
        location,
        qualifiers: assemble_qualifiers(&field.value[split..]),
    })
}

///
/// Reassemble qualifier lines, joining wrapped values.
///
/// A line starting with `/` opens a new value; any other line continues the
/// last value of the open qualifier. Continuations are joined with a single
/// space, except for `/translation`, whose residues are concatenated directly.
///
pub fn assemble_qualifiers<S: AsRef<str>>(lines: &[S]) -> BTreeMap<String, Vec<String>> {
    let mut qualifiers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in lines {
        let line = line.as_ref().trim_end();

        if line.starts_with('/') {
            let (name, value) = split_qualifier(line);
            qualifiers
                .entry(name.to_string())
                .or_default()
                .push(value.to_string());
            current = Some(name.to_string());
            continue;
        }

        let Some(name) = current.as_deref() else {
            warn!("Qualifier continuation without an open qualifier: {:?}", line);
            continue;
        };

        let text = line.split('"').next().unwrap_or("");
        if let Some(last) = qualifiers.get_mut(name).and_then(|values| values.last_mut()) {
            if name != TRANSLATION_QUALIFIER {
                last.push(' ');
            }
            last.push_str(text);
        }
    }

    qualifiers
}

///
/// Split a `/name="value"` line into its name and value.
///
/// Quoted values are taken from between the first pair of quotes (or to the end
/// of the line when the closing quote is on a later line). Unquoted values are
/// whatever follows `=`, and a bare `/name` flag has an empty value.
///
fn split_qualifier(line: &str) -> (&str, &str) {
    let (name, rest) = match line.split_once('=') {
        Some((name, rest)) => (name, Some(rest)),
        None => (line, None),
    };

    let value = if line.contains('"') {
        line.split('"').nth(1).unwrap_or("")
    } else {
        rest.unwrap_or("")
    };

    (name, value)
}
