use crate::consts::ORIGIN_TOKEN;

///
/// True for the line that opens the sequence block: `ORIGIN` followed by a space,
/// or a bare `ORIGIN`.
///
pub fn is_origin_line(line: &str) -> bool {
    match line.strip_prefix(ORIGIN_TOKEN) {
        Some(rest) => rest.is_empty() || rest.starts_with(' '),
        None => false,
    }
}

///
/// Split record lines into the annotation block and the sequence block.
///
/// The ORIGIN line itself belongs to neither. Without an ORIGIN line every line
/// is annotation and there is no sequence block.
///
pub fn split_origin<'a, 'b>(lines: &'b [&'a str]) -> (&'b [&'a str], Option<&'b [&'a str]>) {
    match lines.iter().position(|line| is_origin_line(line)) {
        Some(origin) => (&lines[..origin], Some(&lines[origin + 1..])),
        None => (lines, None),
    }
}

///
/// Collapse sequence lines into one string, dropping the leading position
/// number of each line and all whitespace.
///
pub fn collapse_sequence(lines: &[&str]) -> String {
    lines
        .iter()
        .flat_map(|line| line.split_whitespace().skip(1))
        .collect()
}
