use std::str::FromStr;

use gbk_flatfile::{Field, tokenize};
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::*;
use crate::errors::{GenbankError, Result};
use crate::locus::parse_locus;
use crate::models::reference::sort_references;
use crate::models::{Organism, Record, Reference, Source};
use crate::options::ParseOptions;
use crate::qualifiers::build_feature;
use crate::sequence::{collapse_sequence, split_origin};

static REFERENCE_BASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+) +\(bases (\d+) to (\d+)\)$").expect("valid REFERENCE pattern")
});

///
/// Parse the text of one GenBank record.
///
/// # Arguments
/// - text: the complete record, from LOCUS through the sequence block
///
/// # Errors
/// Fails on a field line without a name/value separator and on any feature
/// location that cannot be parsed. Unknown fields and unrecognized LOCUS
/// layouts are tolerated.
///
/// # Example
/// ```
/// use gbk_genbank::parse_record;
///
/// let text = "\
/// LOCUS       SCU49845                5028 bp    DNA     PLN 23-MAR-2010
/// DEFINITION  Saccharomyces cerevisiae TCP1-beta gene.
/// ORIGIN
///         1 aaaa cccc
///        61 gggg tttt
/// //";
/// let record = parse_record(text).unwrap();
///
/// assert_eq!(record.locus_name.as_deref(), Some("SCU49845"));
/// assert_eq!(record.sequence.as_deref(), Some("aaaaccccggggtttt"));
/// ```
pub fn parse_record(text: &str) -> Result<Record> {
    parse_record_with_options(text, ParseOptions::FULL)
}

///
/// Parse one record, materializing only what `opts` asks for.
///
pub fn parse_record_with_options(text: &str, opts: ParseOptions) -> Result<Record> {
    let lines: Vec<&str> = text.lines().collect();
    let (annotation, sequence_block) = split_origin(&lines);

    debug!(
        "Parsing GenBank record: {} annotation lines, sequence block: {}",
        annotation.len(),
        sequence_block.is_some()
    );

    let mut record = Record::default();

    if opts.store_sequence {
        record.sequence = sequence_block.map(collapse_sequence);
    }

    for field in tokenize(annotation)? {
        apply_field(&mut record, &field, opts)?;
    }

    sort_references(&mut record.references);

    debug!(
        "Parsed record {:?}: {} references, {} features",
        record.locus_name,
        record.references.len(),
        record.features.len()
    );

    Ok(record)
}

fn apply_field(record: &mut Record, field: &Field, opts: ParseOptions) -> Result<()> {
    match field.name.as_str() {
        LOCUS_FIELD => match parse_locus(field.first_value()) {
            Some(locus) => locus.apply_to(record),
            None => warn!("Unrecognized LOCUS line: {:?}", field.first_value()),
        },
        DEFINITION_FIELD => record.definition = Some(field.joined_value()),
        ACCESSION_FIELD => record.accession = Some(field.joined_value()),
        VERSION_FIELD => record.version = Some(field.joined_value()),
        KEYWORDS_FIELD => trace!("Skipping KEYWORDS: {:?}", field.joined_value()),
        SOURCE_FIELD => record.source = Some(build_source(field)),
        REFERENCE_FIELD => record.references.push(build_reference(field)),
        FEATURES_FIELD if opts.parse_features => {
            for child in &field.children {
                record.features.push(build_feature(child)?);
            }
        }
        FEATURES_FIELD => trace!("Skipping FEATURES table"),
        other => trace!("Ignoring field {}", other),
    }
    Ok(())
}

///
/// SOURCE field with its optional ORGANISM subfield.
///
/// The first ORGANISM line is the organism name; the remaining lines hold the
/// `; `-separated lineage, whose entries lose one trailing `.` each.
///
fn build_source(field: &Field) -> Source {
    let organism = field.child(ORGANISM_SUBFIELD).map(|organism| {
        let lineage_text = organism.value.get(1..).unwrap_or_default().join(" ");
        let lineage = if lineage_text.trim().is_empty() {
            Vec::new()
        } else {
            lineage_text
                .split(LINEAGE_SEPARATOR)
                .map(|taxon| {
                    let taxon = taxon.trim();
                    taxon.strip_suffix('.').unwrap_or(taxon).to_string()
                })
                .collect()
        };

        Organism {
            name: organism.first_value().to_string(),
            lineage,
        }
    });

    Source {
        name: field.joined_value(),
        organism,
    }
}

fn build_reference(field: &Field) -> Reference {
    let mut reference = Reference::default();

    if let Some(caps) = REFERENCE_BASES.captures(field.first_value().trim_end()) {
        // all three or none
        if let (Ok(number), Ok(start), Ok(end)) =
            (caps[1].parse(), caps[2].parse(), caps[3].parse())
        {
            reference.number = Some(number);
            reference.start = Some(start);
            reference.end = Some(end);
        }
    }

    for subfield in &field.children {
        let value = Some(subfield.joined_value());
        match subfield.name.as_str() {
            AUTHORS_SUBFIELD => reference.authors = value,
            CONSORTIUM_SUBFIELD => reference.consortium = value,
            TITLE_SUBFIELD => reference.title = value,
            JOURNAL_SUBFIELD => reference.journal = value,
            PUBMED_SUBFIELD => reference.pubmed = value,
            REMARK_SUBFIELD => reference.remark = value,
            _ => {}
        }
    }

    reference
}

///
/// Split a multi-record file on `//` terminator lines.
///
/// Chunks holding nothing but whitespace are dropped, so a trailing terminator
/// does not produce an empty record.
///
pub fn split_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim_end() == RECORD_TERMINATOR {
            records.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    records.push(current.join("\n"));

    records.retain(|chunk| !chunk.trim().is_empty());
    records
}

///
/// Parse every record of a multi-record GenBank file.
///
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    split_records(text).iter().map(|chunk| parse_record(chunk)).collect()
}

impl FromStr for Record {
    type Err = GenbankError;

    fn from_str(s: &str) -> Result<Self> {
        parse_record(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gbk_location::{Location, Range, Strand};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn record_text() -> &'static str {
        "\
LOCUS       SCU49845     5028 bp    DNA     linear   PLN 21-JUN-1999
DEFINITION  Saccharomyces cerevisiae TCP1-beta gene, partial cds, and Axl2p
            (AXL2) and Rev7p (REV7) genes, complete cds.
ACCESSION   U49845
VERSION     U49845.1
KEYWORDS    .
SOURCE      Saccharomyces cerevisiae (baker's yeast)
  ORGANISM  Saccharomyces cerevisiae
            Eukaryota; Fungi; Ascomycota; Saccharomycotina; Saccharomycetes;
            Saccharomycetales; Saccharomycetaceae; Saccharomyces.
REFERENCE   2  (bases 1 to 5028)
  AUTHORS   Roemer,T., Madden,K., Chang,J. and Snyder,M.
  TITLE     Selection of axial growth sites in yeast requires Axl2p, a novel
            plasma membrane glycoprotein
REFERENCE   1  (bases 1 to 5028)
  AUTHORS   Torpey,L.E., Gibbs,P.E., Nelson,J. and Lawrence,C.W.
  PUBMED    7871890
FEATURES             Location/Qualifiers
     gene            complement(3300..4037)
                     /gene=\"REV7\"
     CDS             <1..206
                     /codon_start=3
                     /translation=\"SSIYNGISTSGLDLNNGTIADMRQLGIVESYKLKRAVVSSASEA
                     AEVLLRVDNIIRARPRTANRQHM\"
ORIGIN
        1 gatcctccat atacaacggt
       21 atctccacct
//
"
    }

    #[rstest]
    fn test_header_fields(record_text: &str) {
        let record = parse_record(record_text).unwrap();

        assert_eq!(record.locus_name.as_deref(), Some("SCU49845"));
        assert_eq!(record.sequence_length, Some(5028));
        assert_eq!(record.molecule_type.as_deref(), Some("DNA"));
        assert_eq!(record.molecule_type_disp.as_deref(), Some("linear"));
        assert_eq!(record.division.as_deref(), Some("PLN"));
        assert_eq!(record.modified.as_deref(), Some("21-JUN-1999"));
        assert_eq!(
            record.definition.as_deref(),
            Some("Saccharomyces cerevisiae TCP1-beta gene, partial cds, and Axl2p (AXL2) and Rev7p (REV7) genes, complete cds.")
        );
        assert_eq!(record.accession.as_deref(), Some("U49845"));
        assert_eq!(record.version.as_deref(), Some("U49845.1"));
    }

    #[rstest]
    fn test_sequence(record_text: &str) {
        let record = parse_record(record_text).unwrap();
        assert_eq!(record.sequence.as_deref(), Some("gatcctccatatacaacggtatctccacct"));
    }

    #[rstest]
    fn test_source_and_lineage(record_text: &str) {
        let record = parse_record(record_text).unwrap();
        let source = record.source.unwrap();

        assert_eq!(source.name, "Saccharomyces cerevisiae (baker's yeast)");

        let organism = source.organism.unwrap();
        assert_eq!(organism.name, "Saccharomyces cerevisiae");
        assert_eq!(
            organism.lineage,
            vec![
                "Eukaryota",
                "Fungi",
                "Ascomycota",
                "Saccharomycotina",
                "Saccharomycetes",
                "Saccharomycetales",
                "Saccharomycetaceae",
                "Saccharomyces",
            ]
        );
    }

    #[rstest]
    fn test_references_are_sorted(record_text: &str) {
        let record = parse_record(record_text).unwrap();

        assert_eq!(record.references.len(), 2);
        assert_eq!(
            record.references[0],
            Reference {
                number: Some(1),
                start: Some(1),
                end: Some(5028),
                authors: Some("Torpey,L.E., Gibbs,P.E., Nelson,J. and Lawrence,C.W.".to_string()),
                pubmed: Some("7871890".to_string()),
                ..Default::default()
            }
        );
        assert_eq!(record.references[1].number, Some(2));
        assert_eq!(
            record.references[1].title.as_deref(),
            Some("Selection of axial growth sites in yeast requires Axl2p, a novel plasma membrane glycoprotein")
        );
    }

    #[rstest]
    fn test_features(record_text: &str) {
        let record = parse_record(record_text).unwrap();
        assert_eq!(record.features.len(), 2);

        let gene = &record.features[0];
        assert_eq!(gene.key, "gene");
        assert_eq!(
            gene.location,
            Location::Range(Range {
                start: 3300,
                end: 4037,
                partial_5prime: false,
                partial_3prime: false,
                strand: Some(Strand::Complementary),
            })
        );
        assert_eq!(gene.first_qualifier("/gene"), Some("REV7"));

        let cds = &record.features[1];
        assert_eq!(cds.first_qualifier("codon_start"), Some("3"));
        assert_eq!(
            cds.first_qualifier("translation"),
            Some("SSIYNGISTSGLDLNNGTIADMRQLGIVESYKLKRAVVSSASEAAEVLLRVDNIIRARPRTANRQHM")
        );
    }

    #[rstest]
    fn test_header_only_options(record_text: &str) {
        let record = parse_record_with_options(record_text, ParseOptions::HEADER_ONLY).unwrap();
        assert_eq!(record.sequence, None);
        assert_eq!(record.features.is_empty(), true);
        assert_eq!(record.references.len(), 2);
    }

    #[rstest]
    fn test_reference_without_bases() {
        let record = parse_record("REFERENCE   1\n  TITLE     Direct Submission").unwrap();
        let reference = &record.references[0];

        assert_eq!(reference.number, None);
        assert_eq!(reference.start, None);
        assert_eq!(reference.end, None);
        assert_eq!(reference.title.as_deref(), Some("Direct Submission"));
    }

    #[rstest]
    fn test_organism_without_lineage() {
        let record = parse_record("SOURCE      yeast\n  ORGANISM  Saccharomyces cerevisiae").unwrap();
        let organism = record.source.unwrap().organism.unwrap();
        assert_eq!(organism.lineage.is_empty(), true);
    }

    #[rstest]
    fn test_unknown_fields_and_bad_locus_are_tolerated() {
        let text = "LOCUS       WEIRD\nDBLINK      BioProject: PRJNA1\nACCESSION   X1";
        let record = parse_record(text).unwrap();

        assert_eq!(record.locus_name, None);
        assert_eq!(record.accession.as_deref(), Some("X1"));
        assert_eq!(record.sequence, None);
    }

    #[rstest]
    fn test_malformed_field_line() {
        let err = parse_record("LOCUS       X\nKEYWORDS\nORIGIN\n").unwrap_err();
        assert_eq!(err.is_malformed_field_line(), true);
    }

    #[rstest]
    #[case("foo(1..2)", true, false)]
    #[case("1^2", false, true)]
    fn test_bad_feature_location_aborts(
        #[case] location: &str,
        #[case] unsupported: bool,
        #[case] unparseable: bool,
    ) {
        let text = format!(
            "FEATURES             Location/Qualifiers\n     misc_feature    {}\n",
            location
        );
        let err = parse_record(&text).unwrap_err();
        assert_eq!(err.is_unsupported_modifier(), unsupported);
        assert_eq!(err.is_unparseable_location(), unparseable);
    }

    #[rstest]
    fn test_split_records() {
        let text = "LOCUS       A\n//\nLOCUS       B\n//\n\n";
        assert_eq!(split_records(text), vec!["LOCUS       A", "LOCUS       B"]);
    }

    #[rstest]
    fn test_from_str(record_text: &str) {
        let record: Record = record_text.parse().unwrap();
        assert_eq!(record.accession.as_deref(), Some("U49845"));
    }
}
