use crate::io::mmt::line::{self, Warning};
use crate::io::{Format, ReadOptions, error::Error};
use crate::model::molecule::MolProto;
use std::io::BufRead;

/// Reads an MMT device description with the default [`ReadOptions`].
pub fn read<R: BufRead>(reader: R) -> Result<(MolProto, Vec<Warning>), Error> {
    read_with(reader, ReadOptions::default())
}

/// Reads an MMT device description.
///
/// Line positions are strict: the counts, data lines, blank separators,
/// and lead lines must appear exactly where the format places them.
/// Content after the right-lead line is ignored. Unrecognized parameter
/// keys do not fail the read; they are returned as [`Warning`]s.
pub fn read_with<R: BufRead>(
    reader: R,
    options: ReadOptions,
) -> Result<(MolProto, Vec<Warning>), Error> {
    let lines = collect_lines(reader)?;
    let mut cursor = 0usize;
    let mut warnings = Vec::new();
    let mut mol = MolProto::new();

    let node_count = parse_count(&lines, &mut cursor, "node")?;
    for found in 0..node_count {
        let (ln, raw) = section_line(&lines, &mut cursor, "node", node_count, found)?;
        let params = line::parse_node_line(ln, raw, &options, &mut warnings)?;
        mol.create_node(params);
    }
    expect_blank(&lines, &mut cursor, "node")?;

    let edge_count = parse_count(&lines, &mut cursor, "edge")?;
    for found in 0..edge_count {
        let (ln, raw) = section_line(&lines, &mut cursor, "edge", edge_count, found)?;
        let edge = line::parse_edge_line(ln, raw, &options, &mut warnings)?;
        mol.connect_nodes(edge.source, edge.dest, edge.parameters)?;
    }
    expect_blank(&lines, &mut cursor, "edge")?;

    let left = parse_lead(&lines, &mut cursor, "left")?;
    let right = parse_lead(&lines, &mut cursor, "right")?;
    mol.set_left_lead(left)?;
    mol.set_right_lead(right)?;

    Ok((mol, warnings))
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|v| (i + 1, v))
                .map_err(|e| Error::Io { source: e })
        })
        .collect()
}

fn last_line(lines: &[(usize, String)]) -> usize {
    lines.last().map(|(ln, _)| *ln).unwrap_or(0)
}

fn next_line<'a>(lines: &'a [(usize, String)], cursor: &mut usize) -> Option<(usize, &'a str)> {
    let (ln, raw) = lines.get(*cursor)?;
    *cursor += 1;
    Some((*ln, raw.as_str()))
}

fn parse_count(
    lines: &[(usize, String)],
    cursor: &mut usize,
    section: &'static str,
) -> Result<u32, Error> {
    let (ln, raw) = next_line(lines, cursor).ok_or_else(|| {
        Error::parse(
            Format::Mmt,
            last_line(lines),
            format!("missing {section} count line"),
        )
    })?;
    raw.trim().parse::<u32>().map_err(|_| {
        Error::parse(
            Format::Mmt,
            ln,
            format!("invalid {section} count '{}'", raw.trim()),
        )
    })
}

fn section_line<'a>(
    lines: &'a [(usize, String)],
    cursor: &mut usize,
    section: &'static str,
    declared: u32,
    found: u32,
) -> Result<(usize, &'a str), Error> {
    next_line(lines, cursor).ok_or(Error::SectionTooShort {
        section,
        declared,
        found,
        line: last_line(lines),
    })
}

fn expect_blank(
    lines: &[(usize, String)],
    cursor: &mut usize,
    section: &'static str,
) -> Result<(), Error> {
    let (ln, raw) = next_line(lines, cursor).ok_or_else(|| {
        Error::parse(
            Format::Mmt,
            last_line(lines),
            format!("input ended before the blank line closing the {section} section"),
        )
    })?;
    if !raw.trim().is_empty() {
        return Err(Error::parse(
            Format::Mmt,
            ln,
            format!("expected a blank line after the {section} section"),
        ));
    }
    Ok(())
}

fn parse_lead(
    lines: &[(usize, String)],
    cursor: &mut usize,
    side: &'static str,
) -> Result<u32, Error> {
    let (ln, raw) = next_line(lines, cursor).ok_or_else(|| {
        Error::parse(
            Format::Mmt,
            last_line(lines),
            format!("missing {side} lead line"),
        )
    })?;
    raw.trim().parse::<u32>().map_err(|_| {
        Error::parse(
            Format::Mmt,
            ln,
            format!("invalid {side} lead index '{}'", raw.trim()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;
    use std::io::Cursor;

    const DEVICE: &str = "\
2
Sm=1.0; Fm=0.1; Je0m=0.0; Am=0.0;
Sm=1.0; Fm=0.1; Je0m=0.0; Am=0.0;

1
srcNode=0; destNode=1; Jm=1.0; Je1m=0; Jeem=0; bm=1.0; Dm=0,0,0;

0
1
";

    #[test]
    fn reads_complete_device() {
        let (mol, warnings) = read(Cursor::new(DEVICE)).expect("read");
        assert!(warnings.is_empty());
        assert_eq!(mol.node_count(), 2);
        assert_eq!(mol.edge_count(), 1);
        assert_eq!((mol.left_lead(), mol.right_lead()), (Some(0), Some(1)));

        let node = mol.node(0).expect("node 0");
        assert_eq!(node.parameters.sm, 1.0);
        assert_eq!(node.parameters.fm, 0.1);

        let edge = mol.edge(0).expect("edge 0");
        assert_eq!((edge.source, edge.dest), (0, 1));
        assert_eq!(edge.parameters.jm, 1.0);
        assert_eq!(edge.parameters.bm, 1.0);
        assert_eq!(edge.parameters.dm, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_node_line_keeps_defaults() {
        let input = "1\n\n\n0\n\n0\n0\n";
        let (mol, warnings) = read(Cursor::new(input)).expect("read");
        assert!(warnings.is_empty());
        assert_eq!(mol.node_count(), 1);
        assert_eq!(mol.node(0).expect("node").parameters.sm, 0.0);
    }

    #[test]
    fn unknown_keys_surface_as_warnings_with_line_numbers() {
        let input = "1\nSm=1.0; Typo=3;\n\n0\n\n0\n0\n";
        let (mol, warnings) = read(Cursor::new(input)).expect("read");
        assert_eq!(mol.node_count(), 1);
        assert_eq!(
            warnings,
            vec![Warning {
                line: 2,
                key: "Typo".into()
            }]
        );
    }

    #[test]
    fn node_section_too_short_is_rejected() {
        let input = "3\nSm=1.0;\n";
        let err = read(Cursor::new(input)).unwrap_err();
        match err {
            Error::SectionTooShort {
                section,
                declared,
                found,
                ..
            } => {
                assert_eq!(section, "node");
                assert_eq!(declared, 3);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_blank_separator_is_rejected() {
        let input = "1\nSm=1.0;\n1\nsrcNode=0; destNode=0;\n\n0\n0\n";
        let err = read(Cursor::new(input)).unwrap_err();
        match err {
            Error::Parse { line, details, .. } => {
                assert_eq!(line, 3);
                assert!(details.contains("blank line"), "details: {details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_count_is_rejected() {
        let err = read(Cursor::new("two\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn missing_lead_line_is_rejected() {
        let input = "0\n\n0\n\n0\n";
        let err = read(Cursor::new(input)).unwrap_err();
        match err {
            Error::Parse { details, .. } => {
                assert!(details.contains("right lead"), "details: {details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn edge_referencing_unknown_node_surfaces_model_error() {
        let input = "1\nSm=1.0;\n\n1\nsrcNode=0; destNode=5;\n\n0\n0\n";
        let err = read(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            Error::Model(model::error::Error::NodeIndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn lead_referencing_unknown_node_surfaces_model_error() {
        let input = "1\nSm=1.0;\n\n0\n\n0\n7\n";
        let err = read(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            Error::Model(model::error::Error::LeadIndexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn trailing_content_after_right_lead_is_ignored() {
        let input = "0\n\n0\n\n0\n0\nanything goes here\n";
        let err = read(Cursor::new(input)).unwrap_err();
        // leads reference node 0 in an empty molecule
        assert!(matches!(err, Error::Model(_)));

        let input = "1\nSm=1.0;\n\n0\n\n0\n0\nanything goes here\n";
        let (mol, _) = read(Cursor::new(input)).expect("read");
        assert_eq!((mol.left_lead(), mol.right_lead()), (Some(0), Some(0)));
    }
}
