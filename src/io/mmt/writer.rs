use crate::io::error::Error;
use crate::model::molecule::MolProto;
use std::io::Write;

/// Writes a molecule as MMT text.
///
/// The output parses back to a structurally identical molecule with the
/// default [`ReadOptions`](crate::io::ReadOptions). Both leads must be
/// designated; nothing is written otherwise.
pub fn write<W: Write>(mut writer: W, mol: &MolProto) -> Result<(), Error> {
    let left = mol.left_lead().ok_or(Error::MissingLead("left"))?;
    let right = mol.right_lead().ok_or(Error::MissingLead("right"))?;

    writeln!(writer, "{}", mol.node_count())?;
    for node in mol.nodes() {
        let p = node.parameters;
        writeln!(
            writer,
            "Sm={}; Fm={}; Je0m={}; Am={};",
            p.sm, p.fm, p.je0m, p.am
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "{}", mol.edge_count())?;
    for edge in mol.edges() {
        let p = edge.parameters;
        writeln!(
            writer,
            "srcNode={}; destNode={}; Jm={}; Je1m={}; Jeem={}; bm={}; Dm={},{},{};",
            edge.source, edge.dest, p.jm, p.je1m, p.jeem, p.bm, p.dm[0], p.dm[1], p.dm[2]
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "{left}")?;
    writeln!(writer, "{right}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mmt::reader;
    use crate::model::params::{EdgeParameters, NodeParameters};
    use std::io::Cursor;

    fn sample() -> MolProto {
        let mut mol = MolProto::with_nodes(
            2,
            NodeParameters {
                sm: 1.0,
                fm: 0.1,
                je0m: -0.25,
                am: 0.5,
            },
        );
        mol.connect_nodes(
            0,
            1,
            EdgeParameters {
                jm: 1.0,
                je1m: 0.125,
                jeem: -2.0,
                bm: 1.0,
                dm: [0.5, -1.0, 3.0],
            },
        )
        .expect("connect");
        mol.set_leads(0, 1).expect("leads");
        mol
    }

    #[test]
    fn writes_and_reads_roundtrip() {
        let mol = sample();
        let mut buf = Vec::new();
        write(&mut buf, &mol).expect("write mmt");
        let (parsed, warnings) = reader::read(Cursor::new(buf)).expect("read mmt");
        assert!(warnings.is_empty());
        assert_eq!(parsed, mol);
    }

    #[test]
    fn refuses_molecule_without_leads() {
        let mol = MolProto::with_nodes(1, NodeParameters::default());
        let mut buf = Vec::new();
        let err = write(&mut buf, &mol).unwrap_err();
        assert!(matches!(err, Error::MissingLead("left")));
        assert!(buf.is_empty());
    }
}
