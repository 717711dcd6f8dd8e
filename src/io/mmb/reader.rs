use crate::io::error::Error;
use crate::io::mmb::{
    EDGE_RECORD_SIZE, FORMAT_VERSION, HEADER_SIZE, MAGIC, NO_LEAD, NODE_RECORD_SIZE,
};
use crate::model::molecule::MolProto;
use crate::model::params::{EdgeParameters, NodeParameters};
use std::io::Read;

/// Decodes one MMB artifact back into a molecule.
///
/// Magic and version are checked first, then the total length implied by
/// the header's counts; short buffers and trailing bytes are both
/// rejected before any record is read. The graph is rebuilt through the
/// same mutators the compiler uses, so an artifact describing an
/// inconsistent graph fails with the corresponding integrity error.
pub fn decode(data: &[u8]) -> Result<MolProto, Error> {
    if data.len() < HEADER_SIZE {
        return Err(Error::Truncated {
            required: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let mut input = ByteReader { data, pos: 0 };

    let magic: [u8; 4] = input.take();
    if magic != MAGIC {
        return Err(Error::BadMagic {
            expected: MAGIC,
            found: magic,
        });
    }
    let version = input.take_u32();
    if version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            found: version,
            supported: FORMAT_VERSION,
        });
    }

    let node_count = input.take_u32();
    let edge_count = input.take_u32();
    let left_lead = input.take_u32();
    let right_lead = input.take_u32();

    let required = HEADER_SIZE
        + node_count as usize * NODE_RECORD_SIZE
        + edge_count as usize * EDGE_RECORD_SIZE;
    if data.len() < required {
        return Err(Error::Truncated {
            required,
            actual: data.len(),
        });
    }
    if data.len() > required {
        return Err(Error::TrailingData {
            expected: required,
            actual: data.len(),
        });
    }

    let mut mol = MolProto::new();

    for _ in 0..node_count {
        mol.create_node(NodeParameters {
            sm: input.take_f64(),
            fm: input.take_f64(),
            je0m: input.take_f64(),
            am: input.take_f64(),
        });
    }

    for _ in 0..edge_count {
        let source = input.take_u32();
        let dest = input.take_u32();
        let parameters = EdgeParameters {
            jm: input.take_f64(),
            je1m: input.take_f64(),
            jeem: input.take_f64(),
            bm: input.take_f64(),
            dm: [input.take_f64(), input.take_f64(), input.take_f64()],
        };
        mol.connect_nodes(source, dest, parameters)?;
    }

    if left_lead != NO_LEAD {
        mol.set_left_lead(left_lead)?;
    }
    if right_lead != NO_LEAD {
        mol.set_right_lead(right_lead)?;
    }

    Ok(mol)
}

/// Reads `reader` to its end and decodes the bytes as one MMB artifact.
pub fn read_from<R: Read>(mut reader: R) -> Result<MolProto, Error> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data)
}

struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl ByteReader<'_> {
    // decode pre-checks the total length, so slicing cannot go out of bounds
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    fn take_u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn take_f64(&mut self) -> f64 {
        f64::from_le_bytes(self.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mmb::writer::encode;
    use crate::model;
    use crate::model::params::{EdgeParameters, NodeParameters};

    fn sample() -> MolProto {
        let mut mol = MolProto::new();
        mol.create_node(NodeParameters {
            sm: 1.0,
            fm: 0.1,
            je0m: -0.5,
            am: 0.25,
        });
        mol.create_node(NodeParameters {
            sm: 2.0,
            ..Default::default()
        });
        mol.connect_nodes(
            0,
            1,
            EdgeParameters {
                jm: 1.0,
                je1m: 0.0625,
                jeem: -3.0,
                bm: 1.0,
                dm: [0.1, -0.2, 0.3],
            },
        )
        .expect("connect");
        mol.set_leads(0, 1).expect("leads");
        mol
    }

    #[test]
    fn round_trip_is_bit_exact() {
        let mol = sample();
        let decoded = decode(&encode(&mol)).expect("decode");
        assert_eq!(decoded, mol);
    }

    #[test]
    fn empty_molecule_round_trips_with_unset_leads() {
        let mol = MolProto::new();
        let decoded = decode(&encode(&mol)).expect("decode");
        assert_eq!(decoded.node_count(), 0);
        assert_eq!(decoded.edge_count(), 0);
        assert_eq!((decoded.left_lead(), decoded.right_lead()), (None, None));
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = encode(&sample());
        bytes[0] = 0xFF;
        let err = decode(&bytes).unwrap_err();
        match err {
            Error::BadMagic { expected, found } => {
                assert_eq!(expected, MAGIC);
                assert_eq!(found[0], 0xFF);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut bytes = encode(&sample());
        bytes[4..8].copy_from_slice(&7u32.to_le_bytes());
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedVersion {
                found: 7,
                supported: FORMAT_VERSION
            }
        ));
    }

    #[test]
    fn short_header_is_rejected() {
        let err = decode(&MAGIC).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                required: HEADER_SIZE,
                actual: 4
            }
        ));
    }

    #[test]
    fn truncated_body_is_rejected() {
        let bytes = encode(&sample());
        let err = decode(&bytes[..bytes.len() - 1]).unwrap_err();
        match err {
            Error::Truncated { required, actual } => {
                assert_eq!(required, bytes.len());
                assert_eq!(actual, bytes.len() - 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_data_is_rejected() {
        let mut bytes = encode(&sample());
        bytes.push(0);
        let err = decode(&bytes).unwrap_err();
        match err {
            Error::TrailingData { expected, actual } => {
                assert_eq!(expected, bytes.len() - 1);
                assert_eq!(actual, bytes.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn edge_referencing_missing_node_is_rejected() {
        let mut bytes = encode(&sample());
        // first edge record: source index sits right after the node records
        let source_offset = HEADER_SIZE + 2 * NODE_RECORD_SIZE;
        bytes[source_offset..source_offset + 4].copy_from_slice(&9u32.to_le_bytes());
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::Model(model::error::Error::NodeIndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn lead_referencing_missing_node_is_rejected() {
        let mut bytes = encode(&sample());
        bytes[16..20].copy_from_slice(&9u32.to_le_bytes());
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::Model(model::error::Error::LeadIndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn read_from_decodes_via_io() {
        let mol = sample();
        let bytes = encode(&mol);
        let decoded = read_from(bytes.as_slice()).expect("read_from");
        assert_eq!(decoded, mol);
    }
}
