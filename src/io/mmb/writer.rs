use crate::io::error::Error;
use crate::io::mmb::{
    EDGE_RECORD_SIZE, FORMAT_VERSION, HEADER_SIZE, MAGIC, NO_LEAD, NODE_RECORD_SIZE,
};
use crate::model::molecule::MolProto;
use std::io::Write;

/// Exact number of bytes [`encode`] produces for the molecule's current
/// state. Pure; must be recomputed if the graph changes.
pub fn encoded_len(mol: &MolProto) -> usize {
    HEADER_SIZE
        + mol.node_count() as usize * NODE_RECORD_SIZE
        + mol.edge_count() as usize * EDGE_RECORD_SIZE
}

/// Encodes into a caller-provided buffer and returns the number of bytes
/// written.
///
/// Fails with [`Error::BufferTooSmall`] before touching the buffer if it
/// cannot hold the full encoding; the encoding is never truncated.
pub fn encode_into(mol: &MolProto, buf: &mut [u8]) -> Result<usize, Error> {
    let required = encoded_len(mol);
    if buf.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: buf.len(),
        });
    }
    fill(mol, &mut buf[..required]);
    Ok(required)
}

/// Encodes into a freshly allocated, exactly-sized buffer.
pub fn encode(mol: &MolProto) -> Vec<u8> {
    let mut buf = vec![0u8; encoded_len(mol)];
    fill(mol, &mut buf);
    buf
}

/// Writes the full encoding to `writer`.
pub fn write<W: Write>(mut writer: W, mol: &MolProto) -> Result<(), Error> {
    writer.write_all(&encode(mol))?;
    Ok(())
}

// Callers hand in a buffer of exactly encoded_len(mol) bytes.
fn fill(mol: &MolProto, buf: &mut [u8]) {
    let mut out = ByteWriter { buf, pos: 0 };

    out.put_bytes(&MAGIC);
    out.put_u32(FORMAT_VERSION);
    out.put_u32(mol.node_count());
    out.put_u32(mol.edge_count());
    out.put_u32(mol.left_lead().unwrap_or(NO_LEAD));
    out.put_u32(mol.right_lead().unwrap_or(NO_LEAD));

    for node in mol.nodes() {
        let p = node.parameters;
        out.put_f64(p.sm);
        out.put_f64(p.fm);
        out.put_f64(p.je0m);
        out.put_f64(p.am);
    }

    for edge in mol.edges() {
        let p = edge.parameters;
        out.put_u32(edge.source);
        out.put_u32(edge.dest);
        out.put_f64(p.jm);
        out.put_f64(p.je1m);
        out.put_f64(p.jeem);
        out.put_f64(p.bm);
        for component in p.dm {
            out.put_f64(component);
        }
    }
}

struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl ByteWriter<'_> {
    fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    fn put_u32(&mut self, v: u32) {
        self.put_bytes(&v.to_le_bytes());
    }

    fn put_f64(&mut self, v: f64) {
        self.put_bytes(&v.to_le_bytes());
    }
}
