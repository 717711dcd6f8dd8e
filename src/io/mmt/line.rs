//! Parsing of a single MMT data line into a parameter record.
//!
//! A data line is a whitespace-separated sequence of `key=value` tokens.
//! Token order is irrelevant; a key that appears twice keeps the last
//! value. Parsing a line is pure: it either yields a complete record or
//! fails without partial effect.

use crate::io::{Format, ReadOptions, error::Error};
use crate::model::params::{EdgeParameters, NodeParameters};

/// A non-fatal diagnostic produced while reading MMT text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// 1-based line number the unrecognized key appeared on.
    pub line: usize,
    /// The key as written in the input.
    pub key: String,
}

/// One edge data line: the two endpoints plus the coupling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    pub source: u32,
    pub dest: u32,
    pub parameters: EdgeParameters,
}

pub fn parse_node_line(
    line_no: usize,
    raw: &str,
    options: &ReadOptions,
    warnings: &mut Vec<Warning>,
) -> Result<NodeParameters, Error> {
    let mut params = NodeParameters::default();

    for token in raw.split_whitespace() {
        let (key, value) = split_token(token, line_no)?;
        let value = strip_terminator(value, options);
        match key {
            "Sm" => params.sm = parse_scalar(value, line_no, key)?,
            "Fm" => params.fm = parse_scalar(value, line_no, key)?,
            "Je0m" => params.je0m = parse_scalar(value, line_no, key)?,
            "Am" => params.am = parse_scalar(value, line_no, key)?,
            _ => warnings.push(Warning {
                line: line_no,
                key: key.to_string(),
            }),
        }
    }

    Ok(params)
}

pub fn parse_edge_line(
    line_no: usize,
    raw: &str,
    options: &ReadOptions,
    warnings: &mut Vec<Warning>,
) -> Result<EdgeLine, Error> {
    let mut params = EdgeParameters::default();
    let mut source = None;
    let mut dest = None;

    for token in raw.split_whitespace() {
        let (key, value) = split_token(token, line_no)?;
        let value = strip_terminator(value, options);
        match key {
            "Jm" => params.jm = parse_scalar(value, line_no, key)?,
            "Je1m" => params.je1m = parse_scalar(value, line_no, key)?,
            "Jeem" => params.jeem = parse_scalar(value, line_no, key)?,
            "bm" => params.bm = parse_scalar(value, line_no, key)?,
            "Dm" => params.dm = parse_vector3(value, line_no, key)?,
            "srcNode" => source = Some(parse_index(value, line_no, key)?),
            "destNode" => dest = Some(parse_index(value, line_no, key)?),
            _ => warnings.push(Warning {
                line: line_no,
                key: key.to_string(),
            }),
        }
    }

    let source = source.ok_or(Error::MissingKey {
        line: line_no,
        key: "srcNode",
    })?;
    let dest = dest.ok_or(Error::MissingKey {
        line: line_no,
        key: "destNode",
    })?;

    Ok(EdgeLine {
        source,
        dest,
        parameters: params,
    })
}

fn split_token<'a>(token: &'a str, line_no: usize) -> Result<(&'a str, &'a str), Error> {
    token.split_once('=').ok_or_else(|| {
        Error::parse(
            Format::Mmt,
            line_no,
            format!("token '{token}' is not of the form key=value"),
        )
    })
}

/// Strips the configured value terminator, at most once and only when
/// actually present, so terminator-free values parse unchanged.
fn strip_terminator<'a>(value: &'a str, options: &ReadOptions) -> &'a str {
    match options.value_terminator {
        Some(t) => value.strip_suffix(t).unwrap_or(value),
        None => value,
    }
}

fn parse_scalar(value: &str, line_no: usize, key: &str) -> Result<f64, Error> {
    value.parse::<f64>().map_err(|_| {
        Error::parse(
            Format::Mmt,
            line_no,
            format!("malformed value '{value}' for key '{key}'"),
        )
    })
}

fn parse_index(value: &str, line_no: usize, key: &str) -> Result<u32, Error> {
    value.parse::<u32>().map_err(|_| {
        Error::parse(
            Format::Mmt,
            line_no,
            format!("malformed node index '{value}' for key '{key}'"),
        )
    })
}

fn parse_vector3(value: &str, line_no: usize, key: &str) -> Result<[f64; 3], Error> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::parse(
            Format::Mmt,
            line_no,
            format!("vector value '{value}' for key '{key}' must have three comma-separated components"),
        ));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_scalar(part, line_no, key)?;
    }
    Ok(out)
}
