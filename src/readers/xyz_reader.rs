//! Reader for files holding one whitespace-separated `x y z` triple per line.
use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use log::debug;

use crate::{
    errors::{MdError, Result},
    extensions::ArgsExt,
    math::Vector3D,
};

pub struct XyzReader {
    infile: String,
}

impl XyzReader {
    pub fn new(infile: impl Into<String>) -> Self {
        Self {
            infile: infile.into(),
        }
    }

    /// Reads every non-blank line as one vector, keeping file order.
    pub fn read(&self) -> Result<Vec<Vector3D>> {
        let file = File::open(&self.infile).map_err(|e| MdError::InputFileError {
            path: self.infile.clone(),
            source: e,
        })?;
        let vectors = parse_vectors(BufReader::new(file), &self.infile)?;
        debug!("Read {} vectors from {}", vectors.len(), self.infile);
        Ok(vectors)
    }
}

/// `path` is only used to label errors.
pub fn parse_vectors<R: BufRead>(reader: R, path: &str) -> Result<Vec<Vector3D>> {
    let mut vectors = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.map_err(|e| MdError::DataFileError {
            path: path.to_string(),
            line: line_num,
            source: e,
        })?;

        let line_split: Vec<&str> = line.split_whitespace().collect();
        if line_split.is_empty() {
            continue;
        }
        if line_split.len() != 3 {
            return Err(MdError::MalformedLine {
                path: path.to_string(),
                line: line_num,
                found: line_split.len(),
            });
        }

        let x = line_split.parse_float_at(0, line_num)?;
        let y = line_split.parse_float_at(1, line_num)?;
        let z = line_split.parse_float_at(2, line_num)?;
        vectors.push(Vector3D::new(x, y, z));
    }
    Ok(vectors)
}
