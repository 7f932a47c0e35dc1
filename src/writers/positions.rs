use std::{
    fs::File,
    io::{BufWriter, Write},
};

use crate::{
    errors::{MdError, Result},
    math::Vector3D,
    particles::Ensemble,
};

/// Writes one `x y z` line per vector, using the shortest representation that round-trips.
pub struct PositionWriter {
    path: String,
    out: BufWriter<File>,
}

impl PositionWriter {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| MdError::OutputFileError {
            path: path.clone(),
            source: e,
        })?;
        Ok(PositionWriter {
            path,
            out: BufWriter::new(file),
        })
    }

    pub fn write_vectors(&mut self, vectors: &[Vector3D]) -> Result<()> {
        for v in vectors {
            writeln!(self.out, "{} {} {}", v[0], v[1], v[2]).map_err(|e| self.error(e))?;
        }
        self.out.flush().map_err(|e| self.error(e))
    }

    /// Final positions in the ensemble's index order.
    pub fn write_positions(&mut self, ensemble: &Ensemble) -> Result<()> {
        self.write_vectors(&ensemble.positions())
    }

    fn error(&self, source: std::io::Error) -> MdError {
        MdError::OutputFileError {
            path: self.path.clone(),
            source,
        }
    }
}
