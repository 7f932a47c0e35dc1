use crate::errors::{MdError, Result};

pub trait ArgsExt {
    fn get_required(&self, index: usize, line: usize) -> Result<&str>;
    fn parse_usize_at(&self, index: usize, line: usize) -> Result<usize>;
    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64>;
    fn parse_flag_at(&self, index: usize, line: usize) -> Result<bool>;
}

impl ArgsExt for [&str] {
    fn get_required(&self, index: usize, line: usize) -> Result<&str> {
        self.get(index)
            .copied()
            .ok_or(MdError::MissingArgument { line })
    }

    fn parse_usize_at(&self, index: usize, line: usize) -> Result<usize> {
        let arg = self.get_required(index, line)?;
        arg.parse()
            .map_err(|e| MdError::IntParseError {
                string: arg.to_string(),
                line,
                source: e,
            })
    }

    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64> {
        let arg = self.get_required(index, line)?;
        arg.parse()
            .map_err(|e| MdError::FloatParseError {
                string: arg.to_string(),
                line,
                source: e,
            })
    }

    fn parse_flag_at(&self, index: usize, line: usize) -> Result<bool> {
        match self.get_required(index, line)? {
            "yes" | "on" | "true" => Ok(true),
            "no" | "off" | "false" => Ok(false),
            other => Err(MdError::InvalidArgument {
                string: other.to_string(),
                line,
            }),
        }
    }
}
