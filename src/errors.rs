use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdError {
    // File I/O Errors
    #[error("Failed to open input file '{path}': {source}")]
    InputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} in file '{path}': {source}")]
    DataFileError {
        path: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing Errors
    #[error("Error parsing floating number from string {string} on line {line}: {source}")]
    FloatParseError {
        string: String,
        line: usize,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Error parsing integer number from string {string} on line {line}: {source}")]
    IntParseError {
        string: String,
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Missing argument on line {line}")]
    MissingArgument { line: usize },

    #[error("Line {line} in file '{path}' must hold exactly 3 numbers, found {found}")]
    MalformedLine {
        path: String,
        line: usize,
        found: usize,
    },

    #[error("Invalid command {command} found line: {line}")]
    UnknownCommand { command: String, line: usize },

    #[error("Invalid argument: {string} at line: {line}")]
    InvalidArgument { string: String, line: usize },

    // Configuration errors
    #[error("No positions defined in input file")]
    NoPositionsDefined,

    #[error("Velocity count mismatch: expected {expected}, found {found}")]
    VelocityCountMismatch { expected: usize, found: usize },

    #[error("Timestep must be strictly positive, got {value}")]
    NonPositiveTimestep { value: f64 },

    #[error("Parameter {name} must be positive and finite, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("Particle mass must be strictly positive, got {value}")]
    NonPositiveMass { value: f64 },

    // Physics errors
    #[error("Particle {id} has a non-finite position or velocity at step {step}")]
    NonFiniteState { id: usize, step: usize },

    #[error("Could not place all particles at the requested separation after {attempts} attempts")]
    GenerationFailed { attempts: usize },
}

pub type Result<T> = std::result::Result<T, MdError>;
