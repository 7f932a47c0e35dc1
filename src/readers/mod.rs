pub mod input_file;
pub mod run_settings;
pub mod xyz_reader;
