//! The pivotal struct to configure, run and store a simulation can be found here
use std::{fs::File, io::BufReader};

use log::info;

use crate::{
    errors::{MdError, Result},
    particles::Ensemble,
    potentials::lennard_jones::LennardJones,
    readers::{input_file::parse_script, run_settings::RunSettings, xyz_reader::XyzReader},
    simulation_context::{simulate, SimulationArguments},
    writers::positions::PositionWriter,
};

/// [`System`] is the basic API for running a simulation end to end.
///
/// [`System::read`] collects the settings, either from the input script or, without one, the
/// reference configuration. [`System::contextualize`] loads the data files and builds the
/// [`SimulationArguments`], [`System::run`] integrates them and [`System::write`] stores the final
/// positions.
///
/// # Examples
///
/// ```no_run
/// use ljmd::system::System;
///
/// fn main() -> ljmd::errors::Result<()> {
///     System::new(Some("input.md".to_string()))
///         .read()?
///         .contextualize()?
///         .run()?
///         .write()?;
///     Ok(())
/// }
/// ```
pub struct System {
    /// path to the input script, `None` for the reference configuration
    infile: Option<String>,
    settings: RunSettings,
    args: Option<SimulationArguments>,
}

impl System {
    pub fn new(infile: Option<String>) -> Self {
        Self {
            infile,
            settings: RunSettings::default(),
            args: None,
        }
    }

    /// Reads the input script and collects all the settings it provides.
    pub fn read(&mut self) -> Result<&mut Self> {
        self.settings = match &self.infile {
            Some(infile) => {
                let file = File::open(infile).map_err(|e| MdError::InputFileError {
                    path: infile.clone(),
                    source: e,
                })?;
                info!("Reading input script {}", infile);
                parse_script(BufReader::new(file), infile)?
            }
            None => {
                info!("No input script given, using the reference configuration");
                RunSettings::reference()
            }
        };
        Ok(self)
    }

    /// Loads positions and velocities and builds the ensemble and potential from the settings.
    pub fn contextualize(&mut self) -> Result<&mut Self> {
        let settings = &self.settings;
        let positions_file = settings
            .positions_file
            .as_deref()
            .ok_or(MdError::NoPositionsDefined)?;

        let positions = XyzReader::new(positions_file).read()?;
        info!("Read {} positions from {}", positions.len(), positions_file);
        let mut ensemble = Ensemble::from_positions(positions);

        if let Some(velocities_file) = settings.velocities_file.as_deref() {
            let velocities = XyzReader::new(velocities_file).read()?;
            ensemble.set_velocities(velocities)?;
        }
        ensemble.set_mass(settings.mass)?;

        let potential = LennardJones::new(settings.epsilon, settings.sigma)?;

        let mut args =
            SimulationArguments::new(ensemble, potential, settings.steps, settings.timestep);
        args.pair_style = settings.pair_style;
        args.position_update = settings.position_update;
        args.check_finite = settings.check_finite;
        args.thermo = settings.thermo;

        self.args = Some(args);
        Ok(self)
    }

    pub fn run(&mut self) -> Result<&mut Self> {
        let args = self.args.as_mut().ok_or(MdError::NoPositionsDefined)?;
        simulate(args)?;
        Ok(self)
    }

    pub fn write(&mut self) -> Result<&mut Self> {
        let args = self.args.as_ref().ok_or(MdError::NoPositionsDefined)?;
        let output_file = &self.settings.output_file;
        PositionWriter::new(output_file.as_str())?.write_positions(&args.ensemble)?;
        info!("Wrote {} final positions to {}", args.ensemble.len(), output_file);
        Ok(self)
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    pub fn arguments(&self) -> Option<&SimulationArguments> {
        self.args.as_ref()
    }
}
