//! Argument parsers for the individual commands of the input script
use crate::{
    errors::{MdError, Result},
    extensions::ArgsExt,
    particles::PositionUpdate,
    potentials::kind::PairStyle,
    readers::run_settings::RunSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `read_positions <path>`
    ReadPositions,
    /// `read_velocities <path>`
    ReadVelocities,
    /// `pair_style lj/ordered | lj/pairwise`
    PairStyle,
    /// `pair_coeff <epsilon> <sigma>`
    PairCoeff,
    /// `mass <value>`, applied to every particle
    Mass,
    /// `timestep <dt>`
    Timestep,
    /// `run <n_steps>`
    Run,
    /// `thermo <n>`
    Thermo,
    /// `position_update reference | textbook`
    PositionUpdate,
    /// `check_finite yes | no`
    CheckFinite,
    /// `write_positions <path>`
    WritePositions,
}

impl Command {
    pub fn from_str(command: &str) -> Option<Self> {
        match command {
            "read_positions" => Some(Self::ReadPositions),
            "read_velocities" => Some(Self::ReadVelocities),
            "pair_style" => Some(Self::PairStyle),
            "pair_coeff" => Some(Self::PairCoeff),
            "mass" => Some(Self::Mass),
            "timestep" => Some(Self::Timestep),
            "run" => Some(Self::Run),
            "thermo" => Some(Self::Thermo),
            "position_update" => Some(Self::PositionUpdate),
            "check_finite" => Some(Self::CheckFinite),
            "write_positions" => Some(Self::WritePositions),
            _ => None,
        }
    }

    pub fn run(&self, args: &[&str], line: usize, settings: &mut RunSettings) -> Result<()> {
        match self {
            Self::ReadPositions => {
                settings.positions_file = Some(args.get_required(0, line)?.to_string());
            }
            Self::ReadVelocities => {
                settings.velocities_file = Some(args.get_required(0, line)?.to_string());
            }
            Self::PairStyle => {
                let style = args.get_required(0, line)?;
                settings.pair_style =
                    PairStyle::from_str(style).ok_or_else(|| MdError::InvalidArgument {
                        string: style.to_string(),
                        line,
                    })?;
            }
            Self::PairCoeff => {
                settings.epsilon = args.parse_float_at(0, line)?;
                settings.sigma = args.parse_float_at(1, line)?;
            }
            Self::Mass => {
                settings.mass = args.parse_float_at(0, line)?;
            }
            Self::Timestep => {
                settings.timestep = args.parse_float_at(0, line)?;
            }
            Self::Run => {
                settings.steps = args.parse_usize_at(0, line)?;
            }
            Self::Thermo => {
                settings.thermo = args.parse_usize_at(0, line)?;
            }
            Self::PositionUpdate => {
                let scheme = args.get_required(0, line)?;
                settings.position_update =
                    PositionUpdate::from_str(scheme).ok_or_else(|| MdError::InvalidArgument {
                        string: scheme.to_string(),
                        line,
                    })?;
            }
            Self::CheckFinite => {
                settings.check_finite = args.parse_flag_at(0, line)?;
            }
            Self::WritePositions => {
                settings.output_file = args.get_required(0, line)?.to_string();
            }
        }
        Ok(())
    }
}
