use crate::errors::Result;
use crate::potentials::{
    lennard_jones::{LennardJones, LennardJonesManager, LennardJonesPairManager},
    potential::PotentialManager,
};
use crate::simulation_context::SimulationArguments;

/// Which pair loop evaluates the forces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairStyle {
    #[default]
    Ordered,
    Pairwise,
}

impl PairStyle {
    pub fn from_str(style: &str) -> Option<Self> {
        match style {
            "lj/ordered" => Some(Self::Ordered),
            "lj/pairwise" => Some(Self::Pairwise),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ordered => "lj/ordered",
            Self::Pairwise => "lj/pairwise",
        }
    }
}

pub enum PotentialManagerKind {
    LennardJonesManager(LennardJonesManager),
    LennardJonesPairManager(LennardJonesPairManager),
}

impl PotentialManagerKind {
    pub fn new(style: PairStyle, potential: LennardJones) -> Self {
        match style {
            PairStyle::Ordered => Self::LennardJonesManager(LennardJonesManager::new(potential)),
            PairStyle::Pairwise => {
                Self::LennardJonesPairManager(LennardJonesPairManager::new(potential))
            }
        }
    }

    pub fn manager(&self) -> &dyn PotentialManager {
        match self {
            Self::LennardJonesManager(ljm) => ljm,
            Self::LennardJonesPairManager(ljpm) => ljpm,
        }
    }

    pub fn run(&self, args: &mut SimulationArguments) -> Result<()> {
        self.manager().run(args)
    }
}
