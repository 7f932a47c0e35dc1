//! Pair potentials and the force evaluators built on top of them.
pub mod kind;
pub mod lennard_jones;
pub mod potential;
