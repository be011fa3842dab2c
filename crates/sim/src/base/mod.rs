//! Base types shared by the generator and the simulator.

pub mod distribution;

pub use distribution::DistributionKind;
