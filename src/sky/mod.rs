//! Synthetic sky simulation and component separation.

mod separation;
mod simulator;

pub use separation::{inverse_noise_weights, separate_components, Separation};
pub use simulator::{non_gaussian_companion, simulate_sky, ChannelMap, SkySimulation};
