pub mod states;
pub mod params;
pub mod integrator;
pub mod scenario;
