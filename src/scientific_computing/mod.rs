// quadratic regression over user samples and the curve algebra built on it

pub mod curve;
pub mod explorer;
pub mod quadratic_fit;
pub mod statistics;
pub mod tangent;
