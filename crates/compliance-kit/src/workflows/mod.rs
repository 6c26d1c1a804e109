pub mod compliance;
pub mod payments;
