//! Infrastructure layer implementing the domain's persistence contract.

pub mod persistence;
