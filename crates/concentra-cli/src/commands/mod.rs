//! Command implementations.

pub mod generate;
pub mod report;
pub mod solve;

pub use generate::GenerateArgs;
pub use report::ReportArgs;
pub use solve::SolveArgs;
