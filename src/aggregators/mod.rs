pub mod aggregate_policy;
pub use aggregate_policy::*;

pub mod aggregator;
pub use aggregator::*;

pub mod null_safe_aggregator;
pub use null_safe_aggregator::*;

pub mod functions;
pub use functions::*;

pub mod evaluator_config;
pub use evaluator_config::*;

pub mod aggregate_evaluator;
pub use aggregate_evaluator::*;
