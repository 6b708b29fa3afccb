pub mod field_type;
pub use field_type::*;

pub mod literal;
pub use literal::*;

pub mod operation;
pub use operation::*;

pub mod aggregate_error;
pub use aggregate_error::*;

pub mod bound_reference;
pub use bound_reference::*;

pub mod bound_aggregate;
pub use bound_aggregate::*;
