//! One module per document family, one function per statement.

pub mod aggregation_ops;
pub mod feedback_ops;
pub mod ledger_ops;
pub mod tenant_ops;
