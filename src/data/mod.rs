//! Selection data model and the pure decision logic over it.

pub mod predicates;
pub mod resolve;
pub mod selection;
