#![forbid(unsafe_code)]

//! Rule handlers and the registry that dispatches to them

pub mod handlers;
mod registry;

// Re-export core types
pub use registry::{
    AnyHandler, FloatHandler, HandlerSet, IntHandler, RuleDefinition, RuleRegistry, StrHandler,
};
