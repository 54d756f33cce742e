//! Custom field type normalization and per-context adapters

mod adapter;
mod contexts;
mod types;


pub use adapter::{AdapterSummary, FieldAdapter, FieldKeys, WireTypes};
pub use types::{
    denormalize_field_type, is_alias_of, normalize_field_type, try_normalize_field_type,
};

use crate::schemas::FieldContext;

/// All registered adapters, in `FieldContext::ALL` order
pub fn all_adapters() -> Vec<&'static FieldAdapter> {
    FieldContext::ALL
        .iter()
        .map(|c| FieldAdapter::for_context(*c))
        .collect()
}
