// ============ Model implementations ============

pub(crate) mod modernbert;

pub use modernbert::ModernBertSize;
