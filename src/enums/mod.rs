pub mod check_error;
pub mod health_color;
pub mod metric_kind;
pub mod polarity;
pub mod severity;
