pub mod context;
pub mod terms;
