mod apply;
mod check;
mod columns;
mod sample;

pub use apply::apply_filter;
pub use check::check_filter;
pub use columns::list_columns;
pub use sample::print_sample;
