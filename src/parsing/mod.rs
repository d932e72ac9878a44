pub use workday::{format_workday, parse_workday};

mod workday;
