//! Factory machine domain model

pub mod model;
pub mod parser;

pub use model::{Button, Machine};
pub use parser::{create_example_machines, load_machines_from_file, parse_machine_line};
