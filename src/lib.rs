pub mod path;
pub mod report;
pub mod strings;

pub use path::{
    DefaultEditComparator, EditComparator, EditPath, EditStep, MinimumEditPath, StepOperation,
};
