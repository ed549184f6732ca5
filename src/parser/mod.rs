pub mod sheet;

pub use sheet::{Parser, SheetParser};
