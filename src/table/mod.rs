mod classified;
mod load;
mod rows;
mod table;

pub use classified::{ClassifiedTable, NATIONAL};
pub use rows::RowSet;
pub use table::{BlockGroupRecord, BlockGroups};
