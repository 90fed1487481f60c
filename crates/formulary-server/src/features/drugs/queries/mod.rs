pub mod get;
pub mod list;

pub use get::{GetDrugError, GetDrugQuery};
pub use list::{DrugSort, ListDrugsError, ListDrugsParams};
