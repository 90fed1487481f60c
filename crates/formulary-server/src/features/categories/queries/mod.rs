pub mod get;
pub mod list;
pub mod list_drugs;

pub use get::{GetCategoryError, GetCategoryQuery};
pub use list::ListCategoriesError;
pub use list_drugs::ListCategoryDrugsError;
