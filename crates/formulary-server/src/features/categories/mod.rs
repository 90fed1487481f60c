pub mod queries;
pub mod routes;
pub mod types;

pub use queries::{GetCategoryError, GetCategoryQuery, ListCategoriesError, ListCategoryDrugsError};
pub use routes::categories_routes;
pub use types::Category;
