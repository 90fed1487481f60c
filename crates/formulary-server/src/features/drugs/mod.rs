pub mod queries;
pub mod routes;
pub mod types;

pub use queries::{GetDrugError, GetDrugQuery, ListDrugsError, ListDrugsParams};
pub use routes::drugs_routes;
pub use types::{Drug, DrugSummary, Interaction, SideEffectKind};
