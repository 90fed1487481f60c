//! List drugs query
//!
//! Translates the list endpoint's optional query parameters into one
//! parameterized SQL statement: search, category membership, and
//! prescription filters conjoined with AND, exactly one sort order, and an
//! optional row cap. Returns the summary projection only.
//!
//! Parameters arrive as raw strings so malformed values can follow their
//! documented fallbacks (ignored limit, category id 0) instead of surfacing
//! deserialization errors to the client.

use serde::Deserialize;
use sqlx::PgPool;

use crate::features::shared::{BindValue, SqlFilter};

use super::super::types::DrugSummary;

/// Summary projection over the drugs/categories join. The LEFT JOIN keeps
/// drugs whose category reference does not resolve; their category name comes
/// back empty.
pub(in crate::features) const SUMMARY_SELECT: &str = "SELECT d.id, d.name, d.description, \
     d.category_id, COALESCE(c.name, '') AS category, d.drug_class, d.requires_prescription \
     FROM drugs d LEFT JOIN categories c ON c.id = d.category_id";

/// Query-string parameters for the drug listing
///
/// # Examples
///
/// ```rust,ignore
/// use formulary_server::features::drugs::ListDrugsParams;
///
/// // /api/drugs?search=aspirin&sortBy=name_desc&limit=5
/// let params = ListDrugsParams {
///     search: Some("aspirin".to_string()),
///     sort_by: Some("name_desc".to_string()),
///     limit: Some("5".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDrugsParams {
    /// Substring matched against name or description.
    pub search: Option<String>,
    /// Comma-separated category ids.
    pub categories: Option<String>,
    /// "all" (or absent) for no filter, "prescription" for prescription-only,
    /// anything else for over-the-counter.
    pub prescription_filter: Option<String>,
    /// "name_desc", "category", or anything else for name ascending.
    pub sort_by: Option<String>,
    /// Row cap; applied only when it parses to a positive integer.
    pub limit: Option<String>,
}

/// Sort order for the drug listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrugSort {
    /// Name ascending - the default for absent or unrecognized values.
    #[default]
    NameAsc,
    /// Name descending.
    NameDesc,
    /// Category name ascending, then name ascending.
    Category,
}

impl DrugSort {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("name_desc") => DrugSort::NameDesc,
            Some("category") => DrugSort::Category,
            _ => DrugSort::NameAsc,
        }
    }

    fn order_clause(self) -> &'static str {
        match self {
            DrugSort::NameAsc => "d.name ASC",
            DrugSort::NameDesc => "d.name DESC",
            DrugSort::Category => "c.name ASC, d.name ASC",
        }
    }
}

impl ListDrugsParams {
    /// Search term, when present and non-empty.
    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Parsed category ids, when the parameter is present and non-empty.
    /// Unparseable entries become 0, which matches no real category.
    fn category_ids(&self) -> Option<Vec<i32>> {
        let raw = self.categories.as_deref().filter(|s| !s.is_empty())?;
        Some(raw.split(',').map(|id| id.parse().unwrap_or(0)).collect())
    }

    /// Required prescription flag, or None when no filter applies. "all" is
    /// the no-filter sentinel; "prescription" selects prescription-only and
    /// any other non-empty value selects over-the-counter.
    fn prescription_required(&self) -> Option<bool> {
        match self.prescription_filter.as_deref() {
            None | Some("") | Some("all") => None,
            Some("prescription") => Some(true),
            Some(_) => Some(false),
        }
    }

    fn sort(&self) -> DrugSort {
        DrugSort::from_param(self.sort_by.as_deref())
    }

    /// Row cap, when the parameter parses to a positive integer. Zero,
    /// negative, and non-numeric values are ignored.
    fn row_limit(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|n| *n > 0)
    }
}

/// Errors that can occur when listing drugs
#[derive(Debug, thiserror::Error)]
pub enum ListDrugsError {
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Assemble the statement and its bind set from the parameters.
fn build_list_query(params: &ListDrugsParams) -> (String, SqlFilter) {
    let mut filter = SqlFilter::new();

    if let Some(term) = params.search_term() {
        // The raw substring is wrapped in %...%; LIKE metacharacters inside
        // it keep their meaning. Case sensitivity is the store default.
        let pattern = format!("%{}%", term);
        let name_ph = filter.bind(BindValue::Text(pattern.clone()));
        let desc_ph = filter.bind(BindValue::Text(pattern));
        filter.predicate(format!(
            "(d.name LIKE {} OR d.description LIKE {})",
            name_ph, desc_ph
        ));
    }

    if let Some(ids) = params.category_ids() {
        let ph = filter.bind(BindValue::IntArray(ids));
        filter.predicate(format!("d.category_id = ANY({})", ph));
    }

    if let Some(required) = params.prescription_required() {
        let ph = filter.bind(BindValue::Bool(required));
        filter.predicate(format!("d.requires_prescription = {}", ph));
    }

    let mut sql = format!(
        "{}{} ORDER BY {}",
        SUMMARY_SELECT,
        filter.where_clause(),
        params.sort().order_clause()
    );

    if let Some(limit) = params.row_limit() {
        let ph = filter.bind(BindValue::BigInt(limit));
        sql.push_str(&format!(" LIMIT {}", ph));
    }

    (sql, filter)
}

/// Handles the list drugs query
///
/// Returns the filtered, sorted summary list. The list is never partially
/// returned: any database error fails the whole request.
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    params: ListDrugsParams,
) -> Result<Vec<DrugSummary>, ListDrugsError> {
    let (sql, filter) = build_list_query(&params);

    // Replay the accumulated binds in placeholder order
    let mut query = sqlx::query_as::<_, DrugSummary>(&sql);
    for bind in filter.binds() {
        query = match bind {
            BindValue::Text(v) => query.bind(v.clone()),
            BindValue::Int(v) => query.bind(*v),
            BindValue::BigInt(v) => query.bind(*v),
            BindValue::Bool(v) => query.bind(*v),
            BindValue::IntArray(v) => query.bind(v.clone()),
        };
    }

    let drugs = query.fetch_all(&pool).await?;

    Ok(drugs)
}
