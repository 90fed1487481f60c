//! Predicate/bind accumulator for dynamically assembled SQL
//!
//! List-style queries on this API are built from optional filters, so their
//! WHERE clauses cannot be written as a single static statement. [`SqlFilter`]
//! accumulates predicate fragments alongside the values they reference: a
//! fragment only ever contains `$n` placeholders handed out by
//! [`SqlFilter::bind`], and the values travel to the database exclusively
//! through bound parameters. Filter input never lands in the SQL text itself.
//!
//! ```rust,ignore
//! let mut filter = SqlFilter::new();
//! let ph = filter.bind(BindValue::Bool(true));
//! filter.predicate(format!("d.requires_prescription = {}", ph));
//!
//! let sql = format!("SELECT ... FROM drugs d{}", filter.where_clause());
//! let mut query = sqlx::query_as::<_, Row>(&sql);
//! for bind in filter.binds() {
//!     query = match bind {
//!         BindValue::Bool(v) => query.bind(*v),
//!         // ...remaining variants
//!     };
//! }
//! ```

/// A value destined for a positional bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i32),
    BigInt(i64),
    Bool(bool),
    IntArray(Vec<i32>),
}

/// Accumulates (predicate-fragment, bound-parameter) pairs for one query.
#[derive(Debug, Default)]
pub struct SqlFilter {
    predicates: Vec<String>,
    binds: Vec<BindValue>,
}

impl SqlFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next positional placeholder for `value` and return it
    /// (e.g. `"$3"`). Placeholders are numbered by bind order, which is also
    /// the order [`SqlFilter::binds`] yields them in.
    pub fn bind(&mut self, value: BindValue) -> String {
        self.binds.push(value);
        format!("${}", self.binds.len())
    }

    /// Add a completed predicate fragment. Fragments are conjoined with AND
    /// by [`SqlFilter::where_clause`].
    pub fn predicate(&mut self, fragment: impl Into<String>) {
        self.predicates.push(fragment.into());
    }

    /// Render the WHERE clause with a leading space, or an empty string when
    /// no predicates were added.
    pub fn where_clause(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.predicates.join(" AND "))
        }
    }

    /// The bound values in placeholder order.
    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}
