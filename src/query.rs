use std::time::Duration;

/// Builder for the backend's query-string conventions: nested `populate`
/// keys, `filters[field][$eq]` equality filters, `sort` expressions and an
/// optional locale. Also carries a per-call override for the client's
/// revalidation window.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
    pub(crate) revalidate: Option<Duration>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn locale(mut self, locale: &str) -> Self {
        self.params.push(("locale".into(), locale.into()));
        self
    }

    /// Populate one relation/component field to full depth
    /// (`populate[field]=*`).
    #[must_use]
    pub fn populate(mut self, field: &str) -> Self {
        self.params.push((format!("populate[{field}]"), "*".into()));
        self
    }

    /// Populate every first-level relation (`populate=*`).
    #[must_use]
    pub fn populate_all(mut self) -> Self {
        self.params.push(("populate".into(), "*".into()));
        self
    }

    /// Equality filter (`filters[field][$eq]=value`).
    #[must_use]
    pub fn filter_eq(mut self, field: &str, value: &str) -> Self {
        self.params
            .push((format!("filters[{field}][$eq]"), value.into()));
        self
    }

    /// Sort expression, e.g. `year:desc` or `order:asc`.
    #[must_use]
    pub fn sort(mut self, expr: &str) -> Self {
        self.params.push(("sort".into(), expr.into()));
        self
    }

    /// Override the client's revalidation window for this call only.
    #[must_use]
    pub fn revalidate(mut self, window: Duration) -> Self {
        self.revalidate = Some(window);
        self
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
