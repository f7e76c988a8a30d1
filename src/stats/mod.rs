use crate::state::AppState;
use axum::{routing::get, Router};

pub mod handlers;

/// Source of the dashboard revenue figure. The real collaborator is a future
/// payment/billing service; until it exists the flat placeholder below is
/// the only implementation.
pub trait RevenueSource: Send + Sync {
    fn current_revenue(&self) -> i64;
}

pub struct FlatRevenue(pub i64);

impl Default for FlatRevenue {
    fn default() -> Self {
        Self(42_500)
    }
}

impl RevenueSource for FlatRevenue {
    fn current_revenue(&self) -> i64 {
        self.0
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/stats", get(handlers::dashboard_stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_revenue_is_wired() {
        let source = FlatRevenue::default();
        assert_eq!(source.current_revenue(), 42_500);
    }
}
