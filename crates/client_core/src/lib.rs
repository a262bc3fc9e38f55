pub mod admin;
pub mod aggregator;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod relay;
pub mod render;

pub use admin::AdminClient;
pub use aggregator::{AggregatorSettings, ChefAggregator, DEFAULT_CHEF_ENDPOINTS};
pub use catalog::static_chefs;
pub use error::ClientError;
pub use filter::{filter_chefs, SearchCriteria, Searchable};
pub use relay::FormRelayClient;
pub use render::{ChefCard, ExploreView};

use shared::domain::ChefRecord;

/// Loads every chef the aggregator can see and paints them into a fresh
/// explore view.
pub async fn load_explore_view(aggregator: &ChefAggregator) -> (ExploreView, Vec<ChefRecord>) {
    let chefs = aggregator.get_all_chefs().await;
    let mut view = ExploreView::new();
    view.render(&chefs);
    (view, chefs)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
