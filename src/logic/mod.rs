//! Game logic: dataset loading, name matching, target selection, guess comparison.

mod compare;
mod dataset;
mod lookup;
mod matcher;
mod selector;

pub use compare::{compare, compare_numeric, NUMERIC_CLOSE_RANGE};
pub use dataset::{DatasetError, PlayerDataset};
pub use lookup::{continent_of, fold_name, position_group_of};
pub use matcher::{suggest, suggest_names, Suggestion, MIN_QUERY_CHARS};
pub use selector::{daily_seed, pick_daily, pick_random, DAILY_MIN_OVERALL};
