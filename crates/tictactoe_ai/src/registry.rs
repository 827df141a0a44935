//! Strategy lookup by identifier.

use crate::error::{StrategyError, StrategyErrorKind};
use crate::mark::Mark;
use crate::strategy::{Strategy, StrategyInfo, StrategyKind};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Resolves a registry identifier such as `"minimax"`.
///
/// # Errors
///
/// Returns [`StrategyErrorKind::UnknownStrategy`] for identifiers not in
/// the registry.
#[instrument]
pub fn lookup(id: &str) -> Result<StrategyKind, StrategyError> {
    id.parse::<StrategyKind>().map_err(|_| {
        warn!(id, "Unknown strategy requested");
        StrategyError::new(StrategyErrorKind::UnknownStrategy(id.to_string()))
    })
}

/// Builds the strategy registered under `id`, playing `mark`.
///
/// # Errors
///
/// Returns [`StrategyErrorKind::UnknownStrategy`] for identifiers not in
/// the registry.
#[instrument]
pub fn create_strategy(id: &str, mark: Mark) -> Result<Box<dyn Strategy>, StrategyError> {
    let kind = lookup(id)?;
    debug!(%kind, %mark, "Creating strategy");
    Ok(kind.build(mark))
}

/// All registered strategies, easiest first.
#[instrument]
pub fn list_strategies() -> Vec<StrategyInfo> {
    let mut kinds: Vec<StrategyKind> = StrategyKind::iter().collect();
    kinds.sort_by_key(|kind| kind.difficulty());
    kinds.into_iter().map(StrategyKind::info).collect()
}
