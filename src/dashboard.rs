use crate::bridge::RESULTS_PAGE;
use crate::error::Result;
use crate::types::scoring::Score;
use crate::unlock::storage::KeyValueStore;
use thiserror::Error;

pub const APPLICATIONS_KEY: &str = "applications";
pub const FREE_APPLICATION_LIMIT: usize = 1;
pub const ROLE_AVERAGE: Score = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardRejection {
    #[error("Tracking more than one application is a Premium feature. Unlock to add more.")]
    PremiumRequired,
}

pub fn can_add_application(
    unlocked: bool,
    current: usize,
) -> std::result::Result<(), BoardRejection> {
    if !unlocked && current >= FREE_APPLICATION_LIMIT {
        return Err(BoardRejection::PremiumRequired);
    }
    Ok(())
}

pub fn application_count<S: KeyValueStore>(store: &S) -> Result<usize> {
    // a garbled counter reads as an empty board
    Ok(store
        .get(APPLICATIONS_KEY)?
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0))
}

pub fn add_application<S: KeyValueStore>(
    store: &mut S,
    unlocked: bool,
) -> Result<std::result::Result<usize, BoardRejection>> {
    let current = application_count(store)?;
    if let Err(rejection) = can_add_application(unlocked, current) {
        tracing::warn!(current, "application board limit reached");
        return Ok(Err(rejection));
    }
    let next = current + 1;
    store.set(APPLICATIONS_KEY, &next.to_string())?;
    Ok(Ok(next))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPosition {
    pub position: String,
    pub average: String,
    pub unlock_link: Option<String>,
}

pub fn benchmark(score: Score, unlocked: bool) -> BenchmarkPosition {
    let percentile = score.min(100);
    BenchmarkPosition {
        position: format!(
            "Your position: percentile {percentile} – ahead of {percentile}% of applicants nationwide."
        ),
        average: format!("Average score for this role: {ROLE_AVERAGE}."),
        unlock_link: (!unlocked).then(|| RESULTS_PAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unlock::storage::MemoryStore;

    #[test]
    fn free_board_holds_a_single_application() {
        assert!(can_add_application(false, 0).is_ok());
        assert_eq!(
            can_add_application(false, 1),
            Err(BoardRejection::PremiumRequired)
        );
        assert!(can_add_application(true, 5).is_ok());
    }

    #[test]
    fn add_application_persists_count() {
        let mut store = MemoryStore::default();
        assert_eq!(
            add_application(&mut store, false).expect("store should work"),
            Ok(1)
        );
        assert_eq!(
            add_application(&mut store, false).expect("store should work"),
            Err(BoardRejection::PremiumRequired)
        );
        assert_eq!(
            add_application(&mut store, true).expect("store should work"),
            Ok(2)
        );
        assert_eq!(application_count(&store).expect("read should work"), 2);
    }

    #[test]
    fn garbled_counter_reads_as_zero() {
        let mut store = MemoryStore::default();
        store.set(APPLICATIONS_KEY, "many").expect("write should work");
        assert_eq!(application_count(&store).expect("read should work"), 0);
    }

    #[test]
    fn benchmark_reports_percentile_and_unlock_hop() {
        let locked = benchmark(72, false);
        assert!(locked.position.contains("percentile 72"));
        assert!(locked.position.contains("ahead of 72%"));
        assert_eq!(locked.unlock_link.as_deref(), Some("analysis"));

        let unlocked = benchmark(72, true);
        assert_eq!(unlocked.unlock_link, None);
        assert_eq!(unlocked.average, "Average score for this role: 65.");
    }
}
