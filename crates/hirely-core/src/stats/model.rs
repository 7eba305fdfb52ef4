//! UsageStats model.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileRecord;

/// Derived usage statistics. Never persisted by the profile engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub profile_views: u64,
    pub applications_sent: u64,
    pub saved_jobs: u64,
    /// Always in `0..=100`
    pub profile_completeness: u8,
}

/// A partial update to [`UsageStats`].
///
/// Each update touches exactly one counter, so updates commute: applying
/// them in any order yields the same stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsUpdate {
    ApplicationsSent(u64),
    SavedJobs(u64),
}

impl UsageStats {
    /// Refreshes the record-derived values (views and completeness).
    pub fn sync_with_record(&mut self, record: &ProfileRecord) {
        self.profile_views = record.profile_views.unwrap_or(0);
        self.profile_completeness = record.completeness();
    }

    /// Merges one counter update.
    pub fn apply(&mut self, update: StatsUpdate) {
        match update {
            StatsUpdate::ApplicationsSent(count) => self.applications_sent = count,
            StatsUpdate::SavedJobs(count) => self.saved_jobs = count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_commute() {
        let updates = [StatsUpdate::ApplicationsSent(4), StatsUpdate::SavedJobs(9)];

        let mut forward = UsageStats::default();
        updates.iter().for_each(|update| forward.apply(*update));

        let mut backward = UsageStats::default();
        updates.iter().rev().for_each(|update| backward.apply(*update));

        assert_eq!(forward, backward);
        assert_eq!(forward.applications_sent, 4);
        assert_eq!(forward.saved_jobs, 9);
    }

    #[test]
    fn test_sync_with_record_keeps_counts() {
        let mut stats = UsageStats {
            applications_sent: 2,
            ..UsageStats::default()
        };
        let mut record = ProfileRecord::new("user-1");
        record.first_name = Some("Ana".to_string());
        record.profile_views = Some(31);

        stats.sync_with_record(&record);

        assert_eq!(stats.profile_views, 31);
        assert_eq!(stats.profile_completeness, 14);
        assert_eq!(stats.applications_sent, 2);
    }
}
