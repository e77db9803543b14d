//! Dashboard aggregation: trailing six-month growth buckets and the summary
//! counts shown on the stat cards.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use types::{Provider, ProviderStatus, UserAccount};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: &'static str,
    pub count: u32,
}

/// Bucket records into the trailing six calendar months (the current month
/// plus the five preceding it), oldest first. Records outside the window are
/// silently dropped. `today` is passed in so the aggregation stays a pure
/// function of its inputs.
pub fn aggregate_by_month<T>(
    items: &[T],
    date_of: impl Fn(&T) -> Timestamp,
    today: Date,
) -> [MonthBucket; 6] {
    let mut counts = [0u32; 6];

    for item in items {
        let date = date_of(item).to_zoned(TimeZone::system()).date();
        let month_diff = i32::from(today.year() - date.year()) * 12
            + (i32::from(today.month()) - i32::from(date.month()));

        if (0..6).contains(&month_diff) {
            counts[(5 - month_diff) as usize] += 1;
        }
    }

    // Month indices are 0-based here; bucket 5 is the current month.
    let current_month = i32::from(today.month()) - 1;
    std::array::from_fn(|i| {
        let month_index = (current_month - (5 - i as i32)).rem_euclid(12) as usize;
        MonthBucket {
            month: MONTHS[month_index],
            count: counts[i],
        }
    })
}

/// Headline counts for the stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_users: usize,
    pub total_providers: usize,
    pub pending_providers: usize,
    pub approved_providers: usize,
}

impl Summary {
    pub fn of(users: &[UserAccount], providers: &[Provider]) -> Self {
        Self {
            total_users: users.len(),
            total_providers: providers.len(),
            pending_providers: providers
                .iter()
                .filter(|p| p.status == ProviderStatus::Pending)
                .count(),
            approved_providers: providers
                .iter()
                .filter(|p| p.status == ProviderStatus::Approved)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn mid_month(year: i16, month: i8) -> Timestamp {
        date(year, month, 15)
            .at(12, 0, 0, 0)
            .to_zoned(TimeZone::system())
            .unwrap()
            .timestamp()
    }

    #[test]
    fn records_outside_the_window_are_dropped() {
        // Offsets from 2026-08: 0, 1, 2, 5, 7, and 13 months back.
        let samples = [
            mid_month(2026, 8),
            mid_month(2026, 7),
            mid_month(2026, 6),
            mid_month(2026, 3),
            mid_month(2026, 1),
            mid_month(2025, 7),
        ];

        let buckets = aggregate_by_month(&samples, |ts| *ts, date(2026, 8, 23));

        let total: u32 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
        assert_eq!(buckets[5].month, "Aug");
        assert_eq!(buckets[5].count, 1);
        assert_eq!(buckets[0].month, "Mar");
        assert_eq!(buckets[0].count, 1);
    }

    #[test]
    fn labels_run_oldest_to_newest_and_wrap_the_year() {
        let empty: [Timestamp; 0] = [];
        let buckets = aggregate_by_month(&empty, |ts| *ts, date(2026, 2, 1));

        let labels: Vec<_> = buckets.iter().map(|b| b.month).collect();
        assert_eq!(labels, ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn several_records_in_one_month_accumulate() {
        let samples = [mid_month(2026, 8), mid_month(2026, 8), mid_month(2026, 8)];
        let buckets = aggregate_by_month(&samples, |ts| *ts, date(2026, 8, 23));
        assert_eq!(buckets[5].count, 3);
    }

    #[test]
    fn summary_counts_by_status() {
        let provider = |status| Provider {
            id: "x".to_string(),
            name: "N".to_string(),
            business_name: "B".to_string(),
            email: "n@example.com".to_string(),
            phone: String::new(),
            status,
            created_at: Timestamp::UNIX_EPOCH,
        };

        let providers = vec![
            provider(ProviderStatus::Pending),
            provider(ProviderStatus::Pending),
            provider(ProviderStatus::Approved),
            provider(ProviderStatus::Rejected),
        ];

        let summary = Summary::of(&[], &providers);
        assert_eq!(summary.total_users, 0);
        assert_eq!(summary.total_providers, 4);
        assert_eq!(summary.pending_providers, 2);
        assert_eq!(summary.approved_providers, 1);
    }
}
