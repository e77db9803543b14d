//! View state for the provider approval queue: status-ranked ordering,
//! case-insensitive search, status tabs, and per-tab pagination. Everything
//! here is a pure function of its inputs so it can be tested without any
//! rendering.

use types::{Provider, ProviderStatus};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    /// Tab order as rendered in the toolbar.
    pub const TABS: [StatusFilter; 4] = [Self::All, Self::Pending, Self::Approved, Self::Rejected];

    pub fn matches(self, status: ProviderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == ProviderStatus::Pending,
            Self::Approved => status == ProviderStatus::Approved,
            Self::Rejected => status == ProviderStatus::Rejected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Pending => 1,
            Self::Approved => 2,
            Self::Rejected => 3,
        }
    }
}

/// Operator-controlled view state for the provider table. Each filter tab
/// remembers its own 1-indexed page position; transitions go through the
/// methods below rather than field mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListControls {
    pub search: String,
    pub filter: StatusFilter,
    pages: [usize; 4],
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: StatusFilter::All,
            pages: [1; 4],
        }
    }
}

impl ListControls {
    /// Remembered page of the active tab.
    pub fn page(&self) -> usize {
        self.pages[self.filter.index()]
    }

    pub fn page_for(&self, filter: StatusFilter) -> usize {
        self.pages[filter.index()]
    }

    /// Typing in the search box starts the active tab over from page 1.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.pages[self.filter.index()] = 1;
    }

    /// Switching tabs starts the newly active tab over from page 1; the
    /// other tabs keep their remembered positions.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.pages[filter.index()] = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.pages[self.filter.index()] = page.max(1);
    }

    /// An approve or deny click snaps the active tab back to page 1 the
    /// moment it fires, before the backend has confirmed anything.
    pub fn note_action(&mut self) {
        self.pages[self.filter.index()] = 1;
    }
}

/// One derived page of the table, recomputed synchronously from the source
/// collection and the controls. No caching.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<Provider>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Derive the visible slice for the current controls: stable-sort by status
/// (pending first), keep rows matching the search text and active tab, then
/// cut the requested page. A page past the end yields an empty slice rather
/// than clamping; callers reset to page 1 on every control change, which is
/// what keeps that case unreachable from the UI.
pub fn paginate(providers: &[Provider], controls: &ListControls) -> ListPage {
    let search = controls.search.to_lowercase();

    let mut matching: Vec<&Provider> = providers
        .iter()
        .filter(|p| matches_search(p, &search) && controls.filter.matches(p.status))
        .collect();
    matching.sort_by_key(|p| p.status.rank());

    let total = matching.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let page = controls.page();

    let items = matching
        .into_iter()
        .skip(PAGE_SIZE * (page - 1))
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    ListPage {
        items,
        total,
        total_pages,
        page,
    }
}

fn matches_search(provider: &Provider, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    provider.name.to_lowercase().contains(search)
        || provider.business_name.to_lowercase().contains(search)
        || provider.email.to_lowercase().contains(search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn provider(id: usize, name: &str, business: &str, status: ProviderStatus) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            business_name: business.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "5550000000".to_string(),
            status,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn mixed_batch() -> Vec<Provider> {
        use ProviderStatus::*;
        vec![
            provider(1, "Ada", "Ada Cleaning", Approved),
            provider(2, "Bob", "Bob Movers", Pending),
            provider(3, "Cem", "Cem Repairs", Rejected),
            provider(4, "Dee", "Dee Tutoring", Pending),
            provider(5, "Eli", "Eli Plumbing", Approved),
            provider(6, "Fay", "Fay Gardens", Rejected),
        ]
    }

    #[test]
    fn pending_rows_come_first_and_keep_their_relative_order() {
        let page = paginate(&mixed_batch(), &ListControls::default());

        let statuses: Vec<_> = page.items.iter().map(|p| p.status.rank()).collect();
        let mut sorted = statuses.clone();
        sorted.sort();
        assert_eq!(statuses, sorted);

        // Stable within a status group: original order preserved.
        let pending_ids: Vec<_> = page
            .items
            .iter()
            .filter(|p| p.status == ProviderStatus::Pending)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(pending_ids, ["2", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_across_name_business_and_email() {
        let providers = mixed_batch();

        for (needle, expected_id) in [("ADA", "1"), ("movers", "2"), ("cem@example", "3")] {
            let mut controls = ListControls::default();
            controls.set_search(needle.to_string());

            let page = paginate(&providers, &controls);
            assert_eq!(page.total, 1, "search {needle:?}");
            assert_eq!(page.items[0].id, expected_id);
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let page = paginate(&mixed_batch(), &ListControls::default());
        assert_eq!(page.total, 6);
    }

    #[test]
    fn pages_partition_the_filtered_set_exactly_once() {
        let providers: Vec<_> = (0..37)
            .map(|i| provider(i, &format!("P{i}"), "Biz", ProviderStatus::Pending))
            .collect();

        let mut controls = ListControls::default();
        let first = paginate(&providers, &controls);
        assert_eq!(first.total_pages, 4);

        let mut seen = Vec::new();
        for page_number in 1..=first.total_pages {
            controls.set_page(page_number);
            let page = paginate(&providers, &controls);
            assert!(page.items.len() <= PAGE_SIZE);
            seen.extend(page.items);
        }

        let full = paginate(
            &providers,
            &ListControls {
                search: String::new(),
                filter: StatusFilter::All,
                ..ListControls::default()
            },
        );
        assert_eq!(seen.len(), full.total);
        assert_eq!(seen, paginate_all(&providers));
    }

    fn paginate_all(providers: &[Provider]) -> Vec<Provider> {
        let mut all: Vec<Provider> = providers.to_vec();
        all.sort_by_key(|p| p.status.rank());
        all
    }

    #[test]
    fn pending_tab_splits_twelve_records_across_two_pages() {
        use ProviderStatus::*;
        let mut providers = Vec::new();
        for i in 0..12 {
            providers.push(provider(i, &format!("Pend{i}"), "B", Pending));
        }
        for i in 12..20 {
            providers.push(provider(i, &format!("Appr{i}"), "B", Approved));
        }
        for i in 20..25 {
            providers.push(provider(i, &format!("Rej{i}"), "B", Rejected));
        }

        let mut controls = ListControls::default();
        controls.set_filter(StatusFilter::Pending);

        let first = paginate(&providers, &controls);
        assert_eq!(first.total, 12);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 10);
        assert!(first.items.iter().all(|p| p.status == Pending));

        controls.set_page(2);
        let second = paginate(&providers, &controls);
        assert_eq!(second.items.len(), 2);
    }

    #[test]
    fn search_resets_only_the_active_tab() {
        let mut controls = ListControls::default();
        controls.set_filter(StatusFilter::Pending);
        controls.set_page(3);
        controls.set_filter(StatusFilter::Approved);
        controls.set_page(2);

        controls.set_search("dee".to_string());

        assert_eq!(controls.page_for(StatusFilter::Approved), 1);
        assert_eq!(controls.page_for(StatusFilter::Pending), 3);
    }

    #[test]
    fn switching_tabs_resets_the_new_tab() {
        let mut controls = ListControls::default();
        controls.set_filter(StatusFilter::Pending);
        controls.set_page(3);
        controls.set_filter(StatusFilter::All);

        controls.set_filter(StatusFilter::Pending);
        assert_eq!(controls.page(), 1);
    }

    #[test]
    fn an_action_resets_the_active_tab() {
        let mut controls = ListControls::default();
        controls.set_filter(StatusFilter::Pending);
        controls.set_page(3);

        controls.note_action();

        assert_eq!(controls.page_for(StatusFilter::Pending), 1);
    }

    #[test]
    fn a_page_past_the_end_is_empty_not_clamped() {
        let providers = mixed_batch();
        let mut controls = ListControls::default();
        controls.set_page(5);

        let page = paginate(&providers, &controls);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 1);
    }
}
