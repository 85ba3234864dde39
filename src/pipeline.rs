//! Derived List Pipeline
//!
//! Pure filter -> sort -> paginate steps over the enriched post list. The
//! reactive layer recomputes this whenever one of its inputs changes;
//! everything here runs on the host in tests.

use crate::models::{EnrichedPost, SortMode};

/// Cards per page
pub const PAGE_SIZE: usize = 12;

/// Search predicate: case-insensitive containment on title or body, or an
/// exact match on the owning user id's decimal form. The empty needle
/// matches everything.
pub fn matches(post: &EnrichedPost, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle_lower = needle.to_lowercase();
    post.title.to_lowercase().contains(&needle_lower)
        || post.body.to_lowercase().contains(&needle_lower)
        || post.user_id.to_string() == needle
}

pub fn filter_posts(posts: &[EnrichedPost], needle: &str) -> Vec<EnrichedPost> {
    posts.iter().filter(|post| matches(post, needle)).cloned().collect()
}

/// Stable in-place sort for the selected mode. Alphabetical compares
/// lowercased titles; order among posts with identical titles is whatever
/// the incoming order was.
pub fn sort_posts(posts: &mut [EnrichedPost], mode: SortMode) {
    match mode {
        SortMode::Newest => posts.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Oldest => posts.sort_by(|a, b| a.id.cmp(&b.id)),
        SortMode::Alphabetical => {
            posts.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
}

pub fn page_count(match_count: usize) -> usize {
    match_count.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page into `[1, pages]`, treating an empty result set as
/// a single page.
pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// Visible slice for a 1-based page; out-of-range pages yield nothing.
pub fn paginate(posts: &[EnrichedPost], page: usize) -> &[EnrichedPost] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * PAGE_SIZE;
    if start >= posts.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(posts.len());
    &posts[start..end]
}

/// Full pipeline: filter by the debounced needle, sort, slice out the
/// current page. Returns the visible cards and the total page count.
pub fn derive_page(
    posts: &[EnrichedPost],
    needle: &str,
    mode: SortMode,
    page: usize,
) -> (Vec<EnrichedPost>, usize) {
    let mut matched = filter_posts(posts, needle);
    sort_posts(&mut matched, mode);
    let pages = page_count(matched.len());
    let visible = paginate(&matched, page).to_vec();
    (visible, pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::models::Post;

    fn make_post(id: u32, user_id: u32, title: &str, body: &str) -> EnrichedPost {
        let wire = Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        };
        enrich(vec![wire], vec![]).pop().unwrap()
    }

    /// 15 posts across 2 users; three carry "lorem" in title or body
    fn seed() -> Vec<EnrichedPost> {
        (1..=15)
            .map(|id| {
                let user_id = if id <= 8 { 1 } else { 2 };
                let (title, body) = match id {
                    3 => ("Lorem opening".to_string(), "plain".to_string()),
                    7 => ("seventh".to_string(), "has lorem inside".to_string()),
                    11 => ("closing".to_string(), "LOREM shouted".to_string()),
                    _ => (format!("title {}", id), format!("body {}", id)),
                };
                let wire = Post { id, user_id, title, body };
                enrich(vec![wire], vec![]).pop().unwrap()
            })
            .collect()
    }

    #[test]
    fn filter_matches_title_and_body_case_insensitively() {
        let posts = seed();
        let hits = filter_posts(&posts, "lorem");
        let ids: Vec<u32> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 7, 11]);
    }

    #[test]
    fn filter_matches_user_id_exactly() {
        let posts = seed();
        // "2" matches every post owned by user 2, plus any post whose text
        // contains a 2 -- the reference merges both modes silently.
        let hits = filter_posts(&posts, "2");
        for post in &hits {
            let textual = post.title.contains('2') || post.body.contains('2');
            assert!(textual || post.user_id == 2, "unexpected match: {}", post.id);
        }
        assert!(hits.iter().any(|p| p.user_id == 2));
        // "20" matches nothing: no such user, no such substring
        assert!(filter_posts(&posts, "20").is_empty());
    }

    #[test]
    fn filter_empty_needle_matches_everything() {
        let posts = seed();
        assert_eq!(filter_posts(&posts, "").len(), posts.len());
    }

    #[test]
    fn sort_newest_is_non_increasing_by_id() {
        let mut posts = seed();
        sort_posts(&mut posts, SortMode::Newest);
        assert!(posts.windows(2).all(|w| w[0].id >= w[1].id));
    }

    #[test]
    fn sort_oldest_is_non_decreasing_by_id() {
        let mut posts = seed();
        sort_posts(&mut posts, SortMode::Oldest);
        assert!(posts.windows(2).all(|w| w[0].id <= w[1].id));
    }

    #[test]
    fn sort_alphabetical_is_non_decreasing_by_lowercased_title() {
        let mut posts = seed();
        sort_posts(&mut posts, SortMode::Alphabetical);
        assert!(posts
            .windows(2)
            .all(|w| w[0].title.to_lowercase() <= w[1].title.to_lowercase()));
    }

    #[test]
    fn sort_keeps_incoming_order_among_exact_ties() {
        // Two posts share a title; stable sort must keep 1 before 2
        let mut posts = vec![
            make_post(1, 1, "same", "a"),
            make_post(2, 1, "same", "b"),
            make_post(3, 1, "aaa", "c"),
        ];
        sort_posts(&mut posts, SortMode::Alphabetical);
        let ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn page_count_is_ceiling_division() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(100), 9);
    }

    #[test]
    fn paginate_slices_are_contiguous_and_short_on_the_last_page() {
        let posts = seed();
        assert_eq!(paginate(&posts, 1).len(), 12);
        let last = paginate(&posts, 2);
        assert_eq!(last.len(), 3);
        assert_eq!(last[0].id, posts[12].id);
        assert!(paginate(&posts, 3).is_empty());
        assert!(paginate(&posts, 0).is_empty());
    }

    #[test]
    fn clamp_page_stays_inside_bounds() {
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(1, 2), 1);
        assert_eq!(clamp_page(2, 0), 1);
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn derive_page_runs_the_whole_pipeline() {
        let posts = seed();

        // Search "lorem": 3 matches on a single page
        let (visible, pages) = derive_page(&posts, "lorem", SortMode::Newest, 1);
        assert_eq!(pages, 1);
        assert_eq!(visible.len(), 3);
        assert!(visible.windows(2).all(|w| w[0].id >= w[1].id));

        // Switching to alphabetical reorders the same three cards
        let (alpha, _) = derive_page(&posts, "lorem", SortMode::Alphabetical, 1);
        let alpha_ids: Vec<u32> = alpha.iter().map(|p| p.id).collect();
        assert_eq!(alpha_ids, vec![11, 3, 7]);
    }

    #[test]
    fn derive_page_reports_count_for_out_of_range_pages() {
        let posts = seed();
        let (visible, pages) = derive_page(&posts, "", SortMode::Oldest, 9);
        assert!(visible.is_empty());
        assert_eq!(pages, 2);
    }
}
