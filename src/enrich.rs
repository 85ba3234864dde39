//! Post Enrichment
//!
//! Joins each post to its owning user and derives the display date and
//! tag set from the post id. Total functions, no failure mode.

use chrono::{Days, NaiveDate};
use std::collections::HashMap;

use crate::models::{EnrichedPost, Post, User};

/// Fixed tag vocabulary; a post carries the first `id % 3` entries
const TAG_VOCABULARY: [&str; 3] = ["tech", "business", "health"];

pub fn tags_for(id: u32) -> Vec<&'static str> {
    TAG_VOCABULARY[..(id % 3) as usize].to_vec()
}

/// Synthetic display date for a post: year 2023, month index `id % 12`,
/// day `id % 28`, with calendar rollover (month index 0 is January, day 0
/// lands on the last day of the previous month).
pub fn display_date(id: u32) -> NaiveDate {
    let month0 = id % 12;
    let day0 = id % 28;
    // month0 + 1 is always in 1..=12
    let first = NaiveDate::from_ymd_opt(2023, month0 + 1, 1).unwrap();
    match day0 {
        0 => first - Days::new(1),
        day => first + Days::new(u64::from(day) - 1),
    }
}

/// Join each post to its owner and attach the derived fields. A post whose
/// user id has no match keeps `user: None`; the card renders a fallback
/// byline for it.
pub fn enrich(posts: Vec<Post>, users: Vec<User>) -> Vec<EnrichedPost> {
    let users_by_id: HashMap<u32, User> = users.into_iter().map(|user| (user.id, user)).collect();

    posts
        .into_iter()
        .map(|post| EnrichedPost {
            user: users_by_id.get(&post.user_id).cloned(),
            date: display_date(post.id),
            tags: tags_for(post.id),
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            body: post.body,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(id: u32, user_id: u32) -> Post {
        Post {
            id,
            user_id,
            title: format!("Post {}", id),
            body: format!("Body {}", id),
        }
    }

    fn make_user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: String::new(),
            email: String::new(),
        }
    }

    #[test]
    fn join_attaches_the_owning_user() {
        let posts = vec![make_post(1, 10), make_post(2, 20)];
        let users = vec![make_user(10, "Alice"), make_user(20, "Bob")];

        let enriched = enrich(posts, users);

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].user.as_ref().unwrap().name, "Alice");
        assert_eq!(enriched[1].user.as_ref().unwrap().name, "Bob");
    }

    #[test]
    fn missing_user_joins_as_none() {
        let enriched = enrich(vec![make_post(1, 99)], vec![make_user(10, "Alice")]);
        assert!(enriched[0].user.is_none());
    }

    #[test]
    fn tags_take_a_prefix_of_the_vocabulary() {
        assert_eq!(tags_for(3), Vec::<&str>::new());
        assert_eq!(tags_for(4), vec!["tech"]);
        assert_eq!(tags_for(5), vec!["tech", "business"]);
    }

    #[test]
    fn display_date_is_deterministic_in_id() {
        // id 13: month index 1 -> February, day 13
        assert_eq!(display_date(13), NaiveDate::from_ymd_opt(2023, 2, 13).unwrap());
        // id 25: month index 1 -> February, day 25
        assert_eq!(display_date(25), NaiveDate::from_ymd_opt(2023, 2, 25).unwrap());
    }

    #[test]
    fn display_date_day_zero_rolls_back_a_month() {
        // id 28: month index 4 -> May, day 0 -> last day of April
        assert_eq!(display_date(28), NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
        // id 84: month index 0 -> January, day 0 -> New Year's Eve 2022
        assert_eq!(display_date(84), NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
    }
}
