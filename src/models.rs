//! Frontend Models
//!
//! Wire types for the remote API plus display-ready derivatives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blog post as returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// User profile as returned by the remote API (unused profile fields are dropped)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Post joined with its owner plus the derived display fields
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPost {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
    /// Owning user; None when the join finds no match
    pub user: Option<User>,
    /// Synthetic display date, a pure function of the id
    pub date: NaiveDate,
    /// First `id % 3` entries of the fixed tag vocabulary
    pub tags: Vec<&'static str>,
}

/// Sort options for the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest first",
            SortMode::Oldest => "Oldest first",
            SortMode::Alphabetical => "Alphabetical",
        }
    }
}

/// Menu order for the sort options
pub const SORT_MODES: &[SortMode] = &[SortMode::Newest, SortMode::Oldest, SortMode::Alphabetical];
