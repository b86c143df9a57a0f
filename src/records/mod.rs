//! Record shapes served by the directory.
//!
//! Each shape exposes `name` and `email` to the query engine; every other
//! field is display payload.

pub mod seed;

use crate::query::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directory entry with a registration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub registered_at: NaiveDate,
}

impl User {
    pub fn new(id: u64, name: &str, email: &str, role: &str, registered_at: NaiveDate) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            registered_at,
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.name.as_str(), self.email.as_str()].into_iter()
    }
}

/// Team member availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Onboarding,
    /// Out of office
    #[serde(rename = "OOO")]
    OutOfOffice,
}

/// Team member row. Has no numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub email: String,
    pub status: MemberStatus,
}

impl Member {
    pub fn new(name: &str, role: &str, email: &str, status: MemberStatus) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            status,
        }
    }
}

impl Searchable for Member {
    fn search_fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.name.as_str(), self.email.as_str()].into_iter()
    }
}

/// Account activation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    #[serde(rename = "アクティブ")]
    Active,
    #[serde(rename = "非アクティブ")]
    Inactive,
}

/// Account row served by the paginated users listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: AccountStatus,
}

impl Account {
    pub fn new(id: u64, name: &str, email: &str, role: &str, status: AccountStatus) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
        }
    }
}

impl Searchable for Account {
    fn search_fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.name.as_str(), self.email.as_str()].into_iter()
    }
}
