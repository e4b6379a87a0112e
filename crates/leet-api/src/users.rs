//! User listing against `/accounts/admin/users/`.

use leet_core::{AdminUser, Paginated, UserType};
use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiClient, Result};

const USERS_PATH: &str = "/accounts/admin/users/";

/// Filters accepted by the admin user list endpoint.
///
/// `None` means "all" and is left out of the query string.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Free-text search over name, email, and phone.
    pub q: Option<String>,
    pub user_type: Option<UserType>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
}

impl UserQuery {
    /// Query-string pairs in the order the backend documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push(("page_size", size.to_string()));
        }
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            params.push(("q", q.to_string()));
        }
        if let Some(user_type) = self.user_type {
            params.push(("user_type", user_type.as_str().to_string()));
        }
        if let Some(v) = self.is_verified {
            params.push(("is_verified", v.to_string()));
        }
        if let Some(v) = self.is_active {
            params.push(("is_active", v.to_string()));
        }
        if let Some(v) = self.is_staff {
            params.push(("is_staff", v.to_string()));
        }
        params
    }
}

impl ApiClient {
    /// Fetch a single page of users. Records that cannot be decoded are
    /// skipped with a warning.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Paginated<AdminUser>> {
        let page = self.list_user_records(query).await?;
        Ok(Paginated {
            count: page.count,
            next: page.next,
            previous: page.previous,
            results: AdminUser::decode_many(page.results),
        })
    }

    /// One page of raw user records.
    async fn list_user_records(&self, query: &UserQuery) -> Result<Paginated<Value>> {
        let builder = self
            .request(Method::GET, USERS_PATH)
            .query(&query.to_params());
        self.send_json(builder, USERS_PATH, "Unable to load users.")
            .await
    }

    /// Load every user by walking pages until the backend reports no next page.
    ///
    /// Stops early on an empty page so a backend that keeps advertising `next`
    /// cannot keep the loader spinning.
    pub async fn fetch_all_users(&self) -> Result<Vec<AdminUser>> {
        let mut aggregated = Vec::new();
        let mut page = 1;

        loop {
            let query = UserQuery {
                page: Some(page),
                page_size: Some(self.page_size()),
                ..Default::default()
            };
            let payload = self.list_user_records(&query).await?;
            let fetched = payload.results.len();
            tracing::debug!(page, fetched, total = payload.count, "Fetched user page");

            let has_next = payload.has_next();
            aggregated.extend(AdminUser::decode_many(payload.results));

            if !has_next {
                break;
            }
            if fetched == 0 {
                tracing::warn!(page, "Empty user page with a next link, stopping pagination");
                break;
            }
            page += 1;
        }

        tracing::info!(users = aggregated.len(), pages = page, "Loaded user collection");
        Ok(aggregated)
    }
}
