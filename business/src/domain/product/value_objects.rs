use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::model::CurrentUser;

/// Which owners' products a repository listing may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductScope {
    /// Only the products owned by this user.
    Owner(UserId),
    /// Every owner's products, each annotated with its owner.
    All,
}

impl ProductScope {
    /// Administrators see everything, everyone else only their own products.
    pub fn for_viewer(viewer: &CurrentUser) -> Self {
        if viewer.is_admin() {
            ProductScope::All
        } else {
            ProductScope::Owner(viewer.id.clone())
        }
    }

    pub fn includes(&self, owner: &UserId) -> bool {
        match self {
            ProductScope::Owner(id) => id == owner,
            ProductScope::All => true,
        }
    }
}

/// Owner details attached to products by the all-owners listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipAnnotation {
    pub owner_username: String,
    pub owner_name: String,
}
