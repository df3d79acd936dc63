//! Well-known activity types and categories.
//!
//! The API accepts any string; these are the values it understands out of
//! the box.

/// Activity types.
pub mod activity_type {
    pub const LOGIN: &str = "login";
    pub const LOGOUT: &str = "logout";
    pub const SEARCH: &str = "search";
    pub const ADD_TO_CART: &str = "addToCart";
    pub const REMOVE_FROM_CART: &str = "removeFromCart";
    pub const SELECT_PRODUCT: &str = "selectProduct";
    pub const CHECKOUT: &str = "checkOut";
    pub const PAGE_VISIT: &str = "pageVisit";
    pub const OTHER: &str = "other";
}

/// Activity categories.
pub mod category {
    pub const APPAREL: &str = "apparel";
    pub const HOME: &str = "home";
    pub const EDUCATION: &str = "education";
    pub const FAMILY: &str = "family";
    pub const FOOD: &str = "food";
    pub const HEALTH: &str = "health";
    pub const JOB: &str = "job";
    pub const SERVICES: &str = "services";
    pub const OTHER: &str = "other";
}
