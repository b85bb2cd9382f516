//! Fixed paths the server redirects to.

use hc_core::Role;

pub use hc_session::{HOME_PATH, SIGN_IN_PATH};

pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const SPONSOR_CATALOG_PATH: &str = "/apadrinador/catalogo";

/// Where a freshly signed-in identity lands.
pub fn landing_for(role: Role) -> &'static str {
    match role {
        Role::Administrator => ADMIN_DASHBOARD_PATH,
        Role::Sponsor => SPONSOR_CATALOG_PATH,
    }
}
