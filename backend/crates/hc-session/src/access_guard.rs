use hc_core::{Identity, Role};

pub const SIGN_IN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Outcome of guarding a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    RedirectToSignIn,
    RedirectToHome,
}

impl AccessDecision {
    /// Where to send the visitor, or `None` to render the section.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToSignIn => Some(SIGN_IN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
        }
    }
}

/// Role gate in front of a section of the site.
///
/// This only decides what to show. It is not a security boundary: the
/// identity it checks was synthesized from whatever the visitor typed.
/// The default guard has no role set and lets any signed-in identity pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessGuard {
    allowed: Option<Vec<Role>>,
}

impl AccessGuard {
    pub fn only(role: Role) -> Self {
        Self {
            allowed: Some(vec![role]),
        }
    }

    /// An empty list sends every signed-in identity home.
    pub fn allowing(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: Some(roles.into_iter().collect()),
        }
    }

    pub fn evaluate(&self, identity: Option<&Identity>) -> AccessDecision {
        let Some(identity) = identity else {
            return AccessDecision::RedirectToSignIn;
        };

        match &self.allowed {
            Some(roles) if !roles.contains(&identity.role) => AccessDecision::RedirectToHome,
            _ => AccessDecision::Render,
        }
    }
}
