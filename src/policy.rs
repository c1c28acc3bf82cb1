/// Account name checked when deciding whether guest fallback is available.
pub const GUEST_ACCOUNT_NAME: &str = "Guest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogonType {
    Interactive,
    Network,
}

/// Directory and account-policy lookups the provider depends on. Both calls
/// are synchronous and read-only from the provider's point of view.
pub trait IdentityPolicy {
    fn user_exists(&self, username: &str) -> bool;

    /// Validates `password` for `account_name` under the given logon type,
    /// against current account policy.
    fn validate_password(&self, account_name: &str, password: &str, logon_type: LogonType) -> bool;
}

/// Whether a failed or anonymous logon may be downgraded to a guest session.
///
/// A blank-password network logon of the "Guest" account succeeds only while
/// the account is enabled, has no password set, and is not excluded from
/// network logons, so this single check covers all three conditions. This is
/// the same test Windows-based SMB servers perform. Policy can change between
/// handshakes, so the result is recomputed on every call and never cached on
/// a context.
pub fn guest_login_enabled<P: IdentityPolicy + ?Sized>(policy: &P) -> bool {
    policy.validate_password(GUEST_ACCOUNT_NAME, "", LogonType::Network)
}
