//! Server-side NTLM authentication provider for SMB servers.
//!
//! Implements the negotiate/challenge/authenticate handshake as seen by the
//! protocol layer and the guest-fallback policy of mainstream SMB server
//! implementations. Credential verification itself lives behind the
//! [`SecuritySubsystem`] trait; directory and account-policy lookups behind
//! [`IdentityPolicy`].

#[macro_use]
extern crate tracing;

pub mod messages;
pub mod ntlm;
pub mod policy;
pub mod status;
pub mod subsystem;

pub use crate::messages::{AuthenticateMessage, ChallengeMessage, NegotiateFlags, NegotiateMessage};
pub use crate::ntlm::{AuthContext, ContextAttribute, ContextAttributeName, NtlmAuthenticationProvider};
pub use crate::policy::{guest_login_enabled, IdentityPolicy, LogonType, GUEST_ACCOUNT_NAME};
pub use crate::status::{translate_logon_error, NtStatus};
pub use crate::subsystem::{AccessToken, SecurityHandle, SecuritySubsystem, SubsystemError};
