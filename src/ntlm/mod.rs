
use crate::messages::{AuthenticateMessage, ChallengeMessage, NegotiateFlags, NegotiateMessage};
use crate::policy::{guest_login_enabled, IdentityPolicy};
use crate::status::{translate_logon_error, NtStatus};
use crate::subsystem::{self, AccessToken, SecurityHandle, SecuritySubsystem};

/// Per-handshake security context.
///
/// Created by [`NtlmAuthenticationProvider::get_challenge_message`], carried
/// by the protocol layer between the two handshake legs, and destroyed only
/// through [`NtlmAuthenticationProvider::delete_security_context`]. One
/// context wraps exactly one subsystem-side handle and must never serve two
/// handshakes.
#[derive(Debug)]
pub struct AuthContext {
    server_handle: SecurityHandle,
    workstation: String,
    user_name: Option<String>,
    session_key: Option<Vec<u8>>,
    is_guest: bool,
}

impl AuthContext {
    fn new(server_handle: SecurityHandle, workstation: String) -> Self {
        Self {
            server_handle,
            workstation,
            user_name: None,
            session_key: None,
            is_guest: false,
        }
    }

    pub fn workstation(&self) -> &str {
        &self.workstation
    }

    /// User name from the AUTHENTICATE message. `None` until phase 2 runs.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Encrypted session key from the AUTHENTICATE message. `None` until
    /// phase 2 runs.
    pub fn session_key(&self) -> Option<&[u8]> {
        self.session_key.as_deref()
    }

    pub fn is_guest(&self) -> bool {
        self.is_guest
    }
}

/// Context attributes the protocol layer may query after authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAttributeName {
    AccessToken,
    IsGuest,
    MachineName,
    SessionKey,
    UserName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextAttribute {
    AccessToken(AccessToken),
    IsGuest(bool),
    MachineName(String),
    SessionKey(Vec<u8>),
    UserName(String),
}

/// Server-side NTLM authentication provider.
///
/// Drives the negotiate/challenge/authenticate handshake against an opaque
/// [`SecuritySubsystem`] and decides, per [`guest_login_enabled`], whether a
/// failed or anonymous logon is silently downgraded to a guest session. The
/// guest-fallback behavior mirrors what mainstream SMB servers do in
/// practice.
#[derive(Debug)]
pub struct NtlmAuthenticationProvider<S, P> {
    subsystem: S,
    policy: P,
}

impl<S: SecuritySubsystem, P: IdentityPolicy> NtlmAuthenticationProvider<S, P> {
    pub fn new(subsystem: S, policy: P) -> Self {
        Self { subsystem, policy }
    }

    /// Phase 1: turns a NEGOTIATE message into a CHALLENGE message.
    ///
    /// On success the returned [`AuthContext`] owns a freshly allocated
    /// subsystem handle; the caller must hand the context back to
    /// [`Self::authenticate`] and eventually to
    /// [`Self::delete_security_context`]. A subsystem failure is reported as
    /// `InvalidToken`: the peer's token is assumed to be at fault, not this
    /// provider.
    #[instrument(level = "debug", ret, skip(self, negotiate), fields(workstation = %negotiate.workstation))]
    pub fn get_challenge_message(
        &mut self,
        negotiate: &NegotiateMessage,
    ) -> (Option<AuthContext>, NtStatus, Option<ChallengeMessage>) {
        let (handle, challenge_token) = match self.subsystem.create_challenge(&negotiate.raw) {
            Ok(output) => output,
            Err(error) => {
                debug!(%error, "security subsystem rejected the negotiate token");
                return (None, NtStatus::InvalidToken, None);
            }
        };

        let context = AuthContext::new(handle, negotiate.workstation.clone());

        (
            Some(context),
            NtStatus::ContinueNeeded,
            Some(ChallengeMessage::new(challenge_token)),
        )
    }

    /// Phase 2: verifies an AUTHENTICATE message against the context from
    /// phase 1.
    ///
    /// The user name and encrypted session key are recorded on the context
    /// before any outcome branch, so they are available to attribute queries
    /// even when the logon fails.
    #[instrument(level = "debug", ret, skip(self, context, authenticate), fields(user = %authenticate.user_name))]
    pub fn authenticate(
        &mut self,
        context: Option<&mut AuthContext>,
        authenticate: &AuthenticateMessage,
    ) -> NtStatus {
        // A client that skipped the negotiate leg gets InvalidToken. SMB
        // forbids an invalid-handle status in the session setup reply, even
        // though that would describe the situation better.
        let Some(context) = context else {
            return NtStatus::InvalidToken;
        };

        context.user_name = Some(authenticate.user_name.clone());
        context.session_key = Some(authenticate.encrypted_session_key.clone());

        let anonymous = authenticate.flags.contains(NegotiateFlags::NEGOTIATE_ANONYMOUS);
        if anonymous || !self.policy.user_exists(&authenticate.user_name) {
            // The subsystem is never consulted for anonymous or unknown
            // users; the only question is whether guest access is open.
            if guest_login_enabled(&self.policy) {
                debug!(anonymous, "downgrading logon to guest session");
                context.is_guest = true;
                return NtStatus::Success;
            }
            return NtStatus::LogonFailure;
        }

        match self.subsystem.verify_response(context.server_handle, &authenticate.raw) {
            Ok(true) => NtStatus::Success,
            Ok(false) => {
                let code = self.subsystem.last_logon_error();
                // Windows permits guest fallback when the password is
                // correct but blank-password use is restricted. That case
                // surfaces as ERROR_ACCOUNT_RESTRICTION, and no other code
                // qualifies.
                if code == subsystem::ERROR_ACCOUNT_RESTRICTION && guest_login_enabled(&self.policy) {
                    debug!("downgrading restricted account to guest session");
                    context.is_guest = true;
                    return NtStatus::Success;
                }
                translate_logon_error(code)
            }
            Err(error) => {
                warn!(%error, "security subsystem failed to verify the response");
                NtStatus::InvalidToken
            }
        }
    }

    /// Post-authentication attribute query. Returns `None` for a missing
    /// context or an attribute that is not populated yet. The access token
    /// is fetched from the subsystem on every call, never cached.
    pub fn get_context_attribute(
        &mut self,
        context: Option<&AuthContext>,
        name: ContextAttributeName,
    ) -> Option<ContextAttribute> {
        let context = context?;

        match name {
            ContextAttributeName::AccessToken => self
                .subsystem
                .fetch_access_token(context.server_handle)
                .ok()
                .map(ContextAttribute::AccessToken),
            ContextAttributeName::IsGuest => Some(ContextAttribute::IsGuest(context.is_guest)),
            ContextAttributeName::MachineName => Some(ContextAttribute::MachineName(context.workstation.clone())),
            ContextAttributeName::SessionKey => context.session_key.clone().map(ContextAttribute::SessionKey),
            ContextAttributeName::UserName => context.user_name.clone().map(ContextAttribute::UserName),
        }
    }

    /// Releases the context's subsystem handle and clears the slot. Safe to
    /// call with an empty slot; the handle is released exactly once because
    /// the context is taken out of the slot before the release call.
    #[instrument(level = "debug", skip_all)]
    pub fn delete_security_context(&mut self, context: &mut Option<AuthContext>) {
        if let Some(context) = context.take() {
            self.subsystem.release_handle(context.server_handle);
        }
    }
}
