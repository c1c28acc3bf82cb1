use std::{error, fmt};

/// Win32 logon error codes the security subsystem reports through
/// [`SecuritySubsystem::last_logon_error`] after a rejected verification.
pub const ERROR_NO_TOKEN: u32 = 1008;
pub const ERROR_ACCOUNT_RESTRICTION: u32 = 1327;
pub const ERROR_INVALID_LOGON_HOURS: u32 = 1328;
pub const ERROR_INVALID_WORKSTATION: u32 = 1329;
pub const ERROR_PASSWORD_EXPIRED: u32 = 1330;
pub const ERROR_ACCOUNT_DISABLED: u32 = 1331;
pub const ERROR_LOGON_TYPE_NOT_GRANTED: u32 = 1385;
pub const ERROR_ACCOUNT_EXPIRED: u32 = 1793;
pub const ERROR_PASSWORD_MUST_CHANGE: u32 = 1907;
pub const ERROR_ACCOUNT_LOCKED_OUT: u32 = 1909;

/// Opaque reference to a subsystem-side security context.
///
/// The subsystem owns the context behind the handle; the holder must release
/// it exactly once via [`SecuritySubsystem::release_handle`] and never use it
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecurityHandle(u64);

impl SecurityHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// Opaque access token material issued by the security subsystem for an
/// authenticated context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(Vec<u8>);

impl AccessToken {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Failure raised by a security subsystem call. Carries a description only;
/// the specific logon error code, when one exists, is read separately through
/// [`SecuritySubsystem::last_logon_error`].
#[derive(Debug, Clone)]
pub struct SubsystemError {
    pub description: String,
}

impl SubsystemError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl fmt::Display for SubsystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "security subsystem error: {}", self.description)
    }
}

impl error::Error for SubsystemError {}

/// The credential-verification mechanism backing the NTLM provider.
///
/// Implementations wrap whatever actually checks the client's response
/// against stored credentials (LSA on Windows, an NTLM computation over a
/// local account database elsewhere). The provider treats every `Err` as a
/// problem with the peer's input, never as its own fault.
pub trait SecuritySubsystem {
    /// Produces a challenge token for the given raw NEGOTIATE token, along
    /// with a handle to the freshly allocated server-side context.
    fn create_challenge(&mut self, negotiate_token: &[u8]) -> Result<(SecurityHandle, Vec<u8>), SubsystemError>;

    /// Verifies the raw AUTHENTICATE token against the context behind
    /// `handle`. `Ok(false)` means the credentials were rejected; the reason
    /// is available from [`Self::last_logon_error`].
    fn verify_response(&mut self, handle: SecurityHandle, authenticate_token: &[u8])
        -> Result<bool, SubsystemError>;

    /// The Win32 error code of the most recent rejected verification.
    fn last_logon_error(&self) -> u32;

    /// Fetches the access token for an authenticated context.
    fn fetch_access_token(&mut self, handle: SecurityHandle) -> Result<AccessToken, SubsystemError>;

    /// Releases the server-side context behind `handle`. The handle must not
    /// be used again.
    fn release_handle(&mut self, handle: SecurityHandle);
}
