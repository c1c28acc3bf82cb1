use num_derive::{FromPrimitive, ToPrimitive};

use crate::subsystem;

/// Status codes surfaced to the SMB layer by the authentication provider.
///
/// The discriminants are the real NT status / SSPI values so the enum can be
/// written to the wire as-is by the protocol layer.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum NtStatus {
    Success = 0x0000_0000,
    /// SEC_I_CONTINUE_NEEDED
    ContinueNeeded = 0x0009_0312,
    /// SEC_E_INVALID_TOKEN. Used for malformed or out-of-sequence input.
    InvalidToken = 0x8009_0308,
    LogonFailure = 0xC000_006D,
    AccountRestriction = 0xC000_006E,
    InvalidLogonHours = 0xC000_006F,
    InvalidWorkstation = 0xC000_0070,
    PasswordExpired = 0xC000_0071,
    AccountDisabled = 0xC000_0072,
    LogonTypeNotGranted = 0xC000_015B,
    AccountExpired = 0xC000_0193,
    PasswordMustChange = 0xC000_0224,
    AccountLockedOut = 0xC000_0234,
}

/// Maps the Win32 logon error reported by the security subsystem to the
/// status code sent back to the client. Any code without a defined mapping
/// collapses to `LogonFailure`.
pub fn translate_logon_error(code: u32) -> NtStatus {
    match code {
        subsystem::ERROR_NO_TOKEN => NtStatus::InvalidToken,
        subsystem::ERROR_ACCOUNT_RESTRICTION => NtStatus::AccountRestriction,
        subsystem::ERROR_INVALID_LOGON_HOURS => NtStatus::InvalidLogonHours,
        subsystem::ERROR_INVALID_WORKSTATION => NtStatus::InvalidWorkstation,
        subsystem::ERROR_PASSWORD_EXPIRED => NtStatus::PasswordExpired,
        subsystem::ERROR_ACCOUNT_DISABLED => NtStatus::AccountDisabled,
        subsystem::ERROR_LOGON_TYPE_NOT_GRANTED => NtStatus::LogonTypeNotGranted,
        subsystem::ERROR_ACCOUNT_EXPIRED => NtStatus::AccountExpired,
        subsystem::ERROR_PASSWORD_MUST_CHANGE => NtStatus::PasswordMustChange,
        subsystem::ERROR_ACCOUNT_LOCKED_OUT => NtStatus::AccountLockedOut,
        _ => NtStatus::LogonFailure,
    }
}
