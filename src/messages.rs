use bitflags::bitflags;

bitflags! {
    /// NTLM negotiation flags carried by the NEGOTIATE and AUTHENTICATE
    /// messages. Only the bits this provider inspects or forwards are named.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NegotiateFlags: u32 {
        /// A-bit
        const NEGOTIATE_UNICODE = 0x0000_0001;

        /// B-bit
        const NEGOTIATE_OEM = 0x0000_0002;

        /// C-bit
        const NEGOTIATE_REQUEST_TARGET = 0x0000_0004;

        /// D-bit
        const NEGOTIATE_SIGN = 0x0000_0010;

        /// E-bit
        const NEGOTIATE_SEAL = 0x0000_0020;

        /// H-bit
        const NEGOTIATE_NTLM = 0x0000_0200;

        /// J-bit
        /// set by clients requesting an anonymous session
        const NEGOTIATE_ANONYMOUS = 0x0000_0800;

        /// L-bit
        const NEGOTIATE_WORKSTATION_SUPPLIED = 0x0000_2000;

        /// M-bit
        const NEGOTIATE_ALWAYS_SIGN = 0x0000_8000;

        /// P-bit
        /// NTLMv2 session security
        const NEGOTIATE_EXTENDED_SESSION_SECURITY = 0x0008_0000;

        /// S-bit
        const NEGOTIATE_TARGET_INFO = 0x0080_0000;

        /// V-bit
        const NEGOTIATE_KEY_EXCH = 0x4000_0000;
    }
}

/// Parsed view of an NTLM NEGOTIATE message, as handed over by the protocol
/// layer. `raw` holds the original token bytes and is forwarded verbatim to
/// the security subsystem.
#[derive(Debug, Clone)]
pub struct NegotiateMessage {
    pub flags: NegotiateFlags,
    pub workstation: String,
    pub raw: Vec<u8>,
}

/// NTLM CHALLENGE token produced by the security subsystem, ready for the
/// protocol layer to serialize into a session setup response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeMessage {
    pub token: Vec<u8>,
}

impl ChallengeMessage {
    pub fn new(token: Vec<u8>) -> Self {
        Self { token }
    }
}

/// Parsed view of an NTLM AUTHENTICATE message. `encrypted_session_key` is
/// the encrypted random session key field; `raw` holds the original token
/// bytes for the subsystem's response verification.
#[derive(Debug, Clone)]
pub struct AuthenticateMessage {
    pub flags: NegotiateFlags,
    pub user_name: String,
    pub encrypted_session_key: Vec<u8>,
    pub raw: Vec<u8>,
}
