//! Token-based focus claims.
//!
//! Interactive objects claim focus with their own token and only ever release
//! that token. The visible focus is the most recent live claim, so enter/leave
//! events from overlapping regions arriving out of order cannot leave a stale
//! label behind.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FocusToken(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Claim {
    token: FocusToken,
    label: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct FocusClaims {
    // oldest first; the last entry holds focus
    claims: SmallVec<[Claim; 4]>,
}

impl FocusClaims {
    /// Claim (or refresh) focus for `token`. A refresh moves the claim to the top.
    pub fn claim(&mut self, token: FocusToken, label: Option<String>) {
        self.claims.retain(|c| c.token != token);
        self.claims.push(Claim { token, label });
    }

    /// Drop `token`'s claim; returns whether it held one.
    pub fn release(&mut self, token: FocusToken) -> bool {
        let before = self.claims.len();
        self.claims.retain(|c| c.token != token);
        before != self.claims.len()
    }

    pub fn clear(&mut self) {
        self.claims.clear();
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        !self.claims.is_empty()
    }

    pub fn holder(&self) -> Option<FocusToken> {
        self.claims.last().map(|c| c.token)
    }

    pub fn target(&self) -> Option<&str> {
        self.claims.last().and_then(|c| c.label.as_deref())
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }
}
