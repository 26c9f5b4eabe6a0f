//! Authorization outcomes and per-tier verdicts.

use axum::http::StatusCode;

/// Final outcome of an authorization request.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The caller is recognized and may perform the action.
    Allow,
    /// The caller claimed an identity but presented wrong or unusable
    /// credentials.
    DenyBadCredentials,
    /// The caller is refused: correct credentials but insufficient rights,
    /// or an identity no tier recognizes.
    DenyForbidden,
}

impl Decision {
    /// Returns the HTTP status code MediaMTX expects for this outcome.
    ///
    /// The webhook contract is status-only: `204` grants, anything else
    /// refuses. The split between `401` and `403` exists for operators
    /// reading access logs, MediaMTX treats both the same.
    #[inline]
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Allow => StatusCode::NO_CONTENT,
            Self::DenyBadCredentials => StatusCode::UNAUTHORIZED,
            Self::DenyForbidden => StatusCode::FORBIDDEN,
        }
    }

    /// Returns `true` if the request is granted.
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Outcome of evaluating a single credential tier.
///
/// A tier either claims the request and settles it, or passes it on
/// unchanged. Tiers never observe each other's verdicts.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierVerdict {
    /// The tier recognized the identity and settled the request.
    Matched(Decision),
    /// The identity is not known to this tier. Evaluation continues.
    NotMatched,
}

impl TierVerdict {
    /// Returns the settled decision, if the tier claimed the request.
    #[inline]
    pub fn into_decision(self) -> Option<Decision> {
        match self {
            Self::Matched(decision) => Some(decision),
            Self::NotMatched => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Decision::Allow.status_code(), StatusCode::NO_CONTENT);
        assert_eq!(
            Decision::DenyBadCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(Decision::DenyForbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn verdict_into_decision() {
        assert_eq!(
            TierVerdict::Matched(Decision::Allow).into_decision(),
            Some(Decision::Allow)
        );
        assert_eq!(TierVerdict::NotMatched.into_decision(), None);
    }
}
