//! Ownership guard.
//!
//! Every mutation is self-service: a caller may change a resource only when
//! the caller's identity equals the resource's owning identity. There are
//! no roles and no overrides.
//!
//! Mutating service operations take an [`Authorized`] value, which can only
//! be obtained through [`guard`], so a mutation cannot skip the check.

use super::{Post, User, UserId};
use crate::DomainError;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }
}

/// Compare a caller against a resource owner.
pub fn authorize(caller: UserId, owner: UserId) -> Decision {
    if caller == owner {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// A resource with an owning identity.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// A bare user id is the path target of a user mutation and owns itself.
impl Owned for UserId {
    fn owner_id(&self) -> UserId {
        *self
    }
}

impl Owned for User {
    fn owner_id(&self) -> UserId {
        self.id
    }
}

impl Owned for Post {
    fn owner_id(&self) -> UserId {
        self.author_id
    }
}

/// Proof that `caller` owns `target`.
#[derive(Debug, Clone)]
pub struct Authorized<T> {
    caller: UserId,
    target: T,
}

impl<T> Authorized<T> {
    pub fn caller(&self) -> UserId {
        self.caller
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

/// Run the ownership check and wrap the resource on `Allow`.
pub fn guard<T: Owned>(caller: UserId, target: T) -> Result<Authorized<T>, DomainError> {
    let owner = target.owner_id();
    match authorize(caller, owner) {
        Decision::Allow => Ok(Authorized { caller, target }),
        Decision::Deny => {
            tracing::warn!(caller, owner, "Ownership check denied");
            Err(DomainError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_is_identity_equality() {
        assert_eq!(authorize(1, 1), Decision::Allow);
        assert_eq!(authorize(1, 2), Decision::Deny);
        assert!(!authorize(2, 1).is_allowed());
    }

    #[test]
    fn test_guard_user_path_target() {
        let proof = guard(4, 4 as UserId).unwrap();
        assert_eq!(proof.caller(), 4);
        assert_eq!(*proof.target(), 4);

        assert!(matches!(guard(4, 5 as UserId), Err(DomainError::Unauthorized)));
    }

    #[test]
    fn test_guard_post_uses_author() {
        let post = Post::new(2, "Title 2".into(), "Hello".into());

        assert!(guard(2, post.clone()).is_ok());
        assert!(matches!(guard(1, post), Err(DomainError::Unauthorized)));
    }
}
