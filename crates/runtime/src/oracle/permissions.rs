//! Capability grants served through [`herbalism_core::PermissionOracle`].
use std::collections::{HashMap, HashSet};

use herbalism_core::{ActorId, BlockKind, Capability, PermissionOracle};

/// Everyone holds every capability unless revoked.
///
/// Revocations apply to all block kinds, or to one kind when given a target.
#[derive(Debug, Clone, Default)]
pub struct PermissionOracleImpl {
    revoked: HashMap<ActorId, HashSet<Capability>>,
    revoked_for: HashMap<ActorId, HashSet<(Capability, BlockKind)>>,
}

impl PermissionOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&mut self, actor: ActorId, capability: Capability) {
        self.revoked.entry(actor).or_default().insert(capability);
    }

    pub fn revoke_for(&mut self, actor: ActorId, capability: Capability, kind: BlockKind) {
        self.revoked_for
            .entry(actor)
            .or_default()
            .insert((capability, kind));
    }

    pub fn grant(&mut self, actor: ActorId, capability: Capability) {
        if let Some(revoked) = self.revoked.get_mut(&actor) {
            revoked.remove(&capability);
        }
        if let Some(revoked) = self.revoked_for.get_mut(&actor) {
            revoked.retain(|(cap, _)| *cap != capability);
        }
    }
}

impl PermissionOracle for PermissionOracleImpl {
    fn allows(&self, actor: ActorId, capability: Capability, target: Option<BlockKind>) -> bool {
        if self
            .revoked
            .get(&actor)
            .is_some_and(|revoked| revoked.contains(&capability))
        {
            return false;
        }
        match target {
            Some(kind) => !self
                .revoked_for
                .get(&actor)
                .is_some_and(|revoked| revoked.contains(&(capability, kind))),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revocations_are_scoped() {
        let mut grants = PermissionOracleImpl::new();
        let alice = ActorId(1);
        let bob = ActorId(2);
        grants.revoke(alice, Capability::HylianLuck);
        grants.revoke_for(alice, Capability::GreenThumbPlant, BlockKind::Cocoa);

        assert!(!grants.allows(alice, Capability::HylianLuck, None));
        assert!(grants.allows(bob, Capability::HylianLuck, None));
        assert!(!grants.allows(alice, Capability::GreenThumbPlant, Some(BlockKind::Cocoa)));
        assert!(grants.allows(alice, Capability::GreenThumbPlant, Some(BlockKind::Wheat)));

        grants.grant(alice, Capability::GreenThumbPlant);
        assert!(grants.allows(alice, Capability::GreenThumbPlant, Some(BlockKind::Cocoa)));
    }
}
