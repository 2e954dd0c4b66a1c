use crate::error::ContractError;
use crate::events;
use crate::storage::{self, Role};
use soroban_sdk::{Address, Env};

/// Capability check consulted by every privileged ledger operation. The
/// ledger logic never reads role storage directly, so an alternative
/// authorization backend can be substituted without touching transition code.
pub trait Authorizer {
    fn role_of(&self, env: &Env, address: &Address) -> Role;

    /// Exact role match, with one asymmetry: `Consumer` is the implicit
    /// public role, so the check succeeds for every address.
    fn has_role(&self, env: &Env, address: &Address, role: Role) -> bool {
        if role == Role::Consumer {
            return true;
        }
        self.role_of(env, address) == role
    }
}

/// Storage-backed role registry. Unassigned addresses are `Consumer`.
pub struct RoleRegistry;

impl Authorizer for RoleRegistry {
    fn role_of(&self, env: &Env, address: &Address) -> Role {
        storage::get_stored_role(env, address).unwrap_or(Role::Consumer)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Assign `role` to `target`, overwriting any prior assignment. Admin only.
pub fn assign_role(
    env: &Env,
    caller: &Address,
    target: &Address,
    role: Role,
) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    storage::set_role(env, target, &role);
    events::emit_role_assigned(env, target.clone(), role, env.ledger().timestamp());
    Ok(())
}

/// Remove any stored assignment; `target` reverts to implicit Consumer.
pub fn revoke_role(env: &Env, caller: &Address, target: &Address) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    storage::remove_role(env, target);
    events::emit_role_revoked(env, target.clone(), env.ledger().timestamp());
    Ok(())
}

pub fn get_role(env: &Env, address: &Address) -> Role {
    RoleRegistry.role_of(env, address)
}

pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    RoleRegistry.has_role(env, address, role)
}
