use serenity::all::Permissions;

use crate::models::member::MemberProfile;

/// Whether `invoker` may exercise `capability` on a member.
///
/// A member that already holds the capability is turned away.
pub fn authorize(invoker: &MemberProfile, capability: Permissions) -> bool {
    !invoker.permissions.contains(capability)
}
