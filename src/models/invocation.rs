use super::member::MemberProfile;

pub struct Invocation {
    pub invoker: MemberProfile,
    pub target: Option<MemberProfile>,
}

impl Invocation {
    /// The member a command acts on: the explicit target, otherwise the invoker.
    pub fn resolve_target(&self) -> &MemberProfile {
        self.target.as_ref().unwrap_or(&self.invoker)
    }
}
