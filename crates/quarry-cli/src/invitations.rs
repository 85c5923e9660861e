//! Delivery of user invitations.

use quarry_core::entities::{Organization, User};

/// Hands an invitation to the invited user.
///
/// Returns the invitation link.
pub trait InvitationSender {
    fn send_invite(
        &self,
        org: &Organization,
        inviter: &User,
        invited: &User,
    ) -> anyhow::Result<String>;
}

/// Builds the invite link under the configured base URL and logs it.
pub struct LinkInvitationSender {
    base_url: String,
}

impl LinkInvitationSender {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl InvitationSender for LinkInvitationSender {
    fn send_invite(
        &self,
        org: &Organization,
        inviter: &User,
        invited: &User,
    ) -> anyhow::Result<String> {
        let token = invited
            .invite_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("user {} has no invite token", invited.email))?;
        let link = format!(
            "{}/{}/invite/{token}",
            self.base_url.trim_end_matches('/'),
            org.slug
        );
        tracing::info!(
            inviter = %inviter.email,
            invited = %invited.email,
            %link,
            "invitation created"
        );
        Ok(link)
    }
}
