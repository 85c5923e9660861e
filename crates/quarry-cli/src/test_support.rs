//! Shared helpers for command handler tests.

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use quarry_config::QuarryConfig;
use quarry_connectors::ConnectorRegistry;
use quarry_core::entities::{Organization, User};
use quarry_core::password::MIN_COST;
use quarry_db::service::{QuarryService, ServiceSettings};

use crate::console::Console;
use crate::context::AppContext;
use crate::invitations::InvitationSender;

/// Console output captured for assertions.
#[derive(Clone, Default)]
pub struct CapturedOutput(Rc<RefCell<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console answering prompts with `answers` in order.
pub fn scripted_console(answers: &[&str]) -> (Console, CapturedOutput) {
    let mut input = String::new();
    for answer in answers {
        input.push_str(answer);
        input.push('\n');
    }
    let out = CapturedOutput::default();
    let console = Console::new(Box::new(Cursor::new(input)), Box::new(out.clone()));
    (console, out)
}

/// Invitation calls as `(org slug, inviter email, invited email)`.
#[derive(Clone, Default)]
pub struct RecordingSender(pub Rc<RefCell<Vec<(String, String, String)>>>);

impl InvitationSender for RecordingSender {
    fn send_invite(
        &self,
        org: &Organization,
        inviter: &User,
        invited: &User,
    ) -> anyhow::Result<String> {
        self.0.borrow_mut().push((
            org.slug.clone(),
            inviter.email.clone(),
            invited.email.clone(),
        ));
        Ok(format!("http://localhost:5000/{}/invite/test", org.slug))
    }
}

pub struct TestApp {
    pub ctx: AppContext,
    pub out: CapturedOutput,
    pub invites: RecordingSender,
    pub org: Organization,
}

/// In-memory application with the default organization and scripted input.
pub async fn test_app(answers: &[&str]) -> TestApp {
    let config = QuarryConfig::default();
    let settings = ServiceSettings {
        password_cost: MIN_COST,
        ..ServiceSettings::from_config(&config)
    };
    let service = QuarryService::new_local(":memory:", settings).await.unwrap();
    let org = service
        .bootstrap_organization(
            &config.organization.default_name,
            &config.organization.default_slug,
        )
        .await
        .unwrap()
        .unwrap();

    let (console, out) = scripted_console(answers);
    let invites = RecordingSender::default();
    let ctx = AppContext::new(
        service,
        config,
        ConnectorRegistry::with_builtin(),
        Box::new(invites.clone()),
        console,
    );
    TestApp {
        ctx,
        out,
        invites,
        org,
    }
}
