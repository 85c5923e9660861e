use std::collections::HashMap;

use crate::commands::CommandResult;
use crate::commands::shared::lookup::optional_organization;
use crate::context::AppContext;
use crate::output::{Block, print_blocks};

pub async fn run(org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = optional_organization(ctx, org).await?;
    let users = ctx.service.list_users(org.map(|o| o.id)).await?;
    let org_names: HashMap<i64, String> = ctx
        .service
        .list_organizations()
        .await?
        .into_iter()
        .map(|o| (o.id, o.name))
        .collect();

    let blocks: Vec<Block> = users
        .iter()
        .map(|user| {
            Block::new()
                .field("Id", user.id)
                .field("Name", &user.name)
                .field("Email", &user.email)
                .field(
                    "Organization",
                    org_names.get(&user.org_id).map_or("", String::as_str),
                )
        })
        .collect();
    print_blocks(&mut ctx.console, &blocks)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarry_db::repos::user::NewUser;

    use super::run;
    use crate::test_support::test_app;

    #[tokio::test]
    async fn lists_users() {
        let mut app = test_app(&[]).await;
        for (name, email) in [
            ("Fred Foobar", "foobar@example.com"),
            ("Bob Builder", "bob@example.com"),
        ] {
            app.ctx
                .service
                .create_user(NewUser {
                    org_id: app.org.id,
                    name: name.into(),
                    email: email.into(),
                    ..NewUser::default()
                })
                .await
                .unwrap();
        }

        run(None, &mut app.ctx).await.unwrap();
        assert_eq!(
            app.out.contents(),
            "Id: 1\nName: Fred Foobar\nEmail: foobar@example.com\nOrganization: Default\n\
             --------------------\n\
             Id: 2\nName: Bob Builder\nEmail: bob@example.com\nOrganization: Default\n"
        );
    }

    #[tokio::test]
    async fn unknown_org_filter_is_not_found() {
        let mut app = test_app(&[]).await;
        let err = run(Some("acme"), &mut app.ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "Organization [acme] not found.");
    }
}
