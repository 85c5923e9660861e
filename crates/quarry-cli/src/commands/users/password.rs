use crate::commands::CommandResult;
use crate::commands::shared::lookup::{optional_organization, require_user};
use crate::context::AppContext;

pub async fn run(
    email: &str,
    password: &str,
    org: Option<&str>,
    ctx: &mut AppContext,
) -> CommandResult {
    let org = optional_organization(ctx, org).await?;
    let user = require_user(ctx, email, org.map(|o| o.id)).await?;
    ctx.service.set_user_password(user.id, password).await?;
    ctx.console.line("User updated.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarry_db::repos::user::NewUser;

    use super::run;
    use crate::test_support::test_app;

    #[tokio::test]
    async fn sets_password() {
        let mut app = test_app(&[]).await;
        app.ctx
            .service
            .create_user(NewUser {
                org_id: app.org.id,
                name: "Fred Foobar".into(),
                email: "foobar@example.com".into(),
                ..NewUser::default()
            })
            .await
            .unwrap();

        run("foobar@example.com", "xyzzy", None, &mut app.ctx)
            .await
            .unwrap();
        let user = app
            .ctx
            .service
            .get_user_by_email("foobar@example.com", None)
            .await
            .unwrap()
            .unwrap();
        assert!(user.verify_password("xyzzy"));
        assert_eq!(app.out.contents(), "User updated.\n");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let mut app = test_app(&[]).await;
        let err = run("foobar@example.com", "xyzzy", None, &mut app.ctx)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User [foobar@example.com] not found.");
    }

    #[tokio::test]
    async fn org_filter_excludes_other_organizations() {
        let mut app = test_app(&[]).await;
        let other = app
            .ctx
            .service
            .create_organization("Acme", "acme")
            .await
            .unwrap();
        app.ctx
            .service
            .create_user(NewUser {
                org_id: other.id,
                name: "Fred Foobar".into(),
                email: "foobar@example.com".into(),
                ..NewUser::default()
            })
            .await
            .unwrap();

        let err = run("foobar@example.com", "xyzzy", Some("default"), &mut app.ctx)
            .await
            .unwrap_err();
        assert!(err.is_reported());
        run("foobar@example.com", "xyzzy", Some("acme"), &mut app.ctx)
            .await
            .unwrap();
    }
}
