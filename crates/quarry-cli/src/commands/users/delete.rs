use crate::commands::CommandResult;
use crate::commands::shared::lookup::optional_organization;
use crate::context::AppContext;

pub async fn run(email: &str, org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = optional_organization(ctx, org).await?;
    let deleted = ctx
        .service
        .delete_users_by_email(email, org.map(|o| o.id))
        .await?;
    ctx.console.line(format_args!("Deleted {deleted} users."))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarry_db::repos::user::NewUser;

    use super::run;
    use crate::test_support::test_app;

    #[tokio::test]
    async fn delete_existing_user() {
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

        run("foobar@example.com", None, &mut app.ctx).await.unwrap();
        assert_eq!(app.out.contents(), "Deleted 1 users.\n");
        assert_eq!(app.ctx.service.db().count_rows("users").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_missing_user_reports_zero() {
        let mut app = test_app(&[]).await;
        run("foobar@example.com", Some("default"), &mut app.ctx)
            .await
            .unwrap();
        assert_eq!(app.out.contents(), "Deleted 0 users.\n");
    }
}
