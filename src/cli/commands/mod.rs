/// Login, signup, profile, password and settings
pub mod account;
/// Help center and support tickets
pub mod help;
/// Leave request listing, submission and review
pub mod leave;
/// Dashboard, attendance, payslips, reports and announcements
pub mod records;

use crate::{
    cli::PortalContext,
    core::KeyValueStore,
    errors::{Error, Result},
};

/// Whose records a view shows: one employee, or everyone for admins.
///
/// Employees always get their own id back and may not name anyone else.
pub(crate) fn resolve_employee<S: KeyValueStore + Clone>(
    ctx: &PortalContext<S>,
    requested: Option<&str>,
) -> Result<Option<String>> {
    let user = ctx.session.require_user()?;
    if user.is_admin() {
        return Ok(requested.map(str::to_string));
    }
    match requested {
        Some(id) if id != user.id => Err(Error::forbidden("view another employee's records")),
        _ => Ok(Some(user.id.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStore;
    use crate::test_utils::test_context;

    #[tokio::test]
    async fn test_resolve_employee_by_role() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        assert!(matches!(
            resolve_employee(&ctx, None),
            Err(Error::NotAuthenticated)
        ));

        ctx.session.login("john@company.com", "john123").await?;
        assert_eq!(resolve_employee(&ctx, None)?.as_deref(), Some("2"));
        assert_eq!(resolve_employee(&ctx, Some("2"))?.as_deref(), Some("2"));
        assert!(matches!(
            resolve_employee(&ctx, Some("3")),
            Err(Error::Forbidden { .. })
        ));

        ctx.session.login("admin@company.com", "admin123").await?;
        assert_eq!(resolve_employee(&ctx, None)?, None);
        assert_eq!(resolve_employee(&ctx, Some("3"))?.as_deref(), Some("3"));
        Ok(())
    }
}
