//! Per-user settings persistence.

use crate::{
    core::storage::{KeyValueStore, settings_key},
    errors::{Error, Result},
    models::{SystemSettings, User, UserSettings},
};
use tracing::info;

/// Stored settings for `user`, or the defaults. Admins always get system
/// settings filled in, employees never do.
pub async fn load_settings<S: KeyValueStore>(store: &S, user: &User) -> Result<UserSettings> {
    let mut settings: UserSettings = store
        .get_json(&settings_key(&user.id))
        .await?
        .unwrap_or_default();
    if user.is_admin() {
        settings.system.get_or_insert_with(SystemSettings::default);
    } else {
        settings.system = None;
    }
    Ok(settings)
}

/// Persists `settings` for `user`. System settings are admin-only.
pub async fn save_settings<S: KeyValueStore>(
    store: &S,
    user: &User,
    settings: &UserSettings,
) -> Result<()> {
    if settings.system.is_some() && !user.is_admin() {
        return Err(Error::forbidden("change system settings"));
    }
    if let Some(system) = &settings.system {
        if system.working_hours == 0 || system.working_hours > 24 {
            return Err(Error::validation("Working hours must be between 1 and 24"));
        }
        if system.working_days == 0 || system.working_days > 7 {
            return Err(Error::validation("Working days must be between 1 and 7"));
        }
    }

    store.set_json(&settings_key(&user.id), settings).await?;
    info!("Settings saved for {}", user.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::models::Role;
    use crate::test_utils::sample_user;

    #[tokio::test]
    async fn test_defaults_depend_on_role() -> Result<()> {
        let store = MemoryStore::new();
        let employee = sample_user("2", "john@company.com", 1.0);
        let mut admin = sample_user("1", "admin@company.com", 1.0);
        admin.role = Role::Admin;

        let settings = load_settings(&store, &employee).await?;
        assert!(settings.notifications.email_notifications);
        assert!(!settings.notifications.push_notifications);
        assert!(settings.system.is_none());

        let settings = load_settings(&store, &admin).await?;
        assert_eq!(settings.system.map(|s| s.company_name).as_deref(), Some("CoreHR Nexus"));
        Ok(())
    }

    #[tokio::test]
    async fn test_save_and_reload() -> Result<()> {
        let store = MemoryStore::new();
        let employee = sample_user("2", "john@company.com", 1.0);

        let mut settings = load_settings(&store, &employee).await?;
        settings.notifications.push_notifications = true;
        save_settings(&store, &employee, &settings).await?;

        assert_eq!(load_settings(&store, &employee).await?, settings);
        Ok(())
    }

    #[tokio::test]
    async fn test_employee_cannot_change_system_settings() -> Result<()> {
        let store = MemoryStore::new();
        let employee = sample_user("2", "john@company.com", 1.0);
        let settings = UserSettings {
            system: Some(SystemSettings::default()),
            ..UserSettings::default()
        };
        let result = save_settings(&store, &employee, &settings).await;
        assert!(matches!(result, Err(Error::Forbidden { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_working_hours_validated() -> Result<()> {
        let store = MemoryStore::new();
        let mut admin = sample_user("1", "admin@company.com", 1.0);
        admin.role = Role::Admin;
        let mut settings = load_settings(&store, &admin).await?;
        if let Some(system) = settings.system.as_mut() {
            system.working_hours = 30;
        }
        let result = save_settings(&store, &admin, &settings).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }
}
