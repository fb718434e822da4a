//! Session store - who is logged in, and the operations that change it.
//!
//! The session is either anonymous or authenticated. The authenticated user is
//! mirrored under the `currentUser` key so the next process start (the next
//! CLI invocation) resumes the same session. Bad credentials and duplicate
//! signup emails are ordinary outcomes reported as `false`; only storage and
//! hashing failures are errors.

use crate::{
    config::SignupConfig,
    core::{
        generator::generate_employee_id,
        password::CredentialHasher,
        storage::{CURRENT_USER_KEY, KeyValueStore},
        users::UserRepository,
    },
    errors::{Error, Result},
    models::{Role, User},
};
use chrono::{Local, NaiveDate, Utc};
use rand::Rng;
use tracing::{info, instrument, warn};

/// Whether anyone is logged in
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No current user
    Anonymous,
    /// A user is logged in
    Authenticated(User),
}

/// Form data for creating an account
#[derive(Debug, Clone)]
pub struct SignupRequest {
    /// Full name
    pub name: String,
    /// Login email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Department name
    pub department: String,
    /// Job title
    pub designation: String,
}

/// Profile fields a user may change; `None` leaves a field as it is and an
/// empty string clears an optional field. Department, designation, role and
/// salary are HR-managed and not editable here.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name, must not be blank
    pub name: Option<String>,
    /// New login email, must not belong to another user
    pub email: Option<String>,
    /// Contact phone number
    pub phone_number: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

/// Tracks the current session and persists it through a [`KeyValueStore`].
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
    users: UserRepository<S>,
    hasher: CredentialHasher,
    signup: SignupConfig,
    state: SessionState,
}

impl<S: KeyValueStore + Clone> SessionStore<S> {
    /// Restores the session from `currentUser`.
    ///
    /// A stored value that no longer parses is dropped with a warning and the
    /// session starts anonymous.
    #[instrument(skip_all)]
    pub async fn bootstrap(
        users: UserRepository<S>,
        hasher: CredentialHasher,
        signup: SignupConfig,
    ) -> Result<Self> {
        let store = users.store().clone();
        let state = match store.get_json::<User>(CURRENT_USER_KEY).await {
            Ok(Some(user)) => {
                info!("Resumed session for {}", user.email);
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Anonymous,
            Err(Error::Serialization(e)) => {
                warn!("Discarding unreadable stored session: {}", e);
                store.remove(CURRENT_USER_KEY).await?;
                SessionState::Anonymous
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            store,
            users,
            hasher,
            signup,
            state,
        })
    }

    /// Current session state
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The logged-in user, if any
    pub const fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// Whether a user is logged in
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// The user repository backing this session
    pub const fn users(&self) -> &UserRepository<S> {
        &self.users
    }

    /// The credential hasher in use
    pub const fn hasher(&self) -> &CredentialHasher {
        &self.hasher
    }

    /// Route guard: the current user, or [`Error::NotAuthenticated`].
    pub fn require_user(&self) -> Result<&User> {
        self.current_user().ok_or(Error::NotAuthenticated)
    }

    /// Route guard for admin-only views.
    pub fn require_admin(&self, action: &str) -> Result<&User> {
        let user = self.require_user()?;
        if user.role == Role::Admin {
            Ok(user)
        } else {
            Err(Error::forbidden(action))
        }
    }

    async fn authenticate_as(&mut self, user: User) -> Result<()> {
        self.store.set_json(CURRENT_USER_KEY, &user).await?;
        self.state = SessionState::Authenticated(user);
        Ok(())
    }

    /// Logs in when a user with exactly this email exists and the password
    /// verifies. On failure the previous state is kept.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<bool> {
        let Some(user) = self.users.find_by_email(email).await? else {
            info!("Login failed: unknown email");
            return Ok(false);
        };
        if !self.hasher.verify(password, &user.password_hash) {
            info!("Login failed: wrong password");
            return Ok(false);
        }

        info!("User {} logged in", user.id);
        self.authenticate_as(user).await?;
        Ok(true)
    }

    /// Creates an employee account and logs it in. Returns `false` when the
    /// email is already registered.
    pub async fn signup(&mut self, request: SignupRequest) -> Result<bool> {
        let mut rng = rand::thread_rng();
        self.signup_at(
            request,
            &mut rng,
            Local::now().date_naive(),
            Utc::now().timestamp_millis(),
        )
        .await
    }

    /// [`Self::signup`] with an explicit random source, date and clock
    /// reading (milliseconds since the Unix epoch) for the new user's id.
    #[instrument(skip(self, request, rng), fields(email = %request.email))]
    pub async fn signup_at<R: Rng + ?Sized>(
        &mut self,
        request: SignupRequest,
        rng: &mut R,
        today: NaiveDate,
        now_millis: i64,
    ) -> Result<bool> {
        if self.users.email_taken(&request.email).await? {
            info!("Signup rejected: email already registered");
            return Ok(false);
        }

        let existing = self.users.all().await?;
        let mut id = now_millis;
        while existing.iter().any(|u| u.id == id.to_string()) {
            id += 1;
        }

        let user = User {
            id: id.to_string(),
            employee_id: generate_employee_id(rng, &self.signup.employee_id_prefix, today),
            photo: Some(format!("{}{}", self.signup.avatar_base_url, request.name)),
            name: request.name,
            email: request.email,
            password_hash: self.hasher.hash(&request.password)?,
            role: Role::Employee,
            department: request.department,
            designation: request.designation,
            joining_date: today,
            salary: self.signup.default_salary,
            phone_number: None,
            address: None,
        };

        self.users.insert(user.clone()).await?;
        info!("Created user {} ({})", user.id, user.employee_id);
        self.authenticate_as(user).await?;
        Ok(true)
    }

    /// Ends the session. The user collection is left untouched.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<()> {
        self.state = SessionState::Anonymous;
        self.store.remove(CURRENT_USER_KEY).await?;
        info!("Logged out");
        Ok(())
    }

    /// Applies a profile edit to the current user, writing it to both the
    /// user collection and the session.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<User> {
        let current_id = self.require_user()?.id.clone();
        let mut user = self
            .users
            .find_by_id(&current_id)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "User",
                id: current_id.clone(),
            })?;

        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::validation("Name cannot be empty"));
            }
            name.clone_into(&mut user.name);
        }

        if let Some(email) = update.email {
            let email = email.trim();
            if email.is_empty() || !email.contains('@') {
                return Err(Error::validation(format!("'{email}' is not an email address")));
            }
            if let Some(owner) = self.users.find_by_email(email).await? {
                if owner.id != user.id {
                    return Err(Error::DuplicateEmail {
                        email: email.to_string(),
                    });
                }
            }
            email.clone_into(&mut user.email);
        }

        if let Some(phone) = update.phone_number {
            user.phone_number = Some(phone).filter(|p| !p.trim().is_empty());
        }
        if let Some(address) = update.address {
            user.address = Some(address).filter(|a| !a.trim().is_empty());
        }

        self.users.update(user.clone()).await?;
        self.authenticate_as(user.clone()).await?;
        info!("Profile updated for {}", user.id);
        Ok(user)
    }

    /// Replaces the current user's password. Returns `false` when
    /// `current_password` does not verify.
    #[instrument(skip_all)]
    pub async fn change_password(
        &mut self,
        current_password: &str,
        new_password: &str,
    ) -> Result<bool> {
        let current_id = self.require_user()?.id.clone();
        if new_password.trim().is_empty() {
            return Err(Error::validation("New password cannot be empty"));
        }

        let mut user = self
            .users
            .find_by_id(&current_id)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "User",
                id: current_id,
            })?;
        if !self.hasher.verify(current_password, &user.password_hash) {
            info!("Password change rejected: current password does not match");
            return Ok(false);
        }

        user.password_hash = self.hasher.hash(new_password)?;
        self.users.update(user.clone()).await?;
        self.authenticate_as(user).await?;
        info!("Password changed");
        Ok(true)
    }
}
