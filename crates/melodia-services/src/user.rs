//! Profile use-cases.

use melodia_core::models::{UpdateProfile, User};
use melodia_core::AppError;
use melodia_db::UserRepository;
use uuid::Uuid;
use validator::Validate;

/// Words rejected anywhere in a username or bio.
const RESTRICTED_WORDS: &[&str] = &["admin", "root", "badword"];

fn contains_restricted_word(text: &str) -> bool {
    let lower = text.to_lowercase();
    RESTRICTED_WORDS.iter().any(|word| lower.contains(word))
}

/// Length limits come from the `Validate` derive on `UpdateProfile`; the
/// restricted-word check is layered on top here.
pub fn validate_profile_update(input: &UpdateProfile) -> Result<(), AppError> {
    input.validate()?;

    if let Some(username) = &input.username {
        if contains_restricted_word(username) {
            return Err(AppError::RestrictedWord);
        }
    }

    if let Some(bio) = &input.bio {
        if contains_restricted_word(bio) {
            return Err(AppError::RestrictedWord);
        }
    }

    Ok(())
}

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<User, AppError> {
        self.users.get_by_id(user_id).await
    }

    /// Apply a partial profile update. Absent fields keep their current
    /// value; present fields are validated before anything is written.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        input: UpdateProfile,
    ) -> Result<User, AppError> {
        validate_profile_update(&input)?;

        let mut user = self.users.get_by_id(user_id).await?;

        if let Some(username) = input.username {
            user.username = username;
        }
        if let Some(bio) = input.bio {
            user.bio = bio;
        }
        if let Some(avatar_url) = input.avatar_url {
            user.avatar_url = avatar_url;
        }

        self.users.update(&user).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(username: Option<&str>, bio: Option<&str>) -> UpdateProfile {
        UpdateProfile {
            username: username.map(str::to_string),
            bio: bio.map(str::to_string),
            avatar_url: None,
        }
    }

    #[test]
    fn accepts_reasonable_profile() {
        assert!(validate_profile_update(&update(Some("listener42"), Some("night owl"))).is_ok());
    }

    #[test]
    fn accepts_empty_update() {
        assert!(validate_profile_update(&UpdateProfile::default()).is_ok());
    }

    #[test]
    fn rejects_short_and_long_usernames() {
        let err = validate_profile_update(&update(Some("ab"), None)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let long = "a".repeat(21);
        let err = validate_profile_update(&update(Some(&long), None)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_overlong_bio() {
        let long = "b".repeat(151);
        let err = validate_profile_update(&update(None, Some(&long))).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_restricted_words_case_insensitively() {
        let err = validate_profile_update(&update(Some("AdminUser"), None)).unwrap_err();
        assert!(matches!(err, AppError::RestrictedWord));

        let err = validate_profile_update(&update(None, Some("I am groot, also root"))).unwrap_err();
        assert!(matches!(err, AppError::RestrictedWord));
    }
}
