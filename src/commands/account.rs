//! Login and user roster commands

use crate::cli::AdminCommands;
use crate::library::{Library, LibraryError};
use crate::output;
use crate::PhotosError;

type Result<T> = std::result::Result<T, PhotosError>;

/// Authenticate and return the username to run commands as
///
/// # Errors
/// Returns `PhotosError::LibraryError` for bad credentials.
pub fn login(library: &Library, username: &str, password: &str) -> Result<String> {
    Ok(library.login(username, password)?.username().to_string())
}

/// Fail unless `username` is the admin account
///
/// # Errors
/// Returns `PhotosError::InvalidInput` for any other user.
pub fn require_admin(library: &Library, username: &str) -> Result<()> {
    if library.user(username)?.is_admin() {
        Ok(())
    } else {
        Err(PhotosError::InvalidInput(
            "Only the admin account can manage users".into(),
        ))
    }
}

/// Fail if `username` is the admin account
///
/// The admin only manages the user roster; albums, photos, search and
/// transfers belong to regular users.
///
/// # Errors
/// Returns `LibraryError::ReservedAccount` for the admin.
pub fn require_regular_user(library: &Library, username: &str) -> Result<()> {
    if library.user(username)?.is_admin() {
        return Err(LibraryError::ReservedAccount(username.to_string()).into());
    }
    Ok(())
}

/// Execute an admin subcommand
///
/// `new_password` is the already-resolved password for `create-user`.
///
/// # Errors
/// Returns `PhotosError::InvalidInput` if the user is not the admin, or the
/// roster operation's error.
pub fn execute(
    library: &mut Library,
    username: &str,
    command: &AdminCommands,
    new_password: Option<&str>,
    quiet: bool,
) -> Result<()> {
    require_admin(library, username)?;

    match command {
        AdminCommands::Users => {
            for name in library.usernames() {
                println!("{}", if quiet { name.to_string() } else { format!("  {name}") });
            }
        }
        AdminCommands::CreateUser { username, .. } => {
            library.create_user(username, new_password.unwrap_or_default())?;
            if !quiet {
                println!("{}", output::success(&format!("Created user {}", username.trim())));
            }
        }
        AdminCommands::DeleteUser { username } => {
            library.delete_user(username)?;
            if !quiet {
                println!("{}", output::success(&format!("Deleted user {username}")));
            }
        }
    }
    Ok(())
}
