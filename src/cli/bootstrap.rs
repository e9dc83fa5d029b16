// Bootstrap commands: seed roles and create the first admin account

use std::io::{self, Write};

use sea_orm::DatabaseConnection;

use crate::stores::{RoleStore, UserStore};

const ROLE_SEED: &[(&str, &str)] = &[("admin", "Administrator"), ("staff", "Staff member")];

/// Create a superuser account with the admin role
///
/// Finds or creates the admin role first, then creates an active account.
/// When no password is supplied on the command line, prompts for one with
/// confirmation.
pub async fn create_superuser(
    db: &DatabaseConnection,
    login: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let role_store = RoleStore::new(db.clone());
    let user_store = UserStore::new(db.clone());

    role_store.find_or_create("admin", Some("Administrator")).await?;

    let password = match password {
        Some(p) => p,
        None => prompt_for_password()?,
    };

    user_store
        .create(login, &password, true, &["admin".to_string()])
        .await?;

    println!("Superuser {} successfully created.", login);

    Ok(())
}

/// Seed the built-in admin and staff roles
pub async fn generate_roles(db: &DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
    let role_store = RoleStore::new(db.clone());

    for (name, description) in ROLE_SEED {
        role_store.find_or_create(name, Some(description)).await?;
    }

    println!("Roles successfully generated.");

    Ok(())
}

/// Prompt for a password twice and require both entries to match
fn prompt_for_password() -> Result<String, Box<dyn std::error::Error>> {
    loop {
        print!("Password: ");
        io::stdout().flush()?;
        let mut password = String::new();
        io::stdin().read_line(&mut password)?;
        let password = password.trim_end_matches(['\r', '\n']).to_string();

        if password.is_empty() {
            println!("Password cannot be empty.");
            continue;
        }

        print!("Repeat for confirmation: ");
        io::stdout().flush()?;
        let mut confirmation = String::new();
        io::stdin().read_line(&mut confirmation)?;
        let confirmation = confirmation.trim_end_matches(['\r', '\n']);

        if password == confirmation {
            return Ok(password);
        }

        println!("Error: the two entered values do not match.");
    }
}
