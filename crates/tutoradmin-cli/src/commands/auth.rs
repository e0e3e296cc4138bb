use super::output::{print_json, print_ok};
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use std::io::BufRead;
use tutoradmin_core::models::{AdminPatch, LoginCredentials};
use tutoradmin_interaction::{ApiClient, TokenStatus};

#[derive(Subcommand)]
pub enum PasswordAction {
    /// Change the logged-in admin's password
    Change {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    /// Request a reset email
    Forgot { email: String },
    /// Complete a reset with the emailed token
    Reset {
        token: String,
        #[arg(long)]
        new: String,
    },
}

fn read_password() -> Result<String> {
    eprintln!("Password:");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("Password must not be empty");
    }
    Ok(password)
}

pub async fn login(
    client: &ApiClient,
    email: String,
    password: Option<String>,
    remember_me: bool,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };
    let mut credentials = LoginCredentials::new(email, password);
    if remember_me {
        credentials.remember_me = Some(true);
    }

    let response = client
        .auth()
        .sign_in(&credentials)
        .await
        .context("Login failed")?;
    print_json(&response.user)
}

pub async fn logout(client: &ApiClient) -> Result<()> {
    client.auth().sign_out().await.context("Logout failed")?;
    print_ok()
}

pub fn whoami(client: &ApiClient) -> Result<()> {
    match client.session().user() {
        Some(user) => print_json(&user),
        None => bail!("Not logged in"),
    }
}

pub async fn verify(client: &ApiClient) -> Result<()> {
    let status = match client.auth().check_token().await {
        TokenStatus::Valid => "valid",
        TokenStatus::Invalid => "invalid",
        TokenStatus::Unreachable => "unreachable",
    };
    print_json(&serde_json::json!({ "token": status }))
}

pub async fn refresh(client: &ApiClient, refresh_token: &str) -> Result<()> {
    let response = client
        .auth()
        .refresh_session(refresh_token)
        .await
        .context("Token refresh failed")?;
    print_json(&response.user)
}

pub fn update_profile(
    client: &ApiClient,
    name: Option<String>,
    email: Option<String>,
    profile_picture: Option<String>,
) -> Result<()> {
    let patch = AdminPatch {
        name,
        email,
        profile_picture,
        ..AdminPatch::default()
    };
    if patch.is_empty() {
        bail!("Nothing to update");
    }
    let session = client.session();
    if !session.is_authenticated() {
        bail!("Not logged in");
    }
    session
        .update_user(&patch)
        .context("Failed to save profile")?;
    print_json(&session.user())
}

pub async fn password(client: &ApiClient, action: PasswordAction) -> Result<()> {
    let auth = client.auth();
    match action {
        PasswordAction::Change { current, new } => auth.change_password(&current, &new).await?,
        PasswordAction::Forgot { email } => auth.forgot_password(&email).await?,
        PasswordAction::Reset { token, new } => auth.reset_password(&token, &new).await?,
    }
    print_ok()
}
