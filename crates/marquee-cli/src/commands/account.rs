use anyhow::{Result, bail};
use marquee_core::user::{ProfileUpdate, UserAccount};

use super::bootstrap::AppContext;

async fn require_user(app: &AppContext) -> Result<UserAccount> {
    match app.session.current_user().await {
        Some(user) => Ok(user),
        None => bail!("Not signed in. Run `marquee login` first."),
    }
}

pub async fn login(app: &AppContext, email: &str, password: &str) -> Result<()> {
    let user = app.sign_in.sign_in(&app.session, email, password).await?;
    println!("Signed in as {}", user.display_name());
    Ok(())
}

pub async fn logout(app: &AppContext) -> Result<()> {
    app.session.logout().await?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(app: &AppContext) -> Result<()> {
    let Some(user) = app.session.current_user().await else {
        println!("Not signed in");
        return Ok(());
    };

    println!("{}", user.display_name());
    if let Some(email) = &user.email {
        println!("  email: {}", email);
    }
    if let Some(url) = &user.profile_image_url {
        println!("  image: {}", url);
    }
    Ok(())
}

pub async fn profile(
    app: &AppContext,
    first_name: Option<String>,
    last_name: Option<String>,
    image_url: Option<String>,
) -> Result<()> {
    let user = require_user(app).await?;
    let (current_first, current_last) = user.name_parts();

    let update = ProfileUpdate::from_name_parts(
        first_name.as_deref().unwrap_or(&current_first),
        last_name.as_deref().unwrap_or(&current_last),
        image_url.as_deref().unwrap_or_default(),
    );
    app.session.update_profile(update).await?;

    let refreshed = require_user(app).await?;
    println!("Profile updated: {}", refreshed.display_name());
    Ok(())
}

pub async fn password(app: &AppContext, new_password: &str) -> Result<()> {
    require_user(app).await?;
    if new_password.is_empty() {
        bail!("Password must not be empty.");
    }

    app.session.update_password(new_password).await?;
    println!("Password updated");
    Ok(())
}
