//! Verification and password-reset messages.

use super::OutgoingEmail;

pub const VERIFICATION_SUBJECT: &str = "Verify your email address";
pub const PASSWORD_RESET_SUBJECT: &str = "Reset your password";

fn layout(heading: &str, intro: &str, link: &str, action: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body style="font-family: sans-serif; line-height: 1.5;">
    <h1>{heading}</h1>
    <p>{intro}</p>
    <p><a href="{link}">{action}</a></p>
    <p>Or copy this link into your browser:<br>{link}</p>
    <p style="color: #666;">{footer}</p>
  </body>
</html>"#
    )
}

/// Email carrying an email-verification link (valid for 24 hours)
pub fn verification_email(to: &str, link: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: VERIFICATION_SUBJECT.to_string(),
        html: layout(
            "Welcome to So Quotable",
            "Please confirm your email address to finish setting up your account.",
            link,
            "Verify email",
            "This link expires in 24 hours. If you did not create an account, you can ignore this email.",
        ),
    }
}

/// Email carrying a password-reset link (valid for 1 hour)
pub fn password_reset_email(to: &str, link: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: PASSWORD_RESET_SUBJECT.to_string(),
        html: layout(
            "Reset your password",
            "We received a request to reset the password for your So Quotable account.",
            link,
            "Choose a new password",
            "This link expires in 1 hour. If you did not request a reset, your password has not changed.",
        ),
    }
}

/// Extract the `token` query parameter from the first link in a message body
pub fn token_from_body(html: &str) -> Option<&str> {
    let start = html.find("token=")? + "token=".len();
    let rest = &html[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
