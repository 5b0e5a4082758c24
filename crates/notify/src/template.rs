//! Email templates for commission lifecycle events.
//!
//! Fields are substituted verbatim. User-supplied values are NOT escaped, so a
//! requester can inject markup into the emails the studio receives. Escaping
//! is a hardening change that has not been requested.

use plexdi_types::{Commission, CommissionStatus};

const RECEIVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Lifecycle event that produces an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Receipt confirmation sent to the requester
    CreatedClient,
    /// Full-detail notice sent to the studio administrator
    CreatedAdmin,
    /// Work has started
    InProgress,
    /// Work is finished
    Completed,
}

impl NotificationKind {
    /// Template triggered by moving a commission into `status`, if any
    pub fn for_status(status: &CommissionStatus) -> Option<Self> {
        match status {
            CommissionStatus::InProgress => Some(Self::InProgress),
            CommissionStatus::Completed => Some(Self::Completed),
            CommissionStatus::Queued | CommissionStatus::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedClient => "created_client",
            Self::CreatedAdmin => "created_admin",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// Rendered email content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
}

/// Render the template for `kind` from a commission snapshot
pub fn render(kind: NotificationKind, commission: &Commission) -> RenderedMessage {
    match kind {
        NotificationKind::CreatedClient => created_client(commission),
        NotificationKind::CreatedAdmin => created_admin(commission),
        NotificationKind::InProgress => in_progress(commission),
        NotificationKind::Completed => completed(commission),
    }
}

fn footer(signature: &str) -> String {
    format!(
        r#"<hr style="border: none; border-top: 1px solid #ddd; margin: 25px 0;">
        <p style="text-align: center; font-size: 14px; color: #555;">
            – {signature}<br>
            <a href="https://plexdistudio.com" style="color: #2563eb; text-decoration: none;">plexdistudio.com</a>
        </p>"#
    )
}

fn created_client(c: &Commission) -> RenderedMessage {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 25px; background-color: #f8f9fa; border-radius: 10px;">
        <h2 style="color: #2563eb; text-align: center;">🎨 New Commission Received</h2>
        <p style="font-size: 16px; color: #333;">
            Hey <b>{name}</b>,<br><br>
            We’ve received your commission request for a <b>{kind}</b>.<br>
            Our team will review it and get back to you shortly with details and payment options.
        </p>
        {footer}
    </div>"#,
        name = c.name,
        kind = c.kind,
        footer = footer("The Plexdi Studio Team"),
    );

    RenderedMessage {
        subject: "🎨 New Commission Received".to_string(),
        html,
    }
}

fn created_admin(c: &Commission) -> RenderedMessage {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; background-color: #f4f7fa; padding: 25px; border-radius: 10px; max-width: 600px; margin: auto;">
        <h2 style="color: #2563eb; text-align: center;">🆕 New Commission Request</h2>
        <p style="font-size: 16px; color: #333;">
            A new commission has just been submitted through your Plexdi Studio website.
        </p>
        <table style="width: 100%; border-collapse: collapse; margin-top: 20px;">
            <tr><td style="padding: 8px; font-weight: bold;">👤 Name:</td><td style="padding: 8px;">{name}</td></tr>
            <tr style="background-color: #f0f2f5;"><td style="padding: 8px; font-weight: bold;">📧 Email:</td><td style="padding: 8px;">{email}</td></tr>
            <tr><td style="padding: 8px; font-weight: bold;">💬 Discord:</td><td style="padding: 8px;">{discord}</td></tr>
            <tr style="background-color: #f0f2f5;"><td style="padding: 8px; font-weight: bold;">🎨 Type:</td><td style="padding: 8px;">{kind}</td></tr>
            <tr><td style="padding: 8px; font-weight: bold;">📝 Details:</td><td style="padding: 8px;">{details}</td></tr>
        </table>
        <hr style="border: none; border-top: 1px solid #ddd; margin: 25px 0;">
        <p style="text-align: center; color: #777;">📅 Received on {received_at}</p>
        <p style="text-align: center; font-size: 14px; color: #999;">
            – Plexdi Studio Notification System
        </p>
    </div>"#,
        name = c.name,
        email = c.email,
        discord = c.discord,
        kind = c.kind,
        details = c.details,
        received_at = c.created_at.format(RECEIVED_AT_FORMAT),
    );

    RenderedMessage {
        subject: "🆕 New Commission Notification".to_string(),
        html,
    }
}

fn in_progress(c: &Commission) -> RenderedMessage {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 25px; background-color: #f8f9fa; border-radius: 10px;">
        <h2 style="color: #2563eb; text-align: center;">Plexdi Studio Update</h2>
        <p style="font-size: 16px; color: #333;">
            Hey <b>{name}</b>,<br><br>
            Your <b>{kind}</b> commission is officially in progress!
            I’ve started working on your request and will keep you updated throughout the process.<br><br>
            Typical turnaround time is <b>2–5 days</b> depending on complexity.
        </p>
        <p style="font-size: 15px; margin-top: 16px; color: #444;">
            You’ll receive preview drafts as I work.
            Feel free to request changes — you have <b>4 free revisions</b>.
        </p>
        {footer}
    </div>"#,
        name = c.name,
        kind = c.kind,
        footer = footer("Plexdi Studio"),
    );

    RenderedMessage {
        subject: "🎨 Your Commission Is In Progress".to_string(),
        html,
    }
}

fn completed(c: &Commission) -> RenderedMessage {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 25px; background-color: #f8f9fa; border-radius: 10px;">
        <h2 style="color: #10b981; text-align: center;">✅ Your Commission Is Ready</h2>
        <p style="font-size: 16px; color: #333;">
            Hey <b>{name}</b>,<br><br>
            Your <b>{kind}</b> commission is now <b>complete</b>!
            Before I deliver the final exported files, payment will be required.
        </p>
        <p style="font-size: 15px; margin-top: 16px; color: #444;">
            Don’t worry — you still have <b>4 free revisions</b> available.
            After those, revision fees may apply depending on complexity.
        </p>
        <p style="font-size: 15px; margin-top: 16px; color: #444;">
            Once payment is confirmed, I’ll send the final high-quality files immediately.
        </p>
        {footer}
    </div>"#,
        name = c.name,
        kind = c.kind,
        footer = footer("Plexdi Studio"),
    );

    RenderedMessage {
        subject: "🎉 Your Commission Is Finished!".to_string(),
        html,
    }
}
