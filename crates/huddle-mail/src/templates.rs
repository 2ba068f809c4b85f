//! Rendered email bodies.
//!
//! Templates take display strings, not domain types, so rendering stays
//! independent of the calling crate. Role values arrive as their storage
//! tokens (`ADMIN`, `EDITOR`, `VIEWER`) and are prettified here.

use crate::outbound_email::OutboundEmail;

/// Render the project invitation email in both text and HTML forms
pub fn invitation_email(
    to: &str,
    project_name: &str,
    role: &str,
    invited_by: &str,
    accept_url: &str,
) -> OutboundEmail {
    let subject = format!("You've been invited to join {project_name} on Huddle");
    let text_body = render_invitation_text(project_name, role, invited_by, accept_url);
    let html_body = render_invitation_html(project_name, role, invited_by, accept_url);

    OutboundEmail::new(to.to_string(), subject, text_body, html_body)
}

fn render_invitation_text(
    project_name: &str,
    role: &str,
    invited_by: &str,
    accept_url: &str,
) -> String {
    format!(
        r#"Project invitation

{invited_by} has invited you to join {project_name} on Huddle.

Project: {project_name}
Role: {role}
Invited by: {invited_by}

To accept this invitation, visit:
{accept_url}

If you didn't expect this invitation, you can safely ignore this email."#,
        project_name = project_name,
        role = display_role(role),
        invited_by = invited_by,
        accept_url = accept_url,
    )
}

fn render_invitation_html(
    project_name: &str,
    role: &str,
    invited_by: &str,
    accept_url: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Project invitation</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f4f5f7;
        }}
        .container {{
            max-width: 540px;
            margin: 0 auto;
            padding: 40px 20px;
        }}
        .card {{
            background-color: #ffffff;
            border-radius: 8px;
            border: 1px solid #e4e6ea;
            overflow: hidden;
        }}
        .header {{
            background-color: #4c5fd5;
            color: #ffffff;
            padding: 28px 24px;
            text-align: center;
        }}
        .header h1 {{
            margin: 0;
            font-size: 22px;
            font-weight: 600;
        }}
        .content {{
            padding: 28px 24px;
        }}
        .content p {{
            margin: 0 0 16px;
            color: #33384d;
            line-height: 1.6;
        }}
        .details {{
            background-color: #f4f5f7;
            border-radius: 6px;
            padding: 12px 16px;
            margin: 20px 0;
        }}
        .details td {{
            padding: 6px 0;
            font-size: 14px;
        }}
        .details .label {{
            color: #6b7083;
            padding-right: 24px;
        }}
        .button-row {{
            text-align: center;
            margin: 28px 0 8px;
        }}
        .button {{
            display: inline-block;
            background-color: #4c5fd5;
            color: #ffffff !important;
            text-decoration: none;
            padding: 12px 28px;
            border-radius: 6px;
            font-weight: 500;
        }}
        .note {{
            color: #6b7083;
            font-size: 13px;
            text-align: center;
            margin-top: 20px;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="card">
            <div class="header">
                <h1>Project invitation</h1>
            </div>
            <div class="content">
                <p><strong>{invited_by}</strong> has invited you to join <strong>{project_name}</strong> on Huddle.</p>
                <table class="details">
                    <tr><td class="label">Project</td><td>{project_name}</td></tr>
                    <tr><td class="label">Role</td><td>{role}</td></tr>
                    <tr><td class="label">Invited by</td><td>{invited_by}</td></tr>
                </table>
                <div class="button-row">
                    <a href="{accept_url}" class="button">Accept invitation</a>
                </div>
                <p class="note">If you didn't expect this invitation, you can safely ignore this email.</p>
            </div>
        </div>
    </div>
</body>
</html>"#,
        project_name = html_escape(project_name),
        role = html_escape(&display_role(role)),
        invited_by = html_escape(invited_by),
        accept_url = accept_url,
    )
}

/// Turn a storage token like `ADMIN` into `Admin` for display
fn display_role(role: &str) -> String {
    let lowered = role.to_ascii_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
