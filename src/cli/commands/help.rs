use crate::{
    cli::PortalContext,
    core::{
        KeyValueStore,
        seed::support_channels,
        support::{search_faqs, submit_ticket},
    },
    errors::Result,
};

/// Matching FAQ entries followed by the support channels. Available without
/// logging in.
pub fn help_center<S: KeyValueStore + Clone>(ctx: &PortalContext<S>, query: &str) -> String {
    let matches = search_faqs(&ctx.data.faqs, query);
    let mut lines = Vec::new();
    if matches.is_empty() {
        lines.push(format!("No questions match '{}'.", query.trim()));
    } else {
        for faq in matches {
            lines.push(format!("Q: {} [{}]", faq.question, faq.category));
            lines.push(format!("A: {}", faq.answer));
            lines.push(String::new());
        }
    }

    lines.push("Contact support".to_string());
    for channel in support_channels() {
        lines.push(format!(
            "  {}: {} ({}, response {})",
            channel.title, channel.contact, channel.description, channel.response_time
        ));
    }
    lines.join("\n")
}

/// Opens a support ticket for the current user.
pub async fn ticket<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    subject: &str,
    category: &str,
    message: &str,
) -> Result<String> {
    let user = ctx.session.require_user()?;
    let ticket = submit_ticket(&ctx.store, user, subject, category, message).await?;
    Ok(format!(
        "Ticket {} opened. Our team will get back to you at {}.",
        ticket.id, user.email
    ))
}
