//! Help center: FAQ search and support tickets.

use crate::{
    core::storage::{KeyValueStore, SUPPORT_TICKETS_KEY},
    errors::{Error, Result},
    models::{Faq, SupportTicket, User},
};
use chrono::Utc;
use tracing::info;

/// FAQ entries whose question, answer or category contains `query`,
/// ignoring case. An empty query matches everything.
#[must_use]
pub fn search_faqs<'a>(faqs: &'a [Faq], query: &str) -> Vec<&'a Faq> {
    let needle = query.trim().to_lowercase();
    faqs.iter()
        .filter(|faq| {
            needle.is_empty()
                || [&faq.question, &faq.answer, &faq.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Records a support request from `user`.
pub async fn submit_ticket<S: KeyValueStore>(
    store: &S,
    user: &User,
    subject: &str,
    category: &str,
    message: &str,
) -> Result<SupportTicket> {
    let (subject, message) = (subject.trim(), message.trim());
    if subject.is_empty() {
        return Err(Error::validation("Subject is required"));
    }
    if message.is_empty() {
        return Err(Error::validation("Message is required"));
    }

    let mut tickets: Vec<SupportTicket> = store
        .get_json(SUPPORT_TICKETS_KEY)
        .await?
        .unwrap_or_default();
    let ticket = SupportTicket {
        id: format!("TKT-{:04}", tickets.len() + 1),
        user_id: user.id.clone(),
        subject: subject.to_string(),
        category: category.trim().to_string(),
        message: message.to_string(),
        created_at: Utc::now(),
    };
    tickets.push(ticket.clone());
    store.set_json(SUPPORT_TICKETS_KEY, &tickets).await?;

    info!("Support ticket {} created by {}", ticket.id, user.id);
    Ok(ticket)
}

/// Tickets submitted by one user.
pub async fn tickets_for<S: KeyValueStore>(store: &S, user_id: &str) -> Result<Vec<SupportTicket>> {
    let mut tickets: Vec<SupportTicket> = store
        .get_json(SUPPORT_TICKETS_KEY)
        .await?
        .unwrap_or_default();
    tickets.retain(|t| t.user_id == user_id);
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::seed_faqs;
    use crate::core::storage::MemoryStore;
    use crate::test_utils::sample_user;

    #[test]
    fn test_search_is_case_insensitive() {
        let faqs = seed_faqs();
        let hits = search_faqs(&faqs, "PASSWORD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Account");

        // category matches too
        let hits = search_faqs(&faqs, "reports");
        assert!(hits.iter().any(|f| f.id == "6"));
    }

    #[test]
    fn test_empty_query_returns_all() {
        let faqs = seed_faqs();
        assert_eq!(search_faqs(&faqs, "").len(), faqs.len());
        assert_eq!(search_faqs(&faqs, "   ").len(), faqs.len());
        assert!(search_faqs(&faqs, "quantum teleportation").is_empty());
    }

    #[tokio::test]
    async fn test_submit_ticket() -> Result<()> {
        let store = MemoryStore::new();
        let user = sample_user("2", "john@company.com", 1.0);

        let ticket = submit_ticket(&store, &user, " Payslip ", "Salary", "March is missing").await?;
        assert_eq!(ticket.id, "TKT-0001");
        assert_eq!(ticket.subject, "Payslip");

        let second = submit_ticket(&store, &user, "VPN", "IT", "Cannot connect").await?;
        assert_eq!(second.id, "TKT-0002");
        assert_eq!(tickets_for(&store, "2").await?.len(), 2);
        assert!(tickets_for(&store, "3").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_ticket_requires_subject_and_message() -> Result<()> {
        let store = MemoryStore::new();
        let user = sample_user("2", "john@company.com", 1.0);
        assert!(matches!(
            submit_ticket(&store, &user, "", "IT", "help").await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            submit_ticket(&store, &user, "Help", "IT", " ").await,
            Err(Error::Validation { .. })
        ));
        Ok(())
    }
}
