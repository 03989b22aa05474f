//! Ticket listing service: visibility scoping plus keyset pagination.
//!
//! Pure projection over an in-memory ticket slice: scope by the actor's
//! visibility, order newest-first, and cut one page after an optional cursor.
//! The data source and the query string carrying the cursor belong to the
//! surrounding application.

use shared::pagination::ListingCursor;

use crate::models::{Actor, Ticket};
use crate::services::reporting::filter_visible;

/// One page of a ticket listing, newest first.
#[derive(Debug)]
pub struct TicketPage<'a> {
    pub items: Vec<&'a Ticket>,
    /// Encoded cursor for the next page; `None` when the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// List the tickets the actor may view, resuming after `cursor`.
///
/// Ordering is `(created_at, id)` descending; the id tiebreak keeps pages
/// stable when several tickets share a creation instant.
pub fn page_tickets<'a>(
    tickets: &'a [Ticket],
    actor: &Actor,
    cursor: Option<&ListingCursor>,
    limit: usize,
) -> TicketPage<'a> {
    let mut visible = filter_visible(tickets, actor);
    visible.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

    let mut items: Vec<&Ticket> = visible
        .into_iter()
        .filter(|ticket| {
            cursor.map_or(true, |c| c.follows(ticket.created_at, ticket.id))
        })
        .collect();

    let has_more = items.len() > limit;
    items.truncate(limit);

    let next_cursor = if has_more {
        items
            .last()
            .map(|ticket| ListingCursor::new(ticket.created_at, ticket.id).encode())
    } else {
        None
    };

    TicketPage { items, next_cursor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Criticality, Role};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use fake::{uuid::UUIDv4, Fake};
    use uuid::Uuid;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap()
    }

    fn ticket_created(company_id: Uuid, created_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id: UUIDv4.fake(),
            company_id,
            criticality: Criticality::Padrao,
            created_at,
            response_deadline: Some(created_at + Duration::hours(8)),
            solution_deadline: Some(created_at + Duration::hours(48)),
            first_response_at: None,
            solved_at: None,
        }
    }

    fn admin() -> Actor {
        let mut actor = Actor::new(UUIDv4.fake());
        actor.roles = vec![Role::Admin];
        actor
    }

    #[test]
    fn test_page_is_newest_first() {
        let company: Uuid = UUIDv4.fake();
        let tickets = vec![
            ticket_created(company, t0()),
            ticket_created(company, t0() + Duration::hours(2)),
            ticket_created(company, t0() + Duration::hours(1)),
        ];

        let page = page_tickets(&tickets, &admin(), None, 10);
        assert_eq!(page.items.len(), 3);
        assert!(page.next_cursor.is_none());

        let stamps: Vec<_> = page.items.iter().map(|t| t.created_at).collect();
        assert_eq!(
            stamps,
            vec![
                t0() + Duration::hours(2),
                t0() + Duration::hours(1),
                t0()
            ]
        );
    }

    #[test]
    fn test_cursor_resumes_without_skips_or_duplicates() {
        let company: Uuid = UUIDv4.fake();
        let tickets: Vec<_> = (0..5)
            .map(|h| ticket_created(company, t0() + Duration::hours(h)))
            .collect();

        let first = page_tickets(&tickets, &admin(), None, 2);
        assert_eq!(first.items.len(), 2);
        let cursor = ListingCursor::decode(first.next_cursor.as_deref().unwrap()).unwrap();

        let second = page_tickets(&tickets, &admin(), Some(&cursor), 2);
        assert_eq!(second.items.len(), 2);
        let cursor = ListingCursor::decode(second.next_cursor.as_deref().unwrap()).unwrap();

        let third = page_tickets(&tickets, &admin(), Some(&cursor), 2);
        assert_eq!(third.items.len(), 1);
        assert!(third.next_cursor.is_none());

        let mut seen: Vec<Uuid> = Vec::new();
        for page in [&first, &second, &third] {
            for ticket in &page.items {
                assert!(!seen.contains(&ticket.id));
                seen.push(ticket.id);
            }
        }
        assert_eq!(seen.len(), tickets.len());
    }

    #[test]
    fn test_identical_timestamps_paginate_stably() {
        let company: Uuid = UUIDv4.fake();
        let tickets = vec![
            ticket_created(company, t0()),
            ticket_created(company, t0()),
            ticket_created(company, t0()),
        ];

        let first = page_tickets(&tickets, &admin(), None, 2);
        let cursor = ListingCursor::decode(first.next_cursor.as_deref().unwrap()).unwrap();
        let second = page_tickets(&tickets, &admin(), Some(&cursor), 2);

        assert_eq!(second.items.len(), 1);
        assert!(second.next_cursor.is_none());
        assert!(!first.items.iter().any(|t| t.id == second.items[0].id));
    }

    #[test]
    fn test_full_page_with_nothing_after_has_no_cursor() {
        let company: Uuid = UUIDv4.fake();
        let tickets = vec![
            ticket_created(company, t0()),
            ticket_created(company, t0() + Duration::hours(1)),
        ];

        let page = page_tickets(&tickets, &admin(), None, 2);
        assert_eq!(page.items.len(), 2);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_page_scopes_to_actor_visibility() {
        let company_a: Uuid = UUIDv4.fake();
        let company_b: Uuid = UUIDv4.fake();
        let tickets = vec![
            ticket_created(company_a, t0()),
            ticket_created(company_b, t0() + Duration::hours(1)),
        ];

        let mut attendant = Actor::new(UUIDv4.fake());
        attendant.roles = vec![Role::Support];
        attendant.attendant_company_ids = vec![company_a];

        let page = page_tickets(&tickets, &attendant, None, 10);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].company_id, company_a);
    }

    #[test]
    fn test_plain_user_gets_empty_page() {
        let tickets = vec![ticket_created(UUIDv4.fake(), t0())];
        let user = Actor::new(UUIDv4.fake());

        let page = page_tickets(&tickets, &user, None, 10);
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }
}
