//! Repository Integration Tests
//!
//! Tests for MemoryRepository over real domain entities.

#[cfg(test)]
mod tests {
    use crate::domain::{Client, ClientStatus, DomainError, Invoice, InvoiceStatus, Testimonial};
    use crate::repository::{MemoryRepository, Repository, SearchableRepository};

    fn setup_clients() -> MemoryRepository<Client> {
        let mut repo = MemoryRepository::new();
        repo.create(Client::new("TechCorp Solutions", "John Smith", "john@techcorp.com")).unwrap();
        repo.create(Client::new("Green Energy Ltd", "Sarah Johnson", "sarah@greenenergy.com")).unwrap();
        repo.create(Client::new("Fashion Forward", "Emma Wilson", "emma@fashionforward.com")).unwrap();
        repo
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let repo = setup_clients();
        let ids: Vec<u64> = repo.iter().map(|c| c.id).collect();
        assert!(ids.iter().all(|id| *id > 0));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_create_with_taken_id_conflicts() {
        let mut repo = setup_clients();
        let existing = repo.list()[0].clone();
        let err = repo.create(existing).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let repo = setup_clients();
        let id = repo.list()[1].id;
        let found = repo.find_by_id(id).expect("client should exist");
        assert_eq!(found.company_name, "Green Energy Ltd");
        assert!(repo.find_by_id(42).is_none());
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut repo = setup_clients();
        let mut client = repo.list()[0].clone();
        client.status = ClientStatus::OnHold;
        client.notes = "Waiting on contract".to_string();

        repo.update(client.clone()).expect("update failed");
        assert_eq!(repo.find_by_id(client.id), Some(&client));
        assert_eq!(repo.list()[0].id, client.id);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut repo = setup_clients();
        let mut ghost = Client::new("Ghost", "Nobody", "ghost@example.com");
        ghost.id = 7;
        assert!(matches!(repo.update(ghost), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_delete_keeps_order_of_the_rest() {
        let mut repo = setup_clients();
        let id = repo.list()[1].id;
        let removed = repo.delete(id).expect("delete failed");
        assert_eq!(removed.company_name, "Green Energy Ltd");

        let names: Vec<&str> = repo.iter().map(|c| c.company_name.as_str()).collect();
        assert_eq!(names, vec!["TechCorp Solutions", "Fashion Forward"]);
        assert!(matches!(repo.delete(id), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let repo = setup_clients();
        let hits = repo.search("SARAH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contact_person, "Sarah Johnson");
        assert_eq!(repo.search("  ").len(), 3);
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut repo = MemoryRepository::new();
        repo.create(Testimonial { client_name: "Sarah".into(), ..Default::default() }).unwrap();
        repo.prepend(Testimonial { client_name: "Michael".into(), ..Default::default() }).unwrap();
        assert_eq!(repo.list()[0].client_name, "Michael");
    }

    #[test]
    fn test_seeded_ids_are_never_reused() {
        let seeded = vec![
            Invoice { id: 5, invoice_number: "INV-2024-001".into(), ..Default::default() },
            Invoice { id: 9, invoice_number: "INV-2024-002".into(), ..Default::default() },
        ];
        let mut repo = MemoryRepository::from_records(seeded);
        let created = repo.create(Invoice::default()).unwrap();
        assert!(created.id > 9);
    }

    #[test]
    fn test_bulk_helpers() {
        let mut repo = MemoryRepository::from_records(vec![
            Invoice { id: 1, amount: 100.0, ..Default::default() },
            Invoice { id: 2, amount: 200.0, ..Default::default() },
            Invoice { id: 3, amount: 300.0, status: InvoiceStatus::Paid, ..Default::default() },
        ]);
        let changed = repo.update_where(|inv| inv.status == InvoiceStatus::Pending, |inv| inv.mark_paid());
        assert_eq!(changed, 2);
        assert!(repo.iter().all(|inv| inv.status == InvoiceStatus::Paid));

        assert_eq!(repo.delete_many(&[1, 3, 99]), 2);
        assert_eq!(repo.len(), 1);
    }
}
