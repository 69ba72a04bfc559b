use customers_api::domain::entities::{Customer, Project};
use customers_api::domain::repositories::CustomerRepository;
use customers_api::infrastructure::persistence::{ACME_ID, CONTOSO_ID, InMemoryCustomerRepository};
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn test_list_then_find_returns_same_record() {
    let repo = InMemoryCustomerRepository::seeded();

    for customer in repo.list().await {
        assert_eq!(repo.find_by_id(customer.id).await, Some(customer));
    }
}

#[tokio::test]
async fn test_add_appends_in_order() {
    let repo = InMemoryCustomerRepository::seeded();
    let customer = Customer::register("Fabrikam Incorporated".to_string());

    repo.add(customer.clone()).await;

    let customers = repo.list().await;
    assert_eq!(customers.len(), 3);
    assert_eq!(customers[2], customer);
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let repo = InMemoryCustomerRepository::seeded();
    let contoso = repo.find_by_id(CONTOSO_ID).await.unwrap();

    let project = Project::new(Uuid::new_v4(), "Audit".to_string(), CONTOSO_ID);
    repo.update(contoso.with_changes("Contoso Holdings".to_string(), vec![project.clone()]))
        .await;

    let stored = repo.find_by_id(CONTOSO_ID).await.unwrap();
    assert_eq!(stored.company_name, "Contoso Holdings");
    assert_eq!(stored.projects, vec![project]);
    assert_eq!(repo.list().await[1].id, CONTOSO_ID);
}

#[tokio::test]
async fn test_update_unknown_id_does_not_insert() {
    let repo = InMemoryCustomerRepository::seeded();

    repo.update(Customer::register("Nobody Home Ltd".to_string()))
        .await;

    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn test_delete_existing() {
    let repo = InMemoryCustomerRepository::seeded();

    repo.delete(ACME_ID).await;

    assert_eq!(repo.count().await, 1);
    assert!(repo.find_by_id(ACME_ID).await.is_none());
    assert!(repo.find_by_id(CONTOSO_ID).await.is_some());
}

#[tokio::test]
async fn test_delete_unknown_is_noop() {
    let repo = InMemoryCustomerRepository::seeded();
    let before = repo.list().await;

    repo.delete(Uuid::new_v4()).await;

    assert_eq!(repo.list().await, before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_are_all_kept() {
    let repo = Arc::new(InMemoryCustomerRepository::new());

    let mut handles = Vec::new();
    for i in 0..50 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.add(Customer::register(format!("Concurrent Co {i:02}")))
                .await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let customers = repo.list().await;
    assert_eq!(customers.len(), 50);

    let mut ids: Vec<Uuid> = customers.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}
