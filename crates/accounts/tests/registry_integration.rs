use std::sync::Arc;

use roster_accounts::{
    AccountEvent, AccountRecord, AccountRegistry, AccountStore, FileAccountStore, Provider,
    RegistryError, Selection, Token, custom_name_suffix, effective_name,
};
use tempfile::TempDir;

fn record(id: &str, name: &str, provider: Provider) -> AccountRecord {
    AccountRecord::new(id, name, provider, Token::new(format!("secret-{id}")))
}

fn file_registry(temp_dir: &TempDir) -> AccountRegistry<FileAccountStore> {
    let store = FileAccountStore::new(temp_dir.path().join("accounts.json")).unwrap();
    AccountRegistry::new(store)
}

async fn seed(registry: &AccountRegistry<FileAccountStore>, count: usize) {
    let records: Vec<_> = (0..count)
        .map(|i| record(&format!("id-{i}"), &format!("Player{i}"), Provider::Epic))
        .collect();
    registry.store().replace_all(&records).await.unwrap();
}

#[tokio::test]
async fn remove_shrinks_store_by_one() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    seed(&registry, 5).await;

    assert!(registry.remove("id-3").await.unwrap());

    let list = registry.load().await.unwrap();
    assert_eq!(list.len(), 4);
    assert!(!list.contains("id-3"));
}

#[tokio::test]
async fn remove_of_absent_id_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    seed(&registry, 3).await;
    let before = std::fs::read(registry.store().path()).unwrap();

    assert!(!registry.remove("nope").await.unwrap());

    let after = std::fs::read(registry.store().path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn concurrent_removals_are_not_lost() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    seed(&registry, 4).await;

    let (first, second) = tokio::join!(registry.remove("id-1"), registry.remove("id-2"));
    assert!(first.unwrap());
    assert!(second.unwrap());

    let list = registry.load().await.unwrap();
    let ids: Vec<_> = list.ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["id-0", "id-3"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_concurrent_mutations_on_shared_registry() {
    let temp_dir = TempDir::new().unwrap();
    let registry = Arc::new(file_registry(&temp_dir));
    seed(&registry, 20).await;

    let mut tasks = Vec::new();
    for i in (0..20).step_by(2) {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            registry.remove(&format!("id-{i}")).await
        }));
    }
    for i in 20..25 {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            registry
                .add(record(&format!("id-{i}"), &format!("Player{i}"), Provider::Psn))
                .await
                .map(|_| true)
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap().unwrap());
    }

    let list = registry.load().await.unwrap();
    assert_eq!(list.len(), 15);
    assert!((0..20).step_by(2).all(|i| !list.contains(&format!("id-{i}"))));
    assert!((20..25).all(|i| list.contains(&format!("id-{i}"))));
}

#[tokio::test]
async fn load_orders_by_effective_name() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    registry
        .store()
        .replace_all(&[
            record("a", "Player10", Provider::Epic),
            record("b", "Player2", Provider::Xbl),
            record("c", "Zulu", Provider::Psn).with_custom_display_name("Player1"),
            record("d", "Player3", Provider::Epic).with_custom_display_name("  "),
        ])
        .await
        .unwrap();

    let list = registry.load().await.unwrap();
    let names: Vec<_> = list.iter().map(|a| effective_name(a)).collect();
    assert_eq!(names, vec!["Player1", "Player2", "Player3", "Player10"]);

    let c = list.get("c").unwrap();
    assert_eq!(custom_name_suffix(c), " (Player1)");
    assert_eq!(custom_name_suffix(list.get("d").unwrap()), "");
}

#[tokio::test]
async fn loaded_accounts_never_carry_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    seed(&registry, 3).await;
    let mut events = registry.subscribe();

    let list = registry.load().await.unwrap();
    let rendered = serde_json::to_string(&list).unwrap();
    assert!(!rendered.contains("secret-"));
    assert!(!rendered.contains("provider"));
    assert!(!format!("{:?}", list).contains("secret-"));

    let AccountEvent::Loaded(event_list) = events.recv().await.unwrap();
    assert_eq!(event_list, list);
}

#[tokio::test]
async fn corrupt_file_is_not_overwritten_by_mutations() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    std::fs::write(registry.store().path(), "[[[").unwrap();

    assert!(registry.load().await.is_err());
    assert!(registry.load_or_empty().await.is_empty());

    let err = registry
        .add(record("x", "New", Provider::Epic))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Store(_)));
    assert_eq!(
        std::fs::read_to_string(registry.store().path()).unwrap(),
        "[[["
    );
}

#[tokio::test]
async fn tags_drive_group_selection() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    seed(&registry, 4).await;

    registry.set_tags("id-1", ["farm"]).await.unwrap();
    registry.set_tags("id-3", ["farm", "alt"]).await.unwrap();

    let list = registry.load().await.unwrap();
    let selection = Selection::new().with_tag("farm").with_account("id-0");
    let selected: Vec<_> = list
        .select(&selection)
        .into_iter()
        .map(|a| a.account_id.as_str())
        .collect();
    assert_eq!(selected, vec!["id-0", "id-1", "id-3"]);
}

#[tokio::test]
async fn mutations_keep_fields_of_other_accounts() {
    let temp_dir = TempDir::new().unwrap();
    let registry = file_registry(&temp_dir);
    std::fs::write(
        registry.store().path(),
        r#"{
  "accounts": [
    { "accountId": "a", "displayName": "Alpha", "provider": "epic", "token": "t-a", "deviceId": "dev-a", "secret": "sec-a" },
    { "accountId": "b", "displayName": "Bravo", "provider": "epic", "token": "t-b", "deviceId": "dev-b", "secret": "sec-b" }
  ]
}"#,
    )
    .unwrap();

    assert!(registry.remove("b").await.unwrap());
    registry.set_tags("a", ["main"]).await.unwrap();

    let raw = std::fs::read_to_string(registry.store().path()).unwrap();
    assert!(raw.contains("dev-a"));
    assert!(raw.contains("sec-a"));
    assert!(!raw.contains("dev-b"));

    let json = serde_json::to_string(&registry.load().await.unwrap()).unwrap();
    assert!(!json.contains("dev-a"));
    assert!(!json.contains("sec-a"));
}
