//! Unit tests for `InMemoryMembershipStore` semantics (the same contract the
//! Redis store provides).

use membership_store::{InMemoryMembershipStore, MembershipStore};

/// **Test: an unknown chat has no members and is_member is false, not an error.**
#[tokio::test]
async fn unknown_chat_is_empty() {
    let store = InMemoryMembershipStore::new();

    assert!(!store.is_member(42, "alice").await.unwrap());
    assert!(store.list_members(42).await.unwrap().is_empty());
}

/// **Test: add then is_member/list_members reflect the new member.**
#[tokio::test]
async fn add_member_is_visible() {
    let store = InMemoryMembershipStore::new();

    store.add_member(42, "alice").await.unwrap();

    assert!(store.is_member(42, "alice").await.unwrap());
    assert_eq!(store.list_members(42).await.unwrap(), vec!["alice"]);
}

/// **Test: list_members preserves insertion order.**
#[tokio::test]
async fn members_keep_insertion_order() {
    let store = InMemoryMembershipStore::new();

    store.add_member(42, "alice").await.unwrap();
    store.add_member(42, "bob").await.unwrap();
    store.add_member(42, "carol").await.unwrap();

    assert_eq!(
        store.list_members(42).await.unwrap(),
        vec!["alice", "bob", "carol"]
    );
}

/// **Test: remove_member deletes every occurrence, and removing an absent
/// participant is a no-op.**
#[tokio::test]
async fn remove_member_removes_all_occurrences() {
    let store = InMemoryMembershipStore::new();

    // The store itself does not deduplicate; that contract lives in the
    // handlers. Removal still has to clear both entries.
    store.add_member(42, "alice").await.unwrap();
    store.add_member(42, "bob").await.unwrap();
    store.add_member(42, "alice").await.unwrap();

    store.remove_member(42, "alice").await.unwrap();
    assert_eq!(store.list_members(42).await.unwrap(), vec!["bob"]);

    store.remove_member(42, "nobody").await.unwrap();
    assert_eq!(store.list_members(42).await.unwrap(), vec!["bob"]);
}

/// **Test: removing a middle member and re-adding them moves them to the end.**
#[tokio::test]
async fn readd_moves_member_to_the_end() {
    let store = InMemoryMembershipStore::new();

    store.add_member(42, "alice").await.unwrap();
    store.add_member(42, "bob").await.unwrap();
    store.add_member(42, "carol").await.unwrap();

    store.remove_member(42, "bob").await.unwrap();
    store.add_member(42, "bob").await.unwrap();

    assert_eq!(
        store.list_members(42).await.unwrap(),
        vec!["alice", "carol", "bob"]
    );
}

/// **Test: membership in one chat never leaks into another.**
#[tokio::test]
async fn chats_are_isolated() {
    let store = InMemoryMembershipStore::new();

    store.add_member(100, "alice").await.unwrap();

    assert!(store.is_member(100, "alice").await.unwrap());
    assert!(!store.is_member(200, "alice").await.unwrap());
    assert!(store.list_members(200).await.unwrap().is_empty());
}

/// **Test: a chat whose last member leaves behaves like an empty chat again.**
#[tokio::test]
async fn emptied_chat_reads_as_empty() {
    let store = InMemoryMembershipStore::new();

    store.add_member(42, "alice").await.unwrap();
    store.remove_member(42, "alice").await.unwrap();

    assert!(!store.is_member(42, "alice").await.unwrap());
    assert!(store.list_members(42).await.unwrap().is_empty());
}
