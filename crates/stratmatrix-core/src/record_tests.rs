//! Tests for records and record sets.

use crate::{MatrixError, Quadrant, Rating, Record, RecordSet};

fn chatbot() -> Record {
    Record::new("AI Chatbot", Rating::High, Rating::High, Rating::Medium)
}

fn maintenance() -> Record {
    Record::new(
        "Predictive Maintenance",
        Rating::Medium,
        Rating::Low,
        Rating::High,
    )
}

#[test]
fn test_record_quadrant() {
    assert_eq!(chatbot().quadrant(), Quadrant::Priority);
    assert_eq!(maintenance().quadrant(), Quadrant::Backlog);
}

#[test]
fn test_insertion_order_preserved() {
    let mut set = RecordSet::new();
    set.push(maintenance());
    set.push(chatbot());

    let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Predictive Maintenance", "AI Chatbot"]);
    assert_eq!(set.quadrants(), vec![Quadrant::Backlog, Quadrant::Priority]);
}

#[test]
fn test_add_rejects_blank_name() {
    let mut set = RecordSet::new();
    assert_eq!(
        set.add("   ", Rating::Low, Rating::Low, Rating::Low),
        Err(MatrixError::EmptyName)
    );
    assert!(set.is_empty());

    assert_eq!(set.add("OCR", Rating::Low, Rating::Low, Rating::Low), Ok(0));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_duplicate_names_allowed() {
    let mut set = RecordSet::new();
    set.push(chatbot());
    set.push(chatbot());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_rename() {
    let mut set: RecordSet = vec![chatbot()].into();
    set.rename(0, "Support Bot").unwrap();
    assert_eq!(set.get(0).unwrap().name, "Support Bot");
    assert_eq!(set.get(0).unwrap().actionability, Rating::High);

    assert_eq!(set.rename(0, ""), Err(MatrixError::EmptyName));
    assert_eq!(
        set.rename(3, "Nope"),
        Err(MatrixError::RowOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn test_remove_shifts_rows() {
    let mut set: RecordSet = vec![chatbot(), maintenance()].into_iter().collect();
    let removed = set.remove(0).unwrap();
    assert_eq!(removed.name, "AI Chatbot");
    assert_eq!(set.get(0).unwrap().name, "Predictive Maintenance");
    assert!(set.remove(1).is_err());
}

#[test]
fn test_clear() {
    let mut set: RecordSet = vec![chatbot(), maintenance()].into();
    set.clear();
    assert!(set.is_empty());
}
