//! Example: filtering the task list
//!
//! Demonstrates the status and category filters and how they combine.
//!
//! Run with: cargo run --example filtering

use chrono::NaiveDate;
use eyre::Result;
use tasklist::{Category, CategoryFilter, FileSnapshot, Priority, StatusFilter, TaskStore};

fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let snapshot = FileSnapshot::new(temp_dir.path().join("tasks.json"));

    println!("tasklist Filtering Example");
    println!("==========================\n");

    let mut store = TaskStore::open(snapshot);

    println!("Creating sample tasks...\n");
    let due = NaiveDate::from_ymd_opt(2026, 9, 15);
    for (text, priority, category, due) in [
        ("Prepare slides", Priority::High, Category::Work, due),
        ("Review pull requests", Priority::Medium, Category::Work, None),
        ("Buy milk", Priority::Low, Category::Shopping, None),
        ("Dentist appointment", Priority::High, Category::Health, due),
        ("Plan weekend trip", Priority::Low, Category::Personal, None),
    ] {
        if let Some(task) = store.add(text, priority, category, due) {
            println!(
                "  Created: {} (priority={}, category={})",
                task.text, task.priority, task.category
            );
        }
    }
    println!();

    // Complete a couple of tasks
    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    store.toggle(ids[1]);
    store.toggle(ids[2]);

    // Filter 1: by status
    println!("1. Active tasks (any category):");
    for task in store.filter(StatusFilter::Active, CategoryFilter::All) {
        println!("   - {}", task.text);
    }
    println!();

    // Filter 2: by category
    println!("2. Work tasks (any status):");
    for task in store.filter(StatusFilter::All, CategoryFilter::Only(Category::Work)) {
        let mark = if task.completed { "x" } else { " " };
        println!("   - [{mark}] {}", task.text);
    }
    println!();

    // Filter 3: both constraints combine with AND
    println!("3. Active work tasks:");
    for task in store.filter(StatusFilter::Active, CategoryFilter::Only(Category::Work)) {
        println!("   - {}", task.text);
    }
    println!();

    // Filter 4: completed only
    println!("4. Completed tasks:");
    for task in store.filter(StatusFilter::Completed, CategoryFilter::All) {
        println!("   - {}", task.text);
    }
    println!();

    let stats = store.stats();
    println!(
        "Stats: {} total, {} active, {} completed",
        stats.total, stats.active, stats.completed
    );

    println!("\nExample complete!");
    Ok(())
}
