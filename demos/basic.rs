//! Example: basic task management
//!
//! Walks through adding, toggling, editing and deleting tasks.
//!
//! Run with: cargo run --example basic

use eyre::Result;
use tasklist::{Category, CategoryFilter, FileSnapshot, Priority, StatusFilter, TaskStore};

fn main() -> Result<()> {
    // Keep the snapshot in a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let snapshot = FileSnapshot::new(temp_dir.path().join("tasks.json"));

    println!("tasklist Basic Example");
    println!("======================\n");

    let mut store = TaskStore::open(snapshot);

    // ADD: create a few tasks
    println!("1. ADD - Creating tasks...");
    for (text, priority, category) in [
        ("Finish quarterly report", Priority::High, Category::Work),
        ("Buy groceries", Priority::Medium, Category::Shopping),
        ("Morning run", Priority::Low, Category::Health),
    ] {
        if let Some(task) = store.add(text, priority, category, None) {
            println!("   - {} ({}, {})", task.text, task.priority, task.category);
        }
    }
    println!();

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();

    // TOGGLE: complete a task
    println!("2. TOGGLE - Completing 'Morning run'...");
    store.toggle(ids[2]);
    let stats = store.stats();
    println!(
        "   Stats: {} total, {} active, {} completed\n",
        stats.total, stats.active, stats.completed
    );

    // EDIT: reword a task
    println!("3. EDIT - Rewording the report task...");
    store.edit(ids[0], "Finish and submit quarterly report");
    if let Some(task) = store.get(ids[0]) {
        println!("   Now reads: {}\n", task.text);
    }

    // A blank edit is silently ignored
    println!("4. EDIT with blank text - ignored...");
    let changed = store.edit(ids[0], "   ");
    println!("   Changed: {changed}\n");

    // DELETE: remove a task
    println!("5. DELETE - Removing 'Buy groceries'...");
    store.remove(ids[1]);
    println!("   Remaining: {}\n", store.len());

    // CLEAR COMPLETED
    println!("6. CLEAR COMPLETED...");
    let removed = store.clear_completed();
    println!("   Removed {removed} task(s)");
    let remaining: Vec<_> = store
        .filter(StatusFilter::All, CategoryFilter::All)
        .map(|t| t.text.as_str())
        .collect();
    println!("   Remaining tasks: {remaining:?}\n");

    println!("Example complete!");
    Ok(())
}
