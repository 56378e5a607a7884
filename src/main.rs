use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::PathBuf;
use tasklist::{
    Category, CategoryFilter, Config, FileSnapshot, Priority, Stats, StatusFilter, Task, TaskId,
    TaskStore,
};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Task-list manager with priorities, categories and due dates")]
#[command(version)]
struct Cli {
    /// Path to the snapshot file (default: config value, else the user data dir)
    #[arg(long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text
        text: String,

        /// Priority: low, medium or high
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Category: work, personal, shopping or health
        #[arg(short, long)]
        category: Option<Category>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,
    },

    /// List tasks, optionally filtered
    List {
        /// Status filter: all, active or completed
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Category filter: all or a category name
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },

    /// Flip a task between active and completed
    Toggle {
        /// Task id
        id: TaskId,
    },

    /// Replace a task's text
    Edit {
        /// Task id
        id: TaskId,

        /// New task text
        text: String,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: TaskId,
    },

    /// Delete every completed task
    ClearCompleted,

    /// Show task counts
    Stats,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let data_file = match cli.data_file {
        Some(path) => path,
        None => config.data_file()?,
    };
    let mut store = TaskStore::open(FileSnapshot::new(data_file));

    match cli.command {
        Commands::Add {
            text,
            priority,
            category,
            due,
        } => {
            let priority = priority.unwrap_or_else(|| config.default_priority());
            let category = category.unwrap_or_else(|| config.default_category());
            match store.add(&text, priority, category, due) {
                Some(task) => println!("Added {}", render_task(task)),
                None => println!("Nothing to add: task text is empty"),
            }
        }

        Commands::List { status, category } => {
            let tasks: Vec<&Task> = store.filter(status, category).collect();
            if tasks.is_empty() {
                println!("No tasks found");
            } else {
                for task in tasks {
                    println!("{}", render_task(task));
                }
            }
            println!("{}", render_stats(&store.stats()));
        }

        Commands::Toggle { id } => {
            if store.toggle(id) {
                if let Some(task) = store.get(id) {
                    let state = if task.completed { "completed" } else { "active" };
                    println!("Task is now {state}: {}", task.text);
                }
            } else {
                println!("No task with id {id}");
            }
        }

        Commands::Edit { id, text } => {
            if store.edit(id, &text) {
                println!("Updated: {text}");
            } else {
                println!("Nothing updated: unknown id or empty text");
            }
        }

        Commands::Rm { id } => {
            if store.remove(id) {
                println!("Removed task {id}");
            } else {
                println!("No task with id {id}");
            }
        }

        Commands::ClearCompleted => {
            let removed = store.clear_completed();
            println!("Cleared {removed} completed task(s)");
        }

        Commands::Stats => {
            println!("{}", render_stats(&store.stats()));
        }
    }

    Ok(())
}

fn render_task(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };

    let text = if task.completed {
        task.text.strikethrough().dimmed()
    } else {
        task.text.normal()
    };

    let priority = match task.priority {
        Priority::High => task.priority.as_str().red(),
        Priority::Medium => task.priority.as_str().yellow(),
        Priority::Low => task.priority.as_str().green(),
    };

    let mut line = format!(
        "[{mark}] {text}  {priority} {category}",
        category = task.category.as_str().blue()
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!("  due {due}"));
    }
    line.push_str(&format!("  {}", task.id.to_string().dimmed()));
    line
}

fn render_stats(stats: &Stats) -> String {
    format!(
        "{} total, {} active, {} completed",
        stats.total.to_string().bold(),
        stats.active.to_string().blue(),
        stats.completed.to_string().green()
    )
}
