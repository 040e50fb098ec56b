//! The `quizdesk init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizdesk.toml
    if std::path::Path::new("quizdesk.toml").exists() {
        println!("quizdesk.toml already exists, skipping.");
    } else {
        std::fs::write("quizdesk.toml", SAMPLE_CONFIG)?;
        println!("Created quizdesk.toml");
    }

    // Create example question bank
    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizdesk validate --bank banks/example.toml");
    println!("  2. Run: quizdesk import --bank banks/example.toml");
    println!("  3. Run: quizdesk quiz auto Practice --count 3");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdesk configuration

state_file = "quizdesk.json"
export_dir = "exports"
default_question_type = "all"
default_export_format = "html"
"#;

const EXAMPLE_BANK: &str = r#"[bank]
name = "Example Bank"
description = "A few questions to get started"

[[questions]]
prompt = "What is the time complexity of binary search?"
answer = "O(log n)"

[[questions]]
prompt = "Which data structure uses FIFO ordering?"
answer = "B"
type = "mcq"
options = ["Stack", "Queue", "Heap", "Tree"]

[[questions]]
prompt = "Name one advantage of version control."
answer = "History of every change"

[[questions]]
prompt = "Which year did Singapore gain independence?"
answer = "1965"
type = "mcq"
options = ["1945", "1965", "1942", "1943"]

[[students]]
name = "Alice Tan"

[[students]]
name = "Bob Lim"
"#;
