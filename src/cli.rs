use simstore::VectorStore;
use std::io::{self, Write};

pub enum Command {
    Insert { key: String, values: Vec<f32> },
    Search { values: Vec<f32>, top_k: usize },
    Count,
    Clear,
}

/// Parse a command from a provided argument vector
pub fn parse_command_from_args(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("No command provided. Use: insert, search, count, clear".to_string());
    }

    let command = &args[1];

    match command.as_str() {
        "insert" => parse_insert(args),
        "search" => parse_search(args),
        "count" => parse_count(args),
        "clear" => parse_clear(args),
        _ => Err(format!(
            "Unknown command: {}. Available: insert, search, count, clear",
            command
        )),
    }
}

/// Parse the 'insert' command
/// Usage: insert <key> <v1> <v2> ...
fn parse_insert(args: &[String]) -> Result<Command, String> {
    // args[0] = program name
    // args[1] = "insert"
    // args[2] = key (required)
    // args[3..] = vector components (required, at least 1)
    if args.len() < 4 {
        return Err(
            "'insert' command requires a key and a vector. Usage: insert <key> <v1> <v2> ..."
                .to_string(),
        );
    }

    let key = args[2].clone();
    let values: Result<Vec<f32>, _> = args[3..].iter().map(|s| s.parse::<f32>()).collect();

    match values {
        Ok(v) => Ok(Command::Insert { key, values: v }),
        Err(_) => Err("Failed to parse vector components as numbers".to_string()),
    }
}

/// Parse the 'search' command
/// Usage: search <v1> <v2> ... [--top_k <number>]
fn parse_search(args: &[String]) -> Result<Command, String> {
    if args.len() < 3 {
        return Err(
            "'search' command requires at least one vector component. Usage: search <v1> <v2> ... [--top_k <number>]"
                .to_string(),
        );
    }

    let mut top_k = 5; // default value
    let mut vector_end = args.len();

    // Check if last two args are --top_k and a number
    if args.len() >= 4 && args[args.len() - 2] == "--top_k" {
        match args[args.len() - 1].parse::<usize>() {
            Ok(k) => {
                top_k = k;
                vector_end = args.len() - 2; // Exclude --top_k and the number
            }
            Err(_) => {
                return Err(format!(
                    "Invalid --top_k value: '{}'. Must be a positive integer.",
                    args[args.len() - 1]
                ));
            }
        }
    }

    let values: Result<Vec<f32>, _> = args[2..vector_end]
        .iter()
        .map(|s| s.parse::<f32>())
        .collect();

    match values {
        Ok(v) => {
            if v.is_empty() {
                return Err("Search vector cannot be empty".to_string());
            }
            Ok(Command::Search { values: v, top_k })
        }
        Err(_) => Err("Failed to parse vector components as numbers".to_string()),
    }
}

/// Parse the 'count' command
/// Usage: count
fn parse_count(args: &[String]) -> Result<Command, String> {
    if args.len() > 2 {
        eprintln!("Warning: 'count' command takes no arguments, ignoring extras");
    }

    Ok(Command::Count)
}

/// Parse the 'clear' command
/// Usage: clear
fn parse_clear(args: &[String]) -> Result<Command, String> {
    if args.len() > 2 {
        eprintln!("Warning: 'clear' command takes no arguments, ignoring extras");
    }

    Ok(Command::Clear)
}

/// REPL mode - interactive session against an in-memory store
pub fn run_repl(store: &VectorStore) {
    println!("simstore - Vector Similarity Store");
    println!(
        "Dimension: {}, metric: {}",
        store.dimension(),
        store.metric()
    );
    println!("Type 'help' for commands, 'exit' or 'quit' to quit\n");

    loop {
        print!("simstore> ");
        if let Err(error) = io::stdout().flush() {
            eprintln!("Error flushing output: {}", error);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input == "exit" || input == "quit" {
            println!("Goodbye!");
            break;
        }

        if input == "help" {
            print_help();
            continue;
        }

        let mut args: Vec<String> = vec!["simstore".to_string()];
        args.extend(input.split_whitespace().map(|s| s.to_string()));

        let command = match parse_command_from_args(&args) {
            Ok(cmd) => cmd,
            Err(error) => {
                eprintln!("Error: {}", error);
                continue;
            }
        };

        execute_command(store, command);
    }
}

fn execute_command(store: &VectorStore, command: Command) {
    match command {
        Command::Insert { key, values } => match store.insert(key.clone(), values) {
            Ok(()) => println!("Stored vector under key '{}'", key),
            Err(error) => eprintln!("Error: {}", error),
        },

        Command::Search { values, top_k } => match store.search(&values, top_k) {
            Ok(hits) => {
                if hits.is_empty() {
                    println!("No results found");
                } else {
                    println!("Top {} results:", hits.len());
                    for (rank, hit) in hits.iter().enumerate() {
                        println!("{}. Key: {}, Score: {:.4}", rank + 1, hit.key, hit.score);
                    }
                }
            }
            Err(error) => eprintln!("Error: {}", error),
        },

        Command::Count => println!("{}", store.size()),

        Command::Clear => {
            store.remove_all();
            println!("Store cleared");
        }
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  insert <key> <v1> <v2> ...       - Store a vector under a key");
    println!("  search <v1> <v2> ... [--top_k N] - Search for similar vectors (default k=5)");
    println!("  count                            - Show vector count");
    println!("  clear                            - Remove all vectors");
    println!("  help                             - Show this help");
    println!("  exit, quit                       - Exit the program");
}
