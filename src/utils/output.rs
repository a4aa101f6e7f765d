use colored::Colorize;

/// Usage line shown when the project name is missing
pub const USAGE: &str = "next-scaffold <project_name> [project_id] [--static]";

/// Print the start line with the absolute project location
pub fn print_start(location: &str) {
    println!();
    println!(
        "{} {} {}",
        "[START]".cyan().bold(),
        "Creating your Next.js app in".cyan(),
        location.cyan().bold()
    );
    println!();
}

/// Print a step in progress
pub fn print_waiting(msg: &str) {
    println!("{} {}", "[WAITING]".yellow().bold(), msg.yellow());
}

/// Print a file creation event
pub fn print_file_created(path: &str) {
    println!("  {} {}", "+".green(), path.dimmed());
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("{}", format!("[SUCCESS] {}", msg).green().bold());
}

/// Print the final completion message
pub fn print_end(msg: &str) {
    println!();
    println!("{} {}", "[END]".cyan().bold(), msg.cyan());
    println!();
}

/// Print an informational message
pub fn print_info(msg: &str) {
    println!("  {} {}", "-".dimmed(), msg);
}

/// Print a warning message
pub fn print_warn(msg: &str) {
    println!("  {} {}", "[WARN]".yellow().bold(), msg.yellow());
}

/// Print the usage line
pub fn print_usage(reason: &str) {
    eprintln!("{} {}", "[USAGE]".red().bold(), reason.red());
    eprintln!("  {}", USAGE.red().bold());
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!();
    eprintln!(
        "{} {} {}",
        "[ERROR]".red().bold(),
        "An error occurred:".red(),
        msg.red().bold()
    );
    eprintln!();
}
