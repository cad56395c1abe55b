//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a debug message.
pub fn print_debug(message: &str) {
    println!("{} {}", style("DEBUG").dim(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Bili Downloader                                   ║
║     Download and remux Bilibili video parts           ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the run configuration.
pub fn print_config_summary(video: &str, quality: u32, format: &str, directory: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Video: {}", video);
    println!("  Quality: qn {}", quality);
    println!("  Format: {}", format);
    println!("  Directory: {}", directory);
    println!();
}
