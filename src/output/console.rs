//! Console output utilities.
//!
//! Status lines go to stderr; stdout only carries media URLs in list mode.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Feed Grabber                                      ║
║     Profile feed image and video archiver             ║
╚═══════════════════════════════════════════════════════╝
"#;
    eprintln!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(profile: &str, run_mode: &str, download_dir: &str) {
    eprintln!();
    eprintln!("{}", style("Configuration:").bold());
    eprintln!("  Profile:   {}", profile);
    eprintln!("  Mode:      {}", run_mode);
    eprintln!("  Directory: {}", download_dir);
    eprintln!();
}
