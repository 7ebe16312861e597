//! Vtop-Lens main entry point
//!
//! Interactive terminal client: logs in to the portal, then loops over a
//! numbered menu of record views. A failed or unparseable page never ends
//! the session; it just shows up as an empty section.

use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vtop_lens::config::{load_config_with_hash, Credentials};
use vtop_lens::display;
use vtop_lens::extract::{self, FileSpool, Semester};
use vtop_lens::session::{build_portal_client, PortalClient};
use vtop_lens::VtopError;

/// Vtop-Lens: a terminal lens on the VTOP student portal
#[derive(Parser, Debug)]
#[command(name = "vtop-lens")]
#[command(version = "1.0.0")]
#[command(about = "A terminal lens on the VTOP student portal", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let credentials = Credentials::load(Path::new(&config.session.credentials_path))?;
    let spool = FileSpool::new(&config.output.spool_dir);

    println!("[-] Connecting to the portal as {}...", credentials.username);
    let http = build_portal_client(config.portal.timeout_secs)?;
    let mut portal = PortalClient::new(http, &config.portal.base_url, &credentials.username)?;

    if let Err(e) = portal.login(&credentials).await {
        eprintln!("[!] Login failed: {}", e);
        return Ok(());
    }

    // The semester fetch also stabilizes the session token, so it goes first.
    let semesters = match portal.semesters_page().await {
        Ok(markup) => extract::extract_semesters(&markup),
        Err(e) => {
            tracing::warn!("Semester list fetch failed: {}", e);
            Vec::new()
        }
    };
    let mut current_semester: Option<Semester> = semesters.first().cloned();

    let profile = match portal.profile_page().await {
        Ok(markup) => extract::extract_profile(&markup),
        Err(e) => {
            tracing::warn!("Profile fetch failed: {}", e);
            extract::ProfileRecord::default()
        }
    };

    println!("\n{}", "=".repeat(55));
    println!(" SUCCESS  : Logged in as {}", profile.name);
    println!(" REG NO   : {}", credentials.username);
    println!(
        " CURR SEM : {}",
        current_semester
            .as_ref()
            .map(|s| s.display_name.as_str())
            .unwrap_or("None")
    );
    println!("{}", "=".repeat(55));

    loop {
        println!("\nAVAILABLE OPTIONS:");
        println!("  1. View Profile & Proctor Details");
        println!("  2. View Grade History (Transcript)");
        println!("  3. View Attendance Summary");
        println!("  4. View Internal Marks");
        println!("  5. View Exam Schedule");
        println!("  6. Change/Select Semester");
        println!("  0. Exit");

        let choice = prompt(&format!(
            "\n[{}] Enter choice (0-6): ",
            credentials.username
        ))?;

        match choice.as_str() {
            "0" => {
                println!("Logging out... Goodbye!");
                break;
            }
            "1" => {
                display::print_header("STUDENT PROFILE");
                display::render_profile(&profile);
            }
            "2" => {
                display::print_header("ACADEMIC TRANSCRIPT");
                match portal.grade_history_page().await {
                    Ok(markup) => {
                        let history = extract::extract_grade_history(&markup, &spool);
                        display::render_grade_history(&history);
                    }
                    Err(e) => println!("   [!] Fetch failed: {}", e),
                }
            }
            "3" => {
                let Some(semester) = current_semester.clone() else {
                    println!("[!] No semester selected. Please use option 6 first.");
                    continue;
                };
                show_attendance(&mut portal, &semester, &spool).await?;
            }
            "4" => {
                let Some(semester) = current_semester.clone() else {
                    println!("[!] No semester selected. Please use option 6 first.");
                    continue;
                };
                display::print_header(&format!("INTERNAL MARKS - {}", semester.display_name));
                match portal.marks_page(&semester.id).await {
                    Ok(markup) => {
                        display::render_marks(&extract::extract_marks(&markup, &spool));
                    }
                    Err(e) => println!("   [!] Fetch failed: {}", e),
                }
            }
            "5" => {
                let Some(semester) = current_semester.clone() else {
                    println!("[!] No semester selected. Please use option 6 first.");
                    continue;
                };
                display::print_header(&format!("EXAM SCHEDULE - {}", semester.display_name));
                match portal.exam_schedule_page(&semester.id).await {
                    Ok(markup) => {
                        display::render_exam_schedule(&extract::extract_exam_schedule(
                            &markup, &spool,
                        ));
                    }
                    Err(e) => println!("   [!] Fetch failed: {}", e),
                }
            }
            "6" => {
                current_semester = select_semester(&semesters, current_semester)?;
            }
            _ => println!("[!] Invalid selection."),
        }
    }

    Ok(())
}

/// Shows the attendance summary, then offers a per-course drill-down
async fn show_attendance(
    portal: &mut PortalClient,
    semester: &Semester,
    spool: &FileSpool,
) -> anyhow::Result<()> {
    let entries = match portal.attendance_page(&semester.id).await {
        Ok(markup) => extract::extract_attendance_summary(&markup, spool),
        Err(e) => {
            println!("   [!] Fetch failed: {}", e);
            return Ok(());
        }
    };

    display::render_attendance_summary(&entries);
    if entries.is_empty() {
        return Ok(());
    }

    println!("\n   {}", "-".repeat(45));
    let selection = prompt("   Select S.No for detail history (Enter to skip): ")?;
    let Ok(index) = selection.parse::<usize>() else {
        return Ok(());
    };
    let Some(entry) = index.checked_sub(1).and_then(|i| entries.get(i)) else {
        println!("   [!] Invalid selection.");
        return Ok(());
    };

    let Some(drilldown) = &entry.drilldown_ref else {
        println!("   [!] No detail link found for this course.");
        return Ok(());
    };

    println!("   ...Fetching history for {}...", drilldown.course_id);
    match portal
        .attendance_detail_page(&semester.id, &drilldown.course_id, &drilldown.type_code)
        .await
    {
        Ok(markup) => {
            let history = extract::extract_attendance_history(&markup, spool);
            display::render_attendance_history(&entry.course_name, &history);
        }
        Err(e) => println!("   [!] Fetch failed: {}", e),
    }

    Ok(())
}

/// Prompts for a semester from the scraped list
fn select_semester(
    semesters: &[Semester],
    current: Option<Semester>,
) -> anyhow::Result<Option<Semester>> {
    if semesters.is_empty() {
        println!("   [!] No semester data available.");
        return Ok(current);
    }

    display::print_header("SELECT SEMESTER");
    for (i, semester) in semesters.iter().enumerate() {
        println!("   {}. {}", i + 1, semester.display_name);
    }

    let selection = prompt("\nSelect a semester number (0 to cancel): ")?;
    if selection == "0" {
        return Ok(current);
    }

    match selection
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| semesters.get(i))
    {
        Some(semester) => {
            println!("[+] Active semester set to: {}", semester.display_name);
            Ok(Some(semester.clone()))
        }
        None => {
            println!("[!] Invalid selection.");
            Ok(current)
        }
    }
}

/// Prints a prompt and reads one trimmed line from stdin
fn prompt(text: &str) -> Result<String, VtopError> {
    print!("{}", text);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("vtop_lens=info,warn"),
            1 => EnvFilter::new("vtop_lens=debug,info"),
            2 => EnvFilter::new("vtop_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
