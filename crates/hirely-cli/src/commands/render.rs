use colored::Colorize;
use hirely_core::profile::{ProfileField, ProfileOverview, ResumeIndicator};
use hirely_core::stats::UsageStats;
use hirely_core::status::StatusMessage;

pub fn status(status: Option<&StatusMessage>) {
    match status {
        Some(status) if status.is_success() => println!("{} {}", "✓".green(), status.text.green()),
        Some(status) => println!("{} {}", "✗".red(), status.text.red()),
        None => {}
    }
}

/// Notes the usual values when a free-text field gets something else.
pub fn suggestions(field: ProfileField, value: &str) {
    let suggested = field.suggestions();
    if suggested.is_empty() || suggested.contains(&value) {
        return;
    }
    println!(
        "{}",
        format!("Common values for {}: {}", field, suggested.join(", ")).dimmed()
    );
}

pub fn overview(overview: &ProfileOverview, stats: &UsageStats, resume: &ResumeIndicator) {
    let name = if overview.display_name.is_empty() {
        "(no name)"
    } else {
        overview.display_name.as_str()
    };
    println!("{}", name.bold());
    println!("{}", overview.headline.bright_cyan());
    if !overview.facts.is_empty() {
        println!("{}", overview.facts.join(" • ").dimmed());
    }
    if let Some(bio) = &overview.bio {
        println!("\n{}", bio);
    }

    let links = [
        ("LinkedIn", &overview.linkedin_url),
        ("GitHub", &overview.github_url),
        ("Portfolio", &overview.portfolio_url),
    ];
    for (label, url) in links {
        if let Some(url) = url {
            println!("  {:<10} {}", label, url.underline());
        }
    }

    println!();
    println!(
        "Profile completeness: {}%  {}",
        overview.completeness.to_string().bold(),
        overview.completeness_hint.dimmed()
    );
    println!(
        "Views: {}  Applications: {}  Saved jobs: {}",
        stats.profile_views, stats.applications_sent, stats.saved_jobs
    );

    let resume = match resume {
        ResumeIndicator::Uploading => "uploading...".yellow(),
        ResumeIndicator::Uploaded(name) => format!("uploaded ({})", name).green(),
        ResumeIndicator::OnFile => "on file".green(),
        ResumeIndicator::Missing => "not uploaded".yellow(),
    };
    println!("Resume: {}", resume);
}
