use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use planner_impose::SheetOrder;
use planner_render::{GenerateOptions, calculate_statistics, generate};

#[derive(Parser)]
#[command(name = "plannergen", about = "Printable year planner generator", version)]
struct Cli {
    /// Year to generate
    #[arg(short, long)]
    year: Option<i32>,

    /// Arrange pages for a single-sided printer (print, flip the
    /// stack, print again, then cut)
    #[arg(short, long)]
    reorder: bool,

    /// Directory holding the A5 templates
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Directory under which planner_files_<year> is created
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Load options from a JSON config file (flags override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show statistics only, don't generate anything
    #[arg(long)]
    stats_only: bool,
}

impl Cli {
    /// Fold the flags over the config-file options. Any flag given on
    /// the command line wins over the loaded value.
    async fn into_options(self) -> Result<GenerateOptions> {
        let mut options = match &self.config {
            Some(path) => GenerateOptions::load(path).await?,
            None => GenerateOptions::default(),
        };

        if let Some(year) = self.year {
            options.year = year;
        }
        if self.reorder {
            options.sheet_order = SheetOrder::Reordered;
        }
        if let Some(templates) = self.templates {
            options.template_dir = templates;
        }
        if let Some(out_dir) = self.out_dir {
            options.output_dir = out_dir;
        }
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let stats_only = cli.stats_only;
    let options = cli.into_options().await?;
    options.validate()?;

    let stats = calculate_statistics(options.year, options.sheet_order)?;
    println!("Planner Statistics:");
    println!("  ISO weeks: {}", stats.weeks);
    println!("  Month pages: {}", stats.month_pages);
    println!("  Week pages: {}", stats.week_pages);
    println!("  Blank pages: {}", stats.blank_pages);
    println!("  Total pages: {}", stats.total_pages);
    println!("  A4 sheet sides: {}", stats.sheets);
    println!("  Sheets of paper: {}", stats.sheets_of_paper);

    if stats_only {
        return Ok(());
    }

    let summary = generate(&options).await?;
    println!(
        "Generated {} pages on {} sheets → {}",
        summary.pages_written,
        summary.sheets_written,
        summary.merged_pdf.display()
    );

    Ok(())
}
