//! resume-layout CLI - resume layout and export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resume_layout::render::{self, ExportOptions};
use resume_layout::{
    export_filename, export_filenames, load_file, ExporterRegistry, JsonFormat, LayoutEngine,
    PageConfig, ResumeLayout,
};

#[derive(Parser)]
#[command(name = "resume-layout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Lay out resumes as PDF, JSON, text, and HTML", long_about = None)]
struct Cli {
    /// Input resume JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    page: PageArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Page geometry flags shared by every command.
#[derive(Args, Clone)]
struct PageArgs {
    /// Paper preset
    #[arg(long, value_enum, env = "RESUME_LAYOUT_PAPER", default_value = "a4", global = true)]
    paper: Paper,

    /// Margin in the paper's unit (mm for A4, pt for Letter)
    #[arg(long, env = "RESUME_LAYOUT_MARGIN", global = true)]
    margin: Option<f32>,

    /// Keep section headings with their first line
    #[arg(long, global = true)]
    keep_headings: bool,
}

impl PageArgs {
    fn config(&self) -> PageConfig {
        let mut config = match self.paper {
            Paper::A4 => PageConfig::a4(),
            Paper::Letter => PageConfig::letter(),
        };
        if let Some(margin) = self.margin {
            config = config.with_page_margin(margin);
        }
        config.with_keep_heading_with_next(self.keep_headings)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Paper {
    /// A4, millimetres
    A4,
    /// US Letter, points
    Letter,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a resume; the format follows the output extension
    Export {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (<Full_Name>.pdf if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Store PDF content streams uncompressed
        #[arg(long)]
        no_compress: bool,
    },

    /// Write the laid-out pages as JSON
    Layout {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render an HTML preview
    Preview {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write the laid-out pages as plain text
    Text {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show layout statistics
    Info {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Export many resumes to PDF
    Batch {
        /// Input resume JSON files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.page.config();

    let result = match cli.command {
        Some(Commands::Export {
            input,
            output,
            compact,
            no_compress,
        }) => cmd_export(&input, output.as_deref(), &config, compact, no_compress),
        Some(Commands::Layout {
            input,
            output,
            compact,
        }) => cmd_layout(&input, output.as_deref(), &config, compact),
        Some(Commands::Preview { input, output }) => {
            cmd_preview(&input, output.as_deref(), &config)
        }
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), &config),
        Some(Commands::Info { input }) => cmd_info(&input, &config),
        Some(Commands::Batch { inputs, output }) => cmd_batch(&inputs, output.as_deref(), &config),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: export if input is provided
            if let Some(input) = cli.input {
                cmd_export(&input, cli.output.as_deref(), &config, false, false)
            } else {
                println!("{}", "Usage: resume-layout <FILE> [OUTPUT]".yellow());
                println!("       resume-layout --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    config: &PageConfig,
    compact: bool,
    no_compress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(export_filename(&doc, "pdf")));

    let options = ExportOptions::new()
        .with_compression(!no_compress)
        .with_json_format(json_format(compact))
        .created_now();

    let registry = ExporterRegistry::with_defaults();
    registry.export_to_path(&doc, config, &options, &path)?;

    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    config: &PageConfig,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let pages = resume_layout::layout::render(&doc, config)?;
    let json = render::to_json(&pages, json_format(compact))?;
    write_or_print(output, &json)
}

fn cmd_preview(
    input: &Path,
    output: Option<&Path>,
    config: &PageConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let doc = load_file(input)?;
    let html = render::to_html(&doc, &ExportOptions::default())?;
    write_or_print(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    config: &PageConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = ResumeLayout::new()
        .with_config(config.clone())
        .layout_file(input)?
        .to_text()?;
    write_or_print(output, &text)
}

fn cmd_info(input: &Path, config: &PageConfig) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let result = resume_layout::layout::render_with_stats(&doc, config)?;
    let stats = &result.stats;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), doc.display_name());
    println!(
        "{}: {} x {} {:?}",
        "Page size".bold(),
        config.page_width(),
        config.page_height(),
        config.unit
    );
    println!("{}: {}", "Experience".bold(), doc.experience.len());
    println!("{}: {}", "Education".bold(), doc.education.len());
    println!("{}: {}", "Projects".bold(), doc.projects.len());
    println!("{}: {}", "Certifications".bold(), doc.certifications.len());

    println!();
    println!("{}", "Layout Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Entries".bold(), stats.entries_rendered);
    println!("{}: {}", "Skipped entries".bold(), stats.entries_skipped);
    println!("{}: {}", "Page breaks".bold(), stats.page_breaks);

    if let Some(last) = result.pages.last() {
        println!(
            "{}: {:.1} / {}",
            "Last page fill".bold(),
            last.content_height,
            config.usable_height
        );
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    config: &PageConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;
    log::info!(
        "exporting {} resume(s) to {}",
        inputs.len(),
        output_dir.display()
    );

    let docs = inputs
        .iter()
        .map(load_file)
        .collect::<Result<Vec<_>, _>>()?;

    let pb = ProgressBar::new(docs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Laying out...");
    let engine = LayoutEngine::new(config.clone())?;
    let laid_out = engine.render_batch(&docs);

    let filenames = export_filenames(&docs, "pdf");

    let mut written = Vec::with_capacity(docs.len());
    for ((doc, pages), filename) in docs.iter().zip(&laid_out).zip(filenames) {
        pb.set_message(filename.clone());
        let options = ExportOptions::new()
            .with_title(doc.display_name())
            .created_now();
        render::save_pdf(pages, &options, output_dir.join(&filename))?;
        written.push((filename, pages.len()));
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let last = written.len().saturating_sub(1);
    for (i, (filename, pages)) in written.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!("  {} {} ({} page(s))", branch.dimmed(), filename, pages);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resume-layout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume layout and export tool");
    println!();
    println!("License: MIT");
}
