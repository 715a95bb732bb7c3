mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::output::OutputConfig;
use cli::{Cli, Resource};
use quire::config::BookConfig;
use quire::layout::{self, Margins, presets};
use quire::manuscript::{self, ContentBlock, ParseOptions, stats::ManuscriptStats};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Longest block preview shown in text tables.
const PREVIEW_CHARS: usize = 72;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = OutputConfig::from_global(cli.json, cli.verbose, cli.quiet, cli.no_color);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(output.log_directive())),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!output.no_color)
        .init();

    match cli.command {
        Resource::Manuscript { command } => handle_manuscript(command, &output)?,
        Resource::Layout { command } => handle_layout(command, &output)?,
        Resource::Config { command } => handle_config(command, &output)?,
        Resource::Book { command } => handle_book(command, &output)?,
    }

    Ok(())
}

fn read_manuscript(path: &Path) -> Result<String> {
    quire::source::read_manuscript(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{}...", cut.trim_end())
}

#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    stats: ManuscriptStats,
    words_per_page: u32,
    estimated_pages: u32,
}

fn handle_manuscript(
    command: cli::manuscript::ManuscriptCommand,
    output: &OutputConfig,
) -> Result<()> {
    use cli::manuscript::ManuscriptCommand;

    match command {
        ManuscriptCommand::Parse {
            file,
            no_merge,
            raw_headings,
        } => {
            let text = read_manuscript(&file)?;
            let options = ParseOptions {
                merge_subtitles: !no_merge,
            };
            let blocks = if raw_headings {
                manuscript::parse_with(&text, &options)
            } else {
                manuscript::structure_with(&text, &options)
            };

            if output.json {
                output.print_json(&blocks)?;
            } else {
                let rows: Vec<Vec<String>> = blocks
                    .iter()
                    .enumerate()
                    .map(|(i, b)| {
                        vec![
                            i.to_string(),
                            b.kind.to_string(),
                            b.level.to_string(),
                            preview(&b.text),
                        ]
                    })
                    .collect();
                output.print_table(&["#", "KIND", "LEVEL", "TEXT"], &rows);
                output.detail(&format!("  {} blocks", blocks.len()));
            }
        }
        ManuscriptCommand::Outline { file, depth } => {
            let text = read_manuscript(&file)?;
            let max_level = depth.unwrap_or(u8::MAX);
            let headings: Vec<ContentBlock> = manuscript::structure(&text)
                .into_iter()
                .filter(|b| b.is_heading() && b.level <= max_level)
                .collect();

            if output.json {
                output.print_json(&headings)?;
            } else if headings.is_empty() {
                output.status("No headings found");
            } else {
                for heading in &headings {
                    let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
                    println!("{indent}{}", heading.text);
                }
            }
        }
        ManuscriptCommand::Stats { file, font_size } => {
            let text = read_manuscript(&file)?;
            let blocks = manuscript::structure(&text);
            let words_per_page = layout::words_per_page(font_size);
            let report = StatsReport {
                stats: manuscript::stats::compute(&text, &blocks),
                words_per_page,
                estimated_pages: layout::estimate_pages(&text, words_per_page),
            };

            if output.json {
                output.print_json(&report)?;
            } else {
                let s = &report.stats;
                output.print_fields(&[
                    ("Words", s.words.to_string()),
                    ("Sentences", s.sentences.to_string()),
                    ("Paragraphs", s.paragraphs.to_string()),
                    ("Chapters", s.chapters.to_string()),
                    ("Sections", s.sections.to_string()),
                    ("Scene breaks", s.scene_breaks.to_string()),
                    ("Avg sentence", format!("{:.1} words", s.avg_sentence_length)),
                    ("Avg paragraph", format!("{} words", s.avg_paragraph_length)),
                    ("Dialogue", format!("{:.1}%", s.dialogue_percentage)),
                    ("Est. pages", report.estimated_pages.to_string()),
                ]);
                output.detail(&format!("  at {} words per page", report.words_per_page));
            }
        }
    }

    Ok(())
}

fn handle_layout(command: cli::layout::LayoutCommand, output: &OutputConfig) -> Result<()> {
    use cli::layout::LayoutCommand;

    match command {
        LayoutCommand::Compute {
            trim,
            paper,
            pages,
            manuscript,
            font_size,
            bleed,
            gutter,
            mm,
        } => {
            let page_count = match (pages, manuscript) {
                (Some(pages), _) => pages,
                (None, Some(path)) => {
                    let text = read_manuscript(&path)?;
                    let pages = layout::estimate_pages(&text, layout::words_per_page(font_size));
                    output.detail(&format!("Estimated {pages} pages from {}", path.display()));
                    pages
                }
                (None, None) => anyhow::bail!("either --pages or --manuscript is required"),
            };

            let margins = Margins {
                gutter,
                ..Margins::default()
            };
            let params = layout::compute_layout(&trim, &paper, &margins, page_count, bleed)?;

            if output.json {
                let mut value = serde_json::to_value(&params)?;
                if mm {
                    value["millimeters"] = serde_json::to_value(params.in_millimeters())?;
                }
                output.print_json(&value)?;
            } else {
                let inches = |v: f64| format!("{v:.3}in");
                let mut fields = vec![
                    ("Trim", params.trim.to_string()),
                    ("Paper", params.paper.to_string()),
                    ("Pages", params.page_count.to_string()),
                    (
                        "Page size",
                        format!("{} x {}", inches(params.page_width), inches(params.page_height)),
                    ),
                    ("Top margin", inches(params.top_margin)),
                    ("Bottom margin", inches(params.bottom_margin)),
                    ("Outer margin", inches(params.outer_margin)),
                    ("Gutter", inches(params.gutter_margin)),
                    ("Spine", inches(params.spine_width)),
                    (
                        "Full cover",
                        format!(
                            "{} x {}",
                            inches(params.full_cover_width),
                            inches(params.full_cover_height)
                        ),
                    ),
                ];
                if mm {
                    let m = params.in_millimeters();
                    fields.push((
                        "Page size (mm)",
                        format!("{:.3} x {:.3}", m.page_width_mm, m.page_height_mm),
                    ));
                    fields.push(("Gutter (mm)", format!("{:.3}", m.gutter_mm)));
                    fields.push(("Spine (mm)", format!("{:.3}", m.spine_width_mm)));
                    fields.push((
                        "Full cover (mm)",
                        format!("{:.3} x {:.3}", m.full_cover_width_mm, m.full_cover_height_mm),
                    ));
                }
                output.print_fields(&fields);
                output.detail(&format!(
                    "  Text block: {} x {}",
                    inches(params.text_block_width()),
                    inches(params.text_block_height())
                ));
            }
        }
        LayoutCommand::Cover {
            pages,
            trim,
            paper,
            bleed,
        } => {
            let cover = layout::cover_dimensions(&trim, &paper, pages, bleed)?;
            if output.json {
                output.print_json(&cover)?;
            } else {
                println!(
                    "Full cover: {:.3}in x {:.3}in; Spine: {:.3}in",
                    cover.width, cover.height, cover.spine_width
                );
            }
        }
        LayoutCommand::Presets => {
            if output.json {
                output.print_json(&serde_json::json!({
                    "trims": presets::TRIM_PRESETS,
                    "papers": presets::PAPER_STOCKS,
                }))?;
            } else {
                let trims: Vec<Vec<String>> = presets::TRIM_PRESETS
                    .iter()
                    .map(|t| {
                        vec![
                            t.key.to_string(),
                            format!("{}", t.width_in),
                            format!("{}", t.height_in),
                            t.target_use.to_string(),
                        ]
                    })
                    .collect();
                output.print_table(&["TRIM", "WIDTH", "HEIGHT", "USE"], &trims);
                println!();
                let papers: Vec<Vec<String>> = presets::PAPER_STOCKS
                    .iter()
                    .map(|p| {
                        vec![
                            p.key.to_string(),
                            format!("{}", p.pages_per_inch),
                            yes_no(p.kdp),
                            yes_no(p.ingram),
                        ]
                    })
                    .collect();
                output.print_table(&["PAPER", "PPI", "KDP", "INGRAM"], &papers);
            }
        }
    }

    Ok(())
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

fn handle_config(command: cli::config::ConfigCommand, output: &OutputConfig) -> Result<()> {
    use cli::config::ConfigCommand;

    match command {
        ConfigCommand::Init {
            output: out_file,
            title,
            author,
        } => {
            let mut config = BookConfig::default();
            if let Some(title) = title {
                config.title = title;
            }
            if let Some(author) = author {
                config.copyright_holder = author.clone();
                config.author = author;
            }
            let yaml = config.to_yaml()?;
            output.write_or_print(out_file.as_deref(), &yaml)?;
        }
        ConfigCommand::Show { file } => {
            let config = BookConfig::load(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            if output.json {
                output.print_json(&config)?;
            } else {
                print!("{}", config.to_yaml()?);
            }
        }
    }

    Ok(())
}

fn handle_book(command: cli::book::BookCommand, output: &OutputConfig) -> Result<()> {
    use cli::book::BookCommand;

    match command {
        BookCommand::Assemble {
            file,
            config,
            output: out_file,
        } => {
            let book_config = BookConfig::load(&config)
                .with_context(|| format!("failed to load {}", config.display()))?;
            let text = read_manuscript(&file)?;
            let document = quire::assemble(&book_config, &text)
                .with_context(|| format!("assembling {}", file.display()))?;

            let json = serde_json::to_string_pretty(&document)?;
            output.write_or_print(out_file.as_deref(), &json)?;
            if out_file.is_some() {
                output.detail(&format!(
                    "  {} chapters, {} toc entries, {} pages",
                    document.chapter_count,
                    document.toc.len(),
                    document.layout.page_count
                ));
            }
        }
    }

    Ok(())
}
