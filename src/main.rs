//! CLI entrypoint.

use std::error::Error;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use apidash::core_api::DashboardConfig;
use apidash::panes::{HtmlPane, Pane, switch_content};
use apidash::render::{HtmlContainer, HtmlPage};
use apidash::{Dashboard, GroupedEntries, MissingNamePolicy, RenderMode, logging};
use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;

#[derive(Args, Clone)]
struct CommonArgs {
	/// Base URL or directory that resource paths are resolved against
	#[arg(short = 'b', long)]
	base: Option<String>,

	/// Resource to load; repeat to load several, in order
	#[arg(short = 'r', long = "resource", value_name = "PATH")]
	resources: Vec<String>,

	/// Configuration file (JSON)
	#[arg(short = 'c', long)]
	config: Option<PathBuf>,

	/// Custom display filter pattern (regex matched against entry names)
	#[arg(long, value_name = "REGEX")]
	filter: Option<String>,

	/// Fail when an entry has no name instead of skipping it
	#[arg(long, default_value_t = false)]
	reject_missing_names: bool,

	/// Per-request timeout for HTTP bases, in seconds
	#[arg(short = 't', long, value_name = "SECS")]
	timeout: Option<u64>,

	/// Enable verbose mode, logging each loaded resource
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

#[derive(Args, Clone)]
struct RenderArgs {
	/// Write the output to a file instead of stdout
	#[arg(short = 'O', long)]
	output: Option<PathBuf>,

	/// Wrap the dashboard in a complete HTML page
	#[arg(long, default_value_t = false)]
	page: bool,

	/// Title used with `--page`
	#[arg(long, default_value = "API Dashboard")]
	title: String,

	/// With `--page`, append the code and usage panes showing this pane
	#[arg(long, value_name = "TOKEN", requires = "page")]
	panes: Option<String>,

	/// Clear the container before rendering
	#[arg(long, default_value_t = false)]
	clear_first: bool,

	/// Element id of the dashboard container
	#[arg(long)]
	container_id: Option<String>,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct ListArgs {
	/// Select the output format
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	format: OutputFormat,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct PanesArgs {
	/// Pane to show (`code` or `usage`); anything else leaves both panes unchanged
	token: String,

	/// Pane shown before the switch
	#[arg(long, value_name = "TOKEN")]
	initial: Option<String>,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

#[derive(Subcommand, Clone)]
enum Command {
	/// Render the dashboard as HTML.
	Render(RenderArgs),
	/// Print the grouped, filtered, and sorted entries.
	List(ListArgs),
	/// Print the code and usage panes after a switch.
	Panes(PanesArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the apidash CLI.
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
/// Output formats for `list`.
enum OutputFormat {
	/// Human-readable listing.
	Text,
	/// JSON array of groups.
	Json,
}

/// Merge the configuration file, environment, and command-line flags. Flags win.
fn build_config(common: &CommonArgs) -> Result<DashboardConfig, Box<dyn Error>> {
	let mut config = DashboardConfig::discover(common.config.as_deref())?.with_env_overrides();

	if let Some(base) = &common.base {
		config.base = Some(base.clone());
	}
	if !common.resources.is_empty() {
		config.resources = Some(common.resources.clone());
	}
	if let Some(filter) = &common.filter {
		config.filter_pattern = Some(filter.clone());
	}
	if common.reject_missing_names {
		config.missing_names = MissingNamePolicy::Reject;
	}
	if let Some(timeout) = common.timeout {
		config.timeout_secs = Some(timeout);
	}
	Ok(config)
}

fn should_color_output(no_color: bool) -> bool {
	if no_color {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stdout().is_terminal()
}

/// Render the dashboard and write it out.
fn run_render(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
	let mut config = build_config(&args.common)?;
	if args.clear_first {
		config.render_mode = RenderMode::ClearFirst;
	}
	if let Some(id) = &args.container_id {
		config.container_id = Some(id.clone());
	}

	let dashboard = Dashboard::from_config(&config)?;
	let mut container = match &config.container_id {
		Some(id) => HtmlContainer::new(id.as_str()),
		None => HtmlContainer::default(),
	};

	dashboard.render_into(&mut container)?;

	let html = if args.page {
		let mut code = HtmlPane::code();
		let mut usage = HtmlPane::usage();
		let page = HtmlPage::new(args.title.as_str(), &container);
		match &args.panes {
			Some(token) => {
				switch_content(token, &mut code, &mut usage);
				page.with_panes(&code, &usage).to_html()
			}
			None => page.to_html(),
		}
	} else {
		container.to_html()
	};

	match &args.output {
		Some(path) => {
			fs::write(path, html)?;
			let summary = format!(
				"Wrote {} nodes to {}",
				container.children().len(),
				path.display()
			);
			if should_color_output(args.common.no_color) {
				eprintln!("{}", summary.green());
			} else {
				eprintln!("{summary}");
			}
		}
		None => print!("{html}"),
	}

	Ok(())
}

/// Print the visible entries of each group.
fn run_list(args: &ListArgs) -> Result<(), Box<dyn Error>> {
	let config = build_config(&args.common)?;
	let dashboard = Dashboard::from_config(&config)?;
	let groups = dashboard.load();

	let mut visible = GroupedEntries::new();
	for group in &groups {
		let entries = dashboard.renderer().visible_entries(group)?;
		visible.extend(&group.title, entries.into_iter().cloned());
	}

	if args.format == OutputFormat::Json {
		let json = serde_json::to_string_pretty(&visible)?;
		println!("{json}");
		return Ok(());
	}

	if visible.is_empty() {
		println!("No entries loaded.");
		return Ok(());
	}

	let color = should_color_output(args.common.no_color);
	let name_width = visible
		.iter()
		.flat_map(|group| group.entries.iter())
		.filter_map(|entry| entry.name())
		.map(str::len)
		.max()
		.unwrap_or(0);

	let mut buffer = String::new();
	for group in &visible {
		if color {
			buffer.push_str(&format!("{}\n", group.title.bold()));
		} else {
			buffer.push_str(&format!("{}\n", group.title));
		}
		for entry in &group.entries {
			let name = entry.name().unwrap_or_default();
			buffer.push_str(&format!("  {name:<name_width$} {}\n", entry.href()));
		}
	}
	print!("{buffer}");

	Ok(())
}

/// Apply a pane switch and print both panes.
fn run_panes(args: &PanesArgs) -> Result<(), Box<dyn Error>> {
	let mut code = HtmlPane::code();
	let mut usage = HtmlPane::usage();

	if let Some(initial) = &args.initial {
		switch_content(initial, &mut code, &mut usage);
	}

	let switched = switch_content(&args.token, &mut code, &mut usage);
	print!("{}{}", code.to_html(), usage.to_html());

	if switched.is_none() {
		let note = format!(
			"\"{}\" is not a pane (expected {} or {}); panes unchanged",
			args.token,
			Pane::Code,
			Pane::Usage
		);
		if should_color_output(args.no_color) {
			eprintln!("{}", note.yellow());
		} else {
			eprintln!("{note}");
		}
	}

	Ok(())
}

fn main() {
	let cli = Cli::parse();

	let (verbose, no_color) = match &cli.command {
		Command::Render(args) => (args.common.verbose, args.common.no_color),
		Command::List(args) => (args.common.verbose, args.common.no_color),
		Command::Panes(args) => (false, args.no_color),
	};
	logging::init(verbose, !no_color && std::io::stderr().is_terminal());

	if let Err(e) = run(cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	match cli.command {
		Command::Render(args) => run_render(&args),
		Command::List(args) => run_list(&args),
		Command::Panes(args) => run_panes(&args),
	}
}
