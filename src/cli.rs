//! Command line definition and dispatch to the calculators.

use crate::config::Config;
use crate::input::{read_plan_file, resolve_block, resolve_network};
use crate::models::{requests_from_counts, HostRequest, NetworkBlock};
use crate::output::{
    banner, explain_flsm, explain_vlsm, flsm_csv, render_flsm, render_summary, render_vlsm,
    summary_csv, to_json, vlsm_csv, OutputFormat,
};
use crate::processing::{count_for_hosts, describe_address, FlsmPlan, VlsmPlan};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::error::Error;

/// CLI definition
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "IPv4 subnet calculator: address info, FLSM division and VLSM allocation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        short = 'f',
        long = "format",
        global = true,
        required = false,
        help = "Select output format: 'table', 'csv' or 'json'.\ndefault: table (or SUBNET_CALC_FORMAT)"
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        global = true,
        required = false,
        help = "Write the result to this file instead of stdout."
    )]
    pub output_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mask, network, broadcast and host range of a single address.
    Info {
        #[arg(help = "Address, optionally with prefix.\nExample: 192.168.0.5/26")]
        network: String,

        #[arg(short = 'p', long = "prefix", help = "Prefix when not given inline")]
        prefix: Option<u8>,
    },
    /// Divide a network into equal sized subnets.
    Flsm {
        #[arg(help = "Base network.\nExample: 192.168.1.0/24")]
        network: String,

        #[arg(short = 'p', long = "prefix", help = "Prefix when not given inline")]
        prefix: Option<u8>,

        #[arg(
            short = 'n',
            long = "count",
            required_unless_present = "hosts_per_subnet",
            conflicts_with = "hosts_per_subnet",
            help = "Number of subnets"
        )]
        count: Option<u32>,

        #[arg(
            short = 's',
            long = "hosts-per-subnet",
            help = "Hosts each subnet must hold, the count is derived from it"
        )]
        hosts_per_subnet: Option<u32>,

        #[arg(long = "explain", help = "Show how the new prefix was derived")]
        explain: bool,
    },
    /// Allocate variable sized subnets for a list of host counts.
    Vlsm {
        #[arg(
            required_unless_present = "plan",
            conflicts_with = "plan",
            help = "Base network.\nExample: 192.168.1.0/24"
        )]
        network: Option<String>,

        #[arg(
            short = 'p',
            long = "prefix",
            conflicts_with = "plan",
            help = "Prefix when not given inline"
        )]
        prefix: Option<u8>,

        #[arg(
            short = 'H',
            long = "hosts",
            num_args = 1..,
            required_unless_present = "plan",
            conflicts_with = "plan",
            help = "Hosts needed per subnet.\nExample: 50 10 2"
        )]
        hosts: Option<Vec<u32>>,

        #[arg(long = "plan", help = "JSON plan file with network and hosts")]
        plan: Option<String>,

        #[arg(long = "explain", help = "Show the order subnets were allocated in")]
        explain: bool,
    },
}

impl Cli {
    /// `--format` when given, else the configured default.
    pub fn format(&self, config: &Config) -> Result<OutputFormat, Box<dyn Error>> {
        match &self.output_format {
            Some(f) => Ok(f.parse::<OutputFormat>()?),
            None => Ok(config.default_format),
        }
    }
}

#[derive(Serialize)]
struct Explained<'a, T: Serialize> {
    #[serde(flatten)]
    plan: &'a T,
    steps: Vec<String>,
}

/// Render a plan in `format`, appending the explanation steps when asked.
fn render_plan<T: Serialize>(
    plan: &T,
    format: OutputFormat,
    generated_at: &str,
    steps: Option<Vec<String>>,
    table: impl Fn(&T) -> String,
    csv: impl Fn(&T, &str) -> String,
) -> Result<String, Box<dyn Error>> {
    let text = match (format, steps) {
        (OutputFormat::Json, Some(steps)) => to_json(&Explained { plan, steps })?,
        (OutputFormat::Json, None) => to_json(plan)?,
        (OutputFormat::Table, Some(steps)) => {
            format!("{}\nSteps:\n{}\n", table(plan), steps.join("\n"))
        }
        (OutputFormat::Table, None) => table(plan),
        (OutputFormat::Csv, Some(steps)) => {
            let notes: String = steps.iter().map(|s| format!("# {s}\n")).collect();
            format!("{}{}", csv(plan, generated_at), notes)
        }
        (OutputFormat::Csv, None) => csv(plan, generated_at),
    };
    Ok(text)
}

fn vlsm_inputs(
    network: Option<&str>,
    prefix: Option<u8>,
    hosts: Option<&[u32]>,
    plan: Option<&str>,
) -> Result<(NetworkBlock, Vec<HostRequest>), Box<dyn Error>> {
    if let Some(path) = plan {
        let plan = read_plan_file(path)?;
        return Ok((plan.base()?, plan.requests()));
    }
    let network = network.ok_or("a base network or --plan is required")?;
    let hosts = hosts.ok_or("--hosts is required without --plan")?;
    Ok((resolve_block(network, prefix)?, requests_from_counts(hosts)))
}

/// Run the selected calculator and return the rendered text.
pub fn render(
    cli: &Cli,
    format: OutputFormat,
    generated_at: &str,
) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Command::Info { network, prefix } => {
            let (addr, prefix, source) = resolve_network(network, *prefix)?;
            log::info!("info {addr}/{prefix} prefix from {source:?}");
            let summary = describe_address(addr, prefix)?;
            render_plan(&summary, format, generated_at, None, render_summary, summary_csv)
        }
        Command::Flsm {
            network,
            prefix,
            count,
            hosts_per_subnet,
            explain,
        } => {
            let base = resolve_block(network, *prefix)?;
            let count = match (count, hosts_per_subnet) {
                (Some(count), _) => *count,
                (None, Some(hosts)) => count_for_hosts(base, *hosts)?,
                (None, None) => return Err("--count or --hosts-per-subnet is required".into()),
            };
            let plan = FlsmPlan::build(base, count)?;
            let steps = explain.then(|| explain_flsm(&plan));
            render_plan(&plan, format, generated_at, steps, render_flsm, flsm_csv)
        }
        Command::Vlsm {
            network,
            prefix,
            hosts,
            plan,
            explain,
        } => {
            let (base, requests) = vlsm_inputs(
                network.as_deref(),
                *prefix,
                hosts.as_deref(),
                plan.as_deref(),
            )?;
            let plan = VlsmPlan::build(base, &requests)?;
            let steps = explain.then(|| explain_vlsm(&plan));
            render_plan(&plan, format, generated_at, steps, render_vlsm, vlsm_csv)
        }
    }
}

/// Render and write to `--output` or stdout.
pub fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let format = cli.format(config)?;
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let text = render(cli, format, &generated_at)?;

    match &cli.output_file {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| format!("Error writing {path}: {e}"))?;
            log::info!("Wrote {} bytes to {path}", text.len());
            eprintln!("{}", banner(&format!("{format} written to {path}"), true));
        }
        None => print!("{text}"),
    }
    Ok(())
}
