use anyhow::Context;
use colored::Colorize;
use mixkit_registry::{Namespace, NamespaceConfig, PREDICATES};
use mixkit_types::Value;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let namespace = Namespace::standard(NamespaceConfig::default());
    match cli.command {
        Command::Merge(args) => cmd_merge(&namespace, args),
        Command::Check(args) => cmd_check(&namespace, args, &cli.format),
        Command::Env(_) => cmd_env(&namespace, &cli.format),
        Command::List(_) => cmd_list(&namespace, &cli.format),
    }
}

fn parse_value(text: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("invalid JSON: {text}"))?;
    Ok(Value::from(json))
}

fn print_value(value: Value) -> anyhow::Result<()> {
    let json = serde_json::Value::from(value);
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn cmd_merge(namespace: &Namespace, args: MergeArgs) -> anyhow::Result<()> {
    let values = args
        .objects
        .iter()
        .map(|text| parse_value(text))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let util = if args.shallow { "extend" } else { "merge" };
    let merged = namespace.call_util(util, &values)?;
    tracing::debug!(util, sources = values.len() - 1, "merged");
    print_value(merged)
}

fn cmd_check(namespace: &Namespace, args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let value = parse_value(&args.value)?;
    let mut verdicts = serde_json::Map::new();
    for (name, _) in PREDICATES {
        let verdict = namespace.call_util(name, std::slice::from_ref(&value))?;
        let holds = verdict.as_bool().unwrap_or(false);
        match format {
            OutputFormat::Text => {
                let mark = if holds { "✓".green() } else { "✗".red() };
                println!("  {mark} {name}");
            }
            OutputFormat::Json => {
                verdicts.insert(name.to_string(), serde_json::Value::Bool(holds));
            }
        }
    }
    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    }
    Ok(())
}

fn cmd_env(namespace: &Namespace, format: &OutputFormat) -> anyhow::Result<()> {
    let env = namespace.call_util("environment", &[])?;
    match format {
        OutputFormat::Json => print_value(env),
        OutputFormat::Text => {
            let kind = env.get("type").and_then(Value::as_str).unwrap_or("unknown");
            let version = env.get("version").and_then(Value::as_str).unwrap_or("");
            println!("Environment: {} {}", kind.bold(), version.cyan());
            if namespace.has_util("platform") {
                let platform = namespace.call_util("platform", &[])?;
                let os = platform.get("os").and_then(Value::as_str).unwrap_or("");
                let arch = platform.get("arch").and_then(Value::as_str).unwrap_or("");
                println!("Platform: {}/{}", os.yellow(), arch.yellow());
            }
            Ok(())
        }
    }
}

fn cmd_list(namespace: &Namespace, format: &OutputFormat) -> anyhow::Result<()> {
    let methods = namespace.method_names();
    let utils = namespace.util_names();
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "methods": methods, "utils": utils });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("Namespace {}", namespace.name().bold());
            println!("  {} ({})", "methods".green(), methods.len());
            for name in &methods {
                println!("    {name}");
            }
            println!("  {} ({})", "utils".green(), utils.len());
            for name in &utils {
                println!("    {name}");
            }
        }
    }
    Ok(())
}
