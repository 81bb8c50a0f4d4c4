use alpha_recolor::color::Rgb;
use alpha_recolor::config::{load_config, RecolorConfig};
use alpha_recolor::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use alpha_recolor::recolor::recolor_pixels;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    color: Option<Rgb>,
    report: Option<PathBuf>,
}

fn run() -> Result<(), String> {
    let cli = parse_args()?;

    let config = match &cli.config {
        Some(config_path) => load_config(config_path)?,
        None => RecolorConfig::default(),
    };
    let (input, output, color) = merge(&cli, config)?;

    let mut buffer = load_rgba_image(&input).map_err(|e| e.to_string())?;
    let recolored = recolor_pixels(&mut buffer, color);
    save_rgba_image(&buffer, &output).map_err(|e| e.to_string())?;

    if let Some(report_path) = &cli.report {
        let report = RecolorReport {
            input: input.clone(),
            output: output.clone(),
            width: buffer.width(),
            height: buffer.height(),
            target: color,
            recolored_pixels: recolored,
        };
        write_json_file(report_path, &report)?;
    }

    println!(
        "Recolored {recolored} of {} pixels to {color}, saved to {}",
        buffer.pixel_count(),
        output.display()
    );

    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => cli.input = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--output" => cli.output = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--color" => cli.color = Some(next_value(&mut args, &arg)?.parse()?),
            "--config" => cli.config = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--report" => cli.report = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--help" | "-h" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}\n{}", usage())),
        }
    }
    Ok(cli)
}

/// Explicit flags win over config file values; an input must come from one
/// of the two.
fn merge(cli: &CliArgs, config: RecolorConfig) -> Result<(PathBuf, PathBuf, Rgb), String> {
    let input = cli.input.clone().or(config.input).ok_or_else(usage)?;
    let output = cli.output.clone().unwrap_or(config.output);
    let color = cli.color.unwrap_or(config.color);
    Ok((input, output, color))
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} expects a value"))
}

fn usage() -> String {
    "Usage: alpha-recolor --input <path> [--output <path>] [--color <r,g,b>] \
     [--config <config.json>] [--report <report.json>]"
        .to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecolorReport {
    input: PathBuf,
    output: PathBuf,
    width: usize,
    height: usize,
    target: Rgb,
    recolored_pixels: usize,
}

#[cfg(test)]
mod tests {
    use super::{merge, CliArgs};
    use alpha_recolor::color::{Rgb, DEFAULT_TARGET};
    use alpha_recolor::config::RecolorConfig;
    use std::path::{Path, PathBuf};

    #[test]
    fn flag_input_fills_a_config_without_one() {
        let cli = CliArgs {
            input: Some(PathBuf::from("logo.png")),
            ..CliArgs::default()
        };
        let config = RecolorConfig {
            color: Rgb::new(9, 9, 9),
            ..RecolorConfig::default()
        };

        let (input, output, color) = merge(&cli, config).unwrap();
        assert_eq!(input, Path::new("logo.png"));
        assert_eq!(output, Path::new("output.png"));
        assert_eq!(color, Rgb::new(9, 9, 9));
    }

    #[test]
    fn explicit_flags_win_over_config_values() {
        let cli = CliArgs {
            input: Some(PathBuf::from("cli.png")),
            output: Some(PathBuf::from("cli-out.png")),
            color: Some(Rgb::new(1, 2, 3)),
            ..CliArgs::default()
        };
        let config = RecolorConfig {
            input: Some(PathBuf::from("cfg.png")),
            output: PathBuf::from("cfg-out.png"),
            color: Rgb::new(7, 7, 7),
        };

        let (input, output, color) = merge(&cli, config).unwrap();
        assert_eq!(input, Path::new("cli.png"));
        assert_eq!(output, Path::new("cli-out.png"));
        assert_eq!(color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn input_missing_everywhere_is_an_error() {
        let err = merge(&CliArgs::default(), RecolorConfig::default()).unwrap_err();
        assert!(err.starts_with("Usage:"), "unexpected error: {err}");
    }

    #[test]
    fn defaults_apply_without_a_config() {
        let cli = CliArgs {
            input: Some(PathBuf::from("logo.png")),
            ..CliArgs::default()
        };

        let (_, output, color) = merge(&cli, RecolorConfig::default()).unwrap();
        assert_eq!(output, Path::new("output.png"));
        assert_eq!(color, DEFAULT_TARGET);
    }
}
