use anyhow::Context;
use clap::Parser;
use questicon::IconConfig;
use std::path::PathBuf;

/// Render the quest icon and write it as PNG
#[derive(Parser, Debug)]
#[command(name = "questicon", version, about)]
struct Args {
    /// JSON file overriding output path, palette or label
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the PNG here instead of the configured path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave out the text label
    #[arg(long)]
    no_glyph: bool,

    /// Log every render stage
    #[arg(short, long)]
    verbose: bool,
}

/// Start from the config file (or defaults), then apply command-line flags,
/// which always win.
fn resolve_config(args: &Args) -> anyhow::Result<IconConfig> {
    let mut config = match &args.config {
        Some(path) => IconConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => IconConfig::default(),
    };
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if args.no_glyph {
        config.glyph.enabled = false;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let canvas = questicon::render(&config);
    let summary = questicon::export(&canvas, &config.output)
        .with_context(|| format!("exporting icon to {}", config.output.display()))?;
    println!("Created {}", summary.path.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("questicon failed: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("questicon").chain(argv.iter().copied()))
            .expect("parse args")
    }

    fn write_config(name: &str, body: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("questicon-cli-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("icon.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn no_flags_gives_defaults() {
        let cfg = resolve_config(&parse(&[])).unwrap();
        assert_eq!(cfg, IconConfig::default());
    }

    #[test]
    fn output_and_no_glyph_override_defaults() {
        let cfg = resolve_config(&parse(&["--output", "out/a.png", "--no-glyph"])).unwrap();
        assert_eq!(cfg.output, PathBuf::from("out/a.png"));
        assert!(!cfg.glyph.enabled);
    }

    #[test]
    fn flags_win_over_config_file() {
        let path = write_config(
            "merge",
            r#"{"output": "from/file.png", "glyph": {"text": "R"}, "palette": {"border": [1, 2, 3]}}"#,
        );
        let arg = path.to_string_lossy().into_owned();

        let cfg = resolve_config(&parse(&["--config", &arg])).unwrap();
        assert_eq!(cfg.output, PathBuf::from("from/file.png"));
        assert!(cfg.glyph.enabled);

        let cfg = resolve_config(&parse(&["--config", &arg, "-o", "cli.png", "--no-glyph"])).unwrap();
        assert_eq!(cfg.output, PathBuf::from("cli.png"));
        assert!(!cfg.glyph.enabled);
        // Keys the flags don't touch still come from the file
        assert_eq!(cfg.glyph.text, "R");
        assert_eq!(cfg.palette.border, [1, 2, 3]);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn invalid_config_file_is_reported() {
        let path = write_config("invalid", r#"{"glyph": {"scale": 0}}"#);
        let arg = path.to_string_lossy().into_owned();
        let err = resolve_config(&parse(&["--config", &arg])).unwrap_err();
        assert!(format!("{:#}", err).contains("loading config"));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn empty_output_fails_validation() {
        let args = Args {
            config: None,
            output: Some(PathBuf::new()),
            no_glyph: false,
            verbose: false,
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<questicon::Error>(),
            Some(questicon::Error::ConfigError(_))
        ));
    }
}
