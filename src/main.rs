use std::fs::OpenOptions;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use opentelemetry::sdk::export::trace::stdout;
use tracing::{debug, error, info, span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::calc::TimeInput;
use crate::conf::{
    into_settings_ref, workday_duration, InitialAction, MainAction, Settings, SettingsSer,
    DEFAULT_WORKDAY_MINUTES, MAX_WORKDAY_MINUTES,
};

mod calc;
mod cli;
mod conf;
mod parsing;
mod ui;

/// Export tracing spans to stderr when set.
const TRACE_ENV: &str = "TELEDAYS_TRACE";

fn main() {
    env_logger::init();

    let result = if std::env::var_os(TRACE_ENV).is_some() {
        // Create a new OpenTelemetry pipeline
        let tracer = stdout::new_pipeline()
            .with_writer(std::io::stderr())
            .with_pretty_print(true)
            .install_simple();

        // Create a tracing layer with the configured tracer
        let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);
        run_traced(Registry::default().with(telemetry))
    } else {
        run_traced(Registry::default())
    };

    if let Err(e) = result {
        error!("{:?}", e);
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run_traced<S>(subscriber: S) -> anyhow::Result<()>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber, || {
        let root = span!(tracing::Level::DEBUG, "teledays");
        let _enter = root.enter();

        main_inner()
    })
}

fn main_inner() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let args_ref: Vec<&str> = args.iter().map(String::as_str).collect();
    let (settings, args_ref) = parse_settings(&args_ref)?;

    debug!(
        "{:?}, workday {}",
        settings,
        parsing::format_workday(settings.workday_input())
    );
    debug!("{:?}", args_ref);

    let initial_action = parse_initial_action(args_ref)?;

    if let InitialAction::Calc { .. } = initial_action {
        do_write_settings(&settings)?;
        cli::print_conversion(&initial_action, &settings);
    }

    let main_action = MainAction {
        settings: into_settings_ref(settings),
    };
    let settings_out = ui::show_ui(main_action)?;
    let settings_out = settings_out.load();
    do_write_settings(&settings_out)
}

fn parse_initial_action(args: &[&str]) -> anyhow::Result<InitialAction> {
    let action = match args {
        ["show"] | [] => InitialAction::Show,
        ["calc", tele_hours, tele_minutes] => InitialAction::Calc {
            tele_hours: tele_hours.to_string(),
            tele_minutes: tele_minutes.to_string(),
            workday: None,
        },
        ["calc", tele_hours, tele_minutes, work_hours, work_minutes] => InitialAction::Calc {
            tele_hours: tele_hours.to_string(),
            tele_minutes: tele_minutes.to_string(),
            workday: Some((work_hours.to_string(), work_minutes.to_string())),
        },
        unexpected => bail!("Unexpected arguments: {}", unexpected.join(" ")),
    };
    Ok(action)
}

fn do_write_settings(settings: &Settings) -> anyhow::Result<()> {
    if settings.write_settings {
        let location = settings
            .settings_location
            .as_ref()
            .context("Missing settings location")?;

        info!("Writing settings to {}", location.display());

        if let Some(dir) = location.parent() {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create settings directory: {}", dir.display())
                })?;
            }
        }

        let to_write = SettingsSer::from_settings(settings);
        let buffer =
            serde_json::to_vec_pretty(&to_write).context("Failed to serialize settings")?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(location)
            .context("Cannot open settings for writing")?;
        file.write_all(&buffer).context("Failed to write settings")?;
    }

    Ok(())
}

fn parse_settings<'a>(args: &'a [&'a str]) -> anyhow::Result<(Settings, &'a [&'a str])> {
    let mut remaining_args = args.get(1..).unwrap_or_default();

    #[derive(Default, Debug)]
    struct SettingsBuilder {
        explicit_config_file: bool,
        config_file: Option<PathBuf>,
        workday: Option<String>,
        write_settings: bool,
    }

    let mut b: SettingsBuilder = SettingsBuilder::default();
    loop {
        match remaining_args {
            ["-C" | "--config-file", config_file, rest @ ..] => {
                b.explicit_config_file = true;
                b.config_file = Some(PathBuf::from(config_file));
                remaining_args = rest;
            }
            ["-w" | "--workday", workday, rest @ ..] => {
                b.workday = Some(workday.to_string());
                remaining_args = rest;
            }
            ["-W" | "--write-settings", rest @ ..] => {
                b.write_settings = true;
                remaining_args = rest;
            }
            _ => {
                break;
            }
        }
    }

    b.config_file = Some(settings_location(b.config_file)?);

    let from_file = if let Some(ref file) = b.config_file {
        let exists = file.is_file();
        if b.explicit_config_file && !b.write_settings && !exists {
            bail!(
                "Settings file {} does not exist and is not configured to be written",
                file.display()
            );
        }
        if exists {
            Some(read_settings_file(file)?)
        } else {
            None
        }
    } else {
        None
    };

    Ok((
        Settings {
            settings_location: b.config_file,
            workday: workday(b.workday, from_file.as_ref())?,
            write_settings: b.write_settings,
        },
        remaining_args,
    ))
}

fn read_settings_file(file: &Path) -> anyhow::Result<SettingsSer> {
    let file = std::fs::File::open(file).context("Failed to open settings file")?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("Failed to read settings")
}

const SETTINGS_FILE_NAME: &str = "teledays_settings.json";

fn settings_location(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(explicit) = explicit {
        Ok(explicit)
    } else if let Ok(teledays_home_env) = std::env::var("TELEDAYS_HOME") {
        let teledays_home = PathBuf::from(&teledays_home_env);
        if teledays_home.is_absolute() || teledays_home.exists() {
            Ok(teledays_home.join(SETTINGS_FILE_NAME))
        } else {
            bail!(
                "Invalid environment value for 'TELEDAYS_HOME': '{}'",
                teledays_home_env
            );
        }
    } else if let Some(config_dir) = dirs::config_dir() {
        Ok(config_dir.join("teledays").join(SETTINGS_FILE_NAME))
    } else {
        bail!("Settings location not defined")
    }
}

fn workday(
    explicit: Option<String>,
    loaded: Option<&SettingsSer>,
) -> anyhow::Result<chrono::Duration> {
    if let Some(explicit) = explicit {
        let workday = parsing::parse_workday(&explicit).with_context(|| {
            format!(
                "Cannot parse explicitly provided workday '{}', expected e.g. 7:45",
                explicit
            )
        })?;
        workday_duration(workday)
            .with_context(|| format!("Explicitly provided workday '{}' is too long", explicit))
    } else if let Some(SettingsSer {
        workday_hours,
        workday_minutes,
    }) = loaded
    {
        let workday = TimeInput::new(*workday_hours, *workday_minutes)
            .context("Invalid workday_minutes in settings file")?;
        let minutes = workday
            .total_minutes()
            .context("Invalid workday_hours in settings file")?;
        if minutes == 0 {
            bail!("Invalid workday in settings file: 0 minutes");
        }
        workday_duration(workday).with_context(|| {
            format!(
                "Invalid workday in settings file: {} minutes exceeds the limit of {}",
                minutes, MAX_WORKDAY_MINUTES
            )
        })
    } else {
        Ok(chrono::Duration::minutes(DEFAULT_WORKDAY_MINUTES))
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use chrono::Duration;

    use crate::conf::{InitialAction, Settings};
    use crate::{do_write_settings, parse_initial_action, parse_settings};

    #[test]
    fn parse_args() {
        let input = vec!["program_name", "--workday", "8:30", "calc", "10", "0"];

        let (settings, remainder) = parse_settings(&input).unwrap();

        assert_eq!(remainder, &["calc", "10", "0"]);
        assert_eq!(settings.workday, Duration::minutes(510));
        assert!(!settings.write_settings);
    }

    #[test]
    fn invalid_workday_argument() {
        let input = vec!["program_name", "-w", "8:75"];
        let err = parse_settings(&input).unwrap_err();
        assert!(
            err.to_string().contains("8:75"),
            "Unexpected error: {err:?}"
        );
    }

    #[test]
    fn missing_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.json");
        let file = file.to_str().unwrap();
        let input = vec!["program_name", "-C", file];
        assert!(parse_settings(&input).is_err());
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("settings.json");
        let file_str = file.to_str().unwrap();

        let input = vec!["program_name", "-C", file_str, "-W", "--workday", "6h30m"];
        let (settings, remainder) = parse_settings(&input).unwrap();
        assert!(remainder.is_empty());
        assert_eq!(settings.settings_location, Some(PathBuf::from(file_str)));
        do_write_settings(&settings).unwrap();

        let input = vec!["program_name", "-C", file_str];
        let (settings, _) = parse_settings(&input).unwrap();
        assert_eq!(settings.workday, Duration::minutes(390));
    }

    #[test]
    fn invalid_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        std::fs::write(&file, r#"{"workday_hours": 7, "workday_minutes": 75}"#).unwrap();
        let input = vec!["program_name", "-C", file.to_str().unwrap()];
        assert!(parse_settings(&input).is_err());

        std::fs::write(&file, r#"{"workday_hours": 0, "workday_minutes": 0}"#).unwrap();
        assert!(parse_settings(&input).is_err());

        std::fs::write(&file, "not json").unwrap();
        assert!(parse_settings(&input).is_err());
    }

    #[test]
    fn settings_workday_too_long() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        std::fs::write(
            &file,
            r#"{"workday_hours": 10000000000000, "workday_minutes": 0}"#,
        )
        .unwrap();
        let input = vec!["program_name", "-C", file.to_str().unwrap()];
        let err = parse_settings(&input).unwrap_err();
        assert!(
            format!("{err:#}").contains("exceeds the limit"),
            "Unexpected error: {err:?}"
        );
    }

    #[test]
    fn nothing_written_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        let settings = Settings {
            settings_location: Some(file.clone()),
            ..Settings::default()
        };
        do_write_settings(&settings).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn initial_actions() {
        assert_eq!(parse_initial_action(&[]).unwrap(), InitialAction::Show);
        assert_eq!(parse_initial_action(&["show"]).unwrap(), InitialAction::Show);
        assert_eq!(
            parse_initial_action(&["calc", "1", "2"]).unwrap(),
            InitialAction::Calc {
                tele_hours: "1".to_string(),
                tele_minutes: "2".to_string(),
                workday: None,
            }
        );
        assert_eq!(
            parse_initial_action(&["calc", "1", "2", "8", "0"]).unwrap(),
            InitialAction::Calc {
                tele_hours: "1".to_string(),
                tele_minutes: "2".to_string(),
                workday: Some(("8".to_string(), "0".to_string())),
            }
        );
        assert!(parse_initial_action(&["calc", "1"]).is_err());
        assert!(parse_initial_action(&["book"]).is_err());
    }
}
