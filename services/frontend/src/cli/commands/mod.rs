use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("albergue-frontend")
        .about("Albergue front-end server")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ALBERGUE_FRONTEND_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("assets")
                .short('a')
                .long("assets")
                .help("Directory holding the built front-end bundles")
                .default_value("dist")
                .env("ALBERGUE_FRONTEND_ASSETS"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("Deployment mode string surfaced by the health endpoint")
                .default_value("local")
                .env("PUBLIC_API_MODE"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ALBERGUE_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "albergue-frontend");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Albergue front-end server"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_defaults() {
        let command = new();
        let matches = command.get_matches_from(vec!["albergue-frontend"]);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
        assert_eq!(
            matches.get_one::<String>("assets").map(String::as_str),
            Some("dist")
        );
        assert_eq!(
            matches.get_one::<String>("mode").map(String::as_str),
            Some("local")
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("ALBERGUE_FRONTEND_PORT", Some("443")),
                ("ALBERGUE_FRONTEND_ASSETS", Some("/srv/albergue/dist")),
                ("PUBLIC_API_MODE", Some("production")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["albergue-frontend"]);

                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>("assets").map(String::as_str),
                    Some("/srv/albergue/dist")
                );
                assert_eq!(
                    matches.get_one::<String>("mode").map(String::as_str),
                    Some("production")
                );
            },
        );
    }

    #[test]
    fn test_log_level_names() {
        temp_env::with_vars([("ALBERGUE_LOG_LEVEL", Some("debug"))], || {
            let command = new();
            let matches = command.get_matches_from(vec!["albergue-frontend"]);
            assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(3));
        });
    }
}
