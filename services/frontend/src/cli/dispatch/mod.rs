use crate::cli::actions::Action;
use anyhow::Result;
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        assets: matches
            .get_one::<String>("assets")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist")),
        mode: matches
            .get_one::<String>("mode")
            .cloned()
            .unwrap_or_else(|| "local".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::handler;
    use crate::cli::{actions::Action, commands};
    use std::path::PathBuf;

    #[test]
    fn handler_builds_the_server_action() {
        let matches = commands::new().get_matches_from(vec![
            "albergue-frontend",
            "--port",
            "9000",
            "--assets",
            "bundles",
            "--mode",
            "staging",
        ]);

        let Action::Server { port, assets, mode } = handler(&matches).unwrap();
        assert_eq!(port, 9000);
        assert_eq!(assets, PathBuf::from("bundles"));
        assert_eq!(mode, "staging");
    }
}
