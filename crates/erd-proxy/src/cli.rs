use clap::Parser;

/// erd-proxy: print the network configuration served by an Elrond proxy.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Proxy base URL.
    #[arg(long, default_value = "http://127.0.0.1:7950", env = "ERD_PROXY_URL")]
    pub proxy: String,

    /// Print the configuration as a JSON object instead of `name: value` lines.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_proxy() {
        let cli = Cli::try_parse_from(["erd-proxy"]).expect("no args must parse");
        assert!(!cli.json);
        // ERD_PROXY_URL may be set in the environment running the tests.
        if std::env::var_os("ERD_PROXY_URL").is_none() {
            assert_eq!(cli.proxy, "http://127.0.0.1:7950");
        }
    }

    #[test]
    fn accepts_proxy_and_json_flags() {
        let cli = Cli::try_parse_from([
            "erd-proxy",
            "--proxy",
            "https://gateway.example.com",
            "--json",
        ])
        .expect("flags must parse");
        assert_eq!(cli.proxy, "https://gateway.example.com");
        assert!(cli.json);
    }
}
