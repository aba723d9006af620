mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};

use erd_proxy_core::{NetworkConfig, Provider, ProxyError, ProxyProvider};

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let provider = ProxyProvider::new(&args.proxy).context("configure proxy client")?;
    let rendered = run(&provider, provider.base_url(), args.json)?;
    print!("{rendered}");

    Ok(())
}

/// Fetch the network config through `provider` and render it for stdout.
fn run(provider: &dyn Provider, proxy_url: &str, json: bool) -> eyre::Result<String> {
    let config = provider.get_network_config().map_err(|err| {
        let message = format_proxy_error(proxy_url, &err);
        eyre!(message).wrap_err("while fetching network config from the proxy")
    })?;

    tracing::info!(
        chain_id = %config.chain_id,
        min_transaction_version = config.min_transaction_version,
        "fetched network config"
    );

    if json {
        let rendered =
            serde_json::to_string_pretty(&config).context("serialize network config")?;
        Ok(format!("{rendered}\n"))
    } else {
        Ok(render_text(&config))
    }
}

fn render_text(config: &NetworkConfig) -> String {
    format!(
        "chainID:               {}\n\
         gasPerDataByte:        {}\n\
         minGasLimit:           {}\n\
         minGasPrice:           {}\n\
         minTransactionVersion: {}\n",
        config.chain_id,
        config.gas_per_data_byte,
        config.min_gas_limit,
        config.min_gas_price,
        config.min_transaction_version,
    )
}

/// Join an error with its sources, skipping causes already quoted by the
/// message above them.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

fn format_proxy_error(proxy_url: &str, err: &ProxyError) -> String {
    let mut lines = vec![
        format!("could not fetch network config from proxy `{proxy_url}`"),
        format!("proxy error: {}", error_chain(err)),
    ];

    let hint = match err {
        ProxyError::Transport(e) if e.is_timeout() => Some(
            "hint: the proxy did not answer in time; verify it is reachable and not overloaded",
        ),
        ProxyError::Transport(e) if e.is_connect() => Some(
            "hint: could not connect; verify the proxy is running, its hostname resolves, \
             and its TLS certificate is trusted",
        ),
        ProxyError::Transport(_) => Some(
            "hint: request could not be completed; verify URL format, network access, \
             and proxy reachability",
        ),
        ProxyError::UnexpectedStatus { status: 404, .. }
        | ProxyError::Server { status: 404, .. } => {
            Some("hint: resource not found; verify the proxy URL does not include an extra path")
        }
        ProxyError::Deserialization(_) | ProxyError::MissingField(_) => Some(
            "hint: the response is not a network config; verify the URL points at an Elrond proxy",
        ),
        ProxyError::InvalidUrl(_)
        | ProxyError::Server { .. }
        | ProxyError::UnexpectedStatus { .. } => None,
    };
    if let Some(hint) = hint {
        lines.push(hint.to_owned());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use erd_proxy_core::proxy::mock::MockProvider;

    use super::*;

    #[test]
    fn render_text_lists_every_field() {
        let config = NetworkConfig {
            chain_id: "1".into(),
            gas_per_data_byte: 1500,
            min_gas_limit: 50_000,
            min_gas_price: 1_000_000_000,
            min_transaction_version: 1,
        };
        let text = render_text(&config);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("chainID:               1\n"));
        assert!(text.contains("minGasPrice:           1000000000\n"));
    }

    #[test]
    fn run_renders_text_from_provider() {
        let provider = MockProvider::builder().build();
        let text = run(&provider, "http://127.0.0.1:7950", false).expect("mock must succeed");
        assert!(text.starts_with("chainID:               local-testnet\n"));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn run_renders_json_with_public_names() {
        let provider = MockProvider::builder().build();
        let rendered = run(&provider, "http://127.0.0.1:7950", true).expect("mock must succeed");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("output must be JSON");
        assert_eq!(value["chainID"], "local-testnet");
        assert_eq!(value["minGasLimit"], 50_000);
    }

    #[test]
    fn run_surfaces_server_error() {
        let provider = MockProvider::builder()
            .with_server_error("internal_issue", "node is syncing")
            .build();
        let err = run(&provider, "http://127.0.0.1:7950", false)
            .expect_err("server error must propagate");
        let message = err.root_cause().to_string();
        assert!(message.starts_with("could not fetch network config from proxy"));
        assert!(message.contains("internal_issue"));
        assert!(message.contains("node is syncing"));
        assert!(!message.contains("hint:"));
    }

    #[test]
    fn format_proxy_error_hints_on_refused_connection() {
        let port = {
            let listener =
                std::net::TcpListener::bind("127.0.0.1:0").expect("ephemeral port must bind");
            listener.local_addr().expect("bound socket has an address").port()
        };
        let url = format!("http://127.0.0.1:{port}");
        let err = ProxyProvider::new(&url)
            .expect("provider must build")
            .get_network_config()
            .expect_err("closed port must fail");

        let message = format_proxy_error(&url, &err);
        assert!(message.contains("hint: could not connect"));
    }

    #[test]
    fn format_proxy_error_hints_on_not_found() {
        let err = ProxyError::UnexpectedStatus {
            status: 404,
            body: "404 page not found".into(),
        };
        let message = format_proxy_error("http://127.0.0.1:7950/api", &err);
        assert!(message.contains("hint: resource not found"));
    }

    #[test]
    fn error_chain_skips_causes_already_in_message() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let expected = format!("decode proxy response: {source}");
        let err = ProxyError::Deserialization(source);
        assert_eq!(error_chain(&err), expected);
    }

    #[test]
    fn format_proxy_error_for_server_error_has_no_hint() {
        let err = ProxyError::Server {
            status: 200,
            code: "internal_issue".into(),
            message: "node is syncing".into(),
        };
        let message = format_proxy_error("http://127.0.0.1:7950", &err);
        assert_eq!(message.lines().count(), 2);
    }
}
