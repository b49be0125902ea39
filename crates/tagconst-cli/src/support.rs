use crate::cli::TargetArgs;
use crate::config::GenerateConfig;
use serde_json::Value;
use tagconst_kernel::{Generated, content_digest, generate, read_document, render_go_file};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// A rendered Go file, held in memory until a command decides what to do
/// with it.
pub struct RenderedTarget {
    pub generated: Generated,
    pub contents: String,
    pub digest: String,
}

pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

pub fn resolve_config_or_exit(args: &TargetArgs) -> GenerateConfig {
    let config = GenerateConfig::resolve(args).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        package = %config.package,
        root = config.root.as_deref().unwrap_or(""),
        "resolved config"
    );
    config
}

/// Load, transform and render `config.input`. Exits 2 on I/O or package
/// errors and 1 when the document itself is rejected.
pub fn render_target_or_exit(config: &GenerateConfig) -> RenderedTarget {
    let document = read_document(&config.input).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });

    let generated = generate(&document, config.root.as_deref()).unwrap_or_else(|e| {
        eprintln!(
            "error: failed to transform {} [{}]: {e}",
            config.input.display(),
            e.kind()
        );
        std::process::exit(1);
    });

    let contents = render_go_file(&config.package, &generated.render()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    let digest = content_digest(&contents);

    RenderedTarget {
        generated,
        contents,
        digest,
    }
}

pub fn print_json_or_exit(payload: &Value, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn root_label(config: &GenerateConfig) -> &str {
    config.root.as_deref().unwrap_or("(document)")
}
