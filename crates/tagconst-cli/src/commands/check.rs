use crate::cli::TargetArgs;
use crate::support::{
    print_json_or_exit, render_target_or_exit, resolve_config_or_exit, root_label,
};
use serde_json::json;
use tagconst_kernel::{content_digest, read_existing};

const CHECK_KIND: &str = "tagconst.check.v1";

pub fn run(target: TargetArgs, json_output: bool) {
    let config = resolve_config_or_exit(&target);
    let rendered = render_target_or_exit(&config);

    let existing = read_existing(&config.output).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    let actual_digest = existing.as_deref().map(content_digest);
    let result = match &existing {
        None => "missing",
        Some(contents) if *contents == rendered.contents => "up_to_date",
        Some(_) => "stale",
    };
    tracing::debug!(output = %config.output.display(), result, "checked constants file");

    if json_output {
        let payload = json!({
            "schema": 1,
            "kind": CHECK_KIND,
            "input": config.input.display().to_string(),
            "output": config.output.display().to_string(),
            "package": config.package,
            "root": config.root,
            "result": result,
            "expectedDigest": rendered.digest,
            "actualDigest": actual_digest,
        });
        print_json_or_exit(&payload, "check");
    } else {
        println!("tagconst check");
        println!("  Input: {}", config.input.display());
        println!("  Output: {}", config.output.display());
        println!("  Root: {}", root_label(&config));
        println!("  Result: {result}");
        if result == "stale" {
            println!("  Run `tagconst generate` with the same options to refresh it.");
        }
    }

    if result != "up_to_date" {
        std::process::exit(1);
    }
}
